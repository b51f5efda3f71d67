//! `GhostToken` - the brand that ties ids to a single graph.
//!
//! A token is a zero-sized value carrying an *invariant* lifetime `'brand`.
//! `GhostToken::new` hands a fresh, unnameable brand to a closure (rank-2
//! polymorphism), so two scopes can never be unified under the same brand.
//!
//! ## Core invariant (linearity)
//!
//! `GhostToken<'brand>` is intentionally **not** `Copy`/`Clone`. A
//! [`Graph`](crate::graph::Graph) consumes its token on construction, which makes
//! the graph the only minter of `VertexId<'brand>` / `EdgeId<'brand>` values.
//! Any id that type-checks against a graph was therefore produced by that graph.

use core::marker::PhantomData;

/// A marker that is invariant in `'brand`.
///
/// Invariance keeps the compiler from shrinking two different brands into a
/// common lifetime.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Brand<'brand>(PhantomData<fn(&'brand ()) -> &'brand ()>);

impl<'brand> Brand<'brand> {
    /// Creates a new brand marker.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

/// A zero-sized, linear capability naming one brand.
#[derive(Debug)]
pub struct GhostToken<'brand>(Brand<'brand>);

impl<'brand> GhostToken<'brand> {
    /// Creates a fresh brand and runs `f` with its token.
    ///
    /// # Example
    ///
    /// ```rust
    /// use propgraph::{GhostToken, Graph};
    ///
    /// let edges = GhostToken::new(|token| {
    ///     let mut graph = Graph::<&str, u32>::new(token);
    ///     let a = graph.add_vertex("a");
    ///     let b = graph.add_vertex("b");
    ///     graph.add_edge(a, b, 7);
    ///     graph.edge_count()
    /// });
    /// assert_eq!(edges, 1);
    /// ```
    pub fn new<F, R>(f: F) -> R
    where
        F: for<'new_brand> FnOnce(GhostToken<'new_brand>) -> R,
    {
        f(GhostToken(Brand::new()))
    }

    /// Gives up the token, keeping only its brand marker.
    #[inline(always)]
    pub(crate) const fn into_brand(self) -> Brand<'brand> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_zero_sized() {
        GhostToken::new(|token| {
            assert_eq!(core::mem::size_of_val(&token), 0);
            assert_eq!(core::mem::size_of_val(&token.into_brand()), 0);
        });
    }

    #[test]
    fn closure_result_escapes_scope() {
        let value = GhostToken::new(|_token| 41 + 1);
        assert_eq!(value, 42);
    }
}
