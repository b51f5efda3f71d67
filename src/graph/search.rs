//! First-found depth-first path search with cost accumulation.
//!
//! The search follows incident edges in insertion order and stops at the first
//! vertex whose payload matches. The reported cost is the sum of edge weights
//! along *that* path, which need not be the cheapest one; use
//! [`shortest_paths`](crate::graph::shortest_paths) for minimal costs.

use core::ops::Add;

use num_traits::Zero;

use crate::error::GraphError;
use crate::graph::storage::{Graph, VertexId};

/// The outcome of a successful [`find_path_cost`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathCost<'brand, E> {
    /// Sum of edge weights along `path`.
    pub cost: E,
    /// Vertices from the start to the matching vertex, both included.
    pub path: Vec<VertexId<'brand>>,
}

/// Searches depth-first from `start` for a vertex whose payload equals `target`.
///
/// Returns `None` when every branch is exhausted.
pub fn find_path_cost<'brand, V, E, Q>(
    graph: &Graph<'brand, V, E>,
    start: VertexId<'brand>,
    target: &Q,
) -> Option<PathCost<'brand, E>>
where
    V: PartialEq<Q>,
    Q: ?Sized,
    E: Copy + Add<Output = E> + Zero,
{
    let mut visited = Vec::new();
    let cost = search(graph, start, target, &mut visited)?;
    Some(PathCost {
        cost,
        path: visited,
    })
}

/// Like [`find_path_cost`], but reports a miss as [`GraphError::Unreachable`].
pub fn require_path_cost<'brand, V, E, Q>(
    graph: &Graph<'brand, V, E>,
    start: VertexId<'brand>,
    target: &Q,
) -> Result<PathCost<'brand, E>, GraphError>
where
    V: PartialEq<Q>,
    Q: ?Sized + core::fmt::Debug,
    E: Copy + Add<Output = E> + Zero,
{
    find_path_cost(graph, start, target).ok_or_else(|| GraphError::Unreachable {
        target: format!("{target:?}"),
    })
}

/// The recursive step behind [`find_path_cost`], with a caller-owned stack.
///
/// - A vertex already in `visited` fails immediately and pushes nothing.
/// - Otherwise the vertex is pushed; a payload match succeeds with zero cost
///   and stays on the stack.
/// - Each incident edge is tried in order; the first successful branch returns
///   its cost plus the edge weight.
/// - If every branch fails the vertex is popped again.
///
/// On success `visited` holds exactly the found path (plus whatever the caller
/// had pushed before the call).
pub fn search<'brand, V, E, Q>(
    graph: &Graph<'brand, V, E>,
    vertex: VertexId<'brand>,
    target: &Q,
    visited: &mut Vec<VertexId<'brand>>,
) -> Option<E>
where
    V: PartialEq<Q>,
    Q: ?Sized,
    E: Copy + Add<Output = E> + Zero,
{
    if visited.contains(&vertex) {
        return None;
    }
    visited.push(vertex);

    if *graph.payload(vertex) == *target {
        #[cfg(feature = "tracing")]
        tracing::debug!(vertex = vertex.index(), depth = visited.len(), "search target found");
        return Some(E::zero());
    }

    for &edge in graph.incident_edges(vertex) {
        let next = graph.edge(edge).other_endpoint(vertex);
        #[cfg(feature = "tracing")]
        tracing::trace!(from = vertex.index(), to = next.index(), "search step");

        if let Some(rest) = search(graph, next, target, visited) {
            return Some(rest + *graph.weight(edge));
        }
    }

    visited.pop();
    None
}
