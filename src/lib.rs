//! # `propgraph` - Branded Property Graphs
//!
//! A property-labeled graph library: vertices carry arbitrary payloads, edges
//! carry weights, and three read-only algorithms walk the result:
//!
//! - [`depth_first`](graph::depth_first): a depth-first walker whose policy is
//!   supplied by a [`Visitor`](graph::Visitor);
//! - [`find_path_cost`](graph::find_path_cost): the first depth-first path to a
//!   payload, with its accumulated edge cost;
//! - [`shortest_paths`](graph::shortest_paths): Dijkstra over non-negative weights.
//!
//! ## Architecture
//!
//! Vertices and edges live in one arena per graph and refer to each other by
//! index. Indices are *branded*: a [`Graph`] consumes a [`GhostToken`] whose
//! invariant lifetime `'brand` is stamped on every `VertexId<'brand>` and
//! `EdgeId<'brand>` it mints.
//!
//! ### Guarantees
//!
//! **Same-graph endpoints**: an edge can only be created from ids of the graph
//! it is added to, so both endpoints always belong to that graph.
//!
//! **No dangling ids**: vertices and edges are never removed, and an id cannot
//! outlive the token scope it was created in.
//!
//! **Read-only traversal**: algorithms borrow the graph immutably; only their
//! own bookkeeping (visited stacks, distance tables) is mutated.
//!
//! ## Example
//!
//! ```rust
//! use propgraph::graph::{find_path_cost, shortest_paths};
//! use propgraph::{GhostToken, Graph};
//!
//! GhostToken::new(|token| {
//!     let mut graph = Graph::new(token);
//!     let s = graph.add_vertex("S");
//!     let a = graph.add_vertex("A");
//!     let b = graph.add_vertex("B");
//!     graph.add_edge(s, a, 4);
//!     graph.add_edge(s, b, 1);
//!     graph.add_edge(b, a, 1);
//!
//!     let found = find_path_cost(&graph, s, &"A").unwrap();
//!     assert_eq!(found.cost, 4);
//!
//!     let paths = shortest_paths(&graph, s);
//!     assert_eq!(paths.distance(a), Some(2));
//!     assert_eq!(paths.predecessor(a), Some(b));
//! });
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod graph;
pub mod query;
pub mod sample;
pub mod token;

pub use error::{GraphError, QueryError};
pub use graph::{Graph, VertexTable};
pub use query::Query;
pub use token::GhostToken;

// Compile-time assertions for memory layout.
const _: () = {
    use core::mem;

    // Tokens and brands are ZSTs.
    assert!(mem::size_of::<GhostToken<'static>>() == 0);
    assert!(mem::size_of::<token::Brand<'static>>() == 0);

    // Branded ids are `repr(transparent)` over their index.
    assert!(mem::size_of::<graph::VertexId<'static>>() == mem::size_of::<usize>());
    assert!(mem::size_of::<graph::EdgeId<'static>>() == mem::size_of::<usize>());
    assert!(mem::size_of::<Option<graph::VertexId<'static>>>() <= mem::size_of::<usize>() * 2);
};
