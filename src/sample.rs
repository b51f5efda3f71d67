//! A small road-map style graph used by the `graphwalk` tool, the benches and
//! the integration tests.
//!
//! ```text
//!        10        20        30        25
//!   A1 ------ B1 ------ C1 ------ E1 ------ F1
//!   | \                 |                   |
//!   |  \ 10       12    |                   |
//!   |   B3 -------------+                   |
//!   | 15                                    |
//!   B2 ------------------------------------+
//!                     40
//! ```

use crate::graph::Graph;
use crate::GhostToken;

/// Edges of the reference graph as `(source, target, cost)`, in insertion order.
pub const REFERENCE_EDGES: &[(&str, &str, u32)] = &[
    ("A1", "B1", 10),
    ("B1", "C1", 20),
    ("A1", "B2", 15),
    ("C1", "E1", 30),
    ("E1", "F1", 25),
    ("B2", "F1", 40),
    ("A1", "B3", 10),
    ("B3", "C1", 12),
];

/// Vertex names of the reference graph, in insertion order.
pub const REFERENCE_VERTICES: &[&str] = &["A1", "B1", "C1", "B2", "E1", "F1", "B3"];

/// Builds the reference graph inside `token`'s brand.
pub fn reference_graph(token: GhostToken<'_>) -> Graph<'_, String, u32> {
    let mut graph = Graph::with_capacity(token, REFERENCE_VERTICES.len(), REFERENCE_EDGES.len());
    for &name in REFERENCE_VERTICES {
        graph.add_vertex(name.to_owned());
    }
    for &(source, target, cost) in REFERENCE_EDGES {
        // Both names come from REFERENCE_VERTICES above.
        if let (Some(s), Some(t)) = (graph.find_vertex(source), graph.find_vertex(target)) {
            graph.add_edge(s, t, cost);
        }
    }
    graph
}
