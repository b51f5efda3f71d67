//! Branded property graphs and the algorithms that walk them.
//!
//! - `storage`: the vertex/edge arena and its branded ids
//! - `lookup`: name → vertex tables
//! - `visit`: the visitor trait and the depth-first walker
//! - `search`: first-found path search with cost accumulation
//! - `dijkstra`: single-source shortest paths
//!
//! All algorithms take `&Graph`; the borrow checker rules out topology changes
//! while any of them runs.

pub mod dijkstra;
pub mod lookup;
pub mod search;
pub mod storage;
pub mod visit;

pub use dijkstra::{shortest_paths, shortest_paths_from_many, shortest_paths_with, Relaxation, ShortestPaths};
pub use lookup::VertexTable;
pub use search::{find_path_cost, require_path_cost, search, PathCost};
pub use storage::{Edge, EdgeId, Graph, Vertex, VertexDisplay, VertexId};
pub use visit::{depth_first, Inspect, OneTimeVisitor, VisitEvent, Visitor};
