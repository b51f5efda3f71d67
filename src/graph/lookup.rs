//! Name → vertex resolution, built once after a graph is assembled.

use std::collections::HashMap;

use crate::error::GraphError;
use crate::graph::storage::{Graph, VertexId};
use crate::token::Brand;

/// A table mapping human-readable keys to vertices of one branded graph.
#[derive(Debug, Clone)]
pub struct VertexTable<'brand> {
    names: HashMap<String, VertexId<'brand>>,
    _brand: Brand<'brand>,
}

impl<'brand> VertexTable<'brand> {
    /// Indexes every vertex of `graph` under `key(payload)`.
    ///
    /// When two payloads produce the same key the first vertex wins.
    pub fn from_graph<V, E, K, F>(graph: &Graph<'brand, V, E>, mut key: F) -> Self
    where
        F: FnMut(&V) -> K,
        K: Into<String>,
    {
        let mut names = HashMap::with_capacity(graph.vertex_count());
        for id in graph.vertices() {
            names.entry(key(graph.payload(id)).into()).or_insert(id);
        }
        Self {
            names,
            _brand: graph.brand(),
        }
    }

    /// Registers `id` under `name`, returning the vertex previously stored there.
    pub fn insert(&mut self, name: impl Into<String>, id: VertexId<'brand>) -> Option<VertexId<'brand>> {
        self.names.insert(name.into(), id)
    }

    /// Returns the vertex registered under `name`.
    pub fn lookup(&self, name: &str) -> Option<VertexId<'brand>> {
        self.names.get(name).copied()
    }

    /// Like [`lookup`](Self::lookup), but reports a miss as [`GraphError::VertexNotFound`].
    pub fn resolve(&self, name: &str) -> Result<VertexId<'brand>, GraphError> {
        self.lookup(name).ok_or_else(|| GraphError::VertexNotFound {
            name: name.to_owned(),
        })
    }

    /// Number of registered names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if no names are registered.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GhostToken;

    #[test]
    fn resolves_names_to_vertices() {
        GhostToken::new(|token| {
            let mut graph: Graph<&str, u32> = Graph::new(token);
            let a = graph.add_vertex("A1");
            let b = graph.add_vertex("B1");
            graph.add_edge(a, b, 10);

            let table = VertexTable::from_graph(&graph, |p| *p);
            assert_eq!(table.len(), 2);
            assert_eq!(table.lookup("A1"), Some(a));
            assert_eq!(table.resolve("B1"), Ok(b));
            assert_eq!(
                table.resolve("Q7"),
                Err(GraphError::VertexNotFound { name: "Q7".into() })
            );
        });
    }

    #[test]
    fn first_vertex_wins_on_duplicate_keys() {
        GhostToken::new(|token| {
            let mut graph: Graph<u32, ()> = Graph::new(token);
            let first = graph.add_vertex(7);
            let _second = graph.add_vertex(7);

            let mut table = VertexTable::from_graph(&graph, |p| p.to_string());
            assert_eq!(table.lookup("7"), Some(first));

            let alias = graph.add_vertex(8);
            assert_eq!(table.insert("eight", alias), None);
            assert_eq!(table.lookup("eight"), Some(alias));
        });
    }
}
