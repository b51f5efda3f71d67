//! Visitor-driven depth-first traversal.
//!
//! [`depth_first`] is pure mechanism: it walks incident edges in insertion order
//! and asks a [`Visitor`] whether to enter each vertex and edge. It keeps no
//! visited state of its own, so cycle avoidance is entirely the visitor's job.
//!
//! # Hazard
//! A visitor that admits every vertex recurses forever on a cyclic graph.
//! [`OneTimeVisitor`] is the provided policy that terminates on any finite graph.

use crate::graph::storage::{EdgeId, Graph, VertexId};

/// Traversal policy consulted by [`depth_first`].
///
/// Every hook has a default: admit all vertices and edges, ignore leave events.
pub trait Visitor<'brand, V, E> {
    /// Called before a vertex is expanded. Returning `false` prunes the branch.
    fn visit_vertex(&mut self, _graph: &Graph<'brand, V, E>, _vertex: VertexId<'brand>) -> bool {
        true
    }

    /// Called before an edge is followed. Returning `false` skips it.
    fn visit_edge(&mut self, _graph: &Graph<'brand, V, E>, _edge: EdgeId<'brand>) -> bool {
        true
    }

    /// Called after every edge of an admitted vertex has been handled.
    fn leave_vertex(&mut self, _graph: &Graph<'brand, V, E>, _vertex: VertexId<'brand>) {}

    /// Called after the subtree behind an admitted edge has been walked.
    fn leave_edge(&mut self, _graph: &Graph<'brand, V, E>, _edge: EdgeId<'brand>) {}
}

impl<'brand, V, E, T> Visitor<'brand, V, E> for &mut T
where
    T: Visitor<'brand, V, E> + ?Sized,
{
    #[inline]
    fn visit_vertex(&mut self, graph: &Graph<'brand, V, E>, vertex: VertexId<'brand>) -> bool {
        (**self).visit_vertex(graph, vertex)
    }

    #[inline]
    fn visit_edge(&mut self, graph: &Graph<'brand, V, E>, edge: EdgeId<'brand>) -> bool {
        (**self).visit_edge(graph, edge)
    }

    #[inline]
    fn leave_vertex(&mut self, graph: &Graph<'brand, V, E>, vertex: VertexId<'brand>) {
        (**self).leave_vertex(graph, vertex);
    }

    #[inline]
    fn leave_edge(&mut self, graph: &Graph<'brand, V, E>, edge: EdgeId<'brand>) {
        (**self).leave_edge(graph, edge);
    }
}

/// Rejects a vertex that is already on the active path.
///
/// The stack only holds the current root-to-leaf path, so a vertex can be
/// entered again once the walk has backtracked past it.
#[derive(Debug, Clone, Default)]
pub struct OneTimeVisitor<'brand> {
    path: Vec<VertexId<'brand>>,
    max_depth: usize,
}

impl<'brand> OneTimeVisitor<'brand> {
    /// Creates a visitor with an empty active path.
    pub fn new() -> Self {
        Self::default()
    }

    /// The active path, root first.
    pub fn path(&self) -> &[VertexId<'brand>] {
        &self.path
    }

    /// The longest active path observed so far.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl<'brand, V, E> Visitor<'brand, V, E> for OneTimeVisitor<'brand> {
    fn visit_vertex(&mut self, _graph: &Graph<'brand, V, E>, vertex: VertexId<'brand>) -> bool {
        if self.path.contains(&vertex) {
            return false;
        }
        self.path.push(vertex);
        self.max_depth = self.max_depth.max(self.path.len());
        true
    }

    fn leave_vertex(&mut self, _graph: &Graph<'brand, V, E>, vertex: VertexId<'brand>) {
        let top = self.path.pop();
        debug_assert_eq!(top, Some(vertex), "unbalanced leave_vertex");
    }
}

/// A traversal event reported by [`Inspect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitEvent<'brand> {
    /// The inner visitor admitted the vertex.
    EnterVertex(VertexId<'brand>),
    /// The inner visitor pruned the vertex.
    RejectVertex(VertexId<'brand>),
    /// The inner visitor admitted the edge.
    EnterEdge(EdgeId<'brand>),
    /// The inner visitor skipped the edge.
    SkipEdge(EdgeId<'brand>),
    /// The walk returned across the edge.
    LeaveEdge(EdgeId<'brand>),
    /// The vertex is fully expanded.
    LeaveVertex(VertexId<'brand>),
}

/// Wraps a visitor and reports every decision to an explicit sink.
#[derive(Debug, Clone)]
pub struct Inspect<Vis, F> {
    inner: Vis,
    sink: F,
}

impl<Vis, F> Inspect<Vis, F> {
    /// Wraps `inner`, forwarding events to `sink`.
    pub fn new<'brand>(inner: Vis, sink: F) -> Self
    where
        F: FnMut(VisitEvent<'brand>),
    {
        Self { inner, sink }
    }

    /// Returns the wrapped visitor.
    pub fn into_inner(self) -> Vis {
        self.inner
    }
}

impl<'brand, V, E, Vis, F> Visitor<'brand, V, E> for Inspect<Vis, F>
where
    Vis: Visitor<'brand, V, E>,
    F: FnMut(VisitEvent<'brand>),
{
    fn visit_vertex(&mut self, graph: &Graph<'brand, V, E>, vertex: VertexId<'brand>) -> bool {
        let admitted = self.inner.visit_vertex(graph, vertex);
        (self.sink)(if admitted {
            VisitEvent::EnterVertex(vertex)
        } else {
            VisitEvent::RejectVertex(vertex)
        });
        admitted
    }

    fn visit_edge(&mut self, graph: &Graph<'brand, V, E>, edge: EdgeId<'brand>) -> bool {
        let admitted = self.inner.visit_edge(graph, edge);
        (self.sink)(if admitted {
            VisitEvent::EnterEdge(edge)
        } else {
            VisitEvent::SkipEdge(edge)
        });
        admitted
    }

    fn leave_vertex(&mut self, graph: &Graph<'brand, V, E>, vertex: VertexId<'brand>) {
        self.inner.leave_vertex(graph, vertex);
        (self.sink)(VisitEvent::LeaveVertex(vertex));
    }

    fn leave_edge(&mut self, graph: &Graph<'brand, V, E>, edge: EdgeId<'brand>) {
        self.inner.leave_edge(graph, edge);
        (self.sink)(VisitEvent::LeaveEdge(edge));
    }
}

/// Walks the graph depth-first from `vertex`, driven by `visitor`.
///
/// 1. If `visit_vertex` rejects `vertex`, return.
/// 2. For each incident edge in insertion order: skip it if `visit_edge`
///    rejects it, otherwise recurse into the far endpoint and call `leave_edge`.
/// 3. Call `leave_vertex`.
///
/// Recursion depth equals the longest admitted path.
pub fn depth_first<'brand, V, E, Vis>(
    graph: &Graph<'brand, V, E>,
    vertex: VertexId<'brand>,
    visitor: &mut Vis,
) where
    Vis: Visitor<'brand, V, E> + ?Sized,
{
    if !visitor.visit_vertex(graph, vertex) {
        return;
    }
    #[cfg(feature = "tracing")]
    tracing::trace!(vertex = vertex.index(), "dfs enter");

    for &edge in graph.incident_edges(vertex) {
        if !visitor.visit_edge(graph, edge) {
            continue;
        }
        let next = graph.edge(edge).other_endpoint(vertex);
        depth_first(graph, next, visitor);
        visitor.leave_edge(graph, edge);
    }

    visitor.leave_vertex(graph, vertex);
    #[cfg(feature = "tracing")]
    tracing::trace!(vertex = vertex.index(), "dfs leave");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GhostToken;

    #[test]
    fn one_time_visitor_terminates_on_triangle() {
        GhostToken::new(|token| {
            let mut graph = Graph::new(token);
            let a = graph.add_vertex("a");
            let b = graph.add_vertex("b");
            let c = graph.add_vertex("c");
            graph.add_edge(a, b, 1);
            graph.add_edge(b, c, 1);
            graph.add_edge(c, a, 1);

            let mut entered = Vec::new();
            let mut visitor = Inspect::new(OneTimeVisitor::new(), |event| {
                if let VisitEvent::EnterVertex(v) = event {
                    entered.push(v);
                }
            });
            depth_first(&graph, a, &mut visitor);
            let inner = visitor.into_inner();

            // a -> b -> c, then c -> a is rejected; back at a, a -> c -> b.
            assert_eq!(entered, vec![a, b, c, c, b]);
            assert!(inner.path().is_empty());
            assert_eq!(inner.max_depth(), 3);
        });
    }

    #[test]
    fn rejected_vertex_gets_no_leave_event() {
        GhostToken::new(|token| {
            let mut graph = Graph::new(token);
            let a = graph.add_vertex(0);
            let b = graph.add_vertex(1);
            graph.add_edge(a, b, ());

            let mut events = Vec::new();
            {
                let mut visitor = Inspect::new(OneTimeVisitor::new(), |e| events.push(e));
                depth_first(&graph, a, &mut visitor);
            }

            let ab = graph.incident_edges(a)[0];
            assert_eq!(
                events,
                vec![
                    VisitEvent::EnterVertex(a),
                    VisitEvent::EnterEdge(ab),
                    VisitEvent::EnterVertex(b),
                    VisitEvent::EnterEdge(ab),
                    VisitEvent::RejectVertex(a),
                    VisitEvent::LeaveEdge(ab),
                    VisitEvent::LeaveVertex(b),
                    VisitEvent::LeaveEdge(ab),
                    VisitEvent::LeaveVertex(a),
                ]
            );
        });
    }

    struct HeavyEdgeFilter<'brand> {
        limit: u32,
        path: OneTimeVisitor<'brand>,
    }

    impl<'brand, V> Visitor<'brand, V, u32> for HeavyEdgeFilter<'brand> {
        fn visit_vertex(&mut self, graph: &Graph<'brand, V, u32>, vertex: VertexId<'brand>) -> bool {
            self.path.visit_vertex(graph, vertex)
        }

        fn visit_edge(&mut self, graph: &Graph<'brand, V, u32>, edge: EdgeId<'brand>) -> bool {
            *graph.weight(edge) <= self.limit
        }

        fn leave_vertex(&mut self, graph: &Graph<'brand, V, u32>, vertex: VertexId<'brand>) {
            self.path.leave_vertex(graph, vertex);
        }
    }

    #[test]
    fn edge_filtering_prunes_subtrees() {
        GhostToken::new(|token| {
            let mut graph: Graph<&str, u32> = Graph::new(token);
            let a = graph.add_vertex("a");
            let b = graph.add_vertex("b");
            let c = graph.add_vertex("c");
            graph.add_edge(a, b, 5);
            graph.add_edge(a, c, 50);

            let mut seen = Vec::new();
            let mut visitor = Inspect::new(
                HeavyEdgeFilter {
                    limit: 10,
                    path: OneTimeVisitor::new(),
                },
                |e| {
                    if let VisitEvent::EnterVertex(v) = e {
                        seen.push(v);
                    }
                },
            );
            depth_first(&graph, a, &mut visitor);
            drop(visitor);
            assert_eq!(seen, vec![a, b]);
        });
    }

    #[test]
    fn self_loop_is_rejected_by_one_time_visitor() {
        GhostToken::new(|token| {
            let mut graph = Graph::new(token);
            let a = graph.add_vertex("a");
            graph.add_edge(a, a, 1);

            let mut visitor = OneTimeVisitor::new();
            depth_first(&graph, a, &mut visitor);
            assert_eq!(visitor.max_depth(), 1);
            assert!(visitor.path().is_empty());
        });
    }

    struct DownhillCount<'brand> {
        stack: Vec<VertexId<'brand>>,
        entered: Vec<VertexId<'brand>>,
        finished: usize,
    }

    impl<'brand> Visitor<'brand, u8, ()> for DownhillCount<'brand> {
        fn visit_vertex(&mut self, _graph: &Graph<'brand, u8, ()>, vertex: VertexId<'brand>) -> bool {
            self.stack.push(vertex);
            self.entered.push(vertex);
            true
        }

        fn visit_edge(&mut self, graph: &Graph<'brand, u8, ()>, edge: EdgeId<'brand>) -> bool {
            let here = *self.stack.last().expect("edge offered outside a vertex");
            let there = graph.edge(edge).other_endpoint(here);
            graph.payload(here) < graph.payload(there)
        }

        fn leave_vertex(&mut self, _graph: &Graph<'brand, u8, ()>, _vertex: VertexId<'brand>) {
            self.stack.pop();
            self.finished += 1;
        }
    }

    #[test]
    fn custom_visitor_keeps_walk_acyclic() {
        GhostToken::new(|token| {
            let mut graph = Graph::new(token);
            let root = graph.add_vertex(0u8);
            let l = graph.add_vertex(1);
            let r = graph.add_vertex(2);
            let ll = graph.add_vertex(3);
            graph.add_edge(root, l, ());
            graph.add_edge(root, r, ());
            graph.add_edge(l, ll, ());
            graph.add_edge(ll, root, ());

            let mut count = DownhillCount {
                stack: Vec::new(),
                entered: Vec::new(),
                finished: 0,
            };
            depth_first(&graph, root, &mut count);
            // Edge (ll, root) is uphill when offered from ll but downhill from
            // root, so ll is reached twice: via l and directly from root.
            assert_eq!(count.entered, vec![root, l, ll, r, ll]);
            assert_eq!(count.finished, 5);
            assert!(count.stack.is_empty());
        });
    }
}
