//! `Graph`: an arena of vertices and undirected, weighted edges.
//!
//! Vertices and edges live in two dense vectors owned by the graph and are
//! addressed by branded indices (`VertexId<'brand>`, `EdgeId<'brand>`). Each
//! vertex keeps the ids of its incident edges in insertion order; each edge keeps
//! its two endpoints in construction order (slot `a` = source, slot `b` = target).
//!
//! # Performance
//! - `add_vertex`: O(1) amortized
//! - `add_edge`: O(1) amortized (one push into the arena, one per endpoint list)
//! - `vertex` / `edge`: O(1), never out of bounds for a branded id
//! - `find_vertex`: O(n) payload scan

use core::fmt;

use crate::token::{Brand, GhostToken};

/// A strongly-typed index for a vertex of one branded graph.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId<'brand>(usize, Brand<'brand>);

impl<'brand> VertexId<'brand> {
    #[inline(always)]
    pub(crate) const fn new(idx: usize) -> Self {
        Self(idx, Brand::new())
    }

    /// Returns the arena index of this vertex.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A strongly-typed index for an edge of one branded graph.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId<'brand>(usize, Brand<'brand>);

impl<'brand> EdgeId<'brand> {
    #[inline(always)]
    const fn new(idx: usize) -> Self {
        Self(idx, Brand::new())
    }

    /// Returns the arena index of this edge.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A graph node: a payload plus its incident edges.
#[derive(Debug, Clone)]
pub struct Vertex<'brand, V> {
    payload: V,
    edges: Vec<EdgeId<'brand>>,
}

impl<'brand, V> Vertex<'brand, V> {
    /// Returns the vertex payload.
    #[inline]
    pub fn payload(&self) -> &V {
        &self.payload
    }

    /// Returns the incident edges in the order they were added.
    ///
    /// A self loop is listed twice, once for each endpoint slot.
    #[inline]
    pub fn edges(&self) -> &[EdgeId<'brand>] {
        &self.edges
    }

    /// Number of incident edge entries.
    #[inline]
    pub fn degree(&self) -> usize {
        self.edges.len()
    }
}

/// A weighted connection between two vertices.
#[derive(Debug, Clone)]
pub struct Edge<'brand, E> {
    weight: E,
    a: VertexId<'brand>,
    b: VertexId<'brand>,
}

impl<'brand, E> Edge<'brand, E> {
    /// Returns the edge weight.
    #[inline]
    pub fn weight(&self) -> &E {
        &self.weight
    }

    /// Returns both endpoints in construction order.
    #[inline]
    pub fn endpoints(&self) -> (VertexId<'brand>, VertexId<'brand>) {
        (self.a, self.b)
    }

    /// The vertex the edge was added from.
    #[inline]
    pub fn source(&self) -> VertexId<'brand> {
        self.a
    }

    /// The vertex the edge was added towards.
    #[inline]
    pub fn target(&self) -> VertexId<'brand> {
        self.b
    }

    /// Returns the endpoint on the far side of `from`.
    ///
    /// If `from` is the source slot, or the edge is a self loop, this is the
    /// target slot; otherwise it is the source slot.
    #[inline]
    pub fn other_endpoint(&self, from: VertexId<'brand>) -> VertexId<'brand> {
        if self.a == from {
            self.b
        } else {
            self.a
        }
    }

    /// Returns `true` when both endpoint slots name the same vertex.
    #[inline]
    pub fn is_self_loop(&self) -> bool {
        self.a == self.b
    }
}

/// A property-labeled, undirected multigraph stored as an arena.
///
/// The graph consumes a [`GhostToken`], so ids minted by one graph never
/// type-check against another.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | \(O(1)\) amortized | Appends to the vertex arena |
/// | `add_edge` | \(O(1)\) amortized | No duplicate or self-loop rejection |
/// | `neighbors` | \(O(\text{degree})\) | Walks the incident edge list |
/// | `find_vertex` | \(O(n)\) | Payload equality scan |
pub struct Graph<'brand, V, E> {
    // Edges are declared first so they are dropped before the vertices.
    edges: Vec<Edge<'brand, E>>,
    vertices: Vec<Vertex<'brand, V>>,
    brand: Brand<'brand>,
}

impl<'brand, V, E> Graph<'brand, V, E> {
    /// Creates an empty graph that owns `token`'s brand.
    pub fn new(token: GhostToken<'brand>) -> Self {
        Self {
            edges: Vec::new(),
            vertices: Vec::new(),
            brand: token.into_brand(),
        }
    }

    /// Creates an empty graph with room for `vertices` vertices and `edges` edges.
    pub fn with_capacity(token: GhostToken<'brand>, vertices: usize, edges: usize) -> Self {
        Self {
            edges: Vec::with_capacity(edges),
            vertices: Vec::with_capacity(vertices),
            brand: token.into_brand(),
        }
    }

    /// Adds a vertex carrying `payload` and returns its id.
    pub fn add_vertex(&mut self, payload: V) -> VertexId<'brand> {
        let id = VertexId::new(self.vertices.len());
        self.vertices.push(Vertex {
            payload,
            edges: Vec::new(),
        });
        id
    }

    /// Connects `source` and `target` with one edge of the given weight.
    ///
    /// The edge is appended to `source`'s list and then to `target`'s list.
    /// Self loops and parallel edges are kept as-is.
    pub fn add_edge(
        &mut self,
        source: VertexId<'brand>,
        target: VertexId<'brand>,
        weight: E,
    ) -> EdgeId<'brand> {
        let id = EdgeId::new(self.edges.len());
        self.edges.push(Edge {
            weight,
            a: source,
            b: target,
        });
        self.vertices[source.index()].edges.push(id);
        self.vertices[target.index()].edges.push(id);
        id
    }

    /// Returns the vertex behind `id`.
    #[inline]
    pub fn vertex(&self, id: VertexId<'brand>) -> &Vertex<'brand, V> {
        &self.vertices[id.index()]
    }

    /// Returns the edge behind `id`.
    #[inline]
    pub fn edge(&self, id: EdgeId<'brand>) -> &Edge<'brand, E> {
        &self.edges[id.index()]
    }

    /// Returns the payload of `id`.
    #[inline]
    pub fn payload(&self, id: VertexId<'brand>) -> &V {
        &self.vertices[id.index()].payload
    }

    /// Returns the weight of `id`.
    #[inline]
    pub fn weight(&self, id: EdgeId<'brand>) -> &E {
        &self.edges[id.index()].weight
    }

    /// Returns the edges incident to `id`, in insertion order.
    #[inline]
    pub fn incident_edges(&self, id: VertexId<'brand>) -> &[EdgeId<'brand>] {
        &self.vertices[id.index()].edges
    }

    /// Iterates over `(edge, far endpoint)` pairs of `id`, in insertion order.
    pub fn neighbors(
        &self,
        id: VertexId<'brand>,
    ) -> impl Iterator<Item = (EdgeId<'brand>, VertexId<'brand>)> + '_ {
        self.incident_edges(id)
            .iter()
            .map(move |&e| (e, self.edge(e).other_endpoint(id)))
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates over all vertex ids in insertion order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = VertexId<'brand>> + '_ {
        (0..self.vertices.len()).map(VertexId::new)
    }

    /// Iterates over all edge ids in insertion order.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = EdgeId<'brand>> + '_ {
        (0..self.edges.len()).map(EdgeId::new)
    }

    /// Returns the first vertex whose payload equals `payload`.
    pub fn find_vertex<Q>(&self, payload: &Q) -> Option<VertexId<'brand>>
    where
        V: PartialEq<Q>,
        Q: ?Sized,
    {
        self.vertices
            .iter()
            .position(|v| v.payload == *payload)
            .map(VertexId::new)
    }

    /// Returns an adapter that prints `id` and its incident edges.
    ///
    /// ```text
    /// A1
    ///   edge to B1 (cost: 10)
    ///   edge to B2 (cost: 15)
    /// ```
    pub fn display_vertex(&self, id: VertexId<'brand>) -> VertexDisplay<'_, 'brand, V, E> {
        VertexDisplay { graph: self, id }
    }

    #[inline(always)]
    pub(crate) fn brand(&self) -> Brand<'brand> {
        self.brand
    }
}

/// `Display` adapter returned by [`Graph::display_vertex`].
pub struct VertexDisplay<'g, 'brand, V, E> {
    graph: &'g Graph<'brand, V, E>,
    id: VertexId<'brand>,
}

impl<V: fmt::Display, E: fmt::Display> fmt::Display for VertexDisplay<'_, '_, V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.graph.payload(self.id))?;
        for (edge, other) in self.graph.neighbors(self.id) {
            write!(
                f,
                "\n  edge to {} (cost: {})",
                self.graph.payload(other),
                self.graph.weight(edge)
            )?;
        }
        Ok(())
    }
}

impl<V: fmt::Debug, E: fmt::Debug> fmt::Debug for Graph<'_, V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("vertices", &self.vertices)
            .field("edges", &self.edges)
            .finish()
    }
}
