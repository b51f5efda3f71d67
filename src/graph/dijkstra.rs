//! Single-source shortest paths (Dijkstra) over non-negative weights.
//!
//! Edges are stored undirected, so the engine has to decide which way an edge
//! may be crossed. [`Relaxation::Undirected`] crosses every edge towards its
//! far endpoint; [`Relaxation::Forward`] only crosses an edge from its source
//! slot to its target slot, i.e. in the direction it was added.
//!
//! Unreachable vertices have no entry: [`ShortestPaths::distance`] returns `None`.

use core::cmp::Reverse;
use core::ops::Add;
use std::collections::BinaryHeap;

use num_traits::Zero;

use crate::graph::storage::{Graph, VertexId};

/// Which way edges may be crossed during relaxation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Relaxation {
    /// Cross every edge towards the endpoint opposite the current vertex.
    #[default]
    Undirected,
    /// Cross an edge only from its source slot to its target slot.
    Forward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Settled<'brand, E> {
    distance: E,
    predecessor: Option<VertexId<'brand>>,
}

/// Distances and predecessors from one source vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths<'brand, E> {
    source: VertexId<'brand>,
    relaxation: Relaxation,
    // Indexed by vertex index; `None` = unreachable.
    entries: Vec<Option<Settled<'brand, E>>>,
}

impl<'brand, E: Copy> ShortestPaths<'brand, E> {
    // Vertices added to the graph after the run fall outside `entries`.
    fn settled(&self, vertex: VertexId<'brand>) -> Option<Settled<'brand, E>> {
        self.entries.get(vertex.index()).copied().flatten()
    }

    /// The vertex the distances are measured from.
    pub fn source(&self) -> VertexId<'brand> {
        self.source
    }

    /// The relaxation policy the paths were computed with.
    pub fn relaxation(&self) -> Relaxation {
        self.relaxation
    }

    /// Minimal distance from the source, or `None` if `vertex` is unreachable.
    pub fn distance(&self, vertex: VertexId<'brand>) -> Option<E> {
        self.settled(vertex).map(|s| s.distance)
    }

    /// The vertex preceding `vertex` on its shortest path.
    ///
    /// `None` for the source itself and for unreachable vertices.
    pub fn predecessor(&self, vertex: VertexId<'brand>) -> Option<VertexId<'brand>> {
        self.settled(vertex).and_then(|s| s.predecessor)
    }

    /// Returns `true` if `vertex` has a finite distance.
    pub fn is_reachable(&self, vertex: VertexId<'brand>) -> bool {
        self.settled(vertex).is_some()
    }

    /// Reconstructs the path from the source to `vertex`, both included.
    pub fn path_to(&self, vertex: VertexId<'brand>) -> Option<Vec<VertexId<'brand>>> {
        self.settled(vertex)?;
        let mut path = vec![vertex];
        let mut current = vertex;
        while let Some(prev) = self.predecessor(current) {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        Some(path)
    }

    /// Iterates over reachable vertices in index order as `(vertex, distance, predecessor)`.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId<'brand>, E, Option<VertexId<'brand>>)> + '_ {
        self.entries.iter().enumerate().filter_map(|(idx, entry)| {
            entry.map(|s| (VertexId::new(idx), s.distance, s.predecessor))
        })
    }

    /// Number of vertices with a finite distance, the source included.
    pub fn reachable_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }
}

/// Computes shortest paths from `source`, crossing edges in both directions.
pub fn shortest_paths<'brand, V, E>(
    graph: &Graph<'brand, V, E>,
    source: VertexId<'brand>,
) -> ShortestPaths<'brand, E>
where
    E: Copy + Ord + Add<Output = E> + Zero,
{
    shortest_paths_with(graph, source, Relaxation::Undirected)
}

/// Computes shortest paths from `source` under the given relaxation policy.
///
/// Stale heap entries (a vertex popped with a distance larger than the one
/// already recorded) are skipped. Weights must be non-negative.
pub fn shortest_paths_with<'brand, V, E>(
    graph: &Graph<'brand, V, E>,
    source: VertexId<'brand>,
    relaxation: Relaxation,
) -> ShortestPaths<'brand, E>
where
    E: Copy + Ord + Add<Output = E> + Zero,
{
    let mut entries: Vec<Option<Settled<'brand, E>>> = vec![None; graph.vertex_count()];
    let mut heap = BinaryHeap::new();

    entries[source.index()] = Some(Settled {
        distance: E::zero(),
        predecessor: None,
    });
    heap.push(Reverse((E::zero(), source)));

    while let Some(Reverse((dist, current))) = heap.pop() {
        // Every pushed vertex has an entry; skip stale heap entries.
        if entries[current.index()].is_some_and(|settled| dist > settled.distance) {
            continue;
        }

        for &edge_id in graph.incident_edges(current) {
            let edge = graph.edge(edge_id);
            let next = match relaxation {
                Relaxation::Undirected => edge.other_endpoint(current),
                Relaxation::Forward => edge.target(),
            };
            if next == current {
                continue;
            }

            let weight = *edge.weight();
            debug_assert!(weight >= E::zero(), "negative edge weight");
            let candidate = dist + weight;
            if entries[next.index()].map_or(true, |s| candidate < s.distance) {
                entries[next.index()] = Some(Settled {
                    distance: candidate,
                    predecessor: Some(current),
                });
                heap.push(Reverse((candidate, next)));
            }
        }
    }

    let paths = ShortestPaths {
        source,
        relaxation,
        entries,
    };
    #[cfg(feature = "tracing")]
    tracing::debug!(
        source = source.index(),
        ?relaxation,
        reachable = paths.reachable_count(),
        "shortest paths computed"
    );
    paths
}

/// Runs [`shortest_paths_with`] once per source.
///
/// The runs share nothing but the graph, so with the `parallel` feature they
/// execute on the rayon pool.
#[cfg(feature = "parallel")]
pub fn shortest_paths_from_many<'brand, V, E>(
    graph: &Graph<'brand, V, E>,
    sources: &[VertexId<'brand>],
    relaxation: Relaxation,
) -> Vec<ShortestPaths<'brand, E>>
where
    V: Sync,
    E: Copy + Ord + Add<Output = E> + Zero + Send + Sync,
{
    use rayon::prelude::*;

    sources
        .par_iter()
        .map(|&source| shortest_paths_with(graph, source, relaxation))
        .collect()
}

/// Runs [`shortest_paths_with`] once per source.
#[cfg(not(feature = "parallel"))]
pub fn shortest_paths_from_many<'brand, V, E>(
    graph: &Graph<'brand, V, E>,
    sources: &[VertexId<'brand>],
    relaxation: Relaxation,
) -> Vec<ShortestPaths<'brand, E>>
where
    E: Copy + Ord + Add<Output = E> + Zero,
{
    sources
        .iter()
        .map(|&source| shortest_paths_with(graph, source, relaxation))
        .collect()
}
