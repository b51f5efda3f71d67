use criterion::{black_box, criterion_group, criterion_main, Criterion};
use propgraph::graph::{shortest_paths_from_many, shortest_paths_with, Graph, Relaxation};
use propgraph::sample::reference_graph;
use propgraph::GhostToken;

/// Builds a `side` x `side` grid with right and down edges.
fn build_grid(graph: &mut Graph<'_, usize, u64>, side: usize) {
    let nodes: Vec<_> = (0..side * side).map(|i| graph.add_vertex(i)).collect();
    for row in 0..side {
        for col in 0..side {
            let here = row * side + col;
            if col + 1 < side {
                graph.add_edge(nodes[here], nodes[here + 1], ((here * 31) % 17 + 1) as u64);
            }
            if row + 1 < side {
                graph.add_edge(nodes[here], nodes[here + side], ((here * 13) % 11 + 1) as u64);
            }
        }
    }
}

fn bench_shortest_paths(c: &mut Criterion) {
    let side = 64;

    for (name, relaxation) in [
        ("dijkstra_grid_undirected", Relaxation::Undirected),
        ("dijkstra_grid_forward", Relaxation::Forward),
    ] {
        c.bench_function(name, |b| {
            GhostToken::new(|token| {
                let mut graph = Graph::with_capacity(token, side * side, 2 * side * side);
                build_grid(&mut graph, side);
                let source = graph.vertices().next().expect("non-empty grid");

                b.iter(|| black_box(shortest_paths_with(&graph, source, relaxation).reachable_count()));
            })
        });
    }

    c.bench_function("dijkstra_reference_graph", |b| {
        GhostToken::new(|token| {
            let graph = reference_graph(token);
            let source = graph.find_vertex("B1").expect("B1 exists");

            b.iter(|| black_box(shortest_paths_with(&graph, source, Relaxation::Undirected)));
        })
    });
}

fn bench_many_sources(c: &mut Criterion) {
    let side = 32;

    c.bench_function("dijkstra_grid_all_sources", |b| {
        GhostToken::new(|token| {
            let mut graph = Graph::with_capacity(token, side * side, 2 * side * side);
            build_grid(&mut graph, side);
            let sources: Vec<_> = graph.vertices().collect();

            b.iter(|| black_box(shortest_paths_from_many(&graph, &sources, Relaxation::Undirected).len()));
        })
    });
}

criterion_group!(benches, bench_shortest_paths, bench_many_sources);
criterion_main!(benches);
