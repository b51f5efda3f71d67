use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use propgraph::graph::{depth_first, find_path_cost, shortest_paths_with, Inspect, OneTimeVisitor, Relaxation, VisitEvent};
use propgraph::sample::reference_graph;
use propgraph::{GhostToken, Query, VertexTable};

/// Walk the reference road graph: depth-first trace, path search and shortest paths.
#[derive(Parser, Debug)]
#[command(name = "graphwalk")]
#[command(about = "Depth-first walk, path search and Dijkstra over the reference graph", long_about = None)]
struct Args {
    /// Query file: start vertex, search target and shortest-path source, one per line
    #[arg(default_value = "query.txt")]
    query: PathBuf,

    /// Which way edges may be crossed when computing shortest paths
    #[arg(long, value_enum, default_value_t = RelaxationArg::Undirected)]
    relaxation: RelaxationArg,

    /// Print the report as JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RelaxationArg {
    Undirected,
    Forward,
}

impl From<RelaxationArg> for Relaxation {
    fn from(arg: RelaxationArg) -> Self {
        match arg {
            RelaxationArg::Undirected => Relaxation::Undirected,
            RelaxationArg::Forward => Relaxation::Forward,
        }
    }
}

#[derive(Serialize, Debug)]
struct Report {
    query: Query,
    vertices: Vec<String>,
    walk: Vec<WalkStep>,
    path: Option<PathReport>,
    relaxation: &'static str,
    distances: Vec<DistanceReport>,
}

#[derive(Serialize, Debug)]
struct WalkStep {
    depth: usize,
    vertex: String,
}

#[derive(Serialize, Debug)]
struct PathReport {
    cost: u32,
    hops: usize,
    vertices: Vec<String>,
}

#[derive(Serialize, Debug)]
struct DistanceReport {
    vertex: String,
    distance: u32,
    via: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let query = Query::from_path(&args.query)
        .with_context(|| format!("failed to load query file {}", args.query.display()))?;
    info!(start = %query.start, target = %query.target, source = %query.source, "query loaded");

    let report = run(query, args.relaxation.into())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text(&report);
    }
    Ok(())
}

fn run(query: Query, relaxation: Relaxation) -> Result<Report> {
    GhostToken::new(|token| -> Result<Report> {
        let graph = reference_graph(token);
        let table = VertexTable::from_graph(&graph, String::clone);
        debug!(vertices = graph.vertex_count(), edges = graph.edge_count(), "graph assembled");

        let start = table.resolve(&query.start)?;
        let source = table.resolve(&query.source)?;

        let vertices = graph
            .vertices()
            .map(|v| graph.display_vertex(v).to_string())
            .collect();

        let mut walk = Vec::new();
        let mut depth = 0usize;
        let mut visitor = Inspect::new(OneTimeVisitor::new(), |event| match event {
            VisitEvent::EnterVertex(v) => {
                walk.push(WalkStep {
                    depth,
                    vertex: graph.payload(v).clone(),
                });
                depth += 1;
            }
            VisitEvent::LeaveVertex(_) => depth -= 1,
            _ => {}
        });
        depth_first(&graph, start, &mut visitor);
        drop(visitor);
        info!(steps = walk.len(), "depth-first walk finished");

        let path = find_path_cost(&graph, start, query.target.as_str()).map(|found| PathReport {
            cost: found.cost,
            hops: found.path.len().saturating_sub(1),
            vertices: found.path.iter().map(|&v| graph.payload(v).clone()).collect(),
        });
        match &path {
            Some(found) => info!(cost = found.cost, hops = found.hops, "path found"),
            None => info!(target = %query.target, "path not found"),
        }

        let paths = shortest_paths_with(&graph, source, relaxation);
        let distances = paths
            .iter()
            .map(|(v, distance, via)| DistanceReport {
                vertex: graph.payload(v).clone(),
                distance,
                via: via.map(|p| graph.payload(p).clone()),
            })
            .collect();

        Ok(Report {
            query,
            vertices,
            walk,
            path,
            relaxation: match relaxation {
                Relaxation::Undirected => "undirected",
                Relaxation::Forward => "forward",
            },
            distances,
        })
    })
}

fn print_text(report: &Report) {
    println!("Vertices:");
    for vertex in &report.vertices {
        println!("{vertex}");
    }

    println!("\nDepth-first walk from {}:", report.query.start);
    for step in &report.walk {
        println!("{}{}", "  ".repeat(step.depth), step.vertex);
    }

    match &report.path {
        Some(path) => println!(
            "\nPath {} -> {} found, cost {}: {}",
            report.query.start,
            report.query.target,
            path.cost,
            path.vertices.join(" -> ")
        ),
        None => println!("\nNo path from {} to {}.", report.query.start, report.query.target),
    }

    println!(
        "\nShortest paths from {} ({}):",
        report.query.source, report.relaxation
    );
    for entry in &report.distances {
        match &entry.via {
            Some(via) => println!("  {}: {} (via {via})", entry.vertex, entry.distance),
            None => println!("  {}: {}", entry.vertex, entry.distance),
        }
    }
}
