use dijkstra_paths::graph::Graph;
use dijkstra_paths::{AdjacencyGraph, PathFinder, SelectionStrategy};
use log::info;
use ordered_float::OrderedFloat;
use std::env;
use std::process;

type Cost = OrderedFloat<f64>;

/// Command line configuration
///
/// `shortest-paths [GRAPH_JSON [START [END]]] [--linear]`
#[derive(Debug)]
struct CliConfig {
    graph_path: Option<String>,
    start: String,
    end: Option<String>,
    strategy: SelectionStrategy,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            graph_path: None,
            start: "A".to_string(),
            end: Some("D".to_string()),
            strategy: SelectionStrategy::BinaryHeap,
        }
    }
}

impl CliConfig {
    fn from_args<I: IntoIterator<Item = String>>(args: I) -> Self {
        let mut config = CliConfig::default();
        let mut positional = Vec::new();

        for arg in args {
            if arg == "--linear" {
                config.strategy = SelectionStrategy::LinearScan;
            } else {
                positional.push(arg);
            }
        }

        let mut positional = positional.into_iter();
        if let Some(path) = positional.next() {
            config.graph_path = Some(path);
            // A custom graph has no default destination
            config.end = None;
        }
        if let Some(start) = positional.next() {
            config.start = start;
        }
        if let Some(end) = positional.next() {
            config.end = Some(end);
        }

        config
    }
}

/// The four-node example graph
fn sample_graph() -> AdjacencyGraph<String, Cost> {
    [
        ("A", "B", 4.0),
        ("A", "C", 2.0),
        ("B", "A", 4.0),
        ("B", "D", 3.0),
        ("C", "A", 2.0),
        ("C", "D", 1.0),
        ("D", "B", 3.0),
        ("D", "C", 1.0),
    ]
    .into_iter()
    .map(|(from, to, weight)| (from.to_string(), to.to_string(), OrderedFloat(weight)))
    .collect()
}

fn run(config: &CliConfig) -> dijkstra_paths::Result<()> {
    let graph: AdjacencyGraph<String, Cost> = match &config.graph_path {
        Some(path) => AdjacencyGraph::from_json_file(path)?,
        None => sample_graph(),
    };
    info!(
        "Loaded graph with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let finder = PathFinder::new().with_strategy(config.strategy);
    info!("Using {:?} node selection", finder.strategy());
    let result = finder.search(&graph, &config.start)?;

    println!("Shortest distances from {}:", config.start);
    for node in graph.sorted_nodes() {
        if let Some(distance) = result.distance(node) {
            println!("{} -> {}: {}", config.start, node, distance);
        }
    }

    if let Some(end) = &config.end {
        let path = result.path_to(end)?;
        println!(
            "\nShortest path from {} to {}: {}",
            config.start,
            end,
            path.join(" -> ")
        );
    }

    Ok(())
}

fn main() {
    // Initialize logging
    env_logger::init();

    let config = CliConfig::from_args(env::args().skip(1));
    info!("Configuration: {:?}", config);

    if let Err(err) = run(&config) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
