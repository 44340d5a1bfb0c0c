//! Dijkstra Paths - deterministic single-source shortest paths over keyed graphs
//!
//! This library computes shortest distances from a start node to every node of a
//! weighted directed graph using the greedy label-setting algorithm (Dijkstra),
//! and reconstructs explicit start-to-end paths from the resulting predecessor map.
//!
//! Nodes are identified by arbitrary ordered, hashable keys (strings, integers, ...)
//! and edge weights must be non-negative. Ties between equally distant nodes are
//! always broken towards the lowest node key, so results are reproducible.
//!
//! ```
//! use dijkstra_paths::{find_shortest_paths, reconstruct_path, AdjacencyGraph, Distance};
//! use dijkstra_paths::graph::MutableGraph;
//!
//! let mut graph = AdjacencyGraph::new();
//! graph.add_edge("A", "B", 4u32);
//! graph.add_edge("A", "C", 2u32);
//! graph.add_edge("C", "D", 1u32);
//! graph.add_edge("B", "D", 3u32);
//!
//! let (distances, previous) = find_shortest_paths(&graph, &"A").unwrap();
//! assert_eq!(distances[&"D"], Distance::Finite(3));
//! assert_eq!(reconstruct_path(&previous, &"A", &"D").unwrap(), vec!["A", "C", "D"]);
//! ```

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::{find_shortest_paths, PathFinder, SelectionStrategy},
    distance::Distance,
    path::reconstruct_path,
    DistanceMap, PredecessorMap, SearchStats, ShortestPathAlgorithm, ShortestPaths,
};
/// Re-export main types for convenient use
pub use graph::{AdjacencyGraph, NodeId, Weight};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unknown node: {0}")]
    UnknownNode(String),

    #[error("No path from {start} to {end}")]
    Unreachable { start: String, end: String },

    #[error("Invalid edge weight {weight} on edge from {from} to {to}")]
    InvalidWeight {
        from: String,
        to: String,
        weight: String,
    },

    #[error("Distance to {node} overflows the weight type")]
    DistanceOverflow { node: String },

    #[error("Malformed graph document: {0}")]
    GraphFormat(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn unknown_node<N: std::fmt::Debug>(node: &N) -> Self {
        Error::UnknownNode(format!("{:?}", node))
    }

    pub(crate) fn unreachable<N: std::fmt::Debug>(start: &N, end: &N) -> Self {
        Error::Unreachable {
            start: format!("{:?}", start),
            end: format!("{:?}", end),
        }
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
