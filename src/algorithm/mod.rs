pub mod traits;
pub mod distance;
pub mod dijkstra;
pub mod path;

pub use traits::{DistanceMap, PredecessorMap, SearchStats, ShortestPathAlgorithm, ShortestPaths};
