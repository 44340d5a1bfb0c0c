use std::collections::HashMap;

use crate::algorithm::distance::Distance;
use crate::algorithm::path::reconstruct_path;
use crate::graph::{Graph, NodeId, Weight};
use crate::{Error, Result};

/// Shortest known distance from the source for every node of the graph
pub type DistanceMap<N, W> = HashMap<N, Distance<W>>;

/// Node preceding each node on its shortest path; `None` for the source
/// and for unreachable nodes
pub type PredecessorMap<N> = HashMap<N, Option<N>>;

/// Counters collected while a search runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes removed from the unvisited set
    pub finalized: usize,
    /// Successful relaxations (tentative distance lowered)
    pub relaxations: usize,
    /// Queue entries skipped because they were outdated
    pub stale_entries: usize,
}

/// Result of a shortest path search
#[derive(Debug, Clone)]
pub struct ShortestPaths<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Source node
    pub source: N,

    /// Distances from source to each node
    pub distances: DistanceMap<N, W>,

    /// Predecessor nodes in the shortest path tree
    pub predecessors: PredecessorMap<N>,

    pub stats: SearchStats,
}

impl<N, W> ShortestPaths<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Distance of `node` from the source, or `None` if it is not in the graph
    pub fn distance(&self, node: &N) -> Option<Distance<W>> {
        self.distances.get(node).copied()
    }

    /// Predecessor of `node`, or `None` for the source, unreachable nodes and
    /// unknown nodes
    pub fn predecessor(&self, node: &N) -> Option<&N> {
        self.predecessors.get(node).and_then(|p| p.as_ref())
    }

    pub fn is_reachable(&self, node: &N) -> bool {
        self.distance(node).map_or(false, |d| d.is_finite())
    }

    /// Number of nodes with a finite distance, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.values().filter(|d| d.is_finite()).count()
    }

    /// Reconstructs the shortest path from the source to `target`
    pub fn path_to(&self, target: &N) -> Result<Vec<N>> {
        reconstruct_path(&self.predecessors, &self.source, target)
    }

    /// Splits the result into its distance and predecessor maps
    pub fn into_maps(self) -> (DistanceMap<N, W>, PredecessorMap<N>) {
        (self.distances, self.predecessors)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<N, W, G>
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    /// Compute shortest paths from a source node to all other nodes
    fn compute_shortest_paths(&self, graph: &G, source: &N) -> Result<ShortestPaths<N, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of nodes,
    /// together with its length
    fn get_path(&self, graph: &G, source: &N, target: &N) -> Result<(W, Vec<N>)> {
        let result = self.compute_shortest_paths(graph, source)?;
        let length = result
            .distance(target)
            .ok_or_else(|| Error::unknown_node(target))?
            .finite()
            .ok_or_else(|| Error::unreachable(source, target))?;
        Ok((length, result.path_to(target)?))
    }
}
