use std::collections::HashMap;

use log::{debug, trace};

use crate::algorithm::distance::Distance;
use crate::algorithm::{
    DistanceMap, PredecessorMap, SearchStats, ShortestPathAlgorithm, ShortestPaths,
};
use crate::data_structures::MinQueue;
use crate::graph::{Graph, NodeId, Weight};
use crate::{Error, Result};

/// How the next node to finalize is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionStrategy {
    /// Scan the whole unvisited set on every iteration, O(V^2) overall
    LinearScan,
    /// Lazy-deletion binary heap, O((V + E) log V) overall
    #[default]
    BinaryHeap,
}

/// Dijkstra's label-setting algorithm over keyed graphs
///
/// Both strategies produce identical results: among equally distant
/// candidates the node with the lowest key is finalized first.
#[derive(Debug, Clone, Copy)]
pub struct PathFinder {
    strategy: SelectionStrategy,
    validate_weights: bool,
}

impl Default for PathFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl PathFinder {
    /// Creates a path finder using the binary heap strategy with weight validation
    pub fn new() -> Self {
        PathFinder {
            strategy: SelectionStrategy::BinaryHeap,
            validate_weights: true,
        }
    }

    /// Set the node selection strategy
    pub fn with_strategy(mut self, strategy: SelectionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Enable or disable the up-front check for negative or non-finite weights.
    ///
    /// With validation disabled, results on graphs with such weights are
    /// meaningless.
    pub fn with_weight_validation(mut self, validate: bool) -> Self {
        self.validate_weights = validate;
        self
    }

    pub fn strategy(&self) -> SelectionStrategy {
        self.strategy
    }

    /// Runs the search from `start` and returns distances, predecessors and
    /// search counters
    pub fn search<N, W, G>(&self, graph: &G, start: &N) -> Result<ShortestPaths<N, W>>
    where
        N: NodeId,
        W: Weight,
        G: Graph<N, W>,
    {
        if !graph.contains_node(start) {
            return Err(Error::unknown_node(start));
        }
        if self.validate_weights {
            graph.validate_weights()?;
        }

        let index: NodeIndex<'_, N> = NodeIndex::new::<W, G>(graph);
        // Only fails for a graph whose `nodes()` disagrees with `contains_node`
        let source = index.position(start).ok_or_else(|| Error::unknown_node(start))?;
        let mut labels = Labels::new(index.len(), source);

        debug!(
            "Searching from {:?} over {} nodes and {} edges ({:?})",
            start,
            index.len(),
            graph.edge_count(),
            self.strategy
        );

        let stats = match self.strategy {
            SelectionStrategy::LinearScan => run_linear_scan(graph, &index, &mut labels)?,
            SelectionStrategy::BinaryHeap => run_binary_heap(graph, &index, &mut labels, source)?,
        };

        debug!(
            "Search from {:?} finalized {} nodes with {} relaxations, {} stale queue entries",
            start, stats.finalized, stats.relaxations, stats.stale_entries
        );

        Ok(labels.into_result(&index, start.clone(), stats))
    }
}

impl<N, W, G> ShortestPathAlgorithm<N, W, G> for PathFinder
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        match self.strategy {
            SelectionStrategy::LinearScan => "Dijkstra (linear scan)",
            SelectionStrategy::BinaryHeap => "Dijkstra (binary heap)",
        }
    }

    fn compute_shortest_paths(&self, graph: &G, source: &N) -> Result<ShortestPaths<N, W>> {
        self.search(graph, source)
    }
}

/// Computes shortest distances and predecessors from `start` with the default
/// [`PathFinder`]
pub fn find_shortest_paths<N, W, G>(graph: &G, start: &N) -> Result<(DistanceMap<N, W>, PredecessorMap<N>)>
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    PathFinder::new().search(graph, start).map(ShortestPaths::into_maps)
}

/// Dense positions for the nodes of a graph, assigned in key order so that
/// comparing positions is the same as comparing keys
struct NodeIndex<'g, N> {
    nodes: Vec<&'g N>,
    positions: HashMap<&'g N, usize>,
}

impl<'g, N: NodeId> NodeIndex<'g, N> {
    fn new<W: Weight, G: Graph<N, W>>(graph: &'g G) -> Self {
        let mut nodes: Vec<&'g N> = graph.nodes().collect();
        nodes.sort();
        let positions = nodes.iter().enumerate().map(|(i, node)| (*node, i)).collect();
        NodeIndex { nodes, positions }
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn position(&self, node: &N) -> Option<usize> {
        self.positions.get(node).copied()
    }
}

/// Per-search working state: tentative distances, predecessors and the
/// unvisited set (as a finalized flag per node)
struct Labels<W> {
    distances: Vec<Distance<W>>,
    predecessors: Vec<Option<usize>>,
    finalized: Vec<bool>,
}

impl<W: Weight> Labels<W> {
    fn new(n: usize, source: usize) -> Self {
        let mut distances = vec![Distance::Unreachable; n];
        distances[source] = Distance::zero();
        Labels {
            distances,
            predecessors: vec![None; n],
            finalized: vec![false; n],
        }
    }

    fn finalize<N: NodeId>(&mut self, node: usize, index: &NodeIndex<'_, N>, stats: &mut SearchStats) {
        self.finalized[node] = true;
        stats.finalized += 1;
        trace!("Finalized {:?} at distance {:?}", index.nodes[node], self.distances[node]);
    }

    /// Relaxes the outgoing edges of `current`, calling `improved` for every
    /// neighbor whose tentative distance was lowered.
    ///
    /// Fails with `DistanceOverflow` if a candidate length does not fit in `W`.
    fn relax<N, G, F>(&mut self, graph: &G, index: &NodeIndex<'_, N>, current: usize, stats: &mut SearchStats, mut improved: F) -> Result<()>
    where
        N: NodeId,
        G: Graph<N, W>,
        F: FnMut(usize, W),
    {
        let base = self.distances[current];

        for (neighbor, weight) in graph.outgoing_edges(index.nodes[current]) {
            // Targets outside the node set are never unvisited
            let v = match index.position(neighbor) {
                Some(v) => v,
                None => continue,
            };
            if self.finalized[v] {
                continue;
            }

            let candidate = base.extend(weight).ok_or_else(|| Error::DistanceOverflow {
                node: format!("{:?}", neighbor),
            })?;
            if candidate < self.distances[v] {
                self.distances[v] = candidate;
                self.predecessors[v] = Some(current);
                stats.relaxations += 1;
                if let Distance::Finite(d) = candidate {
                    improved(v, d);
                }
            }
        }

        Ok(())
    }

    fn into_result<N: NodeId>(self, index: &NodeIndex<'_, N>, source: N, stats: SearchStats) -> ShortestPaths<N, W> {
        let distances = index
            .nodes
            .iter()
            .zip(self.distances)
            .map(|(node, distance)| ((*node).clone(), distance))
            .collect();
        let predecessors = index
            .nodes
            .iter()
            .zip(self.predecessors)
            .map(|(node, pred)| ((*node).clone(), pred.map(|p| index.nodes[p].clone())))
            .collect();

        ShortestPaths {
            source,
            distances,
            predecessors,
            stats,
        }
    }
}

fn run_linear_scan<N, W, G>(graph: &G, index: &NodeIndex<'_, N>, labels: &mut Labels<W>) -> Result<SearchStats>
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    let mut stats = SearchStats::default();

    loop {
        // Ascending scan with strict comparison keeps the lowest key among ties
        let mut current: Option<usize> = None;
        for v in 0..index.len() {
            if labels.finalized[v] {
                continue;
            }
            let closer = match current {
                Some(best) => labels.distances[v] < labels.distances[best],
                None => true,
            };
            if closer {
                current = Some(v);
            }
        }

        let current = match current {
            Some(current) => current,
            None => break,
        };
        // Everything left is unreachable
        if labels.distances[current].is_unreachable() {
            break;
        }

        labels.finalize(current, index, &mut stats);
        labels.relax(graph, index, current, &mut stats, |_, _| {})?;
    }

    Ok(stats)
}

fn run_binary_heap<N, W, G>(graph: &G, index: &NodeIndex<'_, N>, labels: &mut Labels<W>, source: usize) -> Result<SearchStats>
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    let mut stats = SearchStats::default();
    let mut queue = MinQueue::with_capacity(index.len());
    queue.push(source, W::zero());

    loop {
        // Skip entries for finalized nodes and superseded distances
        let next = queue.pop_live(|v, d| {
            !labels.finalized[v] && labels.distances[v] == Distance::Finite(d)
        });
        let current = match next {
            Some((current, _)) => current,
            None => break,
        };

        labels.finalize(current, index, &mut stats);
        labels.relax(graph, index, current, &mut stats, |v, d| queue.push(v, d))?;
    }

    stats.stale_entries = queue.discarded();
    Ok(stats)
}
