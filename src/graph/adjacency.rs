use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::graph::traits::{Graph, MutableGraph, NodeId, Weight};
use crate::Result;

/// A directed graph stored as nested maps: node -> (neighbor -> weight)
///
/// Every edge target is also a node of the graph, so `outgoing_edges` never
/// yields a neighbor that `contains_node` rejects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Outgoing edges for each node: node -> {neighbor: weight}
    adjacency: HashMap<N, HashMap<N, W>>,
}

impl<N, W> AdjacencyGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        AdjacencyGraph {
            adjacency: HashMap::new(),
        }
    }

    /// Creates a new empty graph with room for `nodes` nodes
    pub fn with_capacity(nodes: usize) -> Self {
        AdjacencyGraph {
            adjacency: HashMap::with_capacity(nodes),
        }
    }

    /// Returns the nodes sorted by key
    pub fn sorted_nodes(&self) -> Vec<&N> {
        let mut nodes: Vec<&N> = self.adjacency.keys().collect();
        nodes.sort();
        nodes
    }
}

impl<N, W> AdjacencyGraph<N, W>
where
    N: NodeId + DeserializeOwned,
    W: Weight + DeserializeOwned,
{
    /// Parses a graph from a JSON object of the form `{"A": {"B": 4, "C": 2}, ...}`
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a graph from a JSON file, see [`AdjacencyGraph::from_json_str`]
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

impl<N, W> Default for AdjacencyGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, W> From<HashMap<N, HashMap<N, W>>> for AdjacencyGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    fn from(mut adjacency: HashMap<N, HashMap<N, W>>) -> Self {
        // Targets that never appear as keys become edgeless nodes
        let dangling: Vec<N> = adjacency
            .values()
            .flat_map(|edges| edges.keys())
            .filter(|target| !adjacency.contains_key(*target))
            .cloned()
            .collect();
        for node in dangling {
            adjacency.entry(node).or_default();
        }

        AdjacencyGraph { adjacency }
    }
}

impl<N, W> FromIterator<(N, N, W)> for AdjacencyGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    fn from_iter<I: IntoIterator<Item = (N, N, W)>>(edges: I) -> Self {
        let mut graph = AdjacencyGraph::new();
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight);
        }
        graph
    }
}

impl<N, W> Serialize for AdjacencyGraph<N, W>
where
    N: NodeId + Serialize,
    W: Weight + Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.adjacency.serialize(serializer)
    }
}

impl<'de, N, W> Deserialize<'de> for AdjacencyGraph<N, W>
where
    N: NodeId + Deserialize<'de>,
    W: Weight + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let adjacency = HashMap::<N, HashMap<N, W>>::deserialize(deserializer)?;
        Ok(AdjacencyGraph::from(adjacency))
    }
}

impl<N, W> Graph<N, W> for AdjacencyGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.values().map(|edges| edges.len()).sum()
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_> {
        Box::new(self.adjacency.keys())
    }

    fn outgoing_edges(&self, node: &N) -> Box<dyn Iterator<Item = (&N, W)> + '_> {
        match self.adjacency.get(node) {
            Some(edges) => Box::new(edges.iter().map(|(target, weight)| (target, *weight))),
            None => Box::new(std::iter::empty()),
        }
    }

    fn contains_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    fn edge_weight(&self, from: &N, to: &N) -> Option<W> {
        self.adjacency
            .get(from)
            .and_then(|edges| edges.get(to))
            .copied()
    }
}

impl<N, W> MutableGraph<N, W> for AdjacencyGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    fn add_node(&mut self, node: N) -> bool {
        if self.adjacency.contains_key(&node) {
            return false;
        }
        self.adjacency.insert(node, HashMap::new());
        true
    }

    fn add_edge(&mut self, from: N, to: N, weight: W) -> bool {
        if !self.adjacency.contains_key(&to) {
            self.adjacency.insert(to.clone(), HashMap::new());
        }
        self.adjacency
            .entry(from)
            .or_default()
            .insert(to, weight)
            .is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use ordered_float::OrderedFloat;
    use std::io::Write;

    #[test]
    fn test_add_edge_registers_both_endpoints() {
        let mut graph: AdjacencyGraph<&str, u32> = AdjacencyGraph::new();
        assert!(graph.add_edge("A", "B", 3));
        assert!(graph.contains_node(&"A"));
        assert!(graph.contains_node(&"B"));
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);

        // Directed: no reverse edge
        assert!(graph.has_edge(&"A", &"B"));
        assert!(!graph.has_edge(&"B", &"A"));
    }

    #[test]
    fn test_add_edge_replaces_weight() {
        let mut graph: AdjacencyGraph<&str, u32> = AdjacencyGraph::new();
        assert!(graph.add_edge("A", "B", 3));
        assert!(!graph.add_edge("A", "B", 1));
        assert_eq!(graph.edge_weight(&"A", &"B"), Some(1));
        assert_eq!(graph.edge_count(), 1);
        assert!(!graph.add_node("A"));
        assert!(graph.add_node("Z"));
    }

    #[test]
    fn test_from_json_registers_dangling_targets() {
        let graph: AdjacencyGraph<String, OrderedFloat<f64>> =
            AdjacencyGraph::from_json_str(r#"{"A": {"B": 4, "C": 2.5}, "B": {}}"#).unwrap();

        assert_eq!(graph.node_count(), 3);
        assert!(graph.contains_node(&"C".to_string()));
        assert_eq!(
            graph.edge_weight(&"A".to_string(), &"C".to_string()),
            Some(OrderedFloat(2.5))
        );
        assert_eq!(graph.sorted_nodes(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_from_json_rejects_malformed_documents() {
        let result = AdjacencyGraph::<String, u32>::from_json_str(r#"{"A": ["B"]}"#);
        assert!(matches!(result, Err(Error::GraphFormat(_))));
    }

    #[test]
    fn test_from_json_file_reads_graph() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"A": {{"B": 1}}, "B": {{"C": 2}}}}"#).unwrap();

        let graph: AdjacencyGraph<String, u32> = AdjacencyGraph::from_json_file(file.path()).unwrap();
        assert_eq!(graph.sorted_nodes(), vec!["A", "B", "C"]);
        assert_eq!(graph.edge_weight(&"B".to_string(), &"C".to_string()), Some(2));
    }

    #[test]
    fn test_from_json_file_missing_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = AdjacencyGraph::<String, u32>::from_json_file(dir.path().join("missing.json"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_json_round_trip_preserves_graph() {
        let graph: AdjacencyGraph<String, u32> = vec![
            ("A".to_string(), "B".to_string(), 1),
            ("B".to_string(), "C".to_string(), 2),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&graph).unwrap();
        let parsed = AdjacencyGraph::from_json_str(&json).unwrap();
        assert_eq!(graph, parsed);
    }

    #[test]
    fn test_validate_weights_reports_lowest_edge() {
        let mut graph: AdjacencyGraph<&str, i32> = AdjacencyGraph::new();
        graph.add_edge("A", "B", 1);
        graph.add_edge("C", "D", -2);
        graph.add_edge("B", "C", -5);
        assert!(graph.add_node("E"));

        match graph.validate_weights() {
            Err(Error::InvalidWeight { from, to, weight }) => {
                assert_eq!(from, "\"B\"");
                assert_eq!(to, "\"C\"");
                assert_eq!(weight, "-5");
            }
            other => panic!("expected InvalidWeight, got {:?}", other),
        }
    }
}
