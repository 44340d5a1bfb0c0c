use crate::graph::{AdjacencyGraph, MutableGraph};
use rand::prelude::*;

/// Generates a random directed graph with `n` nodes numbered `0..n` and about
/// `edge_factor * n` edges with weights in `1..=max_weight`.
///
/// The same seed always produces the same graph.
pub fn random_graph(n: usize, edge_factor: f64, max_weight: u64, seed: u64) -> AdjacencyGraph<usize, u64> {
    assert!(max_weight > 0, "max_weight must be positive");

    let mut graph = AdjacencyGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 0..n {
        graph.add_node(v);
    }
    if n < 2 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        // Avoid self-loops
        if u != v {
            let weight = rng.gen_range(1..=max_weight);
            graph.add_edge(u, v, weight);
        }
    }

    graph
}

/// Generates a `width` x `height` grid with unit-cost edges in both directions
/// between horizontally and vertically adjacent cells. Nodes are `(x, y)` pairs.
pub fn grid_graph(width: usize, height: usize) -> AdjacencyGraph<(usize, usize), u64> {
    let mut graph = AdjacencyGraph::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            graph.add_node((x, y));
            if x + 1 < width {
                graph.add_edge((x, y), (x + 1, y), 1);
                graph.add_edge((x + 1, y), (x, y), 1);
            }
            if y + 1 < height {
                graph.add_edge((x, y), (x, y + 1), 1);
                graph.add_edge((x, y + 1), (x, y), 1);
            }
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn test_random_graph_is_reproducible() {
        let a = random_graph(50, 3.0, 20, 7);
        let b = random_graph(50, 3.0, 20, 7);
        assert_eq!(a, b);
        assert_eq!(a.node_count(), 50);
        assert!(a.validate_weights().is_ok());
    }

    #[test]
    fn test_grid_graph_shape() {
        let grid = grid_graph(3, 2);
        assert_eq!(grid.node_count(), 6);
        // 2 horizontal pairs per row * 2 rows + 3 vertical pairs, both directions
        assert_eq!(grid.edge_count(), 2 * (2 * 2 + 3));
        assert!(grid.has_edge(&(0, 0), &(1, 0)));
        assert!(grid.has_edge(&(1, 0), &(0, 0)));
        assert!(!grid.has_edge(&(0, 0), &(1, 1)));
    }
}
