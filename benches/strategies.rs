// Benchmarks comparing the linear-scan and binary-heap node selection
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dijkstra_paths::graph::generators::{grid_graph, random_graph};
use dijkstra_paths::{PathFinder, SelectionStrategy};

const STRATEGIES: [(&str, SelectionStrategy); 2] = [
    ("linear_scan", SelectionStrategy::LinearScan),
    ("binary_heap", SelectionStrategy::BinaryHeap),
];

fn benchmark_random_graphs(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_graph");

    for size in [100, 1_000, 5_000].iter() {
        let graph = random_graph(*size, 4.0, 100, 42);

        for (name, strategy) in STRATEGIES {
            let finder = PathFinder::new().with_strategy(strategy);
            group.bench_with_input(BenchmarkId::new(name, size), size, |b, _| {
                b.iter(|| finder.search(black_box(&graph), black_box(&0usize)).unwrap());
            });
        }
    }

    group.finish();
}

fn benchmark_grids(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid");

    for side in [10, 40].iter() {
        let graph = grid_graph(*side, *side);

        for (name, strategy) in STRATEGIES {
            let finder = PathFinder::new().with_strategy(strategy);
            group.bench_with_input(BenchmarkId::new(name, side), side, |b, _| {
                b.iter(|| finder.search(black_box(&graph), black_box(&(0, 0))).unwrap());
            });
        }
    }

    group.finish();
}

criterion_group!(benches, benchmark_random_graphs, benchmark_grids);
criterion_main!(benches);
