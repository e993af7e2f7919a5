use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use dense_sssp::{Graph, ScanSolver};
use petgraph::algo::dijkstra;
use petgraph::graph::{NodeIndex, UnGraph};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

fn create_sparse_graph(n: usize, density: f64, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::new(n);

    let m = ((n as f64) * density).round() as usize;

    // Ensure connectivity by creating a spanning tree first
    for i in 1..n {
        let parent = rng.gen_range(0..i);
        let weight = rng.gen_range(1.0..10.0);
        graph.add_edge(parent, i, weight).unwrap();
    }

    // Add remaining random edges
    let remaining_edges = m.saturating_sub(n - 1);
    for _ in 0..remaining_edges {
        let from = rng.gen_range(0..n);
        let to = rng.gen_range(0..n);
        if from != to {
            let weight = rng.gen_range(1.0..10.0);
            graph.add_edge(from, to, weight).unwrap();
        }
    }

    graph
}

fn create_dense_graph(n: usize, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::new(n);

    // ~n^1.5 edges
    let num_edges = ((n as f64).powf(1.5)) as usize;

    for _ in 0..num_edges {
        let from = rng.gen_range(0..n);
        let to = rng.gen_range(0..n);
        if from != to {
            let weight = rng.gen_range(0.1..20.0);
            graph.add_edge(from, to, weight).unwrap();
        }
    }

    graph
}

fn convert_to_petgraph(graph: &Graph) -> UnGraph<(), f64> {
    let mut pg = UnGraph::new_undirected();
    for _ in 0..graph.vertices {
        pg.add_node(());
    }
    for (from, adj) in graph.edges.iter().enumerate() {
        for edge in adj {
            if from <= edge.to {
                pg.add_edge(NodeIndex::new(from), NodeIndex::new(edge.to), edge.weight);
            }
        }
    }
    pg
}

fn bench_scan_vs_petgraph(c: &mut Criterion) {
    let mut group = c.benchmark_group("SSSP Algorithms");

    let sizes = vec![50, 100, 200, 400];

    for &n in &sizes {
        let sparse_graph = create_sparse_graph(n, 2.0, 42);
        let petgraph_graph = convert_to_petgraph(&sparse_graph);

        group.bench_with_input(BenchmarkId::new("ArrayScan_Sparse", n), &n, |b, &_| {
            let solver = ScanSolver::new(sparse_graph.clone());
            b.iter(|| black_box(solver.solve_all(0).unwrap()))
        });

        group.bench_with_input(BenchmarkId::new("Petgraph_Sparse", n), &n, |b, &_| {
            b.iter(|| {
                black_box(dijkstra(&petgraph_graph, NodeIndex::new(0), None, |e| {
                    *e.weight()
                }))
            })
        });
    }

    for &n in &[50, 100, 200] {
        let dense_graph = create_dense_graph(n, 42);
        let petgraph_graph = convert_to_petgraph(&dense_graph);

        group.bench_with_input(BenchmarkId::new("ArrayScan_Dense", n), &n, |b, &_| {
            let solver = ScanSolver::new(dense_graph.clone());
            b.iter(|| black_box(solver.solve_all(0).unwrap()))
        });

        group.bench_with_input(BenchmarkId::new("Petgraph_Dense", n), &n, |b, &_| {
            b.iter(|| {
                black_box(dijkstra(&petgraph_graph, NodeIndex::new(0), None, |e| {
                    *e.weight()
                }))
            })
        });
    }

    group.finish();
}

fn bench_scaling_behavior(c: &mut Criterion) {
    let mut group = c.benchmark_group("Scaling Behavior");

    let sizes = vec![100, 200, 400, 800];

    for &n in &sizes {
        let graph = create_sparse_graph(n, 1.5, 123);

        group.bench_with_input(BenchmarkId::new("ArrayScan_Scaling", n), &n, |b, &_| {
            let solver = ScanSolver::new(graph.clone());
            b.iter(|| black_box(solver.solve_all(0).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scan_vs_petgraph, bench_scaling_behavior);
criterion_main!(benches);
