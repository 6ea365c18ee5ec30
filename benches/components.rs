use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use lazy_components::generate::{cycle_graph, path_graph, random_graph};

fn bench_random_graphs(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_graph_components");
    let mut rng = StdRng::seed_from_u64(42);

    for &n in [100usize, 500, 1000].iter() {
        for &p in [0.01f64, 0.1, 0.5].iter() {
            let graph = random_graph(n, p, &mut rng);
            let id = BenchmarkId::new(format!("p={}", p), n);
            group.bench_with_input(id, &graph, |b, graph| {
                b.iter(|| black_box(graph.find_connected_components().unwrap()))
            });
        }
    }
    group.finish();
}

fn bench_sparse_shapes(c: &mut Criterion) {
    let size = 100_000;

    let ring = cycle_graph(size);
    c.bench_function("ring_components", |b| {
        b.iter(|| black_box(ring.find_connected_components().unwrap()))
    });

    // a single deep DFS path
    let chain = path_graph(size);
    c.bench_function("chain_components", |b| {
        b.iter(|| black_box(chain.find_connected_components().unwrap()))
    });
}

criterion_group!(benches, bench_random_graphs, bench_sparse_shapes);
criterion_main!(benches);
