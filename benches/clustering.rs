use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kmeans2d::{run_lloyd, ClusterSet, KMParams, Point};
use rand::prelude::*;

fn bench_lloyd(c: &mut Criterion) {
    let mut group = c.benchmark_group("lloyd");

    let mut rng = StdRng::seed_from_u64(42);
    let points: Vec<Point> = (0..1000)
        .map(|_| Point::new(rng.gen_range(-30.0..30.0), rng.gen_range(-30.0..30.0)))
        .collect();
    let params = KMParams {
        clusters: None,
        max_iterations: 10,
        epsilon: 0.01,
        fixed_iterations: true,
        seed: None,
    };

    group.bench_function("run_n1000_k8_iter10", |b| {
        b.iter(|| {
            let mut pts = points.clone();
            let mut clusters = ClusterSet::initialize(8, &mut StdRng::seed_from_u64(7));
            run_lloyd(black_box(&mut pts), &mut clusters, &params);
        })
    });

    group.finish();
}

criterion_group!(benches, bench_lloyd);
criterion_main!(benches);
