//! Criterion benchmarks for the tour pipeline.
//!
//! Uses seeded random point clouds over a mid-latitude region so runs are
//! comparable across machines.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_geotour::construct::nearest_neighbor;
use u_geotour::distance::DistanceMatrix;
use u_geotour::geo::Point;
use u_geotour::two_opt::{Evaluation, TwoOptConfig, TwoOptRunner};

fn random_points(n: usize, seed: u64) -> Vec<Point<usize>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|k| Point::new(k, rng.random_range(40.0..50.0), rng.random_range(0.0..15.0)))
        .collect()
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_distance_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance_matrix");
    group.sample_size(10);

    for &n in &[100, 500, 1000] {
        let points = random_points(n, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &points, |b, pts| {
            b.iter(|| black_box(DistanceMatrix::compute(black_box(pts))))
        });
    }
    group.finish();
}

fn bench_nearest_neighbor(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_neighbor");
    group.sample_size(10);

    for &n in &[100, 500, 1000] {
        let dm = DistanceMatrix::compute(&random_points(n, 42));
        group.bench_with_input(BenchmarkId::from_parameter(n), &dm, |b, dm| {
            b.iter(|| black_box(nearest_neighbor(black_box(dm))))
        });
    }
    group.finish();
}

fn bench_two_opt(c: &mut Criterion) {
    let mut group = c.benchmark_group("two_opt");
    group.sample_size(10);

    for (n, evaluation) in [
        (50usize, Evaluation::FullRecompute),
        (50, Evaluation::Incremental),
        (200, Evaluation::Incremental),
        (500, Evaluation::Incremental),
    ] {
        let dm = DistanceMatrix::compute(&random_points(n, 7));
        let start = nearest_neighbor(&dm);
        let config = TwoOptConfig::default().with_evaluation(evaluation);
        group.bench_with_input(
            BenchmarkId::new(format!("{evaluation:?}"), n),
            &(dm, start, config),
            |b, (dm, start, config)| {
                b.iter(|| {
                    let result = TwoOptRunner::run(start.clone(), black_box(dm), black_box(config));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_distance_matrix, bench_nearest_neighbor, bench_two_opt);
criterion_main!(benches);
