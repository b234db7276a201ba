//! Criterion benchmarks for the arrangement and face walk stages.
//! Inputs: n random grid segments inside a 16x16 square, n in {8, 16, 32, 64}.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use silhouette::api::*;

fn random_segments(n: usize, seed: u64) -> Vec<Segment> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut segs = Vec::with_capacity(n);
    while segs.len() < n {
        let a = Point::from_ints(rng.gen_range(0..=16), rng.gen_range(0..=16));
        let b = Point::from_ints(rng.gen_range(0..=16), rng.gen_range(0..=16));
        if a != b {
            segs.push(Segment::new(a, b));
        }
    }
    segs
}

fn square16() -> Polygon {
    vec![
        Point::from_ints(0, 0),
        Point::from_ints(16, 0),
        Point::from_ints(16, 16),
        Point::from_ints(0, 16),
    ]
}

fn bench_arrangement(c: &mut Criterion) {
    let mut group = c.benchmark_group("arrangement");
    for &n in &[8usize, 16, 32, 64] {
        group.bench_with_input(BenchmarkId::new("build_arrangement", n), &n, |b, &n| {
            b.iter_batched(
                || random_segments(n, 41),
                |segs| {
                    let _arr = build_arrangement(&segs).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("enumerate_regions", n), &n, |b, &n| {
            b.iter_batched(
                || build_arrangement(&random_segments(n, 42)).unwrap(),
                |arr| {
                    let _regions = enumerate_regions(&arr).unwrap();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("run", n), &n, |b, &n| {
            b.iter_batched(
                || random_segments(n, 43),
                |segs| {
                    let _out = run(vec![square16()], segs, PipelineCfg::default()).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_arrangement);
criterion_main!(benches);
