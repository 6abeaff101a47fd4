//! Criterion benchmarks for the monotone chain.
//! Focus sizes: n in {10, 100, 1000, 10000} uniform points in the unit square.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hull2::prelude::*;

fn cloud(n: usize, seed: u64) -> Vec<Vec2<f64>> {
    uniform_points(n, SampleBox::default(), ReplayToken { seed, index: n as u64 })
}

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull2");
    let exact = HullCfg {
        predicate: Predicate::Exact,
        ..HullCfg::default()
    };
    let keep = HullCfg {
        collinear: CollinearPolicy::Keep,
        ..HullCfg::default()
    };
    for &n in &[10usize, 100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("fast_drop", n), &n, |b, &n| {
            b.iter_batched(
                || cloud(n, 43),
                |pts| {
                    let _h = compute_hull(&pts).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("exact_drop", n), &n, |b, &n| {
            b.iter_batched(
                || cloud(n, 44),
                |pts| {
                    let _h = compute_hull_with(&pts, exact).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("fast_keep", n), &n, |b, &n| {
            b.iter_batched(
                || cloud(n, 45),
                |pts| {
                    let _h = compute_hull_with(&pts, keep).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hull);
criterion_main!(benches);
