//! Criterion benchmarks for whole-run execution and car placement.

use std::hint::black_box;

use autodrive_bench::{init_car_placements, reference_profile, stress_profile};
use autodrive_test_utils::fixtures;
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

/// Benchmark: run every fixture scenario to completion.
fn bench_fixture_runs(c: &mut Criterion) {
    c.bench_function("fixture_runs", |b| {
        b.iter_batched(
            fixtures::all,
            |scenarios| {
                for mut scenario in scenarios {
                    black_box(scenario.field.run());
                }
            },
            BatchSize::SmallInput,
        );
    });
}

/// Benchmark: full run of the 100x100 reference profile.
fn bench_reference_run(c: &mut Criterion) {
    c.bench_function("reference_run_200_cars", |b| {
        b.iter_batched(
            || reference_profile(42).expect("reference profile builds"),
            |mut field| black_box(field.run()),
            BatchSize::LargeInput,
        );
    });
}

/// Benchmark: full run of the 316x316 stress profile.
fn bench_stress_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("stress");
    group.sample_size(10);
    group.bench_function("stress_run_2000_cars", |b| {
        b.iter_batched(
            || stress_profile(42).expect("stress profile builds"),
            |mut field| black_box(field.run()),
            BatchSize::LargeInput,
        );
    });
    group.finish();
}

/// Benchmark: place 2000 cars on a 316x316 grid.
fn bench_placement(c: &mut Criterion) {
    c.bench_function("init_car_placements_2000", |b| {
        b.iter(|| black_box(init_car_placements(316 * 316, 2000, black_box(42))));
    });
}

criterion_group!(
    benches,
    bench_fixture_runs,
    bench_reference_run,
    bench_stress_run,
    bench_placement
);
criterion_main!(benches);
