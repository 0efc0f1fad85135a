//! Benchmark for exotic function pipelines.
//!
//! Compares direct calls with the same computation expressed through the
//! builder, operators and combinators.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use exotic_functions::compose::{Callable, apply, exotic, unpack};
use std::hint::black_box;

fn add(first: u64, second: u64) -> u64 {
    first.wrapping_add(second)
}

fn double(value: u64) -> u64 {
    value.wrapping_mul(2)
}

fn increment(value: u64) -> u64 {
    value.wrapping_add(1)
}

// =============================================================================
// Composition Benchmarks
// =============================================================================

fn benchmark_composition(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("composition");

    group.bench_function("direct_call", |bencher| {
        bencher.iter(|| increment(double(add(black_box(3), black_box(4)))));
    });

    let pipeline = exotic % increment / double / add;
    group.bench_function("exotic_invoke", |bencher| {
        bencher.iter(|| pipeline.invoke((black_box(3), black_box(4))));
    });

    group.bench_function("exotic_build_and_apply", |bencher| {
        bencher.iter(|| exotic % increment / double / add * black_box(3) | apply << black_box(4));
    });

    group.finish();
}

// =============================================================================
// Chain Depth Benchmarks
// =============================================================================

fn benchmark_chain_depth(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("chain_depth");

    let depth_two = exotic % increment / increment;
    let depth_four = depth_two / increment / increment;
    let depth_eight = depth_four / increment / increment / increment / increment;

    group.bench_with_input(BenchmarkId::new("invoke", 2), &depth_two, |bencher, pipeline| {
        bencher.iter(|| pipeline.invoke((black_box(0),)));
    });
    group.bench_with_input(BenchmarkId::new("invoke", 4), &depth_four, |bencher, pipeline| {
        bencher.iter(|| pipeline.invoke((black_box(0),)));
    });
    group.bench_with_input(BenchmarkId::new("invoke", 8), &depth_eight, |bencher, pipeline| {
        bencher.iter(|| pipeline.invoke((black_box(0),)));
    });

    group.finish();
}

// =============================================================================
// Unpack Benchmarks
// =============================================================================

fn benchmark_unpack(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("unpack");

    group.bench_function("unpack_array_and_apply", |bencher| {
        bencher.iter(|| exotic % add | unpack >> black_box([1, 2]) | apply);
    });

    let bound = exotic % add | unpack >> [1, 2];
    group.bench_function("invoke_bound", |bencher| {
        bencher.iter(|| black_box(&bound).invoke(()));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_composition,
    benchmark_chain_depth,
    benchmark_unpack
);
criterion_main!(benches);
