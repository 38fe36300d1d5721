//! Benchmarks comparing the search variants against each other and against
//! the standard library's `slice::binary_search`.
//!
//! Targets are chosen for the worst case of each engine: the final element
//! for linear scans (full traversal), an absent mid-range value for binary
//! probing (full interval narrowing).
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hayseek::{binary, linear};

/// Input sizes spanning cache-resident to comfortably larger-than-cache.
const SIZES: &[usize] = &[16, 256, 4_096, 65_536];

/// Even values only, so every odd target is an absent mid-range value.
fn sorted_input(len: usize) -> Vec<u64> {
    (0..len as u64).map(|value| value * 2).collect()
}

fn bench_linear(c: &mut Criterion) {
    let mut group = c.benchmark_group("linear");
    for &len in SIZES {
        let data = sorted_input(len);
        let worst_case = *data.last().expect("non-empty input");

        group.bench_with_input(BenchmarkId::new("iterative", len), &data, |b, data| {
            b.iter(|| linear::iterative(black_box(data), black_box(&worst_case)));
        });

        group.bench_with_input(BenchmarkId::new("recursive", len), &data, |b, data| {
            b.iter(|| linear::recursive(black_box(data), black_box(&worst_case)));
        });

        // The sentinel variant mutates, so each iteration gets a fresh copy.
        group.bench_with_input(BenchmarkId::new("sentinel", len), &data, |b, data| {
            b.iter_batched(
                || data.clone(),
                |mut scratch| linear::sentinel(black_box(&mut scratch), black_box(&worst_case)),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_binary(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary");
    for &len in SIZES {
        let data = sorted_input(len);
        // SIZES are even, so len - 1 is odd and absent from the even-only input.
        let absent = len as u64 - 1;

        group.bench_with_input(BenchmarkId::new("closed_interval", len), &data, |b, data| {
            b.iter(|| binary::closed_interval(black_box(data), black_box(&absent)));
        });

        group.bench_with_input(BenchmarkId::new("open_interval", len), &data, |b, data| {
            b.iter(|| binary::open_interval(black_box(data), black_box(&absent)));
        });

        group.bench_with_input(BenchmarkId::new("recursive", len), &data, |b, data| {
            b.iter(|| binary::recursive(black_box(data), black_box(&absent)));
        });

        group.bench_with_input(BenchmarkId::new("exponential", len), &data, |b, data| {
            b.iter(|| binary::exponential(black_box(data), black_box(&absent)));
        });

        group.bench_with_input(BenchmarkId::new("lower_bound", len), &data, |b, data| {
            b.iter(|| binary::lower_bound(black_box(data), black_box(&absent)));
        });

        group.bench_with_input(BenchmarkId::new("std_baseline", len), &data, |b, data| {
            b.iter(|| black_box(data).binary_search(black_box(&absent)));
        });
    }
    group.finish();
}

fn bench_exponential_front_bias(c: &mut Criterion) {
    let mut group = c.benchmark_group("exponential_front_bias");
    let data = sorted_input(65_536);
    // Targets near the front are where exponential search earns its keep.
    for &position in &[4usize, 64, 1_024] {
        let target = data[position];
        group.bench_with_input(
            BenchmarkId::new("exponential", position),
            &data,
            |b, data| {
                b.iter(|| binary::exponential(black_box(data), black_box(&target)));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("closed_interval", position),
            &data,
            |b, data| {
                b.iter(|| binary::closed_interval(black_box(data), black_box(&target)));
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_linear,
    bench_binary,
    bench_exponential_front_bias
);
criterion_main!(benches);
