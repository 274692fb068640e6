//! Quadratic fit benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability (10 to 1M samples)
//! - Precision (f32 vs f64)
//! - Store reuse (clear and refill vs fresh allocation)
//! - Diagnostics overhead
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use quadfit::prelude::*;
use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use std::hint::black_box;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate noisy samples of y = 1.23·x² − 9.87·x + 0.01 on [-1, 1).
fn generate_quadratic_data(size: usize, seed: u64) -> Vec<(f64, f64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let x_dist = Uniform::new(-1.0, 1.0).unwrap();
    let noise_dist = Normal::new(0.0, 0.05).unwrap();

    (0..size)
        .map(|_| {
            let x: f64 = x_dist.sample(&mut rng);
            let y = 1.23 * x * x - 9.87 * x + 0.01 + noise_dist.sample(&mut rng);
            (x, y)
        })
        .collect()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalability");
    group.sample_size(50);

    for size in [10, 1_000, 100_000, 1_000_000] {
        group.throughput(Throughput::Elements(size as u64));

        let fit: QuadraticFit<f64> = generate_quadratic_data(size, 42).into_iter().collect();

        group.bench_with_input(BenchmarkId::new("compute", size), &size, |b, _| {
            b.iter(|| black_box(&fit).compute())
        });
    }
    group.finish();
}

fn bench_precision(c: &mut Criterion) {
    let mut group = c.benchmark_group("precision");

    let size = 100_000;
    let data = generate_quadratic_data(size, 42);
    let fit_f64: QuadraticFit<f64> = data.iter().copied().collect();
    let fit_f32: QuadraticFit<f32> = data.iter().map(|&(x, y)| (x as f32, y as f32)).collect();

    group.throughput(Throughput::Elements(size as u64));
    group.bench_function("f64", |b| b.iter(|| black_box(&fit_f64).compute()));
    group.bench_function("f32", |b| b.iter(|| black_box(&fit_f32).compute()));
    group.finish();
}

fn bench_store_reuse(c: &mut Criterion) {
    let mut group = c.benchmark_group("store_reuse");

    let size = 10_000;
    let data = generate_quadratic_data(size, 7);

    group.bench_function("fresh", |b| {
        b.iter(|| {
            let mut fit = QuadraticFit::new();
            for &(x, y) in &data {
                fit.add(x, y);
            }
            fit.compute()
        })
    });

    group.bench_function("with_capacity", |b| {
        b.iter(|| {
            let mut fit = QuadraticFit::with_capacity(size);
            for &(x, y) in &data {
                fit.add(x, y);
            }
            fit.compute()
        })
    });

    let mut reused = QuadraticFit::with_capacity(size);
    group.bench_function("clear_and_refill", |b| {
        b.iter(|| {
            reused.clear();
            for &(x, y) in &data {
                reused.add(x, y);
            }
            reused.compute()
        })
    });
    group.finish();
}

fn bench_diagnostics(c: &mut Criterion) {
    let mut group = c.benchmark_group("diagnostics");

    let size = 100_000;
    let fit: QuadraticFit<f64> = generate_quadratic_data(size, 42).into_iter().collect();

    group.throughput(Throughput::Elements(size as u64));
    group.bench_function("coefficients", |b| b.iter(|| black_box(&fit).coefficients()));
    group.bench_function("diagnostics", |b| b.iter(|| black_box(&fit).diagnostics()));
    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_precision,
    bench_store_reuse,
    bench_diagnostics,
);

criterion_main!(benches);
