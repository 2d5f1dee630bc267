//! Benchmarks for rate expression evaluation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hhkinetics_core::parallel::{par_coeffs, par_vtrap, ParallelConfig};
use hhkinetics_core::{coeffs, vtrap, vtrap_array};
use nalgebra::DVector;

fn voltage_grid(n: usize) -> Vec<f64> {
    (0..n).map(|i| -100.0 + 150.0 * (i as f64) / (n as f64)).collect()
}

fn benchmark_vtrap_scalar(c: &mut Criterion) {
    let mut group = c.benchmark_group("vtrap_scalar");

    group.bench_function("exact_branch", |bench| {
        bench.iter(|| black_box(vtrap(black_box(-25.0_f64), black_box(10.0))));
    });
    group.bench_function("linear_branch", |bench| {
        bench.iter(|| black_box(vtrap(black_box(1e-8_f64), black_box(10.0))));
    });

    group.finish();
}

fn benchmark_vtrap_bulk(c: &mut Criterion) {
    let mut group = c.benchmark_group("vtrap_bulk");

    for size in [100, 10_000, 1_000_000].iter() {
        let grid = voltage_grid(*size);
        let vector = DVector::from_vec(grid.clone());

        group.bench_with_input(BenchmarkId::new("nalgebra", size), size, |bench, _| {
            bench.iter(|| black_box(vtrap_array(&vector, 10.0)));
        });

        let config = ParallelConfig::default();
        group.bench_with_input(BenchmarkId::new("rayon", size), size, |bench, _| {
            bench.iter(|| black_box(par_vtrap(&grid, 10.0, &config)));
        });
    }

    group.finish();
}

fn benchmark_coeffs(c: &mut Criterion) {
    let mut group = c.benchmark_group("coeffs");
    let alpha = |v: f64| 0.01 * vtrap(-(v + 55.0), 10.0);
    let beta = |v: f64| 0.125 * (-(v + 65.0) / 80.0).exp();

    for size in [1_000, 100_000].iter() {
        let grid = voltage_grid(*size);
        let vector = DVector::from_vec(grid.clone());

        group.bench_with_input(BenchmarkId::new("sequential", size), size, |bench, _| {
            bench.iter(|| black_box(coeffs(&vector, |v| v.map(alpha), |v| v.map(beta))));
        });

        let config = ParallelConfig::default();
        group.bench_with_input(BenchmarkId::new("rayon", size), size, |bench, _| {
            bench.iter(|| black_box(par_coeffs(&grid, alpha, beta, &config)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_vtrap_scalar,
    benchmark_vtrap_bulk,
    benchmark_coeffs
);
criterion_main!(benches);
