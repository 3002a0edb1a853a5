//! Benchmarks for seed construction and single-point sampling across all noise functions.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use seednoise::{Seed, cell, noise_from_name, open_simplex2, perlin2, perlin3};

/// A fixed, non-lattice sample point; a registered function reads a prefix of it.
const POINT: [f64; 4] = [12.345, -6.789, 0.4321, 98.76];

/// Benchmark building the permutation table.
fn bench_seed(c: &mut Criterion) {
    c.bench_function("seed_new", |b| b.iter(|| Seed::new(black_box(1337))));
}

/// Benchmark a single sample through the registry, for every function.
fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample");
    let seed = Seed::new(1337);

    for name in seednoise::registry::NOISE_NAMES {
        let noise = noise_from_name(name).expect("registered noise");
        let coords = &POINT[..noise.dimension()];

        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            b.iter(|| noise.sample(&seed, black_box(coords)))
        });
    }

    group.finish();
}

/// Compare registry dispatch with calling the typed functions directly.
fn bench_direct(c: &mut Criterion) {
    let mut group = c.benchmark_group("direct");
    let seed = Seed::new(1337);

    group.bench_function("perlin2", |b| {
        b.iter(|| perlin2(&seed, black_box(&[POINT[0], POINT[1]])))
    });
    group.bench_function("perlin3", |b| {
        b.iter(|| perlin3(&seed, black_box(&[POINT[0], POINT[1], POINT[2]])))
    });
    group.bench_function("open_simplex2", |b| {
        b.iter(|| open_simplex2(&seed, black_box(&[POINT[0], POINT[1]])))
    });
    group.bench_function("cell4_features", |b| {
        b.iter(|| cell::features(&seed, black_box(&POINT), cell::Metric::Euclidean))
    });

    group.finish();
}

/// Benchmark filling a 2D grid, the common way a caller consumes noise.
fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid");
    let seed = Seed::new(1337);

    for name in ["perlin2", "open_simplex2", "cell2_range"] {
        let noise = noise_from_name(name).expect("registered noise");
        for size in [16u32, 64] {
            group.bench_function(BenchmarkId::new(name, size), |b| {
                b.iter(|| {
                    let mut total = 0.0;
                    for y in 0..size {
                        for x in 0..size {
                            let p = [f64::from(x) * 0.1, f64::from(y) * 0.1];
                            total += noise.sample(&seed, &p).unwrap_or(0.0);
                        }
                    }
                    black_box(total)
                })
            });
        }
    }

    group.finish();
}

#[allow(missing_docs, clippy::missing_docs_in_private_items)]
mod bench_defs {
    use super::*;
    criterion_group!(benches, bench_seed, bench_sample, bench_direct, bench_grid);
}

pub use bench_defs::benches;
criterion_main!(benches);
