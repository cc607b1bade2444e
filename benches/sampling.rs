//! Performance measurement for Hamiltonian path sampling at varying grid sizes

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fractalwalk::algorithm::sampler::sample_path;
use fractalwalk::spatial::{Point, Region};
use rand::{SeedableRng, rngs::StdRng};
use std::hint::black_box;

/// Measures unconstrained sampling cost as the region grows
fn bench_sample_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_path");

    for size in &[4, 6, 8] {
        let Ok(region) = Region::new(*size, *size, Point::new(0, 0)) else {
            group.finish();
            return;
        };

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            let mut rng = StdRng::seed_from_u64(12345);
            b.iter(|| {
                let path = sample_path(&region, Point::new(0, 0), &[], &mut rng);
                black_box(path)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sample_path);
criterion_main!(benches);
