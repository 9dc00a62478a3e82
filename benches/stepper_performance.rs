//! Performance benchmarks for the single-step backends
//!
//! Compares the dense, sparse and stencil steppers on identical grids.
//!
//! # What We're Measuring
//!
//! 1. **Dense matvec**: full N²×N² product
//!    - O(N⁴) work and memory per step
//!    - Only practical for small N
//!
//! 2. **Sparse matvec**: CSR product, at most 5 entries per row
//!    - O(N²) work per step
//!
//! 3. **Stencil**: four-neighbour combine, no operator
//!    - O(N²) work per step, no indirection
//!    - Parallel `Zip` sweep with `--features parallel` above the threshold
//!
//! # Expected Results
//!
//! Dense time grows by ~16× when N doubles; sparse and stencil by ~4×.
//! The stencil beats the sparse product by a constant factor (no index
//! loads).
//!
//! # Running Benchmarks
//!
//! ```bash
//! # All stepper benchmarks
//! cargo bench --bench stepper_performance
//!
//! # Stencil with the rayon fast path
//! cargo bench --bench stepper_performance --features parallel stencil
//!
//! # Whole runs of the classic configuration
//! cargo bench --bench stepper_performance comparison
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use std::time::Duration;

use heat_rs::grid::{Grid, HeatSource};
use heat_rs::stepper::{Simulation, SimulationConfiguration, Stepper, StepperKind};

const EPSILON: f64 = 0.2;

fn initial_grid(n: usize) -> Grid {
    HeatSource::centered_point(1.0).apply_to(n).unwrap()
}

// =================================================================================================
// Benchmark Functions
// =================================================================================================

/// One advance per stepper across grid sizes
///
/// Dense stops at N = 40 (a 1600×1600 matrix is already 20 MB).
fn benchmark_single_step(c: &mut Criterion) {
    let sizes: [(StepperKind, &[usize]); 3] = [
        (StepperKind::Dense, &[10, 20, 40]),
        (StepperKind::Sparse, &[10, 20, 40, 101, 200]),
        (StepperKind::Stencil, &[10, 20, 40, 101, 200]),
    ];

    for (kind, grid_sizes) in sizes {
        let mut group = c.benchmark_group(format!("Single step {}", kind.name()));

        for &n in grid_sizes {
            // Setup (not measured): operator assembly happens here
            let stepper = kind.create(n).unwrap();
            let grid = initial_grid(n);

            group.throughput(Throughput::Elements((n * n) as u64));
            group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
                b.iter(|| stepper.advance(black_box(&grid), black_box(EPSILON)).unwrap());
            });
        }

        group.finish();
    }
}

/// Operator assembly cost, dense against sparse
fn benchmark_operator_assembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("Operator assembly");

    for n in [10, 20, 40] {
        group.bench_with_input(BenchmarkId::new("dense", n), &n, |b, &n| {
            b.iter(|| StepperKind::Dense.create(black_box(n)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("sparse", n), &n, |b, &n| {
            b.iter(|| StepperKind::Sparse.create(black_box(n)).unwrap());
        });
    }

    group.finish();
}

/// Whole runs: the classic 101×101 configuration with the O(N²) steppers
fn benchmark_stepper_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("Stepper comparison");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(20));

    let config = SimulationConfiguration::classic();
    let cells = (config.grid_size * config.grid_size * config.time_steps) as u64;

    for kind in [StepperKind::Sparse, StepperKind::Stencil] {
        let simulation = Simulation::new(
            kind.create(config.grid_size).unwrap(),
            initial_grid(config.grid_size),
        );

        group.throughput(Throughput::Elements(cells));
        group.bench_function(
            format!("{} {} steps on {}x{}", kind.name(), config.time_steps, config.grid_size, config.grid_size),
            |b| {
                b.iter(|| simulation.run(black_box(&config)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_step,
    benchmark_operator_assembly,
    benchmark_stepper_comparison,
);
criterion_main!(benches);
