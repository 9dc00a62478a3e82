//! Agreement tests between the dense, sparse and stencil steppers
//!
//! Every backend computes `u + ε·L u` with zero Dirichlet edges. These tests
//! check the three against each other and against properties of the exact
//! update (linearity, fixed point, boundary behaviour).

use approx::assert_relative_eq;
use heat_rs::grid::{Grid, HeatSource};
use heat_rs::operator::{GridOperator, GridOperatorBuilder, OperatorKind};
use heat_rs::stepper::{
    advance_matvec, advance_matvec_sparse, advance_stencil, DenseStepper, SimulationConfiguration,
    SparseStepper, Stepper, StepperKind,
};
use heat_rs::HeatError;

mod common;
use common::{advance_all, assert_grids_close, centred_spike, checkerboard, corner_spike, ramp, run_with};

// =================================================================================================
// Single-step agreement
// =================================================================================================

#[test]
fn test_three_steppers_agree_on_fixed_grid() {
    let u0 = ramp(5);
    let results = advance_all(&u0, 0.2);
    let (_, reference) = &results[2];

    for (kind, grid) in &results {
        assert_grids_close(reference, grid, 1e-9, kind.name());
    }
}

#[test]
fn test_three_steppers_agree_on_rough_grid() {
    // Pseudo-random but reproducible field in [-1, 1)
    let u0 = Grid::from_fn(7, |i, j| {
        let k = (i * 7 + j) as u64;
        let hashed = k.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407) >> 33;
        (hashed % 2000) as f64 / 1000.0 - 1.0
    })
    .unwrap();

    for epsilon in [0.05, 0.2, 0.25] {
        let results = advance_all(&u0, epsilon);
        for (kind, grid) in &results[..2] {
            assert_grids_close(&results[2].1, grid, 1e-9, kind.name());
        }
    }
}

#[test]
fn test_free_functions_match_steppers() {
    let n = 6;
    let u0 = checkerboard(n);
    let builder = GridOperatorBuilder::new(n).unwrap();

    let dense = advance_matvec(&builder.dense(), &u0, 0.2).unwrap();
    let sparse_flat = advance_matvec_sparse(&builder.sparse(), &u0.flatten(), 0.2).unwrap();
    let sparse = Grid::from_flattened(n, &sparse_flat).unwrap();
    let stencil = advance_stencil(&u0, 0.2).unwrap();

    assert_eq!(dense, DenseStepper::new(n).unwrap().advance(&u0, 0.2).unwrap());
    assert_eq!(sparse, SparseStepper::new(n).unwrap().advance(&u0, 0.2).unwrap());
    assert_grids_close(&stencil, &dense, 1e-12, "dense");
    assert_grids_close(&stencil, &sparse, 1e-12, "sparse");
}

// =================================================================================================
// Properties of the update
// =================================================================================================

#[test]
fn test_zero_grid_is_fixed_point() {
    for n in [1, 2, 3, 8] {
        let zero = Grid::zeros(n).unwrap();
        for epsilon in [0.01, 0.25, 3.0] {
            for (kind, grid) in advance_all(&zero, epsilon) {
                assert_eq!(grid, zero, "{} n = {} epsilon = {}", kind, n, epsilon);
            }
        }
    }
}

#[test]
fn test_boundary_isolation_three_by_three() {
    let epsilon = 0.2;
    let u0 = centred_spike(3);
    assert_eq!(u0[(1, 1)], 1.0);

    for (kind, u1) in advance_all(&u0, epsilon) {
        for corner in [(0, 0), (0, 2), (2, 0), (2, 2)] {
            assert_eq!(u1[corner], 0.0, "{} corner {:?}", kind, corner);
        }
        for edge in [(0, 1), (1, 0), (1, 2), (2, 1)] {
            assert_relative_eq!(u1[edge], epsilon, epsilon = 1e-15);
        }
        assert_relative_eq!(u1[(1, 1)], 1.0 - 4.0 * epsilon, epsilon = 1e-15);
    }
}

#[test]
fn test_no_wrap_around_four_by_four() {
    let u0 = corner_spike(4);

    for (kind, u1) in advance_all(&u0, 0.25) {
        assert_eq!(u1[(0, 3)], 0.0, "{} wrapped along the row", kind);
        assert_eq!(u1[(3, 0)], 0.0, "{} wrapped along the column", kind);
        assert_eq!(u1[(3, 3)], 0.0, "{} wrapped diagonally", kind);
        assert_relative_eq!(u1[(0, 1)], 0.25);
        assert_relative_eq!(u1[(1, 0)], 0.25);
    }
}

#[test]
fn test_row_end_does_not_leak_into_next_row() {
    // (0, N-1) and (1, 0) are adjacent in the flattened vector but not on the grid.
    let n = 5;
    let u0 = HeatSource::point(0, n - 1, 1.0).apply_to(n).unwrap();

    for (kind, u1) in advance_all(&u0, 0.2) {
        assert_eq!(u1[(1, 0)], 0.0, "{}", kind);
        assert_relative_eq!(u1[(1, n - 1)], 0.2);
    }
}

#[test]
fn test_linearity_in_initial_grid() {
    let u0 = ramp(6);
    let scale = 3.5;

    for kind in StepperKind::ALL {
        let stepper = kind.create(6).unwrap();
        let scaled_then_advanced = stepper.advance(&(u0.clone() * scale), 0.2).unwrap();
        let advanced_then_scaled = stepper.advance(&u0, 0.2).unwrap() * scale;

        assert_grids_close(&advanced_then_scaled, &scaled_then_advanced, 1e-12, kind.name());
    }
}

// =================================================================================================
// Shape validation
// =================================================================================================

#[test]
fn test_non_square_array_rejected() {
    let cells = ndarray::Array2::<f64>::zeros((4, 5));
    assert!(matches!(Grid::from_array(cells), Err(HeatError::Shape { .. })));
}

#[test]
fn test_operator_size_mismatch_rejected() {
    let u0 = centred_spike(5);

    let dense = DenseStepper::new(4).unwrap();
    assert!(matches!(dense.advance(&u0, 0.2), Err(HeatError::Shape { .. })));

    let sparse = SparseStepper::new(6).unwrap();
    assert!(matches!(sparse.advance(&u0, 0.2), Err(HeatError::Shape { .. })));

    let operator = GridOperatorBuilder::new(4).unwrap().sparse();
    assert!(matches!(
        advance_matvec_sparse(&operator, &u0.flatten(), 0.2),
        Err(HeatError::Shape { .. })
    ));
    assert!(matches!(
        advance_matvec(&GridOperatorBuilder::new(4).unwrap().dense(), &u0, 0.2),
        Err(HeatError::Shape { .. })
    ));
}

// =================================================================================================
// Operators and whole runs
// =================================================================================================

#[test]
fn test_dense_and_sparse_operators_densify_equal() {
    for n in [1, 2, 3, 5, 9] {
        let builder = GridOperatorBuilder::new(n).unwrap();
        let dense = builder.build(OperatorKind::Dense);
        let sparse = builder.build(OperatorKind::Sparse);

        assert_eq!(dense.to_dense(), sparse.to_dense(), "n = {}", n);
        assert_eq!(dense.nnz(), sparse.nnz(), "n = {}", n);
        assert_eq!(dense.dimension(), n * n);
    }
}

#[test]
fn test_multi_step_runs_agree() {
    let config = SimulationConfiguration::new(12, 0.2, 60).with_snapshot_interval(20);
    let initial = centred_spike(12);

    let stencil = run_with(StepperKind::Stencil, &initial, &config);
    for kind in [StepperKind::Dense, StepperKind::Sparse] {
        let other = run_with(kind, &initial, &config);
        assert_eq!(other.len(), stencil.len());
        for ((step_a, a), (step_b, b)) in stencil.snapshots.iter().zip(other.snapshots.iter()) {
            assert_eq!(step_a, step_b);
            assert_grids_close(a, b, 1e-9, &format!("{} at step {}", kind, step_a));
        }
    }
}
