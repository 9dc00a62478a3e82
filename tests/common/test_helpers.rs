//! Helper functions for integration tests

#![allow(dead_code)]

use heat_rs::grid::Grid;
use heat_rs::stepper::{Simulation, SimulationConfiguration, SimulationResult, Stepper, StepperKind};

/// Assert that two grids have the same side and agree cell by cell
pub fn assert_grids_close(a: &Grid, b: &Grid, tolerance: f64, message: &str) {
    assert_eq!(a.size(), b.size(), "{}: size mismatch", message);

    for (i, j, expected) in a.cells() {
        let actual = b[(i, j)];
        let diff = (actual - expected).abs();
        assert!(
            diff <= tolerance,
            "{}: cell ({}, {}) differs by {} (tolerance {})",
            message, i, j, diff, tolerance
        );
    }
}

/// One advance of `state` with every stepper kind, in `StepperKind::ALL` order
pub fn advance_all(state: &Grid, epsilon: f64) -> Vec<(StepperKind, Grid)> {
    StepperKind::ALL
        .iter()
        .map(|kind| {
            let stepper = kind.create(state.size()).unwrap();
            (*kind, stepper.advance(state, epsilon).unwrap())
        })
        .collect()
}

/// Run a whole simulation with one stepper kind
pub fn run_with(kind: StepperKind, initial: &Grid, config: &SimulationConfiguration) -> SimulationResult {
    let stepper = kind.create(config.grid_size).unwrap();
    Simulation::new(stepper, initial.clone()).run(config).unwrap()
}
