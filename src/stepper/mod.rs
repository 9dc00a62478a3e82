//! Time steppers
//!
//! This module advances a [`Grid`](crate::grid::Grid) through time with the
//! explicit five-point scheme
//!
//! ```text
//! u_{k+1} = u_k + ε · L u_k
//! ```
//!
//! # Core Concepts
//!
//! 1. **Stepper** (`Stepper` trait) - one timestep, pure
//!    - `advance(state, epsilon) -> next state`
//!    - Dense, sparse and stencil backends, interchangeable
//!
//! 2. **Configuration** (`SimulationConfiguration`) - what stays fixed
//!    - Grid side, ε, number of steps, snapshot interval
//!
//! 3. **Simulation** (`Simulation`) - the caller's loop, packaged
//!    - Threads the grid through repeated advances
//!    - Returns snapshots and the final grid
//!
//! # Quick Start Example
//!
//! ```rust
//! use heat_rs::grid::HeatSource;
//! use heat_rs::stepper::{Simulation, SimulationConfiguration, StepperKind};
//!
//! let config = SimulationConfiguration::new(31, 0.2, 100).with_snapshot_interval(25);
//! let initial = HeatSource::centered_point(1.0).apply_to(config.grid_size).unwrap();
//!
//! let stepper = StepperKind::Sparse.create(config.grid_size).unwrap();
//! let result = Simulation::new(stepper, initial).run(&config).unwrap();
//!
//! assert_eq!(result.len(), 5);
//! assert!(result.final_state.is_finite());
//! ```
//!
//! # Stability
//!
//! The scheme is bounded only for `ε ≤ 1/4` ([`STABILITY_BOUND`]). Nothing in
//! this module clamps or rejects a larger ε: the caller picks the coefficient,
//! and a too-large one shows up as unbounded growth, not as an error. The
//! simulation runner logs a warning when it sees one.
//!
//! # Error Handling
//!
//! Every operation returns `Result<T, HeatError>`:
//! - `Shape`: grid side differs from the operator's N
//! - `InvalidConfiguration`: N = 0, ε not positive and finite, zero steps

// =================================================================================================
// Module Declarations
// =================================================================================================
mod traits;
mod configuration;
mod simulation;
pub mod methods;

// =================================================================================================
// Parallel Execution Threshold
// =================================================================================================
//
// Stored in an AtomicUsize so benches and tests can change it at runtime
// without a lock on every sweep. Relaxed ordering: it is a performance hint,
// not a synchronisation point.
// =================================================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

/// Largest ε for which the explicit 2D five-point scheme stays bounded
pub const STABILITY_BOUND: f64 = 0.25;

/// Default number of cells above which the stencil sweep goes parallel.
const DEFAULT_PARALLEL_THRESHOLD: usize = 999;

static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Return the current parallel-execution threshold.
///
/// The stencil stepper sweeps the grid sequentially when it has at most this
/// many cells, and splits the sweep across rayon above it, but only when the
/// crate is compiled with the `parallel` feature.
///
/// # Example
///
/// ```rust
/// use heat_rs::stepper::parallel_threshold;
///
/// assert!(parallel_threshold() > 0);
/// ```
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Set the parallel-execution threshold to a new value.
///
/// # Panics
///
/// Panics when `threshold == 0`.
///
/// # Example
///
/// ```rust
/// use heat_rs::stepper::{parallel_threshold, set_parallel_threshold};
///
/// let previous = parallel_threshold();
/// set_parallel_threshold(2048);
/// assert_eq!(parallel_threshold(), 2048);
///
/// set_parallel_threshold(previous);
/// ```
pub fn set_parallel_threshold(threshold: usize) {
    assert!(threshold > 0, "parallel threshold must be at least 1");
    PARALLEL_THRESHOLD.store(threshold, Ordering::Relaxed);
}

#[cfg(test)]
static THRESHOLD_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Saves the threshold on construction and restores it on drop.
///
/// Test builds only. Holds a lock for its lifetime so tests that tune the
/// threshold run one at a time.
#[cfg(test)]
pub(crate) struct ThresholdGuard {
    previous: usize,
    _lock: std::sync::MutexGuard<'static, ()>,
}

#[cfg(test)]
impl ThresholdGuard {
    pub(crate) fn save(new_value: usize) -> Self {
        let lock = THRESHOLD_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let previous = parallel_threshold();
        set_parallel_threshold(new_value);
        Self { previous, _lock: lock }
    }
}

#[cfg(test)]
impl Drop for ThresholdGuard {
    fn drop(&mut self) {
        PARALLEL_THRESHOLD.store(self.previous, Ordering::Relaxed);
    }
}

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use traits::{Stepper, StepperKind};
pub use configuration::SimulationConfiguration;
pub use simulation::{Simulation, SimulationResult};

pub use methods::{
    DenseStepper,
    SparseStepper,
    StencilStepper,
    advance_matvec,
    advance_matvec_sparse,
    advance_stencil,
};

// =================================================================================================
// Tests
// =================================================================================================
