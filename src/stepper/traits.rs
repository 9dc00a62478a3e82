//! Stepper trait and kinds
//!
//! # Design Philosophy
//!
//! One capability, "advance the grid by one timestep", several backends.
//! `StepperKind` names the backends so callers can pick one at runtime, and
//! `Stepper` is the interface every backend implements.

use crate::error::{HeatError, Result};
use crate::grid::Grid;
use crate::stepper::methods::{DenseStepper, SparseStepper, StencilStepper};

// ============================================================================
// Stepper kinds
// ============================================================================

/// Available single-step backends
///
/// All three compute the same update
///
/// ```text
/// u' = u + ε · L u
/// ```
///
/// and differ only in how `L u` is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepperKind {
    /// Full N²×N² matrix-vector product
    Dense,

    /// CSR sparse matrix-vector product
    Sparse,

    /// Direct four-neighbour shift-and-combine, no operator
    Stencil,
}

impl StepperKind {
    /// Every backend, cheapest-to-build last
    pub const ALL: [StepperKind; 3] = [StepperKind::Dense, StepperKind::Sparse, StepperKind::Stencil];

    /// Get name identifier
    pub fn name(&self) -> &'static str {
        match self {
            StepperKind::Dense => "Dense matvec",
            StepperKind::Sparse => "Sparse matvec",
            StepperKind::Stencil => "Stencil",
        }
    }

    /// True when the backend builds an operator for a fixed N
    pub fn needs_operator(&self) -> bool {
        !matches!(self, StepperKind::Stencil)
    }

    /// Build a boxed stepper for side `n`
    ///
    /// # Errors
    ///
    /// `n == 0`.
    pub fn create(&self, n: usize) -> Result<Box<dyn Stepper>> {
        Ok(match self {
            StepperKind::Dense => Box::new(DenseStepper::new(n)?),
            StepperKind::Sparse => Box::new(SparseStepper::new(n)?),
            StepperKind::Stencil => {
                if n == 0 {
                    return Err(HeatError::config("grid size must be at least 1"));
                }
                Box::new(StencilStepper::new())
            }
        })
    }
}

impl std::fmt::Display for StepperKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// =================================================================================================
// Stepper trait
// =================================================================================================

/// Single-timestep advance of the 2D heat equation
///
/// # Contract
///
/// - Pure: the input grid is never mutated, a new grid is returned.
/// - No state is carried between calls besides the operator built at
///   construction, which is immutable.
/// - `epsilon` must be positive and finite. Values above the stability bound
///   (1/4) are accepted and will make the run diverge; that choice is left to
///   the caller.
///
/// # Errors
///
/// - [`HeatError::Shape`](crate::HeatError::Shape) when `state` does not match
///   the operator size
/// - [`HeatError::InvalidConfiguration`](crate::HeatError::InvalidConfiguration)
///   for a bad `epsilon`
pub trait Stepper: Send + Sync {
    /// Return the grid one timestep after `state`
    fn advance(&self, state: &Grid, epsilon: f64) -> Result<Grid>;

    /// Human-readable backend name
    fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Which backend this is
    fn kind(&self) -> StepperKind;

    /// Grid side this stepper is bound to, `None` if it accepts any size
    fn grid_size(&self) -> Option<usize>;
}
