//! Dense matrix-vector stepper
//!
//! # Mathematical Background
//!
//! With `u` flattened row-major into a vector of length N² and `A` the
//! five-point Laplacian, one explicit Euler step of the heat equation is
//!
//! ```text
//! u_{k+1} = u_k + ε · A u_k
//! ```
//!
//! # Characteristics
//!
//! - **Storage**: N⁴ doubles for `A`
//! - **Cost**: O(N⁴) per step
//! - **Use**: small grids and as the reference the other backends are checked
//!   against
//!
//! # Example
//!
//! ```rust
//! use heat_rs::grid::HeatSource;
//! use heat_rs::stepper::{DenseStepper, Stepper};
//!
//! let stepper = DenseStepper::new(5).unwrap();
//! let u0 = HeatSource::centered_point(1.0).apply_to(5).unwrap();
//! let u1 = stepper.advance(&u0, 0.2).unwrap();
//! assert!((u1[(2, 2)] - 0.2).abs() < 1e-12);
//! ```

use std::sync::Arc;

use crate::error::{Result, validate_epsilon};
use crate::grid::Grid;
use crate::operator::{DenseOperator, GridOperator, GridOperatorBuilder};
use crate::stepper::{Stepper, StepperKind};

/// Advance one step with a dense operator
///
/// Flattens `state`, computes `state + ε · (A @ state)` and reshapes back.
///
/// # Errors
///
/// - `state` side differs from the operator's N
/// - `epsilon` not positive and finite
pub fn advance_matvec(operator: &DenseOperator, state: &Grid, epsilon: f64) -> Result<Grid> {
    validate_epsilon(epsilon)?;
    let n = operator.grid_size();
    state.ensure_size(n)?;

    let u = state.flatten();
    let laplacian = operator.apply(&u)?;
    let next = u + laplacian * epsilon;

    Grid::from_flattened(n, &next)
}

/// Stepper backed by a full N²×N² matrix
///
/// The operator sits behind an `Arc`: cloning the stepper, or building several
/// from [`DenseStepper::with_operator`], shares one read-only matrix.
#[derive(Debug, Clone)]
pub struct DenseStepper {
    operator: Arc<DenseOperator>,
}

impl DenseStepper {
    /// Build the operator for side `n`
    pub fn new(n: usize) -> Result<Self> {
        let operator = GridOperatorBuilder::new(n)?.dense();
        Ok(Self::with_operator(Arc::new(operator)))
    }

    /// Reuse an operator that was already assembled
    pub fn with_operator(operator: Arc<DenseOperator>) -> Self {
        Self { operator }
    }

    pub fn operator(&self) -> &Arc<DenseOperator> {
        &self.operator
    }
}

impl Stepper for DenseStepper {
    fn advance(&self, state: &Grid, epsilon: f64) -> Result<Grid> {
        advance_matvec(&self.operator, state, epsilon)
    }

    fn kind(&self) -> StepperKind {
        StepperKind::Dense
    }

    fn grid_size(&self) -> Option<usize> {
        Some(self.operator.grid_size())
    }
}
