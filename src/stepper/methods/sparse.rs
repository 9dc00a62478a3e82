//! Sparse matrix-vector stepper
//!
//! Same update as the dense stepper, `u + ε · A u`, with `A` held in CSR form.
//! Only the ≤ 5N² stencil entries are stored and touched, which is what makes
//! N in the hundreds practical.
//!
//! # Flattened Kernel
//!
//! [`advance_matvec_sparse`] works on the flattened state directly. A caller
//! running many steps can keep the state flat for the whole loop and reshape
//! once at the end; [`SparseStepper::advance`] does the reshape on every call.
//!
//! ```rust
//! use heat_rs::grid::HeatSource;
//! use heat_rs::operator::GridOperatorBuilder;
//! use heat_rs::stepper::advance_matvec_sparse;
//!
//! let operator = GridOperatorBuilder::new(11).unwrap().sparse();
//! let mut u = HeatSource::centered_point(1.0).apply_to(11).unwrap().flatten();
//! for _ in 0..10 {
//!     u = advance_matvec_sparse(&operator, &u, 0.2).unwrap();
//! }
//! assert!(u.sum() < 1.0);
//! ```

use std::sync::Arc;

use crate::error::{Result, validate_epsilon};
use crate::grid::{FlattenedGrid, Grid};
use crate::operator::{GridOperator, GridOperatorBuilder, SparseOperator};
use crate::stepper::{Stepper, StepperKind};

/// One step on a flattened state: `u + ε · (A @ u)`
///
/// # Errors
///
/// - `u_flat.len()` differs from N²
/// - `epsilon` not positive and finite
pub fn advance_matvec_sparse(
    operator: &SparseOperator,
    u_flat: &FlattenedGrid,
    epsilon: f64,
) -> Result<FlattenedGrid> {
    validate_epsilon(epsilon)?;
    operator.ensure_dimension(u_flat)?;

    Ok(u_flat + (operator.matrix() * u_flat) * epsilon)
}

/// Stepper backed by a CSR operator
#[derive(Debug, Clone)]
pub struct SparseStepper {
    operator: Arc<SparseOperator>,
}

impl SparseStepper {
    /// Build the operator for side `n`
    pub fn new(n: usize) -> Result<Self> {
        let operator = GridOperatorBuilder::new(n)?.sparse();
        Ok(Self::with_operator(Arc::new(operator)))
    }

    /// Reuse an operator that was already assembled
    pub fn with_operator(operator: Arc<SparseOperator>) -> Self {
        Self { operator }
    }

    pub fn operator(&self) -> &Arc<SparseOperator> {
        &self.operator
    }

    /// Flattened-state variant of [`Stepper::advance`]
    pub fn advance_flat(&self, u_flat: &FlattenedGrid, epsilon: f64) -> Result<FlattenedGrid> {
        advance_matvec_sparse(&self.operator, u_flat, epsilon)
    }
}

impl Stepper for SparseStepper {
    fn advance(&self, state: &Grid, epsilon: f64) -> Result<Grid> {
        let n = self.operator.grid_size();
        state.ensure_size(n)?;
        let next = self.advance_flat(&state.flatten(), epsilon)?;
        Grid::from_flattened(n, &next)
    }

    fn kind(&self) -> StepperKind {
        StepperKind::Sparse
    }

    fn grid_size(&self) -> Option<usize> {
        Some(self.operator.grid_size())
    }
}
