//! Direct five-point stencil stepper
//!
//! # Mathematical Background
//!
//! The same update as the matrix steppers, written per cell:
//!
//! ```text
//! u'[i,j] = u[i,j] + ε · (u[i+1,j] + u[i-1,j] + u[i,j+1] + u[i,j-1] - 4·u[i,j])
//! ```
//!
//! A neighbour outside `[0, N-1]` reads as zero. This is a Dirichlet edge, not
//! a periodic one: heat at `(0, 0)` never shows up at `(0, N-1)` or `(N-1, 0)`.
//!
//! # Characteristics
//!
//! - **Storage**: none beyond the output grid
//! - **Cost**: O(N²) per step, no operator to build
//! - **Use**: the default for anything but cross-checking
//!
//! # Fast Path
//!
//! The input is copied once into a zero-padded `(N+2)×(N+2)` array, and the
//! four neighbours of every cell are then plain shifted views of it, combined
//! cell by cell with [`Zip`]. With the `parallel` feature and more than
//! [`parallel_threshold()`](crate::stepper::parallel_threshold) cells the zip
//! runs on rayon through `par_for_each`. Both paths evaluate the same
//! expression, so the results are bit-for-bit identical.

use ndarray::{Array2, Zip, s};

use crate::error::{Result, validate_epsilon};
use crate::grid::Grid;
use crate::stepper::{Stepper, StepperKind, parallel_threshold};

/// Copy of `u` surrounded by a ring of zeros
fn zero_padded(u: &Array2<f64>) -> Array2<f64> {
    let n = u.nrows();
    let mut padded = Array2::<f64>::zeros((n + 2, n + 2));
    padded.slice_mut(s![1..n + 1, 1..n + 1]).assign(u);
    padded
}

/// Sequential or parallel sweep over all cells
///
/// Additions are done in the order down, up, right, left, then the centre
/// term, for every cell and on every path.
fn sweep(u: &Array2<f64>, epsilon: f64, allow_parallel: bool) -> Array2<f64> {
    let n = u.nrows();
    let padded = zero_padded(u);
    let mut next = Array2::zeros((n, n));

    let zip = Zip::from(&mut next)
        .and(padded.slice(s![2..n + 2, 1..n + 1]))
        .and(padded.slice(s![0..n, 1..n + 1]))
        .and(padded.slice(s![1..n + 1, 2..n + 2]))
        .and(padded.slice(s![1..n + 1, 0..n]))
        .and(u);
    let cell = |out: &mut f64, &down: &f64, &up: &f64, &right: &f64, &left: &f64, &centre: &f64| {
        *out = centre + epsilon * (down + up + right + left - 4.0 * centre);
    };

    if allow_parallel && n * n > parallel_threshold() {
        #[cfg(feature = "parallel")]
        {
            zip.par_for_each(cell);
            return next;
        }
    }

    zip.for_each(cell);
    next
}

/// Advance one step without building any operator
///
/// # Errors
///
/// `epsilon` not positive and finite. Grids are square by construction, so
/// there is no shape failure here.
pub fn advance_stencil(state: &Grid, epsilon: f64) -> Result<Grid> {
    StencilStepper::new().advance(state, epsilon)
}

/// Operator-free stepper, valid for any grid size
#[derive(Debug, Clone, Copy)]
pub struct StencilStepper {
    allow_parallel: bool,
}

impl Default for StencilStepper {
    fn default() -> Self {
        Self::new()
    }
}

impl StencilStepper {
    /// Stepper that uses the parallel fast path when it is available
    pub fn new() -> Self {
        Self { allow_parallel: true }
    }

    /// Stepper that always sweeps rows on the calling thread
    pub fn sequential() -> Self {
        Self { allow_parallel: false }
    }

    pub fn allows_parallel(&self) -> bool {
        self.allow_parallel
    }
}

impl Stepper for StencilStepper {
    fn advance(&self, state: &Grid, epsilon: f64) -> Result<Grid> {
        validate_epsilon(epsilon)?;
        let next = sweep(state.as_array(), epsilon, self.allow_parallel);
        Ok(Grid::from_square_unchecked(next))
    }

    fn kind(&self) -> StepperKind {
        StepperKind::Stencil
    }

    fn grid_size(&self) -> Option<usize> {
        None
    }
}
