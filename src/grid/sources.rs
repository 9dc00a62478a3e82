//! Initial heat distributions
//!
//! Defines the grid state at time zero. The usual demo is a single unit of
//! heat in the middle of an otherwise cold plate.
//!
//! # Example
//!
//! ```rust
//! use heat_rs::grid::HeatSource;
//!
//! let grid = HeatSource::centered_point(1.0).apply_to(101).unwrap();
//! assert_eq!(grid[(50, 50)], 1.0);
//! assert_eq!(grid.total_heat(), 1.0);
//! ```

use std::sync::Arc;

use crate::error::{HeatError, Result};
use crate::grid::Grid;

/// Initial temperature profile on an N×N grid
///
/// # Types
///
/// - **Point**: one hot cell at a fixed position
/// - **CenteredPoint**: one hot cell at `(N/2, N/2)`, whatever N is
/// - **Square**: a uniform hot block
/// - **Gaussian**: smooth bump centred on the grid
/// - **Custom**: user-defined `f(i, j, n)`
/// - **None**: cold plate
pub enum HeatSource {
    /// Single hot cell at `(row, column)`
    Point {
        row: usize,
        column: usize,
        value: f64,
    },

    /// Single hot cell at the grid centre `(N/2, N/2)`
    CenteredPoint {
        value: f64,
    },

    /// Uniform block with top-left corner `(row, column)` and side `side`
    Square {
        row: usize,
        column: usize,
        side: usize,
        value: f64,
    },

    /// `peak · exp(-r² / 2σ²)` with r measured in cells from the centre
    ///
    /// # Formula
    ///
    /// ```text
    /// u(i, j) = A · exp(-((i - c)² + (j - c)²) / (2σ²)),   c = (N - 1) / 2
    /// ```
    Gaussian {
        width: f64,
        peak: f64,
    },

    /// Custom profile from a closure `(row, column, n) -> value`
    Custom(Arc<dyn Fn(usize, usize, usize) -> f64 + Send + Sync>),

    /// All zero
    None,
}

// ==================== Manual Clone Implementation ====================

impl Clone for HeatSource {
    fn clone(&self) -> Self {
        match self {
            Self::Point { row, column, value } => Self::Point {
                row: *row,
                column: *column,
                value: *value,
            },
            Self::CenteredPoint { value } => Self::CenteredPoint { value: *value },
            Self::Square { row, column, side, value } => Self::Square {
                row: *row,
                column: *column,
                side: *side,
                value: *value,
            },
            Self::Gaussian { width, peak } => Self::Gaussian {
                width: *width,
                peak: *peak,
            },
            Self::Custom(f) => Self::Custom(Arc::clone(f)),
            Self::None => Self::None,
        }
    }
}

// ==================== Manual Debug Implementation ====================

impl std::fmt::Debug for HeatSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Point { row, column, value } => f
                .debug_struct("Point")
                .field("row", row)
                .field("column", column)
                .field("value", value)
                .finish(),
            Self::CenteredPoint { value } => f
                .debug_struct("CenteredPoint")
                .field("value", value)
                .finish(),
            Self::Square { row, column, side, value } => f
                .debug_struct("Square")
                .field("row", row)
                .field("column", column)
                .field("side", side)
                .field("value", value)
                .finish(),
            Self::Gaussian { width, peak } => f
                .debug_struct("Gaussian")
                .field("width", width)
                .field("peak", peak)
                .finish(),
            Self::Custom(_) => f
                .debug_struct("Custom")
                .field("function", &"<user-defined>")
                .finish(),
            Self::None => f.debug_struct("None").finish(),
        }
    }
}

// ==================== Implementation ====================

impl HeatSource {
    /// Hot cell at `(row, column)`
    pub fn point(row: usize, column: usize, value: f64) -> Self {
        Self::Point { row, column, value }
    }

    /// Hot cell at the centre of whatever grid it is applied to
    pub fn centered_point(value: f64) -> Self {
        Self::CenteredPoint { value }
    }

    /// Uniform block of side `side` starting at `(row, column)`
    pub fn square(row: usize, column: usize, side: usize, value: f64) -> Self {
        Self::Square { row, column, side, value }
    }

    /// Centred Gaussian bump
    ///
    /// # Arguments
    ///
    /// * `width` - Standard deviation σ in cells
    /// * `peak` - Value at the centre
    pub fn gaussian(width: f64, peak: f64) -> Self {
        Self::Gaussian { width, peak }
    }

    /// Custom profile
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(usize, usize, usize) -> f64 + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(f))
    }

    /// Cold plate
    pub fn none() -> Self {
        Self::None
    }

    /// Materialize the profile on an `n × n` grid
    ///
    /// # Errors
    ///
    /// - `n == 0`
    /// - a point or square that does not fit inside the grid
    /// - a Gaussian with non-positive or non-finite width
    pub fn apply_to(&self, n: usize) -> Result<Grid> {
        match self {
            Self::Point { row, column, value } => {
                if *row >= n || *column >= n {
                    return Err(HeatError::config(format!(
                        "point source ({row}, {column}) outside {n}x{n} grid"
                    )));
                }
                Grid::from_fn(n, |i, j| if i == *row && j == *column { *value } else { 0.0 })
            }
            Self::CenteredPoint { value } => {
                let c = n / 2;
                Grid::from_fn(n, |i, j| if i == c && j == c { *value } else { 0.0 })
            }
            Self::Square { row, column, side, value } => {
                let overruns = |start: &usize| start.checked_add(*side).is_none_or(|end| end > n);
                if *side == 0 || overruns(row) || overruns(column) {
                    return Err(HeatError::config(format!(
                        "square source at ({row}, {column}) with side {side} does not fit a {n}x{n} grid"
                    )));
                }
                let rows = *row..row + side;
                let columns = *column..column + side;
                Grid::from_fn(n, |i, j| {
                    if rows.contains(&i) && columns.contains(&j) { *value } else { 0.0 }
                })
            }
            Self::Gaussian { width, peak } => {
                if !width.is_finite() || *width <= 0.0 {
                    return Err(HeatError::config(format!(
                        "gaussian width must be positive and finite, got {width}"
                    )));
                }
                let c = (n as f64 - 1.0) / 2.0;
                let two_sigma_sq = 2.0 * width * width;
                Grid::from_fn(n, |i, j| {
                    let di = i as f64 - c;
                    let dj = j as f64 - c;
                    peak * (-(di * di + dj * dj) / two_sigma_sq).exp()
                })
            }
            Self::Custom(f) => Grid::from_fn(n, |i, j| f(i, j, n)),
            Self::None => Grid::zeros(n),
        }
    }
}
