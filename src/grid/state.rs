//! Grid state containers
//!
//! A [`Grid`] is the N×N temperature field. The matrix-based steppers act on
//! vectors, so the same data also travels as a [`FlattenedGrid`] of length N²
//! in row-major order: cell `(i, j)` lives at index `i * N + j`.

use nalgebra::DVector;
use ndarray::Array2;
use std::fmt;

use crate::error::{HeatError, Result};

/// Row-major linearization of an N×N grid (length N²).
pub type FlattenedGrid = DVector<f64>;

/// Square N×N grid of temperatures
///
/// # Memory Layout
///
/// Backed by an `ndarray::Array2<f64>` in standard (row-major) layout, so
/// [`Grid::flatten`] is a straight copy of the underlying buffer order.
///
/// # Lifecycle
///
/// Steppers never mutate a grid: every advance returns a new one and the
/// caller threads it into the next call.
///
/// # Example
///
/// ```rust
/// use heat_rs::grid::Grid;
///
/// let mut cells = ndarray::Array2::zeros((5, 5));
/// cells[[2, 2]] = 1.0;
/// let grid = Grid::from_array(cells).unwrap();
///
/// let flat = grid.flatten();
/// assert_eq!(flat.len(), 25);
/// assert_eq!(flat[2 * 5 + 2], 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    cells: Array2<f64>,
}

impl Grid {

    // ======================================= constructors =======================================

    /// All-zero grid of side `n`
    pub fn zeros(n: usize) -> Result<Self> {
        Self::uniform(n, 0.0)
    }

    /// Grid of side `n` filled with `value`
    pub fn uniform(n: usize, value: f64) -> Result<Self> {
        if n == 0 {
            return Err(HeatError::config("grid size must be at least 1"));
        }
        Ok(Self { cells: Array2::from_elem((n, n), value) })
    }

    /// Wrap an existing 2D array, rejecting empty or non-square input
    pub fn from_array(cells: Array2<f64>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        if rows == 0 || cols == 0 {
            return Err(HeatError::config("grid must contain at least one cell"));
        }
        if rows != cols {
            return Err(HeatError::square(rows, (rows, cols)));
        }
        // Force standard layout so flatten() is row-major whatever the caller passed.
        let cells = if cells.is_standard_layout() {
            cells
        } else {
            cells.as_standard_layout().into_owned()
        };
        Ok(Self { cells })
    }

    /// Build from row-major values
    pub fn from_vec(n: usize, values: Vec<f64>) -> Result<Self> {
        if n == 0 {
            return Err(HeatError::config("grid size must be at least 1"));
        }
        if values.len() != n * n {
            return Err(HeatError::Shape {
                expected: (n * n, 1),
                found: (values.len(), 1),
            });
        }
        let cells = Array2::from_shape_vec((n, n), values)
            .map_err(|e| HeatError::config(e.to_string()))?;
        Ok(Self { cells })
    }

    /// Reshape a flattened vector back into an `n × n` grid
    ///
    /// Inverse of [`Grid::flatten`]: `Grid::from_flattened(n, &g.flatten()) == g`.
    pub fn from_flattened(n: usize, flat: &FlattenedGrid) -> Result<Self> {
        Self::from_vec(n, flat.iter().copied().collect())
    }

    /// Build a grid cell by cell
    pub fn from_fn<F>(n: usize, f: F) -> Result<Self>
    where
        F: Fn(usize, usize) -> f64,
    {
        if n == 0 {
            return Err(HeatError::config("grid size must be at least 1"));
        }
        Ok(Self { cells: Array2::from_shape_fn((n, n), |(i, j)| f(i, j)) })
    }

    /// Crate-internal constructor for arrays already known to be N×N.
    pub(crate) fn from_square_unchecked(cells: Array2<f64>) -> Self {
        debug_assert_eq!(cells.nrows(), cells.ncols());
        Self { cells }
    }

    // ========================================== Queries ==========================================

    /// Side length N
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    /// `(N, N)`
    pub fn shape(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Number of cells (N²)
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for a constructed grid; kept for clippy's `len_without_is_empty`
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Value at `(row, column)`, `None` when out of range
    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        self.cells.get((row, column)).copied()
    }

    /// Borrow the underlying array
    pub fn as_array(&self) -> &Array2<f64> {
        &self.cells
    }

    /// Consume into the underlying array
    pub fn into_array(self) -> Array2<f64> {
        self.cells
    }

    /// Row-major copy as a length-N² vector
    pub fn flatten(&self) -> FlattenedGrid {
        DVector::from_iterator(self.len(), self.cells.iter().copied())
    }

    /// Sum of all cells
    ///
    /// With zero Dirichlet edges heat leaks out through the boundary, so this
    /// decreases monotonically over a stable run once heat reaches the edges.
    pub fn total_heat(&self) -> f64 {
        self.cells.sum()
    }

    /// Largest absolute cell value
    pub fn max_abs(&self) -> f64 {
        self.cells.iter().fold(0.0_f64, |acc, x| acc.max(x.abs()))
    }

    /// True when no cell is NaN or infinite
    pub fn is_finite(&self) -> bool {
        self.cells.iter().all(|x| x.is_finite())
    }

    /// Largest element-wise absolute difference to another grid of the same size
    pub fn max_abs_difference(&self, other: &Grid) -> Result<f64> {
        if self.shape() != other.shape() {
            return Err(HeatError::Shape {
                expected: self.shape(),
                found: other.shape(),
            });
        }
        Ok(self
            .cells
            .iter()
            .zip(other.cells.iter())
            .fold(0.0_f64, |acc, (a, b)| acc.max((a - b).abs())))
    }

    /// Check that this grid is `n × n`
    pub fn ensure_size(&self, n: usize) -> Result<()> {
        if self.shape() != (n, n) {
            return Err(HeatError::square(n, self.shape()));
        }
        Ok(())
    }

    /// Iterate `(row, column, value)` in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.cells.indexed_iter().map(|((i, j), v)| (i, j, *v))
    }
}

// ================================== Simple arithmetic functions ==================================

impl std::ops::Mul<f64> for Grid {
    type Output = Grid;
    fn mul(self, scalar: f64) -> Self::Output {
        Grid { cells: self.cells * scalar }
    }
}

impl std::ops::Mul<Grid> for f64 {
    type Output = Grid;
    fn mul(self, rhs: Grid) -> Self::Output {
        rhs * self
    }
}

impl std::ops::Index<(usize, usize)> for Grid {
    type Output = f64;
    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        &self.cells[[row, column]]
    }
}

// ======================== Display ============================

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid [{} * {}]", self.size(), self.size())
    }
}

// ==================== Tests ====================
