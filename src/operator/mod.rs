//! Discrete 2D Laplacian operators
//!
//! # Mathematical Background
//!
//! The five-point finite-difference stencil on an N×N grid, flattened
//! row-major, is the N²×N² linear map
//!
//! ```text
//! (L v)[i·N + j] = v[(i-1)·N + j] + v[(i+1)·N + j]
//!                + v[i·N + (j-1)] + v[i·N + (j+1)]
//!                - 4 · v[i·N + j]
//! ```
//!
//! where every neighbour outside the grid contributes zero (zero Dirichlet
//! edges). In band form: diagonal −4, offsets ±1 equal to 1 except where the
//! link would cross a row end, offsets ±N equal to 1.
//!
//! # Variants
//!
//! | Variant | Storage | Apply cost | Use |
//! |---------|---------|------------|-----|
//! | [`DenseOperator`] | N⁴ | O(N⁴) | small N, reference |
//! | [`SparseOperator`] | ≤ 5N² | O(N²) | anything large |
//!
//! Both are built by [`GridOperatorBuilder`] and are value-for-value identical
//! once densified.
//!
//! # Example
//!
//! ```rust
//! use heat_rs::operator::{GridOperator, GridOperatorBuilder};
//!
//! let builder = GridOperatorBuilder::new(3).unwrap();
//! let dense = builder.dense();
//! let sparse = builder.sparse();
//! assert_eq!(dense.to_dense(), sparse.to_dense());
//! assert_eq!(sparse.nnz(), 9 + 2 * 12);
//! ```

use nalgebra::{DMatrix, DVector};

use crate::error::{HeatError, Result};

pub mod dense;
pub mod sparse;

pub use dense::DenseOperator;
pub use sparse::SparseOperator;

/// Weight of the centre cell
pub const CENTER_WEIGHT: f64 = -4.0;

/// Weight of each orthogonal neighbour
pub const NEIGHBOR_WEIGHT: f64 = 1.0;

/// Storage layout for an assembled operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    Dense,
    Sparse,
}

impl OperatorKind {
    pub fn name(&self) -> &'static str {
        match self {
            OperatorKind::Dense => "Dense",
            OperatorKind::Sparse => "Sparse",
        }
    }
}

/// Behaviour shared by every assembled Laplacian
///
/// Operators are immutable after construction, so `&self` everywhere and
/// `Send + Sync` for sharing across threads behind an `Arc`.
pub trait GridOperator: Send + Sync {
    /// Side length N this operator was built for
    fn grid_size(&self) -> usize;

    /// Vector length N²
    fn dimension(&self) -> usize {
        self.grid_size() * self.grid_size()
    }

    /// Number of stored nonzero entries
    fn nnz(&self) -> usize;

    /// Storage layout
    fn kind(&self) -> OperatorKind;

    /// Compute `L · v`
    ///
    /// # Errors
    ///
    /// [`HeatError::Shape`] when `v.len() != N²`.
    fn apply(&self, v: &DVector<f64>) -> Result<DVector<f64>>;

    /// Materialize as a dense N²×N² matrix
    fn to_dense(&self) -> DMatrix<f64>;

    /// Shape check shared by `apply` implementations
    fn ensure_dimension(&self, v: &DVector<f64>) -> Result<()> {
        let n = self.dimension();
        if v.len() != n {
            return Err(HeatError::Shape {
                expected: (n, 1),
                found: (v.len(), 1),
            });
        }
        Ok(())
    }
}

// =================================================================================================
// Builder
// =================================================================================================

/// Builds five-point Laplacians for a fixed grid side N
///
/// # Failure
///
/// N = 0 is rejected eagerly by [`GridOperatorBuilder::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridOperatorBuilder {
    n: usize,
}

impl GridOperatorBuilder {
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(HeatError::config("operator grid size must be at least 1"));
        }
        Ok(Self { n })
    }

    pub fn grid_size(&self) -> usize {
        self.n
    }

    /// Full N²×N² matrix
    pub fn dense(&self) -> DenseOperator {
        DenseOperator::assemble(self.n)
    }

    /// Compressed operator holding only the stencil entries
    pub fn sparse(&self) -> SparseOperator {
        SparseOperator::assemble(self.n)
    }

    /// Boxed operator of the requested layout
    pub fn build(&self, kind: OperatorKind) -> Box<dyn GridOperator> {
        match kind {
            OperatorKind::Dense => Box::new(self.dense()),
            OperatorKind::Sparse => Box::new(self.sparse()),
        }
    }
}

/// Number of nonzero entries of the five-point operator for side `n`
///
/// N² diagonal entries, 2·N·(N−1) horizontal links and as many vertical ones.
pub fn expected_nnz(n: usize) -> usize {
    n * n + 4 * n * n.saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_rejects_zero() {
        assert!(matches!(
            GridOperatorBuilder::new(0),
            Err(HeatError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_expected_nnz() {
        assert_eq!(expected_nnz(1), 1);
        assert_eq!(expected_nnz(2), 4 + 8);
        assert_eq!(expected_nnz(3), 9 + 24);
    }

    #[test]
    fn test_build_by_kind() {
        let builder = GridOperatorBuilder::new(4).unwrap();
        for kind in [OperatorKind::Dense, OperatorKind::Sparse] {
            let op = builder.build(kind);
            assert_eq!(op.kind(), kind);
            assert_eq!(op.grid_size(), 4);
            assert_eq!(op.dimension(), 16);
            assert_eq!(op.nnz(), expected_nnz(4));
        }
    }

    #[test]
    fn test_dense_and_sparse_agree_entrywise() {
        for n in 1..=6 {
            let builder = GridOperatorBuilder::new(n).unwrap();
            assert_eq!(builder.dense().to_dense(), builder.sparse().to_dense(), "n = {n}");
        }
    }

    #[test]
    fn test_apply_rejects_wrong_length() {
        let builder = GridOperatorBuilder::new(3).unwrap();
        let v = DVector::zeros(8);
        assert!(builder.dense().apply(&v).is_err());
        assert!(builder.sparse().apply(&v).is_err());
    }
}
