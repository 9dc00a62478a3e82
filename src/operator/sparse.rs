//! Sparse five-point operator
//!
//! # Assembly
//!
//! The operator is assembled as a coordinate list of `(row, column, value)`
//! triplets, one row per grid cell, then compressed to CSR for the product:
//!
//! ```text
//! for i in 0..N²:
//!     (i, i,   -4)
//!     (i, i-1,  1)   if i % N != 0          left neighbour exists
//!     (i, i+1,  1)   if (i + 1) % N != 0    right neighbour exists
//!     (i, i-N,  1)   if i >= N              top neighbour exists
//!     (i, i+N,  1)   if i < N² - N          bottom neighbour exists
//! ```
//!
//! At most five entries per row, so storage and matvec cost are both O(N²).

use nalgebra::{DMatrix, DVector};
use nalgebra_sparse::{CooMatrix, CsrMatrix};

use super::{CENTER_WEIGHT, GridOperator, NEIGHBOR_WEIGHT, OperatorKind};
use crate::error::Result;

/// Coordinate list of the five-point operator in assembly order
pub fn coordinates(n: usize) -> Vec<(usize, usize, f64)> {
    let size = n * n;
    let mut triplets = Vec::with_capacity(super::expected_nnz(n));

    for i in 0..size {
        triplets.push((i, i, CENTER_WEIGHT));

        if i % n != 0 {
            triplets.push((i, i - 1, NEIGHBOR_WEIGHT));
        }
        if (i + 1) % n != 0 {
            triplets.push((i, i + 1, NEIGHBOR_WEIGHT));
        }
        if i >= n {
            triplets.push((i, i - n, NEIGHBOR_WEIGHT));
        }
        if i < size - n {
            triplets.push((i, i + n, NEIGHBOR_WEIGHT));
        }
    }

    triplets
}

/// N²×N² Laplacian in compressed sparse row form
#[derive(Debug, Clone, PartialEq)]
pub struct SparseOperator {
    n: usize,
    matrix: CsrMatrix<f64>,
}

impl SparseOperator {
    pub(crate) fn assemble(n: usize) -> Self {
        let size = n * n;
        let mut coo = CooMatrix::new(size, size);
        for (row, column, value) in coordinates(n) {
            coo.push(row, column, value);
        }
        let matrix = CsrMatrix::from(&coo);

        log::debug!("assembled sparse operator: n = {n}, nnz = {}", matrix.nnz());
        Self { n, matrix }
    }

    /// Borrow the CSR matrix
    pub fn matrix(&self) -> &CsrMatrix<f64> {
        &self.matrix
    }

    /// Stored entries as `(row, column, value)`, row by row with ascending columns
    pub fn triplets(&self) -> Vec<(usize, usize, f64)> {
        self.matrix
            .triplet_iter()
            .map(|(i, j, v)| (i, j, *v))
            .collect()
    }
}

impl GridOperator for SparseOperator {
    fn grid_size(&self) -> usize {
        self.n
    }

    fn nnz(&self) -> usize {
        self.matrix.nnz()
    }

    fn kind(&self) -> OperatorKind {
        OperatorKind::Sparse
    }

    fn apply(&self, v: &DVector<f64>) -> Result<DVector<f64>> {
        self.ensure_dimension(v)?;
        Ok(&self.matrix * v)
    }

    fn to_dense(&self) -> DMatrix<f64> {
        let size = self.dimension();
        let mut dense = DMatrix::zeros(size, size);
        for (i, j, v) in self.matrix.triplet_iter() {
            dense[(i, j)] += *v;
        }
        dense
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operator::expected_nnz;

    #[test]
    fn test_coordinates_assembly_order() {
        // n = 2: cell 0 has right and bottom neighbours only
        let triplets = coordinates(2);
        assert_eq!(&triplets[..3], &[(0, 0, -4.0), (0, 1, 1.0), (0, 2, 1.0)]);
        assert_eq!(triplets.len(), expected_nnz(2));
    }

    #[test]
    fn test_no_cross_row_links() {
        let n = 4;
        for (i, j, _) in coordinates(n) {
            if j == i + 1 {
                assert_ne!((i + 1) % n, 0, "wrap link {i} -> {j}");
            }
            if i == j + 1 {
                assert_ne!(i % n, 0, "wrap link {i} -> {j}");
            }
        }
    }

    #[test]
    fn test_triplets_sorted_by_row_then_column() {
        let op = SparseOperator::assemble(3);
        let triplets = op.triplets();
        assert_eq!(triplets.len(), expected_nnz(3));
        assert!(triplets.windows(2).all(|w| (w[0].0, w[0].1) < (w[1].0, w[1].1)));
    }

    #[test]
    fn test_apply_corner_and_centre() {
        let op = SparseOperator::assemble(3);
        let v = DVector::from_iterator(9, (0..9).map(|k| k as f64));
        let lv = op.apply(&v).unwrap();
        assert_eq!(lv[0], 4.0);
        assert_eq!(lv[4], 0.0);
        assert_eq!(lv[8], -20.0);
    }

    #[test]
    fn test_apply_matches_densified_product() {
        let op = SparseOperator::assemble(4);
        let v = DVector::from_iterator(16, (0..16).map(|k| (k as f64).sin()));
        let sparse = op.apply(&v).unwrap();
        let dense = op.to_dense() * &v;
        assert_eq!(sparse.len(), 16);
        for (a, b) in sparse.iter().zip(dense.iter()) {
            assert!((a - b).abs() < 1e-14, "{a} vs {b}");
        }
    }

    #[test]
    fn test_apply_rejects_wrong_length() {
        let op = SparseOperator::assemble(3);
        assert!(op.apply(&DVector::zeros(8)).is_err());
    }

    #[test]
    fn test_single_cell() {
        let op = SparseOperator::assemble(1);
        assert_eq!(op.nnz(), 1);
        assert_eq!(op.to_dense()[(0, 0)], -4.0);
    }
}
