//! Dense five-point operator
//!
//! Materializes all N⁴ entries. Fine for a few hundred cells, hopeless past
//! that: N = 101 already needs ~800 MB.

use nalgebra::{DMatrix, DVector};

use super::{CENTER_WEIGHT, GridOperator, NEIGHBOR_WEIGHT, OperatorKind};
use crate::error::Result;

/// N²×N² Laplacian stored as a full `nalgebra::DMatrix`
#[derive(Debug, Clone, PartialEq)]
pub struct DenseOperator {
    n: usize,
    matrix: DMatrix<f64>,
}

impl DenseOperator {
    /// Assemble band by band
    ///
    /// The ±1 bands are zeroed at every `k` with `(k + 1) % N == 0`: the link
    /// between the last cell of row `i` and the first cell of row `i + 1`
    /// would otherwise couple opposite grid edges. The ±N bands need no
    /// masking; they simply stop at the first and last grid rows.
    pub(crate) fn assemble(n: usize) -> Self {
        let size = n * n;
        let mut matrix = DMatrix::zeros(size, size);

        for k in 0..size {
            matrix[(k, k)] = CENTER_WEIGHT;
        }

        // Right / left neighbours
        for k in 0..size.saturating_sub(1) {
            if (k + 1) % n != 0 {
                matrix[(k, k + 1)] = NEIGHBOR_WEIGHT;
                matrix[(k + 1, k)] = NEIGHBOR_WEIGHT;
            }
        }

        // Bottom / top neighbours
        for k in 0..size.saturating_sub(n) {
            matrix[(k, k + n)] = NEIGHBOR_WEIGHT;
            matrix[(k + n, k)] = NEIGHBOR_WEIGHT;
        }

        log::debug!("assembled dense operator: n = {n}, {size}x{size} entries");
        Self { n, matrix }
    }

    /// Borrow the matrix
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }
}

impl GridOperator for DenseOperator {
    fn grid_size(&self) -> usize {
        self.n
    }

    fn nnz(&self) -> usize {
        self.matrix.iter().filter(|x| **x != 0.0).count()
    }

    fn kind(&self) -> OperatorKind {
        OperatorKind::Dense
    }

    fn apply(&self, v: &DVector<f64>) -> Result<DVector<f64>> {
        self.ensure_dimension(v)?;
        Ok(&self.matrix * v)
    }

    fn to_dense(&self) -> DMatrix<f64> {
        self.matrix.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_cell() {
        let op = DenseOperator::assemble(1);
        assert_eq!(op.matrix().shape(), (1, 1));
        assert_eq!(op.matrix()[(0, 0)], -4.0);
    }

    #[test]
    fn test_row_wrap_links_suppressed() {
        // n = 3: cell 2 is the right edge of row 0, cell 3 the left edge of row 1
        let op = DenseOperator::assemble(3);
        let m = op.matrix();
        assert_eq!(m[(2, 3)], 0.0);
        assert_eq!(m[(3, 2)], 0.0);
        assert_eq!(m[(5, 6)], 0.0);
        assert_eq!(m[(6, 5)], 0.0);
        assert_eq!(m[(0, 1)], 1.0);
        assert_eq!(m[(4, 5)], 1.0);
    }

    #[test]
    fn test_vertical_links_present() {
        let op = DenseOperator::assemble(3);
        let m = op.matrix();
        assert_eq!(m[(0, 3)], 1.0);
        assert_eq!(m[(3, 0)], 1.0);
        assert_eq!(m[(5, 8)], 1.0);
        assert_eq!(m[(8, 5)], 1.0);
    }

    #[test]
    fn test_symmetric_with_centre_row_stencil() {
        let op = DenseOperator::assemble(4);
        let m = op.matrix();
        assert_eq!(m, &m.transpose());

        // interior cell (1, 1) -> index 5: four neighbours plus centre
        let row: Vec<f64> = m.row(5).iter().copied().collect();
        let nonzero: Vec<usize> = (0..16).filter(|&c| row[c] != 0.0).collect();
        assert_eq!(nonzero, vec![1, 4, 5, 6, 9]);
        assert_eq!(row.iter().sum::<f64>(), 0.0);
    }

    #[test]
    fn test_apply_matches_stencil_formula() {
        let n = 3;
        let op = DenseOperator::assemble(n);
        let v = DVector::from_iterator(9, (0..9).map(|k| k as f64));
        let lv = op.apply(&v).unwrap();
        // centre cell (1,1): 1 + 7 + 3 + 5 - 4*4 = 0
        assert_eq!(lv[4], 0.0);
        // corner (0,0): right 1 + down 3 - 0 = 4
        assert_eq!(lv[0], 4.0);
        // corner (2,2): up 5 + left 7 - 4*8 = -20
        assert_eq!(lv[8], -20.0);
    }
}
