//! Trait implementations for `faer` dense matrices and `Vec<f64>`.
//!
//! These let a dense `faer::Mat<f64>` stand in wherever the sparse and diagonal
//! operands are used through `MatVec`, which is how results are cross-checked
//! against a dense computation.

use crate::core::traits::{Indexing, MatShape, MatVec};
use faer::Mat;

/// Computes `y = A * x` for a dense matrix.
impl MatVec<Vec<f64>> for Mat<f64> {
    fn matvec(&self, x: &Vec<f64>, y: &mut Vec<f64>) {
        assert_eq!(self.nrows(), y.len(), "Output vector y has incorrect length");
        assert_eq!(self.ncols(), x.len(), "Input vector x has incorrect length");
        for i in 0..self.nrows() {
            y[i] = 0.0;
            for j in 0..self.ncols() {
                y[i] += self[(i, j)] * x[j];
            }
        }
    }
}

impl MatShape for Mat<f64> {
    fn nrows(&self) -> usize {
        self.nrows()
    }
    fn ncols(&self) -> usize {
        self.ncols()
    }
}

/// A vector is treated as a column vector.
impl<T> Indexing for Vec<T> {
    fn nrows(&self) -> usize {
        self.len()
    }
}

impl Indexing for Mat<f64> {
    fn nrows(&self) -> usize {
        self.nrows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{CsrMatrix, DiagonalMatrix};

    #[test]
    fn dense_and_sparse_matvec_agree() {
        let b = CsrMatrix::new(vec![2.0, -1.0, 4.0, 0.5], vec![0, 2, 1, 2], vec![0, 2, 3, 4], 3).unwrap();
        let x = vec![1.0, -2.0, 3.0];
        assert_eq!(x.nrows(), 3);

        let mut sparse = vec![0.0; 3];
        b.matvec(&x, &mut sparse);
        let dense = b.to_dense();
        assert_eq!(Indexing::nrows(&dense), 3);
        let mut y = vec![0.0; 3];
        dense.matvec(&x, &mut y);
        assert_eq!(sparse, y);

        let d = DiagonalMatrix::new(vec![1.0, 0.0, -2.0]);
        d.to_dense().matvec(&x, &mut y);
        assert_eq!(y, vec![1.0, 0.0, -6.0]);
    }
}
