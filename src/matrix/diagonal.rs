// Diagonal matrix: one scalar per row/column index.

use crate::core::traits::{Indexing, MatShape, MatVec};
use crate::error::{MatError, Result};
use crate::matrix::sparse::CsrMatrix;

/// Square diagonal operator `diag(values)`. Read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagonalMatrix {
    values: Vec<f64>,
}

impl DiagonalMatrix {
    /// The dimension is `values.len()`.
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn identity(n: usize) -> Self {
        Self { values: vec![1.0; n] }
    }

    pub fn dim(&self) -> usize {
        self.values.len()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The `(i, i)` entry.
    pub fn at(&self, i: usize) -> Result<f64> {
        self.values
            .get(i)
            .copied()
            .ok_or(MatError::IndexOutOfRange { index: i, bound: self.values.len() })
    }

    /// Canonical CSR form with one entry per row, zeros kept as explicit entries.
    pub fn to_csr(&self) -> CsrMatrix {
        let n = self.dim();
        CsrMatrix::from_parts_unchecked(self.values.clone(), (0..n).collect(), (0..=n).collect(), n)
    }
}

impl From<Vec<f64>> for DiagonalMatrix {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

/// Compute y_i = d_i x_i.
impl MatVec<Vec<f64>> for DiagonalMatrix {
    fn matvec(&self, x: &Vec<f64>, y: &mut Vec<f64>) {
        assert_eq!(self.dim(), x.len(), "Input vector x has incorrect length");
        assert_eq!(self.dim(), y.len(), "Output vector y has incorrect length");
        for ((yi, &d), &xi) in y.iter_mut().zip(&self.values).zip(x) {
            *yi = d * xi;
        }
    }
}

impl Indexing for DiagonalMatrix {
    fn nrows(&self) -> usize {
        self.dim()
    }
}

impl MatShape for DiagonalMatrix {
    fn nrows(&self) -> usize {
        self.dim()
    }
    fn ncols(&self) -> usize {
        self.dim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_checks_bounds() {
        let d = DiagonalMatrix::new(vec![2.0, -1.0]);
        assert_eq!(d.dim(), 2);
        assert_eq!(d.at(1), Ok(-1.0));
        assert_eq!(d.at(2), Err(MatError::IndexOutOfRange { index: 2, bound: 2 }));
        assert!(DiagonalMatrix::new(Vec::new()).at(0).is_err());
    }

    #[test]
    fn to_csr_keeps_zero_entries() {
        let d = DiagonalMatrix::from(vec![3.0, 0.0, 1.5]);
        let c = d.to_csr();
        assert!(c.is_canonical());
        assert_eq!(c.row_starts(), &[0, 1, 2, 3]);
        assert_eq!(c.column_indices(), &[0, 1, 2]);
        assert_eq!(c.values(), &[3.0, 0.0, 1.5]);
    }

    #[test]
    fn matvec_scales_each_component() {
        let d = DiagonalMatrix::new(vec![2.0, 0.5, -1.0]);
        let x = vec![1.0, 4.0, 3.0];
        let mut y = vec![0.0; 3];
        d.matvec(&x, &mut y);
        assert_eq!(y, vec![2.0, 2.0, -3.0]);
    }
}
