//! Dense conversions on top of Faer.
//!
//! Both operand types can be expanded into a `faer::Mat<f64>`, which gives an
//! independent dense product to compare the sparse kernel against.

use crate::matrix::diagonal::DiagonalMatrix;
use crate::matrix::sparse::CsrMatrix;
use faer::Mat;

impl CsrMatrix {
    /// Expand into a dense matrix. Entries sharing a position are summed.
    ///
    /// Panics if a column index is out of bounds.
    pub fn to_dense(&self) -> Mat<f64> {
        let n = self.dim();
        let mut mat = Mat::<f64>::zeros(n, n);
        for i in 0..n {
            for (j, v) in self.row(i).iter() {
                mat[(i, j)] += v;
            }
        }
        mat
    }
}

impl DiagonalMatrix {
    pub fn to_dense(&self) -> Mat<f64> {
        let n = self.dim();
        let mut mat = Mat::<f64>::zeros(n, n);
        for (i, &d) in self.values().iter().enumerate() {
            mat[(i, i)] = d;
        }
        mat
    }
}
