//! Reference implementation of general CSR × CSR multiplication.
//!
//! Used to cross-check the diagonal kernel. It runs the full general algorithm:
//! a symbolic phase that predicts each output row's column set, then a numeric
//! phase that accumulates products into a dense row buffer. Output rows are
//! sorted and duplicate-free. Entries whose products cancel to zero stay in the
//! structure, so the result pattern depends only on the input patterns.

#![allow(dead_code)]

use diagcsr::{CsrMatrix, MatError, Result};

/// `C = A·B` for square CSR operands of equal dimension.
pub fn reference_spgemm(a: &CsrMatrix, b: &CsrMatrix) -> Result<CsrMatrix> {
    if a.dim() != b.dim() {
        return Err(MatError::DimensionMismatch { expected: a.dim(), found: b.dim() });
    }
    let n = a.dim();

    // Symbolic phase: marker[j] == i once column j has been recorded for row i.
    let mut marker = vec![usize::MAX; n];
    let mut row_starts = Vec::with_capacity(n + 1);
    let mut column_indices = Vec::new();
    row_starts.push(0);
    for i in 0..n {
        let start = column_indices.len();
        for (k, _) in a.row_slice(i)?.iter() {
            for &j in b.row_slice(k)?.column_indices {
                if j >= n {
                    return Err(MatError::IndexOutOfRange { index: j, bound: n });
                }
                if marker[j] != i {
                    marker[j] = i;
                    column_indices.push(j);
                }
            }
        }
        column_indices[start..].sort_unstable();
        row_starts.push(column_indices.len());
    }

    // Numeric phase
    let mut acc = vec![0.0f64; n];
    let mut values = vec![0.0f64; column_indices.len()];
    for i in 0..n {
        for (k, a_ik) in a.row_slice(i)?.iter() {
            for (j, b_kj) in b.row_slice(k)?.iter() {
                acc[j] += a_ik * b_kj;
            }
        }
        for p in row_starts[i]..row_starts[i + 1] {
            let j = column_indices[p];
            values[p] = acc[j];
            acc[j] = 0.0;
        }
    }

    CsrMatrix::new(values, column_indices, row_starts, n)
}
