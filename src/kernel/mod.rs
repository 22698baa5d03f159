//! Diagonal × CSR multiplication.
//!
//! Row `i` of `A·B` with `A = diag(d)` is row `i` of `B` scaled by `d[i]`, so the
//! product has exactly the sparsity pattern of `B`. The kernel copies `B`'s
//! structure and writes one scaled value per stored entry: O(nnz) time, one
//! allocation of nnz values, no symbolic phase and no accumulation.
//!
//! # Structure sharing
//! The output's `row_starts` and `column_indices` are cloned from `B`; the
//! result never aliases `B`'s buffers, so either matrix can later be consumed
//! with `into_parts` and mutated independently.
//!
//! # Explicit zeros
//! A zero on the diagonal leaves the row's entries in place with value `0.0`.
//! Use [`CsrMatrix::eliminate_zeros`] on the result to drop them.

use crate::config::KernelOptions;
use crate::error::{MatError, Result};
use crate::matrix::{CsrMatrix, DiagonalMatrix};
use std::ops::Range;
use tracing::{debug, instrument};

/// `C = A·B` using the default [`KernelOptions`].
///
/// Fails with `DimensionMismatch` if `A` and `B` differ in dimension. `B` is
/// assumed canonical and is not checked; a non-canonical `B` yields a result
/// with the same non-canonical structure.
pub fn multiply(a: &DiagonalMatrix, b: &CsrMatrix) -> Result<CsrMatrix> {
    multiply_with(a, b, &KernelOptions::default())
}

/// `C = A·B`, scheduling the row loop according to `opts`.
///
/// With the `rayon` feature the rows are split into nnz-balanced chunks once
/// `B.nnz() >= opts.parallel_threshold`. Every schedule produces the same bits.
#[instrument(level = "debug", skip_all, fields(n = b.dim(), nnz = b.nnz()))]
pub fn multiply_with(a: &DiagonalMatrix, b: &CsrMatrix, opts: &KernelOptions) -> Result<CsrMatrix> {
    check_dims(a, b)?;
    if opts.verify_canonical && !b.is_canonical() {
        return Err(MatError::MalformedStructure(
            "right operand is not in canonical form".into(),
        ));
    }
    #[cfg(feature = "rayon")]
    {
        if b.dim() > 1 && b.nnz() >= opts.parallel_threshold {
            let target = opts.chunks_per_thread.max(1) * num_cpus::get();
            let chunks = crate::parallel::partition_rows(b.row_starts(), target);
            debug!(chunks = chunks.len(), "parallel row schedule");
            let mut values = vec![0.0; b.nnz()];
            crate::parallel::scale_rows_parallel(a, b, &chunks, &mut values)?;
            return Ok(with_structure_of(b, values));
        }
    }
    debug!("serial row schedule");
    serial(a, b)
}

/// `C = A·B` on the calling thread, whatever the options or features.
#[instrument(level = "debug", skip_all, fields(n = b.dim(), nnz = b.nnz()))]
pub fn multiply_serial(a: &DiagonalMatrix, b: &CsrMatrix) -> Result<CsrMatrix> {
    check_dims(a, b)?;
    serial(a, b)
}

fn check_dims(a: &DiagonalMatrix, b: &CsrMatrix) -> Result<()> {
    if a.dim() != b.dim() {
        return Err(MatError::DimensionMismatch { expected: a.dim(), found: b.dim() });
    }
    Ok(())
}

fn serial(a: &DiagonalMatrix, b: &CsrMatrix) -> Result<CsrMatrix> {
    let mut values = vec![0.0; b.nnz()];
    scale_rows(a, b, 0..b.dim(), &mut values)?;
    Ok(with_structure_of(b, values))
}

fn with_structure_of(b: &CsrMatrix, values: Vec<f64>) -> CsrMatrix {
    CsrMatrix::from_parts_unchecked(
        values,
        b.column_indices().to_vec(),
        b.row_starts().to_vec(),
        b.dim(),
    )
}

/// Write `a[i] * b[i, :]` for each row in `rows` into `out`, which holds the
/// value range `row_starts[rows.start]..row_starts[rows.end]`.
pub(crate) fn scale_rows(
    a: &DiagonalMatrix,
    b: &CsrMatrix,
    rows: Range<usize>,
    out: &mut [f64],
) -> Result<()> {
    let starts = b.row_starts();
    let base = starts[rows.start];
    let bound = base + out.len();
    for i in rows {
        let scale = a.at(i)?;
        let (s, e) = (starts[i], starts[i + 1]);
        let src = b
            .values()
            .get(s..e)
            .ok_or(MatError::IndexOutOfRange { index: e, bound: b.nnz() })?;
        let dst = out
            .get_mut(s - base..e - base)
            .ok_or(MatError::IndexOutOfRange { index: e, bound })?;
        for (o, &v) in dst.iter_mut().zip(src) {
            *o = v * scale;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_each_row_by_its_diagonal_entry() {
        let a = DiagonalMatrix::new(vec![1.0, 2.0, 3.0, 4.0]);
        let b = CsrMatrix::new(
            vec![1.0, 5.0, 7.0, 3.0, 4.0, 6.0, 1.0],
            vec![0, 2, 3, 0, 1, 2, 1],
            vec![0, 2, 3, 6, 7],
            4,
        )
        .unwrap();
        let c = multiply(&a, &b).unwrap();
        assert_eq!(c.values(), &[1.0, 5.0, 14.0, 9.0, 12.0, 18.0, 4.0]);
        assert_eq!(c.column_indices(), b.column_indices());
        assert_eq!(c.row_starts(), b.row_starts());
    }

    #[test]
    fn dimension_mismatch() {
        let a = DiagonalMatrix::new(vec![1.0; 3]);
        let b = CsrMatrix::identity(4);
        assert_eq!(
            multiply(&a, &b).unwrap_err(),
            MatError::DimensionMismatch { expected: 3, found: 4 }
        );
        assert!(multiply_serial(&a, &b).is_err());
    }

    #[test]
    fn empty_operands() {
        let c = multiply(&DiagonalMatrix::new(Vec::new()), &CsrMatrix::empty(0)).unwrap();
        assert_eq!(c.nnz(), 0);
        assert_eq!(c.row_starts(), &[0]);
    }

    #[test]
    fn verify_canonical_rejects_unsorted_rows() {
        let a = DiagonalMatrix::identity(2);
        let b = CsrMatrix::new(vec![1.0, 2.0], vec![1, 0], vec![0, 2, 2], 2).unwrap();
        let opts = KernelOptions { verify_canonical: true, ..KernelOptions::default() };
        assert!(matches!(multiply_with(&a, &b, &opts), Err(MatError::MalformedStructure(_))));
        // default options pass the structure through
        let c = multiply(&a, &b).unwrap();
        assert_eq!(c.column_indices(), &[1, 0]);
    }
}
