// rayon-based row-chunk fill

use crate::error::Result;
use crate::kernel::scale_rows;
use crate::matrix::{CsrMatrix, DiagonalMatrix};
use rayon::prelude::*;
use std::ops::Range;
use tracing::trace;

/// Fill `out` (length `b.nnz()`) with the scaled values of `b`, one rayon task
/// per row chunk. `chunks` must come from [`super::partition_rows`] on `b`.
pub fn scale_rows_parallel(
    a: &DiagonalMatrix,
    b: &CsrMatrix,
    chunks: &[Range<usize>],
    out: &mut [f64],
) -> Result<()> {
    let starts = b.row_starts();
    let mut pieces = Vec::with_capacity(chunks.len());
    let mut rest = out;
    for rows in chunks {
        let len = starts[rows.end] - starts[rows.start];
        let (head, tail) = std::mem::take(&mut rest).split_at_mut(len);
        pieces.push((rows.clone(), head));
        rest = tail;
    }
    pieces.into_par_iter().try_for_each(|(rows, dst)| {
        trace!(start = rows.start, end = rows.end, len = dst.len(), "scaling row chunk");
        scale_rows(a, b, rows, dst)
    })
}
