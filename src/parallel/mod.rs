//! Row-parallel schedule for the multiply kernel.
//!
//! `row_starts` partitions the value buffer into disjoint per-row ranges, so a
//! contiguous run of rows owns a contiguous, non-overlapping slice of the
//! output. The schedule splits the output buffer along those boundaries and
//! hands each slice to a rayon worker; no locks are needed.

use std::ops::Range;

/// Split rows `0..n` into contiguous ranges holding roughly `nnz / chunks`
/// entries each. The ranges cover every row exactly once, in order.
pub fn partition_rows(row_starts: &[usize], chunks: usize) -> Vec<Range<usize>> {
    let n = row_starts.len().saturating_sub(1);
    if n == 0 {
        return Vec::new();
    }
    let chunks = chunks.clamp(1, n);
    let target = row_starts[n].div_ceil(chunks).max(1);
    let mut out = Vec::with_capacity(chunks + 1);
    let mut lo = 0;
    for i in 0..n {
        if row_starts[i + 1] - row_starts[lo] >= target {
            out.push(lo..i + 1);
            lo = i + 1;
        }
    }
    if lo < n {
        out.push(lo..n);
    }
    out
}

#[cfg(feature = "rayon")]
pub mod rayon_fill;
#[cfg(feature = "rayon")]
pub use rayon_fill::scale_rows_parallel;
