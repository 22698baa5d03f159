//! Square compressed sparse row (CSR) matrix.
//!
//! The matrix is stored as three separately owned flat buffers: `values`,
//! `column_indices` (both of length nnz) and `row_starts` (length n + 1). Row
//! `i` occupies the half-open range `row_starts[i]..row_starts[i + 1]` of the
//! first two buffers.
//!
//! Construction always checks the O(n) relationships between the buffers, so
//! every row range of a `CsrMatrix` is a valid slice. Checks that must scan all
//! nnz entries (column bounds, sorted rows) are opt-in through [`CheckFlags`].

use crate::config::CheckFlags;
use crate::core::traits::{Indexing, MatShape, MatVec};
use crate::error::{MatError, Result};
use tracing::{instrument, trace};

/// A square CSR matrix of `f64` values.
#[derive(Debug, Clone, PartialEq)]
pub struct CsrMatrix {
    n: usize,
    values: Vec<f64>,
    column_indices: Vec<usize>,
    row_starts: Vec<usize>,
}

/// Read-only view of one row's entries.
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    pub values: &'a [f64],
    pub column_indices: &'a [usize],
}

impl<'a> RowView<'a> {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate `(column, value)` pairs in storage order.
    pub fn iter(self) -> impl Iterator<Item = (usize, f64)> + 'a {
        self.column_indices.iter().copied().zip(self.values.iter().copied())
    }

    fn is_strictly_sorted(&self) -> bool {
        self.column_indices.windows(2).all(|w| w[0] < w[1])
    }
}

impl CsrMatrix {
    /// Assemble a matrix from its three buffers.
    ///
    /// Fails with `MalformedStructure` unless `column_indices.len() == values.len()`,
    /// `row_starts.len() == n + 1`, `row_starts[0] == 0`, `row_starts[n] == values.len()`
    /// and `row_starts` is non-decreasing. Column indices are not scanned; use
    /// [`CsrMatrix::new_canonical`] or [`CsrMatrix::is_canonical`] for that.
    pub fn new(
        values: Vec<f64>,
        column_indices: Vec<usize>,
        row_starts: Vec<usize>,
        n: usize,
    ) -> Result<Self> {
        Self::with_checks(values, column_indices, row_starts, n, CheckFlags::empty())
    }

    /// Assemble a matrix and require canonical form (in-bounds, strictly increasing columns).
    pub fn new_canonical(
        values: Vec<f64>,
        column_indices: Vec<usize>,
        row_starts: Vec<usize>,
        n: usize,
    ) -> Result<Self> {
        Self::with_checks(values, column_indices, row_starts, n, CheckFlags::CANONICAL)
    }

    /// Assemble a matrix, running the O(nnz) checks selected by `checks` on top of
    /// the length checks done by [`CsrMatrix::new`].
    pub fn with_checks(
        values: Vec<f64>,
        column_indices: Vec<usize>,
        row_starts: Vec<usize>,
        n: usize,
        checks: CheckFlags,
    ) -> Result<Self> {
        validate_layout(values.len(), column_indices.len(), &row_starts, n)?;
        if checks.contains(CheckFlags::COLUMN_BOUNDS) {
            if let Some(&j) = column_indices.iter().find(|&&j| j >= n) {
                return Err(MatError::IndexOutOfRange { index: j, bound: n });
            }
        }
        let m = Self { n, values, column_indices, row_starts };
        if checks.contains(CheckFlags::SORTED_ROWS) {
            if let Some(i) = (0..n).find(|&i| !m.row(i).is_strictly_sorted()) {
                return Err(MatError::MalformedStructure(format!(
                    "column indices in row {i} are not strictly increasing"
                )));
            }
        }
        Ok(m)
    }

    /// Build from buffers already known to satisfy the layout invariants.
    pub(crate) fn from_parts_unchecked(
        values: Vec<f64>,
        column_indices: Vec<usize>,
        row_starts: Vec<usize>,
        n: usize,
    ) -> Self {
        debug_assert!(validate_layout(values.len(), column_indices.len(), &row_starts, n).is_ok());
        Self { n, values, column_indices, row_starts }
    }

    /// The n×n matrix with no stored entries.
    ///
    /// # Panics
    /// If `n == usize::MAX`, since `row_starts` needs `n + 1` slots.
    pub fn empty(n: usize) -> Self {
        assert!(n < usize::MAX, "dimension too large for row_starts");
        Self::from_parts_unchecked(Vec::new(), Vec::new(), vec![0; n + 1], n)
    }

    /// # Panics
    /// If `n == usize::MAX`.
    pub fn identity(n: usize) -> Self {
        assert!(n < usize::MAX, "dimension too large for row_starts");
        Self::from_parts_unchecked(vec![1.0; n], (0..n).collect(), (0..=n).collect(), n)
    }

    /// Dimension (rows == columns).
    pub fn dim(&self) -> usize {
        self.n
    }

    pub fn nrows(&self) -> usize {
        self.n
    }

    pub fn ncols(&self) -> usize {
        self.n
    }

    /// Number of stored entries, explicit zeros included.
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn column_indices(&self) -> &[usize] {
        &self.column_indices
    }

    pub fn row_starts(&self) -> &[usize] {
        &self.row_starts
    }

    /// Consume the matrix, returning `(values, column_indices, row_starts)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<usize>, Vec<usize>) {
        (self.values, self.column_indices, self.row_starts)
    }

    // Callers guarantee i < n.
    pub(crate) fn row(&self, i: usize) -> RowView<'_> {
        let (s, e) = (self.row_starts[i], self.row_starts[i + 1]);
        RowView { values: &self.values[s..e], column_indices: &self.column_indices[s..e] }
    }

    /// Read-only view of row `i`.
    pub fn row_slice(&self, i: usize) -> Result<RowView<'_>> {
        if i >= self.n {
            return Err(MatError::IndexOutOfRange { index: i, bound: self.n });
        }
        Ok(self.row(i))
    }

    /// Stored value at `(i, j)`, found by binary search in row `i`.
    ///
    /// Only meaningful on a canonical matrix.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i >= self.n {
            return None;
        }
        let row = self.row(i);
        row.column_indices.binary_search(&j).ok().map(|k| row.values[k])
    }

    /// True when every row's column indices strictly increase. O(nnz).
    pub fn is_canonical(&self) -> bool {
        (0..self.n).all(|i| self.row(i).is_strictly_sorted())
    }

    /// Return a canonical copy: each unsorted row is stably sorted by column and
    /// entries sharing a column are summed. Sorted rows are copied as they are.
    #[instrument(level = "debug", skip_all, fields(n = self.n, nnz = self.nnz()))]
    pub fn canonicalize(&self) -> CsrMatrix {
        let mut values = Vec::with_capacity(self.nnz());
        let mut column_indices = Vec::with_capacity(self.nnz());
        let mut row_starts = Vec::with_capacity(self.n + 1);
        row_starts.push(0);
        let mut scratch: Vec<(usize, f64)> = Vec::new();
        let mut rewritten = 0usize;
        for i in 0..self.n {
            let row = self.row(i);
            if row.is_strictly_sorted() {
                values.extend_from_slice(row.values);
                column_indices.extend_from_slice(row.column_indices);
            } else {
                rewritten += 1;
                scratch.clear();
                scratch.extend(row.iter());
                scratch.sort_by_key(|&(j, _)| j);
                let start = column_indices.len();
                for &(j, v) in &scratch {
                    match column_indices.last() {
                        Some(&prev) if column_indices.len() > start && prev == j => {
                            if let Some(acc) = values.last_mut() {
                                *acc += v;
                            }
                        }
                        _ => {
                            column_indices.push(j);
                            values.push(v);
                        }
                    }
                }
            }
            row_starts.push(values.len());
        }
        trace!(rewritten, nnz = values.len(), "rows rewritten");
        Self::from_parts_unchecked(values, column_indices, row_starts, self.n)
    }

    /// Return a copy with explicitly stored zeros dropped.
    pub fn eliminate_zeros(&self) -> CsrMatrix {
        let mut values = Vec::with_capacity(self.nnz());
        let mut column_indices = Vec::with_capacity(self.nnz());
        let mut row_starts = Vec::with_capacity(self.n + 1);
        row_starts.push(0);
        for i in 0..self.n {
            for (j, v) in self.row(i).iter() {
                if v != 0.0 {
                    column_indices.push(j);
                    values.push(v);
                }
            }
            row_starts.push(values.len());
        }
        Self::from_parts_unchecked(values, column_indices, row_starts, self.n)
    }

    /// Structural and numeric equality: same dimension, same columns in every
    /// row, and values equal or within `tol` of each other.
    pub fn approx_eq(&self, other: &CsrMatrix, tol: f64) -> bool {
        if self.n != other.n {
            return false;
        }
        (0..self.n).all(|i| {
            let (a, b) = (self.row(i), other.row(i));
            a.column_indices == b.column_indices
                && a.values.iter().zip(b.values).all(|(x, y)| x == y || (x - y).abs() <= tol)
        })
    }
}

fn validate_layout(nnz: usize, ncol_idx: usize, row_starts: &[usize], n: usize) -> Result<()> {
    if ncol_idx != nnz {
        return Err(MatError::MalformedStructure(format!(
            "column_indices has length {ncol_idx}, values has length {nnz}"
        )));
    }
    let expected = n.checked_add(1).ok_or_else(|| {
        MatError::MalformedStructure(format!("dimension {n} leaves no room for row_starts"))
    })?;
    if row_starts.len() != expected {
        return Err(MatError::MalformedStructure(format!(
            "row_starts has length {}, expected n + 1 = {expected}",
            row_starts.len()
        )));
    }
    if row_starts[0] != 0 {
        return Err(MatError::MalformedStructure("row_starts[0] must be 0".into()));
    }
    if row_starts[n] != nnz {
        return Err(MatError::MalformedStructure(format!(
            "row_starts[n] = {} does not match nnz = {nnz}",
            row_starts[n]
        )));
    }
    if let Some(i) = row_starts.windows(2).position(|w| w[0] > w[1]) {
        return Err(MatError::MalformedStructure(format!(
            "row_starts decreases at row {i}"
        )));
    }
    Ok(())
}

/// Compute y = B x.
///
/// # Panics
/// If `x` or `y` has the wrong length, or if a stored column index is out of
/// bounds (`CsrMatrix::new` does not scan columns; see [`CheckFlags::COLUMN_BOUNDS`]).
impl MatVec<Vec<f64>> for CsrMatrix {
    fn matvec(&self, x: &Vec<f64>, y: &mut Vec<f64>) {
        assert_eq!(self.ncols(), x.len(), "Input vector x has incorrect length");
        assert_eq!(self.nrows(), y.len(), "Output vector y has incorrect length");
        for (i, yi) in y.iter_mut().enumerate() {
            *yi = self.row(i).iter().map(|(j, v)| v * x[j]).sum();
        }
    }
}

impl Indexing for CsrMatrix {
    fn nrows(&self) -> usize {
        self.n
    }
}

impl MatShape for CsrMatrix {
    fn nrows(&self) -> usize {
        self.n
    }
    fn ncols(&self) -> usize {
        self.n
    }
}
