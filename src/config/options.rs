//! Options for the multiply kernel and for CSR construction.
//!
//! `KernelOptions` selects how `kernel::multiply_with` schedules the row loop,
//! and `CheckFlags` selects the O(nnz) structure checks run by
//! `CsrMatrix::with_checks`. The O(N) length and row-pointer checks always run.

use bitflags::bitflags;

bitflags! {
    /// Optional structure checks applied when assembling a `CsrMatrix`.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct CheckFlags: u32 {
        /// Every column index lies in `[0, n)`.
        const COLUMN_BOUNDS = 0b0000_0001;
        /// Column indices strictly increase within each row.
        const SORTED_ROWS   = 0b0000_0010;
        const CANONICAL     = Self::COLUMN_BOUNDS.bits() | Self::SORTED_ROWS.bits();
    }
}

impl Default for CheckFlags {
    fn default() -> Self {
        CheckFlags::empty()
    }
}

/// Scheduling parameters for the diagonal-scaling kernel.
#[derive(Debug, Clone)]
pub struct KernelOptions {
    /// Minimum nnz before the row loop is split across rayon workers.
    pub parallel_threshold: usize,

    /// Row chunks handed out per worker thread
    pub chunks_per_thread: usize,

    /// Reject a non-canonical right operand instead of passing its structure through.
    pub verify_canonical: bool,
}

impl Default for KernelOptions {
    fn default() -> Self {
        Self {
            parallel_threshold: 1 << 16,
            chunks_per_thread: 4,
            verify_canonical: false,
        }
    }
}

impl KernelOptions {
    /// Options that always take the single-threaded path.
    pub fn serial() -> Self {
        Self { parallel_threshold: usize::MAX, ..Self::default() }
    }

    /// Options that take the parallel path whenever the `rayon` feature is on.
    pub fn parallel() -> Self {
        Self { parallel_threshold: 0, ..Self::default() }
    }
}
