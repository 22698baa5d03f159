//! diagcsr: diagonal × CSR sparse matrix multiplication
//!
//! Left-multiplying a compressed sparse row matrix `B` by a diagonal matrix `A`
//! scales row `i` of `B` by `A[i, i]` and leaves the sparsity pattern unchanged.
//! This crate exploits that in a single O(nnz) pass ([`kernel::multiply`]),
//! without the symbolic and accumulation phases of general sparse
//! multiplication. The row loop can be spread over rayon workers (feature
//! `rayon`, on by default).
//!
//! ```
//! use diagcsr::{CsrMatrix, DiagonalMatrix, multiply};
//!
//! let a = DiagonalMatrix::new(vec![2.0, 3.0]);
//! let b = CsrMatrix::new(vec![1.0, 4.0, 5.0], vec![0, 1, 1], vec![0, 2, 3], 2).unwrap();
//! let c = multiply(&a, &b).unwrap();
//! assert_eq!(c.values(), &[2.0, 8.0, 15.0]);
//! assert_eq!(c.column_indices(), b.column_indices());
//! ```

pub mod parallel;

pub mod config;
pub mod core;
pub mod error;
pub mod kernel;
pub mod matrix;

// Re-exports for convenience
pub use config::*;
pub use self::core::*;
pub use error::*;
pub use kernel::{multiply, multiply_serial, multiply_with};
pub use matrix::*;

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct ReadmeDoctests;
