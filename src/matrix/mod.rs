//! Matrix module: the diagonal and CSR operand types, plus dense conversions.

pub mod dense;
pub mod diagonal;
pub mod sparse;
pub use diagonal::DiagonalMatrix;
pub use sparse::{CsrMatrix, RowView};
