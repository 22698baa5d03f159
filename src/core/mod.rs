//! Core traits shared by the matrix types, and their impls for dense `faer` types.

pub mod traits;
pub mod wrappers;
pub use traits::{Indexing, MatShape, MatVec};
