use thiserror::Error;

// Unified error type for diagcsr

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatError {
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("malformed structure: {0}")]
    MalformedStructure(String),
    #[error("index {index} out of range for bound {bound}")]
    IndexOutOfRange { index: usize, bound: usize },
}

pub type Result<T> = std::result::Result<T, MatError>;
