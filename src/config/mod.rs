//! Configuration: kernel scheduling options and construction checks.

pub mod options;
pub use options::{CheckFlags, KernelOptions};
