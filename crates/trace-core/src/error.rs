// File: crates/trace-core/src/error.rs
// Summary: Error type for dataset construction and configuration checks.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChartError {
    /// Sample at `index` is earlier than its predecessor.
    #[error("sample {index} is out of time order")]
    Unordered { index: usize },

    #[error("invalid chart configuration: {0}")]
    InvalidConfig(String),
}
