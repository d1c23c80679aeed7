//! Error types for ccl-bench

use thiserror::Error;

/// Errors that can occur during a benchmark run
#[derive(Debug, Error)]
pub enum BenchError {
    /// An algorithm disagreed on the component count
    #[error("inconsistent result from {algorithm}: expected {expected} components, got {actual}")]
    Inconsistent {
        algorithm: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Core grid error (e.g. invalid synthetic grid dimensions)
    #[error("core error: {0}")]
    Core(#[from] ccl_core::Error),

    /// I/O error while writing a report
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for benchmark operations
pub type BenchResult<T> = Result<T, BenchError>;
