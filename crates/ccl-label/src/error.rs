//! Error types for ccl-label

use thiserror::Error;

/// Errors that can occur while configuring a labeling run
///
/// The algorithms themselves are pure and infallible once their inputs are
/// constructed; errors arise only from caller-facing configuration.
#[derive(Debug, Error)]
pub enum LabelError {
    /// Connectivity value other than 4 or 8
    #[error("invalid connectivity: {0} (expected 4 or 8)")]
    InvalidConnectivity(u32),

    /// Unknown algorithm selector
    #[error("unknown algorithm: '{0}' (expected two_pass, union_find, kruskal or prim)")]
    UnknownAlgorithm(String),
}

/// Result type for labeling configuration
pub type LabelResult<T> = Result<T, LabelError>;
