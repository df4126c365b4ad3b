//! Error types for forest operations.

use thiserror::Error;

/// Errors that can occur during forest operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ForestError {
    /// The SHA-256 search key was empty.
    #[error("target digest is empty")]
    EmptyTargetDigest,

    /// The SHA-256 search key was not 32 bytes wide.
    #[error("target digest must be 32 bytes, got {0}")]
    TargetDigestLength(usize),
}

/// Convenience alias for forest results.
pub type ForestResult<T> = Result<T, ForestError>;
