//! Error types for forest-entropy.
//!
//! All failures are local and synchronous. An operation that returns an
//! error has not mutated the value it was called on.

use thiserror::Error;

/// Main error type for histogram and sequence operations.
#[derive(Debug, Error)]
pub enum ForestError {
    /// A constructor or resize argument violates a precondition
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Bin index outside of `0..bins`
    #[error("Bin index {index} out of range for histogram with {bins} bins")]
    IndexOutOfRange { index: usize, bins: usize },

    /// Caller bookkeeping error, e.g. removing from an empty bin
    #[error("Precondition violated: {0}")]
    PreconditionViolation(String),

    /// Two sequences that must have equal length do not
    #[error("Length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Configuration (de)serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for ForestError {
    fn from(err: serde_json::Error) -> Self {
        ForestError::Serialization(err.to_string())
    }
}

/// Result type alias for forest-entropy operations
pub type Result<T> = std::result::Result<T, ForestError>;
