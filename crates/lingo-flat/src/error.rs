//! Error types for the flattening crate.

use thiserror::Error;

/// Errors produced while reading or rebuilding translation documents.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FlatError {
    /// The input is not a well-formed JSON object.
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    /// The document parsed but holds no keys.
    #[error("empty JSON object")]
    EmptyDocument,

    /// A dotted key runs through a segment that already holds a leaf value.
    #[error("conflicting path for {key}: segment {segment:?} is not an object")]
    ConflictingPath { key: String, segment: String },

    /// Serialization failure.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for flattening results.
pub type FlatResult<T> = Result<T, FlatError>;
