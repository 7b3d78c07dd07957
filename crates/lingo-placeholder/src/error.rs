use thiserror::Error;

/// Errors produced by placeholder validation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PlaceholderError {
    /// The translation dropped a token present in the base string.
    #[error("missing required placeholder: {0}")]
    MissingPlaceholder(String),
}

impl PlaceholderError {
    /// The offending token, braces included.
    pub fn token(&self) -> &str {
        match self {
            Self::MissingPlaceholder(token) => token,
        }
    }
}

/// Convenience alias for placeholder results.
pub type PlaceholderResult<T> = Result<T, PlaceholderError>;
