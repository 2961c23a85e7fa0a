//! Normalizer error types.

use thiserror::Error;

/// Result type for normalizer operations
pub type NormalizeResult<T> = Result<T, NormalizeError>;

/// Errors raised while normalizing uploaded CSV content.
///
/// All of these are malformed-input errors: they propagate to the caller
/// rather than degrading to an empty result.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// Upload bytes are not valid UTF-8
    #[error("upload is not valid UTF-8: {0}")]
    Decode(#[from] std::str::Utf8Error),

    /// Underlying CSV reader failure
    #[error("CSV parse error: {0}")]
    Parse(String),

    /// Empty input or no header row
    #[error("CSV has no header row")]
    NoHeader,

    /// Two header names trim to the same column name
    #[error("duplicate column name: {0}")]
    DuplicateColumn(String),
}

impl From<csv::Error> for NormalizeError {
    fn from(err: csv::Error) -> Self {
        NormalizeError::Parse(err.to_string())
    }
}
