//! Schema synthesis error types.

use thiserror::Error;

use super::types::IDENTITY_COLUMN;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors raised while synthesizing a table schema.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// A source column name collides with the reserved identity column.
    ///
    /// The collision check is ASCII case-insensitive, so `ID` and `Id`
    /// are rejected along with `id`. Renaming silently would break
    /// round-trip fidelity, so the whole upload is rejected instead.
    #[error("column '{0}' collides with the reserved identity column '{IDENTITY_COLUMN}'")]
    IdentityCollision(String),
}
