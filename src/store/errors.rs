//! Store error types.
//!
//! These are the loud failures: schema synthesis rejections during ingest and
//! invalid update requests. Absent-table and absent-record conditions are not
//! errors; they surface through return values (`Option`, empty `Vec`,
//! [`MutationOutcome`](super::records::MutationOutcome)).

use thiserror::Error;

use crate::schema::SchemaError;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by the table store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Schema synthesis rejected the uploaded columns
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// A bulk-loaded row does not match the table's column count
    #[error("row {row} has {got} values but the table has {expected} columns")]
    RowArity {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// An update patch names a column the table does not have
    #[error("unknown column: {0}")]
    UnknownColumn(String),

    /// An update patch tries to change the identity column
    #[error("the identity column cannot be updated")]
    IdentityImmutable,
}
