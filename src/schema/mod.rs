//! # Schema Synthesizer
//!
//! Derives a [`TableSchema`] from normalized column names: one text column
//! per source column in source order, prefixed by the reserved auto-increment
//! integer identity column.

pub mod errors;
pub mod synthesizer;
pub mod types;

pub use errors::{SchemaError, SchemaResult};
pub use synthesizer::synthesize;
pub use types::{ColumnDef, ColumnType, TableSchema, IDENTITY_COLUMN};
