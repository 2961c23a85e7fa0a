//! Schema synthesis from normalized column names.

use super::errors::{SchemaError, SchemaResult};
use super::types::{ColumnDef, TableSchema, IDENTITY_COLUMN};

/// Synthesize a table schema from source column names.
///
/// Every source column is typed as text regardless of content; the reserved
/// identity column is prepended. A source column whose name matches the
/// identity column (ASCII case-insensitive) rejects the whole synthesis.
pub fn synthesize(columns: &[String]) -> SchemaResult<TableSchema> {
    let mut defs = Vec::with_capacity(columns.len() + 1);
    defs.push(ColumnDef::identity_column());

    for column in columns {
        if column.eq_ignore_ascii_case(IDENTITY_COLUMN) {
            return Err(SchemaError::IdentityCollision(column.clone()));
        }
        defs.push(ColumnDef::text(column.clone()));
    }

    Ok(TableSchema::new(defs))
}
