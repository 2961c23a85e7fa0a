//! Table schema type definitions.
//!
//! Every synthesized table carries the same shape: the reserved integer
//! identity column first, then one text column per source column in source
//! order. No type inference is performed; all uploaded values are text.

use serde::{Deserialize, Serialize};

/// Reserved name of the synthetic auto-increment primary key column.
pub const IDENTITY_COLUMN: &str = "id";

/// Column data types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// 64-bit signed integer (identity column only)
    Integer,
    /// UTF-8 text (every source column)
    Text,
}

impl ColumnType {
    /// Returns the type name for responses and error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            ColumnType::Integer => "integer",
            ColumnType::Text => "text",
        }
    }
}

/// A single column definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
    /// Column name
    pub name: String,
    /// Column data type
    pub data_type: ColumnType,
    /// Whether this is the auto-assigned primary key
    pub identity: bool,
}

impl ColumnDef {
    /// The reserved identity column.
    pub fn identity_column() -> Self {
        Self {
            name: IDENTITY_COLUMN.to_string(),
            data_type: ColumnType::Integer,
            identity: true,
        }
    }

    /// A text column for a source column name.
    pub fn text(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: ColumnType::Text,
            identity: false,
        }
    }
}

/// Ordered schema for the stored table.
///
/// Invariant: the first column is always the identity column; the rest are
/// text columns in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    columns: Vec<ColumnDef>,
}

impl TableSchema {
    /// Build a schema from an identity column followed by source columns.
    pub(crate) fn new(columns: Vec<ColumnDef>) -> Self {
        debug_assert!(columns.first().map(|c| c.identity).unwrap_or(false));
        Self { columns }
    }

    /// All columns, identity first.
    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    /// Source column names in order, excluding the identity column.
    pub fn source_columns(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().filter(|c| !c.identity).map(|c| c.name.as_str())
    }

    /// Number of source columns (excluding identity).
    pub fn source_column_count(&self) -> usize {
        self.columns.len() - 1
    }

    /// Position of a source column, if present (0-based among source columns).
    pub fn source_index(&self, name: &str) -> Option<usize> {
        self.source_columns().position(|c| c == name)
    }

    /// Whether a column name refers to any column, identity included.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }
}
