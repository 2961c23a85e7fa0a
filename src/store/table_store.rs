//! Single-table store with replace-and-bulk-load semantics.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::normalizer::NormalizedTable;
use crate::schema::{synthesize, ColumnDef, TableSchema};

use super::errors::{StoreError, StoreResult};
use super::records::RecordAccess;

/// Fixed name of the one table this service owns.
pub const TABLE_NAME: &str = "uploaded_data";

/// The loaded table: schema plus rows keyed by identity.
///
/// Rows live in a `BTreeMap` so iteration returns identity order, which is
/// also source-row order since identities are assigned sequentially on load.
#[derive(Debug)]
pub(super) struct TableData {
    pub(super) schema: TableSchema,
    pub(super) rows: BTreeMap<i64, Vec<String>>,
    pub(super) loaded_at: DateTime<Utc>,
}

/// Summary of a completed ingest.
#[derive(Debug, Clone, Serialize)]
pub struct IngestReport {
    pub table: String,
    pub columns: usize,
    pub rows_loaded: usize,
}

/// Description of the currently loaded table.
#[derive(Debug, Clone, Serialize)]
pub struct TableDescription {
    pub table: String,
    pub columns: Vec<ColumnDef>,
    pub row_count: usize,
    pub loaded_at: String,
}

/// Handle to the service's single table.
///
/// Cheap to clone; all clones and [`RecordAccess`] handles share the same
/// underlying table.
#[derive(Debug, Clone)]
pub struct TableStore {
    name: String,
    inner: Arc<RwLock<Option<TableData>>>,
}

impl TableStore {
    /// Create an empty store (no table until the first ingest).
    pub fn new() -> Self {
        Self {
            name: TABLE_NAME.to_string(),
            inner: Arc::new(RwLock::new(None)),
        }
    }

    /// The fixed table name.
    pub fn table_name(&self) -> &str {
        &self.name
    }

    /// A record-access handle sharing this store's table.
    pub fn records(&self) -> RecordAccess {
        RecordAccess::new(Arc::clone(&self.inner))
    }

    /// Whether the table currently exists (false before the first ingest).
    pub fn exists(&self) -> bool {
        self.inner.read().unwrap().is_some()
    }

    /// Destroy the current table and load the normalized upload in its place.
    ///
    /// The destroy is unconditional: prior records are discarded even when a
    /// later step fails, in which case the store is left empty and the error
    /// is reported. Identities are assigned 1..N in source-row order.
    pub fn rebuild_and_load(&self, table: NormalizedTable) -> StoreResult<IngestReport> {
        let (columns, source_rows) = table.into_parts();

        let mut guard = self.inner.write().unwrap();
        *guard = None;

        let schema = synthesize(&columns)?;
        let width = schema.source_column_count();

        let mut rows = BTreeMap::new();
        for (index, row) in source_rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(StoreError::RowArity {
                    row: index + 1,
                    expected: width,
                    got: row.len(),
                });
            }
            rows.insert((index + 1) as i64, row);
        }

        let rows_loaded = rows.len();
        *guard = Some(TableData {
            schema,
            rows,
            loaded_at: Utc::now(),
        });

        Ok(IngestReport {
            table: self.name.clone(),
            columns: width,
            rows_loaded,
        })
    }

    /// Describe the current table, or `None` before the first ingest.
    pub fn describe(&self) -> Option<TableDescription> {
        let guard = self.inner.read().unwrap();
        guard.as_ref().map(|data| TableDescription {
            table: self.name.clone(),
            columns: data.schema.columns().to_vec(),
            row_count: data.rows.len(),
            loaded_at: data.loaded_at.to_rfc3339(),
        })
    }
}

impl Default for TableStore {
    fn default() -> Self {
        Self::new()
    }
}
