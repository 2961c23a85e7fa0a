//! Record access layer: read/update/delete keyed by identity.
//!
//! Every operation checks table existence first and fails softly when the
//! table is absent: `list` returns empty, `get` returns `None`, mutations
//! report [`MutationOutcome::TableMissing`]. Only malformed update patches
//! raise a [`StoreError`].

use std::sync::{Arc, RwLock};

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::schema::{TableSchema, IDENTITY_COLUMN};

use super::errors::{StoreError, StoreResult};
use super::table_store::TableData;

/// A persisted row: identity plus source-column text values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRecord {
    /// Auto-assigned identity
    pub id: i64,
    /// Source columns and their text values, in schema order
    pub fields: Vec<(String, String)>,
}

impl StoredRecord {
    fn from_row(schema: &TableSchema, id: i64, row: &[String]) -> Self {
        let fields = schema
            .source_columns()
            .zip(row.iter())
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect();
        Self { id, fields }
    }

    /// Value of a source column, if the record has it.
    pub fn value(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }
}

// Records serialize as flat JSON objects, identity first:
// {"id": 1, "name": "John", "age": "30"}
impl Serialize for StoredRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        map.serialize_entry(IDENTITY_COLUMN, &self.id)?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Result of an update or delete.
///
/// Distinguishes "nothing to apply it to" from success, instead of collapsing
/// both into a boolean: `TableMissing` means no table has been uploaded,
/// `RecordMissing` means the table exists but the identity does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// Exactly one record matched and was modified
    Applied,
    /// The table exists but no record has the given identity
    RecordMissing,
    /// No table has been uploaded yet
    TableMissing,
}

impl MutationOutcome {
    /// True iff the mutation modified a record.
    pub fn applied(&self) -> bool {
        matches!(self, MutationOutcome::Applied)
    }
}

/// Handle for record operations on the store's single table.
#[derive(Debug, Clone)]
pub struct RecordAccess {
    inner: Arc<RwLock<Option<TableData>>>,
}

impl RecordAccess {
    pub(super) fn new(inner: Arc<RwLock<Option<TableData>>>) -> Self {
        Self { inner }
    }

    /// All records, or only those whose column equals the given text value.
    ///
    /// Equality is exact and case-sensitive. Filtering on a column the table
    /// does not have yields an empty result, not an error. Filtering on the
    /// identity column compares the value parsed as an integer; an unparsable
    /// value matches nothing.
    pub fn list(&self, filter: Option<(&str, &str)>) -> Vec<StoredRecord> {
        let guard = self.inner.read().unwrap();
        let Some(data) = guard.as_ref() else {
            return Vec::new();
        };

        let records = data
            .rows
            .iter()
            .map(|(id, row)| StoredRecord::from_row(&data.schema, *id, row));

        match filter {
            None => records.collect(),
            Some((column, value)) if column == IDENTITY_COLUMN => match value.parse::<i64>() {
                Ok(id) => records.filter(|r| r.id == id).collect(),
                Err(_) => Vec::new(),
            },
            Some((column, value)) => {
                if data.schema.source_index(column).is_none() {
                    return Vec::new();
                }
                records.filter(|r| r.value(column) == Some(value)).collect()
            }
        }
    }

    /// The record with the given identity, or `None` if absent or the table
    /// is missing.
    pub fn get(&self, id: i64) -> Option<StoredRecord> {
        let guard = self.inner.read().unwrap();
        let data = guard.as_ref()?;
        data.rows
            .get(&id)
            .map(|row| StoredRecord::from_row(&data.schema, id, row))
    }

    /// Apply partial field updates to one record.
    ///
    /// The whole patch is validated against the schema before anything is
    /// modified, so a bad patch never partially applies. Patching the
    /// identity column or an unknown column is an error, not an outcome.
    pub fn update(&self, id: i64, fields: &[(String, String)]) -> StoreResult<MutationOutcome> {
        let mut guard = self.inner.write().unwrap();
        let Some(data) = guard.as_mut() else {
            return Ok(MutationOutcome::TableMissing);
        };

        let mut indices = Vec::with_capacity(fields.len());
        for (column, _) in fields {
            if column == IDENTITY_COLUMN {
                return Err(StoreError::IdentityImmutable);
            }
            match data.schema.source_index(column) {
                Some(index) => indices.push(index),
                None => return Err(StoreError::UnknownColumn(column.clone())),
            }
        }

        let Some(row) = data.rows.get_mut(&id) else {
            return Ok(MutationOutcome::RecordMissing);
        };

        for (index, (_, value)) in indices.into_iter().zip(fields.iter()) {
            row[index] = value.clone();
        }

        Ok(MutationOutcome::Applied)
    }

    /// Remove the record with the given identity.
    pub fn delete(&self, id: i64) -> MutationOutcome {
        let mut guard = self.inner.write().unwrap();
        let Some(data) = guard.as_mut() else {
            return MutationOutcome::TableMissing;
        };

        match data.rows.remove(&id) {
            Some(_) => MutationOutcome::Applied,
            None => MutationOutcome::RecordMissing,
        }
    }
}
