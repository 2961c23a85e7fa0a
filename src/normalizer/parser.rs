//! CSV parsing and row filtering.

use std::collections::HashSet;
use std::str;

use csv::ReaderBuilder;

use super::errors::{NormalizeError, NormalizeResult};
use super::table::NormalizedTable;

/// Normalize raw uploaded bytes into a table.
///
/// Ragged-row policy: a record with more fields than the header cannot be
/// aligned and is dropped; a record with fewer fields is padded with empty
/// trailing values and then removed by the missing-value filter. Header names
/// are trimmed; field values are kept verbatim.
pub fn normalize(content: &[u8]) -> NormalizeResult<NormalizedTable> {
    let text = str::from_utf8(content)?;

    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?;
    if headers.is_empty() {
        return Err(NormalizeError::NoHeader);
    }

    let columns: Vec<String> = headers.iter().map(|h| h.trim().to_string()).collect();
    if columns.iter().all(|c| c.is_empty()) {
        return Err(NormalizeError::NoHeader);
    }
    if columns.iter().any(|c| c.is_empty()) {
        return Err(NormalizeError::Parse(
            "empty column name in header row".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for column in &columns {
        if !seen.insert(column.as_str()) {
            return Err(NormalizeError::DuplicateColumn(column.clone()));
        }
    }

    let width = columns.len();
    let mut rows = Vec::new();

    for result in reader.records() {
        let record = result?;

        // Oversized records cannot be aligned with the header
        if record.len() > width {
            continue;
        }

        let mut row: Vec<String> = record.iter().map(|f| f.to_string()).collect();
        row.resize(width, String::new());

        if row.iter().any(|v| v.is_empty()) {
            continue;
        }

        rows.push(row);
    }

    Ok(NormalizedTable::new(columns, rows))
}
