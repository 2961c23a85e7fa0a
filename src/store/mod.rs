//! # Table Store
//!
//! Owns the single named table. Each ingest destroys and recreates the table
//! from the uploaded data's synthesized schema, then bulk-loads the rows with
//! identities assigned 1..N in source order. The [`RecordAccess`] handle
//! shares the same table for read/update/delete operations keyed by identity.
//!
//! Concurrency: one `RwLock` guards the table. Every operation is a single
//! lock acquisition and therefore individually atomic; nothing orders
//! operations across requests, so concurrent ingests are last-writer-wins.

pub mod errors;
pub mod records;
pub mod table_store;

pub use errors::{StoreError, StoreResult};
pub use records::{MutationOutcome, RecordAccess, StoredRecord};
pub use table_store::{IngestReport, TableDescription, TableStore, TABLE_NAME};
