//! csvstore - CSV upload service with a single replaceable table
//!
//! Upload a CSV and the service replaces its one table with the file's
//! contents (all columns text, plus an auto-assigned integer identity), then
//! serves CRUD operations over the stored records.

pub mod cli;
pub mod http_server;
pub mod normalizer;
pub mod observability;
pub mod schema;
pub mod store;
