//! Structured logging for csvstore.

pub mod logger;

pub use logger::{Logger, Severity};
