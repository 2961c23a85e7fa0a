//! # CSV Normalizer
//!
//! Turns raw uploaded bytes into a [`NormalizedTable`]: UTF-8 decode,
//! comma-delimited parse with a header row, header-name trimming, and a
//! missing-value filter that drops any row with an empty field.

pub mod errors;
pub mod parser;
pub mod table;

pub use errors::{NormalizeError, NormalizeResult};
pub use parser::normalize;
pub use table::NormalizedTable;
