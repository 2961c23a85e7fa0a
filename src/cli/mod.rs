//! CLI module for csvstore.
//!
//! Commands:
//! - serve: load configuration and run the HTTP server

pub mod args;
pub mod commands;
pub mod errors;

pub use args::{Cli, Command};
pub use commands::{load_config, run, serve};
pub use errors::{CliError, CliResult};
