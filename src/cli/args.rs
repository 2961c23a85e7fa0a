//! CLI argument definitions using clap.
//!
//! Commands:
//! - csvstore serve --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// csvstore - CSV upload service with a single-table store
#[derive(Parser, Debug)]
#[command(name = "csvstore")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./csvstore.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_default_config_path() {
        let cli = Cli::try_parse_from(["csvstore", "serve"]).unwrap();
        let Command::Serve { config } = cli.command;
        assert_eq!(config, PathBuf::from("./csvstore.json"));
    }

    #[test]
    fn test_serve_explicit_config_path() {
        let cli = Cli::try_parse_from(["csvstore", "serve", "--config", "/etc/csvstore.json"])
            .unwrap();
        let Command::Serve { config } = cli.command;
        assert_eq!(config, PathBuf::from("/etc/csvstore.json"));
    }

    #[test]
    fn test_missing_subcommand_is_an_error() {
        assert!(Cli::try_parse_from(["csvstore"]).is_err());
    }
}
