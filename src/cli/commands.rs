//! CLI command dispatch.

use std::fs;
use std::path::Path;

use crate::http_server::{HttpServer, HttpServerConfig};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    match cli.command {
        Command::Serve { config } => serve(&config),
    }
}

/// Run the HTTP server with configuration loaded from `config_path`.
pub fn serve(config_path: &Path) -> CliResult<()> {
    let config = load_config(config_path)?;
    let server = HttpServer::with_config(config);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.start())?;

    Ok(())
}

/// Load server configuration from a JSON file.
///
/// An absent file is not an error; the defaults apply. An unreadable or
/// unparseable file is.
pub fn load_config(path: &Path) -> CliResult<HttpServerConfig> {
    if !path.exists() {
        return Ok(HttpServerConfig::default());
    }

    let text = fs::read_to_string(path)
        .map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))?;
    serde_json::from_str(&text)
        .map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))
}
