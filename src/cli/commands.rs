//! CLI command implementations
//!
//! `serve` boots in a fixed order: configuration, logging, database, listener.
//! A failure at any step is fatal and no traffic is served.

use std::path::Path;

use crate::http_server::HttpServer;
use crate::observability::init_logging;
use crate::store::PgItemStore;

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::write_json;

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve {
            config,
            port,
            database_url,
        } => serve(config.as_deref(), port, database_url),
        Command::CheckConfig { config } => check_config(config.as_deref()),
    }
}

/// Connect to the database and serve the item API until shutdown
pub fn serve(
    config_path: Option<&Path>,
    port: Option<u16>,
    database_url: Option<String>,
) -> CliResult<()> {
    let config = Config::load_or_default(config_path)?.with_overrides(port, database_url);
    config.validate()?;

    init_logging(config.log_format).map_err(CliError::boot_failed)?;

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        let store = PgItemStore::connect(&config.database)
            .await
            .map_err(|e| CliError::boot_failed(format!("Could not connect to database: {}", e)))?;

        let server = HttpServer::new(&config.http, store.clone())
            .map_err(|e| CliError::config_error(e.to_string()))?;

        let result = server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)));

        store.close().await;
        result
    })
}

/// Validate the configuration and print it with secrets masked
pub fn check_config(config_path: Option<&Path>) -> CliResult<()> {
    let config = Config::load_or_default(config_path)?;
    config.validate()?;
    write_json(&config.redacted())
}
