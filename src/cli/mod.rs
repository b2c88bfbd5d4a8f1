//! CLI module for itemd
//!
//! Provides command-line interface for:
//! - serve: Connect to PostgreSQL and serve the item API
//! - check-config: Validate and print the effective configuration

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{check_config, run, run_command, serve};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::write_json;
