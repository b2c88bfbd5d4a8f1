//! CLI argument definitions using clap
//!
//! Commands:
//! - itemd serve [--config <path>] [--port <port>] [--database-url <url>]
//! - itemd check-config [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// itemd - CRUD HTTP service for items
#[derive(Parser, Debug)]
#[command(name = "itemd")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Connect to the database and serve the item API
    Serve {
        /// Path to configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to listen on, overriding the config file
        #[arg(long)]
        port: Option<u16>,

        /// PostgreSQL connection URL, overriding the config file
        #[arg(long)]
        database_url: Option<String>,
    },

    /// Validate the configuration and print it with secrets masked
    CheckConfig {
        /// Path to configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
