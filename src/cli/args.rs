//! CLI argument definitions using clap
//!
//! Commands:
//! - cms serve [--config <path>] [--host <host>] [--port <port>]
//! - cms check-config --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// cms - Course management API server
#[derive(Parser, Debug)]
#[command(name = "cms")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP API server
    Serve {
        /// Path to JSON configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the bind host
        #[arg(long)]
        host: Option<String>,

        /// Override the bind port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Load and validate a configuration file, then print it
    CheckConfig {
        /// Path to JSON configuration file
        #[arg(long, default_value = "./cms.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
