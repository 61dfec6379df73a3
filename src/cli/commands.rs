//! CLI command implementations

use std::io::{self, Write};
use std::path::Path;

use tracing::info;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::init_logger;

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, host, port } => {
            let config = resolve_config(config.as_deref(), host, port)?;
            serve(config)
        }
        Command::CheckConfig { config } => check_config(&config, &mut io::stdout()),
    }
}

/// Load the config file (or defaults) and apply command-line overrides
pub fn resolve_config(
    path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
) -> CliResult<HttpServerConfig> {
    let mut config = match path {
        Some(path) => HttpServerConfig::load(path)?,
        None => HttpServerConfig::default(),
    };

    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    config.validate()?;
    Ok(config)
}

/// Start the HTTP server and block until it stops
pub fn serve(config: HttpServerConfig) -> CliResult<()> {
    init_logger(&config.log_level, config.log_format)?;

    info!(
        addr = %config.socket_addr(),
        log_format = %config.log_format,
        "starting course API"
    );

    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Validate a config file and write the effective config as JSON
pub fn check_config<W: Write>(path: &Path, out: &mut W) -> CliResult<()> {
    let config = HttpServerConfig::load(path)?;
    let json = serde_json::to_string_pretty(&config)?;
    writeln!(out, "{}", json)?;
    Ok(())
}
