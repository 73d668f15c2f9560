//! Logging/tracing initialization for the CLI.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

/// Build the env filter from `-q`/`-v` flags, letting `RUST_LOG` win.
pub fn env_filter(quiet: bool, verbose: u8) -> EnvFilter {
    let default = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install the stderr subscriber. Logs must never mix into the report
/// stream on stdout.
pub fn init(filter: EnvFilter) -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
        .context("failed to initialize logging")
}
