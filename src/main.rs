//! Entity Builder
//!
//! Builds content entity field definitions from TOML manifests.

use clap::Parser;
use entity_builder_cli::{Cli, execute};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG takes precedence over --verbose
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(command = ?cli.command, "starting");

    let mut stdout = std::io::stdout().lock();
    let ok = execute(&cli.command, &mut stdout)?;

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
