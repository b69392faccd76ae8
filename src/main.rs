//! Periodic Explorer CLI
//!
//! Command-line interface over the explorer core

use anyhow::Context;
use clap::Parser;
use periodic_explorer::cli::{load_cli_config, Cli, Runner};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_cli_config(&cli).context("failed to load configuration")?;

    // Initialize logging
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        config.log_level.into()
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let command = cli.command.name();
    Runner::with_config(cli, config)
        .run()
        .with_context(|| format!("{command} failed"))
}
