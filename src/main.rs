//! prom2grafana - Prometheus to Grafana rule converter
//!
//! This binary reads a Prometheus rule file and emits the equivalent
//! Grafana rule groups as indented JSON.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use prom2grafana::{cli::Cli, pipeline, writer::Sink};

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Display only the outermost error: its message already embeds the cause.
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // Initialize logging
    prom2grafana::init_logging(&cli.log_level.to_string())?;

    debug!(version = env!("CARGO_PKG_VERSION"), "Starting prom2grafana");

    let settings = cli.into_settings()?;
    pipeline::run(&settings)?;

    if let Sink::File(path) = &settings.sink {
        println!(
            "Successfully translated Prometheus rules to Terraform Grafana rules in {}",
            path.display()
        );
    }

    Ok(())
}
