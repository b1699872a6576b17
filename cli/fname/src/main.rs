//! fname - CLI for friendly workload names
//!
//! Builds friendly names for images and workload instances, sanitizes raw
//! identifiers, and checks names against DNS label and subdomain rules.

use anyhow::Result;
use clap::Parser;

mod commands;
mod config;
mod error;
mod logging;
mod output;

use commands::Cli;
use config::Config;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error::print_error(&e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config_path())?;
    logging::init(&config.log_level, cli.log_json());

    tracing::debug!(format = ?config.format, "configuration loaded");

    cli.run(config)
}
