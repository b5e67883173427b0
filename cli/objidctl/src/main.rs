//! objidctl (objid) - CLI for objid identifiers
//!
//! Generates, parses, reformats, compares, and converts IDs from the shell.

use anyhow::Result;
use clap::Parser;

mod commands;
mod config;
mod error;
mod logging;
mod output;

use commands::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();

    logging::init(&config.log_filter)?;

    if let Err(e) = cli.run(config) {
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
