//! CLI commands.

mod compare;
mod convert;
mod new;
mod parse;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::{Config, FORMAT_ENV, LOG_ENV, OUTPUT_ENV};
use crate::output::OutputFormat;

/// objid CLI - Generate, inspect, and convert typed IDs.
#[derive(Debug, Parser)]
#[command(name = "objid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, env = OUTPUT_ENV, value_enum, ignore_case = true)]
    output: Option<OutputFormat>,

    /// Default format token (D, N, B, P, U, X).
    #[arg(long, global = true, env = FORMAT_ENV)]
    format: Option<String>,

    /// Log filter directive.
    #[arg(long, global = true, env = LOG_ENV)]
    log: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate new IDs.
    New(new::NewCommand),

    /// Parse an ID and show its representations.
    Parse(parse::ParseCommand),

    /// Convert a loosely-typed value into an ID.
    Convert(convert::ConvertCommand),

    /// Compare two IDs.
    Compare(compare::CompareCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Resolve configuration from the global flags and their environment fallbacks.
    pub fn config(&self) -> Config {
        Config::default().with_overrides(self.format.clone(), self.output, self.log.clone())
    }

    /// Run the CLI command.
    pub fn run(self, config: Config) -> Result<()> {
        match self.command {
            Commands::New(cmd) => cmd.run(&config),
            Commands::Parse(cmd) => cmd.run(&config),
            Commands::Convert(cmd) => cmd.run(&config),
            Commands::Compare(cmd) => cmd.run(&config),
            Commands::Version => {
                println!("objid {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::try_parse_from(["objid", "--output", "json", "new", "-n", "3"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert!(matches!(cli.command, Commands::New(_)));
        assert_eq!(cli.config().output, OutputFormat::Json);
    }

    #[test]
    fn test_unknown_output_format_rejected() {
        let err = Cli::try_parse_from(["objid", "--output", "jsn", "new"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn test_output_flag_reads_environment() {
        let output = Cli::command()
            .get_arguments()
            .find(|arg| arg.get_id() == "output")
            .and_then(|arg| arg.get_env().map(|env| env.to_os_string()));
        assert_eq!(output.as_deref(), Some(std::ffi::OsStr::new(OUTPUT_ENV)));
    }

    #[test]
    fn test_parse_global_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["objid", "parse", "--format", "N", "abc"]).unwrap();
        assert_eq!(cli.format.as_deref(), Some("N"));
        assert!(matches!(cli.command, Commands::Parse(_)));
    }

    #[test]
    fn test_compare_requires_two_ids() {
        assert!(Cli::try_parse_from(["objid", "compare", "only-one"]).is_err());
    }

    #[test]
    fn test_convert_kind_values() {
        let cli = Cli::try_parse_from(["objid", "convert", "--kind", "hex", "00ff"]).unwrap();
        assert!(matches!(cli.command, Commands::Convert(_)));
        assert!(Cli::try_parse_from(["objid", "convert", "--kind", "float", "1"]).is_err());
    }
}
