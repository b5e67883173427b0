//! Generate new IDs.

use anyhow::Result;
use clap::Args;
use objid::{FormatSpec, ObjectId};

use crate::config::Config;
use crate::error::CliError;
use crate::output::print_lines;

/// Generate one or more random IDs.
#[derive(Debug, Args)]
pub struct NewCommand {
    /// Number of IDs to generate.
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Emit uppercase hex digits.
    #[arg(long)]
    upper: bool,
}

impl NewCommand {
    pub fn run(self, config: &Config) -> Result<()> {
        let ids = self.generate(config)?;
        print_lines(&ids, config.output);
        Ok(())
    }

    fn generate(&self, config: &Config) -> Result<Vec<String>> {
        if self.count == 0 {
            return Err(CliError::ZeroCount.into());
        }

        let mut spec = FormatSpec::parse(&config.format)?;
        if self.upper {
            spec = spec.uppercase();
        }

        Ok((0..self.count)
            .map(|_| ObjectId::generate().format_with(spec))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_count_and_layout() {
        let cmd = NewCommand {
            count: 5,
            upper: false,
        };
        let config = Config {
            format: "N".to_string(),
            ..Config::default()
        };

        let ids = cmd.generate(&config).unwrap();
        assert_eq!(ids.len(), 5);
        for id in &ids {
            assert_eq!(id.len(), 32);
            assert!(ObjectId::try_parse(id).is_some());
        }
    }

    #[test]
    fn test_generate_upper() {
        let cmd = NewCommand {
            count: 1,
            upper: true,
        };
        let ids = cmd.generate(&Config::default()).unwrap();
        assert_eq!(ids[0], ids[0].to_uppercase());
    }

    #[test]
    fn test_generate_rejects_zero() {
        let cmd = NewCommand {
            count: 0,
            upper: false,
        };
        assert!(cmd.generate(&Config::default()).is_err());
    }
}
