//! Configuration for the CLI.
//!
//! Every setting has a global flag with an environment variable fallback
//! (resolved by clap), and a default when neither is given.

use crate::output::OutputFormat;

/// Environment variable holding the default format token.
pub const FORMAT_ENV: &str = "OBJID_FORMAT";

/// Environment variable selecting `text` or `json` output.
pub const OUTPUT_ENV: &str = "OBJID_OUTPUT";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "OBJID_LOG";

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Format token used when a command does not specify one.
    pub format: String,

    /// Output format.
    pub output: OutputFormat,

    /// Log filter (e.g. `warn`, `objid=debug`).
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: "D".to_string(),
            output: OutputFormat::Text,
            log_filter: "warn".to_string(),
        }
    }
}

impl Config {
    /// Apply values given on the command line or through the environment.
    pub fn with_overrides(
        mut self,
        format: Option<String>,
        output: Option<OutputFormat>,
        log_filter: Option<String>,
    ) -> Self {
        if let Some(format) = format {
            self.format = format;
        }
        if let Some(output) = output {
            self.output = output;
        }
        if let Some(log_filter) = log_filter {
            self.log_filter = log_filter;
        }
        self
    }
}
