//! Output formatting for CLI commands.

use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one value per line.
    #[default]
    Text,
    /// JSON format.
    Json,
}

/// Print a single item as pretty JSON.
pub fn print_json<T: Serialize>(data: &T) {
    let json = serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string());
    println!("{}", json);
}

/// Print one line per item in text mode, or a JSON array otherwise.
pub fn print_lines<T: Serialize + std::fmt::Display>(data: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            for item in data {
                println!("{}", item);
            }
        }
        OutputFormat::Json => print_json(&data),
    }
}

/// Print a labelled field in text mode.
pub fn print_field(label: &str, value: impl std::fmt::Display) {
    println!("{} {}", format!("{label}:").bold(), value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_names() {
        assert_eq!(OutputFormat::from_str("json", true), Ok(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str("JSON", true), Ok(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str("text", false), Ok(OutputFormat::Text));
        assert!(OutputFormat::from_str("table", true).is_err());
    }
}
