//! Error handling and display for the CLI.

use colored::Colorize;
use objid::IdError;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid hex input: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("a value is required for --kind {0}")]
    MissingValue(&'static str),

    #[error("count must be at least 1")]
    ZeroCount,
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(hint) = hint_for(err) {
        eprintln!("\n{}", format!("Hint: {hint}").yellow());
    }
}

fn hint_for(err: &anyhow::Error) -> Option<&'static str> {
    match err.downcast_ref::<IdError>()? {
        IdError::Format { .. } => {
            Some("IDs look like 3fa85f64-5717-4562-b3fc-2c963f66afa6 (braces, URN and no-dash forms also work).")
        }
        IdError::UnknownFormat(_) => Some("Supported format tokens are D, N, B, P, U and X."),
        IdError::UnsupportedConversion { .. } => Some(
            "Byte input must be exactly 16 raw bytes or valid ID text; other inputs must be valid ID text.",
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_for_id_errors() {
        let err = anyhow::Error::new(IdError::UnknownFormat("Q".to_string()));
        assert!(hint_for(&err).unwrap().contains("D, N, B, P, U and X"));

        let err = anyhow::Error::new(CliError::ZeroCount);
        assert!(hint_for(&err).is_none());
    }
}
