//! Error types for ID parsing, formatting, and conversion.

use thiserror::Error;

/// Errors that can occur when parsing, formatting, or converting IDs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The input is not a valid identifier representation.
    #[error("invalid ID '{input}': {reason}")]
    Format { input: String, reason: String },

    /// A comparison was attempted against a value of another type.
    #[error("object must be of type {expected}")]
    InvalidArgument { expected: &'static str },

    /// The input shape cannot be converted into an ID.
    #[error("cannot convert {source_kind} to {target}")]
    UnsupportedConversion {
        source_kind: &'static str,
        target: &'static str,
    },

    /// The destination buffer cannot hold the formatted ID.
    #[error("buffer too small: need {required}, have {available}")]
    InsufficientBuffer { required: usize, available: usize },

    /// The format token is not one of the supported layouts.
    #[error("unknown format specifier '{0}'")]
    UnknownFormat(String),
}

/// Longest input echoed back in a [`IdError::Format`], in characters.
const MAX_INPUT_PREVIEW: usize = 64;

impl IdError {
    pub(crate) fn format(input: &[u8], reason: impl ToString) -> Self {
        IdError::Format {
            input: preview(input),
            reason: reason.to_string(),
        }
    }

    /// Returns true if this error indicates malformed identifier text.
    pub fn is_format_error(&self) -> bool {
        matches!(self, IdError::Format { .. })
    }

    /// Returns true if this error indicates an unsupported conversion input.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, IdError::UnsupportedConversion { .. })
    }
}

fn preview(input: &[u8]) -> String {
    // A UTF-8 char is at most 4 bytes.
    let head = &input[..input.len().min(MAX_INPUT_PREVIEW * 4)];
    let text = String::from_utf8_lossy(head);

    let mut preview: String = text.chars().take(MAX_INPUT_PREVIEW).collect();
    if head.len() < input.len() || text.chars().count() > MAX_INPUT_PREVIEW {
        preview.push_str("...");
    }
    preview
}
