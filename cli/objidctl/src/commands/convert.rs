//! Convert a loosely-typed value into an ID.

use anyhow::Result;
use clap::{Args, ValueEnum};
use objid::{ConvertInput, ObjectId};
use serde::Serialize;
use tracing::debug;

use crate::config::Config;
use crate::error::CliError;
use crate::output::{print_json, OutputFormat};

/// Shape the value is handed to the converter as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum InputKind {
    /// The UTF-8 bytes of the value.
    Bytes,
    /// Hex-decoded bytes (32 hex digits give 16 raw bytes).
    Hex,
    /// The value as a character array.
    Chars,
    /// The value as a string.
    Str,
    /// The value as an arbitrary displayable object.
    Other,
    /// No value at all.
    Null,
}

impl InputKind {
    const fn name(self) -> &'static str {
        match self {
            InputKind::Bytes => "bytes",
            InputKind::Hex => "hex",
            InputKind::Chars => "chars",
            InputKind::Str => "str",
            InputKind::Other => "other",
            InputKind::Null => "null",
        }
    }
}

/// Convert a value using the loosely-typed conversion rules.
#[derive(Debug, Args)]
pub struct ConvertCommand {
    /// How to interpret the value.
    #[arg(long, value_enum, default_value_t = InputKind::Str)]
    kind: InputKind,

    /// Culture name passed through to the text branches.
    #[arg(long)]
    culture: Option<String>,

    /// The value to convert.
    value: Option<String>,
}

#[derive(Debug, Serialize)]
struct ConvertedView {
    kind: &'static str,
    id: ObjectId,
}

impl ConvertCommand {
    pub fn run(self, config: &Config) -> Result<()> {
        let id = self.convert()?;

        match config.output {
            OutputFormat::Json => print_json(&ConvertedView {
                kind: self.kind.name(),
                id,
            }),
            OutputFormat::Text => println!("{}", id.format(&config.format)?),
        }

        Ok(())
    }

    fn convert(&self) -> Result<ObjectId> {
        let culture = self.culture.as_deref();
        debug!(kind = self.kind.name(), culture, "converting value");

        if self.kind == InputKind::Null {
            return Ok(ObjectId::convert_from_with(ConvertInput::Null, culture)?);
        }

        let value = self
            .value
            .as_deref()
            .ok_or(CliError::MissingValue(self.kind.name()))?;

        let id = match self.kind {
            InputKind::Bytes => ObjectId::convert_from_with(value.as_bytes(), culture)?,
            InputKind::Hex => {
                let bytes = hex::decode(value).map_err(CliError::from)?;
                ObjectId::convert_from_with(&bytes, culture)?
            }
            InputKind::Chars => {
                let chars: Vec<char> = value.chars().collect();
                ObjectId::convert_from_with(&chars, culture)?
            }
            InputKind::Str => ObjectId::convert_from_with(value, culture)?,
            InputKind::Other | InputKind::Null => {
                ObjectId::convert_from_with(ConvertInput::other(&value), culture)?
            }
        };

        Ok(id)
    }
}
