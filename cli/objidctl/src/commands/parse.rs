//! Parse an ID and show its representations.

use anyhow::Result;
use clap::Args;
use objid::ObjectId;
use serde::Serialize;

use crate::config::Config;
use crate::output::{print_field, print_json, OutputFormat};

/// Parse an ID in any supported layout.
#[derive(Debug, Args)]
pub struct ParseCommand {
    /// The ID text.
    id: String,
}

#[derive(Debug, Serialize)]
struct ParsedView {
    id: ObjectId,
    formatted: String,
    bytes: String,
    version: usize,
    nil: bool,
}

impl ParseCommand {
    pub fn run(self, config: &Config) -> Result<()> {
        let view = inspect(&self.id, &config.format)?;

        match config.output {
            OutputFormat::Json => print_json(&view),
            OutputFormat::Text => {
                print_field("id", view.id);
                print_field("formatted", &view.formatted);
                print_field("bytes", &view.bytes);
                print_field("version", view.version);
                print_field("nil", view.nil);
            }
        }

        Ok(())
    }
}

fn inspect(text: &str, token: &str) -> Result<ParsedView> {
    let id = ObjectId::parse(text)?;
    Ok(ParsedView {
        id,
        formatted: id.format(token)?,
        bytes: hex::encode(id.as_bytes()),
        version: id.uuid().get_version_num(),
        nil: id.is_nil(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inspect() {
        let view = inspect("{3FA85F64-5717-4562-B3FC-2C963F66AFA6}", "N").unwrap();
        assert_eq!(view.id.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
        assert_eq!(view.formatted, "3fa85f6457174562b3fc2c963f66afa6");
        assert_eq!(view.bytes, "3fa85f6457174562b3fc2c963f66afa6");
        assert_eq!(view.version, 4);
        assert!(!view.nil);
    }

    #[test]
    fn test_inspect_invalid() {
        let err = inspect("not-an-id", "D").unwrap_err();
        assert!(err
            .downcast_ref::<objid::IdError>()
            .is_some_and(objid::IdError::is_format_error));
    }
}
