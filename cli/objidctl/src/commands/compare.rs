//! Compare two IDs.

use std::cmp::Ordering;

use anyhow::Result;
use clap::Args;
use objid::ObjectId;

use crate::config::Config;
use crate::output::{print_json, OutputFormat};

/// Compare two IDs by their byte order.
#[derive(Debug, Args)]
pub struct CompareCommand {
    /// First ID.
    left: String,

    /// Second ID.
    right: String,
}

impl CompareCommand {
    pub fn run(self, config: &Config) -> Result<()> {
        let left = ObjectId::parse(&self.left)?;
        let right = ObjectId::parse(&self.right)?;
        let relation = relation_name(left.compare(&right));

        match config.output {
            OutputFormat::Json => print_json(&serde_json::json!({
                "left": left,
                "right": right,
                "relation": relation,
            })),
            OutputFormat::Text => println!("{}", relation),
        }

        Ok(())
    }
}

fn relation_name(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "less",
        Ordering::Equal => "equal",
        Ordering::Greater => "greater",
    }
}
