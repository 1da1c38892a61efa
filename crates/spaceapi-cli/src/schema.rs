//! # Schema Subcommand
//!
//! Prints the SpaceAPI 0.13 table as a Draft 2020-12 JSON Schema, for
//! editors and for consumers in other languages.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;

use spaceapi_schema::{space_api_v013, to_json_schema, Strictness};

/// Arguments for the schema subcommand.
#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Close every object with `additionalProperties: false`.
    #[arg(long)]
    pub strict: bool,
}

impl SchemaArgs {
    fn strictness(&self) -> Strictness {
        if self.strict {
            Strictness::Strict
        } else {
            Strictness::Permissive
        }
    }
}

/// Execute the schema subcommand.
pub fn run_schema(args: &SchemaArgs) -> Result<u8> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_schema(args.strictness(), &mut out)?;
    Ok(0)
}

fn write_schema(strictness: Strictness, out: &mut impl Write) -> Result<()> {
    let schema = space_api_v013().context("SpaceAPI schema table is malformed")?;
    let rendered = to_json_schema(schema, strictness);
    serde_json::to_writer_pretty(&mut *out, &rendered).context("failed to serialize JSON Schema")?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(strictness: Strictness) -> serde_json::Value {
        let mut buf = Vec::new();
        write_schema(strictness, &mut buf).unwrap();
        serde_json::from_slice(&buf).unwrap()
    }

    #[test]
    fn schema_is_draft_2020_12() {
        let value = render(Strictness::Permissive);
        assert_eq!(value["$schema"], spaceapi_schema::export::DRAFT_2020_12);
        assert!(value["properties"]["state"].is_object());
        assert!(value.get("additionalProperties").is_none());
    }

    #[test]
    fn strict_schema_closes_objects() {
        let value = render(Strictness::Strict);
        assert_eq!(value["additionalProperties"], false);
        assert_eq!(value["properties"]["location"]["additionalProperties"], false);
    }
}
