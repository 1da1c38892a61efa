//! # Describe Subcommand
//!
//! Prints the documentation attached to a schema path. Concrete input
//! paths are accepted too: `sensors.humidity[0].unit` is looked up as
//! `sensors.humidity[].unit`.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use spaceapi_schema::docs;

/// Arguments for the describe subcommand.
#[derive(Args, Debug)]
pub struct DescribeArgs {
    /// Schema path to describe. Lists every documented path if omitted.
    pub path: Option<String>,
}

/// Execute the describe subcommand.
pub fn run_describe(args: &DescribeArgs) -> Result<u8> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match &args.path {
        Some(path) => describe_one(path, &mut out, &mut std::io::stderr()),
        None => {
            list_all(&mut out)?;
            Ok(0)
        }
    }
}

fn describe_one(path: &str, out: &mut impl Write, err: &mut impl Write) -> Result<u8> {
    let schema_path = normalize(path);
    match docs::describe(&schema_path) {
        Some(text) => {
            writeln!(out, "{schema_path}")?;
            writeln!(out, "  {text}")?;
            Ok(0)
        }
        None => {
            writeln!(err, "no documentation for '{schema_path}'")?;
            Ok(1)
        }
    }
}

fn list_all(out: &mut impl Write) -> Result<()> {
    let entries = docs::entries();
    let width = entries.iter().map(|e| e.path.len()).max().unwrap_or(0);
    for entry in &entries {
        writeln!(out, "{:<width$}  {}", entry.path, entry.text)?;
    }
    Ok(())
}

/// Replace array indices with `[]` and trim surrounding whitespace.
pub fn normalize(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut in_index = false;
    for c in path.trim().chars() {
        match c {
            '[' => {
                in_index = true;
                out.push_str("[]");
            }
            ']' if in_index => in_index = false,
            _ if in_index => {}
            _ => out.push(c),
        }
    }
    out
}
