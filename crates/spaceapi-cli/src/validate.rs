//! # Validate Subcommand
//!
//! Validates SpaceAPI status documents and reports the outcome per file.
//!
//! Options are layered: defaults, the `--config` YAML file, `SPACEAPI_*`
//! environment variables, then the flags given here. Flags only ever
//! tighten or switch off behaviour; they never restore a default that a
//! lower layer changed.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde::Serialize;

use spaceapi_core::{OpenStatus, SpaceApi};
use spaceapi_schema::{
    SchemaValidationError, SpaceApiValidator, Strictness, ValidationOptions, Violation,
};

use crate::resolve_options;

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Status documents to validate (`.json`, `.yaml` or `.yml`).
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Reject fields the schema does not declare.
    #[arg(long)]
    pub strict: bool,

    /// Stop at the first violation in each file.
    #[arg(long)]
    pub fail_fast: bool,

    /// Skip the business rules and check structure only.
    #[arg(long)]
    pub no_rules: bool,

    /// Report format.
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

impl ValidateArgs {
    /// Apply the command-line flags on top of `options`.
    pub fn apply(&self, mut options: ValidationOptions) -> ValidationOptions {
        if self.strict {
            options.strictness = Strictness::Strict;
        }
        if self.fail_fast {
            options.fail_fast = true;
        }
        if self.no_rules {
            options.business_rules = false;
        }
        options
    }
}

/// Output format of the validation report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

/// Outcome of validating one file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OpenStatus>,
    /// Set when the file could not be loaded or decoded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<Violation>,
}

impl FileReport {
    fn from_outcome(path: &Path, outcome: Result<SpaceApi, SchemaValidationError>) -> Self {
        let mut report = Self {
            path: path.display().to_string(),
            valid: false,
            space: None,
            status: None,
            error: None,
            violations: Vec::new(),
        };
        match outcome {
            Ok(doc) => {
                report.valid = true;
                report.status = Some(doc.state.status());
                report.space = Some(doc.space);
            }
            Err(SchemaValidationError::ValidationFailed { violations, .. }) => {
                report.violations = violations.into_inner();
            }
            Err(other) => report.error = Some(other.to_string()),
        }
        report
    }
}

/// Execute the validate subcommand.
///
/// Returns exit code 0 when every file is valid, 1 otherwise.
pub fn run_validate(args: &ValidateArgs, config: Option<&Path>) -> Result<u8> {
    let options = args.apply(resolve_options(config)?);
    let reports = validate_files(&args.files, options)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render(&reports, args.format, &mut out)?;

    let invalid = reports.iter().filter(|r| !r.valid).count();
    tracing::info!(files = reports.len(), invalid, "validation complete");
    Ok(if invalid == 0 { 0 } else { 1 })
}

/// Validate each file independently with the same options.
pub fn validate_files(files: &[PathBuf], options: ValidationOptions) -> Result<Vec<FileReport>> {
    let validator =
        SpaceApiValidator::new(options).context("failed to build the SpaceAPI validator")?;
    Ok(files
        .iter()
        .map(|path| {
            tracing::debug!(path = %path.display(), "validating");
            FileReport::from_outcome(path, validator.validate_file(path))
        })
        .collect())
}

/// Write the reports in the requested format.
pub fn render(reports: &[FileReport], format: ReportFormat, out: &mut impl Write) -> Result<()> {
    match format {
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, reports).context("failed to serialize report")?;
            writeln!(out)?;
        }
        ReportFormat::Text => {
            for report in reports {
                render_text(report, out)?;
            }
            let invalid = reports.iter().filter(|r| !r.valid).count();
            writeln!(out, "{} file(s) checked, {} invalid", reports.len(), invalid)?;
        }
    }
    Ok(())
}

fn render_text(report: &FileReport, out: &mut impl Write) -> Result<()> {
    if report.valid {
        let space = report.space.as_deref().unwrap_or_default();
        let status = match report.status {
            Some(OpenStatus::Open) => "open",
            Some(OpenStatus::Closed) => "closed",
            Some(OpenStatus::Unknown) | None => "status unknown",
        };
        writeln!(out, "OK    {} ({space}, {status})", report.path)?;
        return Ok(());
    }
    if let Some(error) = &report.error {
        writeln!(out, "ERROR {}: {error}", report.path)?;
        return Ok(());
    }
    writeln!(out, "FAIL  {} ({} violation(s))", report.path, report.violations.len())?;
    for violation in &report.violations {
        writeln!(out, "  [{}] {}: {}", violation.kind, violation.path, violation.message)?;
    }
    Ok(())
}
