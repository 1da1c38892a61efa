//! # spaceapi-cli — Command-Line Tool for SpaceAPI Documents
//!
//! Provides the `spaceapi` command-line interface over `spaceapi-schema`.
//!
//! ## Subcommands
//!
//! - `spaceapi validate`: validate one or more JSON/YAML status documents.
//! - `spaceapi describe`: print the documentation of a schema path.
//! - `spaceapi schema`: print the SpaceAPI 0.13 table as a JSON Schema.
//!
//! ```bash
//! spaceapi validate status.json --strict
//! spaceapi validate site/*.yaml --format json --no-rules
//! spaceapi describe sensors.humidity[0].unit
//! spaceapi schema --strict > spaceapi-0.13.schema.json
//! ```

pub mod describe;
pub mod schema;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};
use spaceapi_schema::ValidationOptions;

/// Resolve validation options from the layered sources.
///
/// Defaults, then the YAML config file if one is given, then the
/// `SPACEAPI_*` environment variables. Command-line flags are applied by
/// the caller on top of the result.
pub fn resolve_options(config: Option<&Path>) -> Result<ValidationOptions> {
    let base = match config {
        Some(path) => ValidationOptions::from_yaml_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ValidationOptions::default(),
    };
    let options = base
        .overlay_env()
        .context("invalid SPACEAPI_* environment variable")?;
    tracing::debug!(?options, "resolved validation options");
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use spaceapi_schema::Strictness;

    #[test]
    fn resolve_options_reads_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spaceapi.yaml");
        std::fs::write(&path, "strictness: strict\nbusiness_rules: false\n").unwrap();
        let options = resolve_options(Some(&path)).unwrap();
        // SPACEAPI_* variables are not set by the test harness.
        assert_eq!(options.strictness, Strictness::Strict);
        assert!(!options.business_rules);
        assert!(!options.fail_fast);
    }

    #[test]
    fn resolve_options_missing_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve_options(Some(&dir.path().join("absent.yaml"))).unwrap_err();
        assert!(format!("{err:#}").contains("absent.yaml"));
    }

    #[test]
    fn resolve_options_rejects_unknown_config_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spaceapi.yaml");
        std::fs::write(&path, "strict: true\n").unwrap();
        assert!(resolve_options(Some(&path)).is_err());
    }
}
