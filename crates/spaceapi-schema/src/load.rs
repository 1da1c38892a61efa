//! # Document Loading
//!
//! Parses JSON or YAML text into an untyped [`serde_json::Value`] for the
//! validator. The format is chosen by file extension: `.yaml` and `.yml`
//! are YAML, everything else is JSON.
//!
//! YAML is converted node by node. Only the JSON-compatible subset is
//! accepted: mapping keys must be strings, numbers or booleans, and tags
//! are dropped.

use std::fmt;
use std::path::Path;

use serde_json::Value;

use crate::validate::SchemaValidationError;
use crate::violation::FieldPath;

/// Text serialization of a status document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DocumentFormat {
    #[default]
    Json,
    Yaml,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("JSON"),
            Self::Yaml => f.write_str("YAML"),
        }
    }
}

/// Parse `content` as `format`. `origin` names the source in errors.
pub fn parse_document(
    content: &str,
    format: DocumentFormat,
    origin: &str,
) -> Result<Value, SchemaValidationError> {
    let load_error = |reason: String| SchemaValidationError::DocumentLoadError {
        path: origin.to_string(),
        reason,
    };
    match format {
        DocumentFormat::Json => {
            serde_json::from_str(content).map_err(|e| load_error(format!("invalid JSON: {e}")))
        }
        DocumentFormat::Yaml => {
            let yaml: serde_yaml::Value = serde_yaml::from_str(content)
                .map_err(|e| load_error(format!("invalid YAML: {e}")))?;
            yaml_to_json_value(&yaml)
                .map_err(|e| load_error(format!("YAML-to-JSON conversion failed: {e}")))
        }
    }
}

/// Read and parse a document file, choosing the format by extension.
pub fn load_document(path: &Path) -> Result<Value, SchemaValidationError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        SchemaValidationError::DocumentLoadError {
            path: path.display().to_string(),
            reason: format!("cannot read file: {e}"),
        }
    })?;
    let format = DocumentFormat::from_path(path);
    tracing::trace!(path = %path.display(), %format, bytes = content.len(), "loaded document");
    parse_document(&content, format, &path.display().to_string())
}

/// Convert a YAML node tree into a JSON value.
///
/// Errors name the offending node by its path from the document root,
/// e.g. `at sensors.wind[0]: mapping key ... is not a scalar`.
pub fn yaml_to_json_value(yaml: &serde_yaml::Value) -> Result<Value, String> {
    let mut at = FieldPath::root();
    convert(yaml, &mut at).map_err(|reason| format!("at {at}: {reason}"))
}

/// On error `at` is left pointing at the node that failed.
fn convert(node: &serde_yaml::Value, at: &mut FieldPath) -> Result<Value, String> {
    use serde_yaml::Value as Yaml;

    Ok(match node {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(*b),
        Yaml::String(s) => Value::String(s.clone()),
        Yaml::Number(n) => json_number(n)?,
        Yaml::Tagged(tagged) => convert(&tagged.value, at)?,
        Yaml::Sequence(items) => {
            let mut out = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                at.push_index(i);
                out.push(convert(item, at)?);
                at.pop();
            }
            Value::Array(out)
        }
        Yaml::Mapping(entries) => {
            let mut out = serde_json::Map::with_capacity(entries.len());
            for (key, value) in entries {
                let key = mapping_key(key)?;
                at.push_field(key.clone());
                let converted = convert(value, at)?;
                at.pop();
                out.insert(key, converted);
            }
            Value::Object(out)
        }
    })
}

fn json_number(n: &serde_yaml::Number) -> Result<Value, String> {
    if let Some(i) = n.as_i64() {
        return Ok(Value::from(i));
    }
    if let Some(u) = n.as_u64() {
        return Ok(Value::from(u));
    }
    n.as_f64()
        .and_then(serde_json::Number::from_f64)
        .map(Value::Number)
        .ok_or_else(|| format!("number {n} has no JSON representation"))
}

fn mapping_key(key: &serde_yaml::Value) -> Result<String, String> {
    match key {
        serde_yaml::Value::String(s) => Ok(s.clone()),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        other => Err(format!(
            "mapping key {} is not a scalar",
            serde_yaml::to_string(other)
                .map(|s| s.trim_end().replace('\n', " "))
                .unwrap_or_else(|_| "<unprintable>".to_string())
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DocumentFormat::from_path(Path::new("space.yaml")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("space.yml")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("space.json")), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_path(Path::new("status")), DocumentFormat::Json);
    }

    #[test]
    fn test_yaml_matches_json() {
        let yaml = r#"
api: "0.13"
state:
  open: ~
location:
  lat: 50.7
  lon: 7
cam:
  - https://example.org/cam.jpg
"#;
        let value = parse_document(yaml, DocumentFormat::Yaml, "inline").unwrap();
        assert_eq!(
            value,
            json!({
                "api": "0.13",
                "state": { "open": null },
                "location": { "lat": 50.7, "lon": 7 },
                "cam": ["https://example.org/cam.jpg"]
            })
        );
    }

    #[test]
    fn test_unquoted_version_stays_a_number() {
        let value = parse_document("api: 0.13\n", DocumentFormat::Yaml, "inline").unwrap();
        assert!(value["api"].is_number());
    }

    #[test]
    fn test_invalid_json_is_a_load_error() {
        let err = parse_document("{ \"api\": ", DocumentFormat::Json, "broken.json").unwrap_err();
        match err {
            SchemaValidationError::DocumentLoadError { path, reason } => {
                assert_eq!(path, "broken.json");
                assert!(reason.starts_with("invalid JSON"));
            }
            other => panic!("expected DocumentLoadError, got {other}"),
        }
    }

    #[test]
    fn test_sequence_keys_are_rejected() {
        let err = parse_document("? [a, b]\n: 1\n", DocumentFormat::Yaml, "keys.yaml").unwrap_err();
        assert!(err.to_string().contains("at (root): mapping key"), "{err}");
    }

    #[test]
    fn test_conversion_error_names_the_node() {
        let yaml = "sensors:\n  wind:\n    - properties:\n        ? [gust, speed]\n        : 1\n";
        let err = parse_document(yaml, DocumentFormat::Yaml, "wind.yaml").unwrap_err();
        let message = err.to_string();
        assert!(
            message.contains("at sensors.wind[0].properties: mapping key"),
            "{message}"
        );
    }

    #[test]
    fn test_nan_has_no_json_form() {
        let err = parse_document("api: .nan\n", DocumentFormat::Yaml, "nan.yaml").unwrap_err();
        assert!(err.to_string().contains("at api: number"), "{err}");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_document(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, SchemaValidationError::DocumentLoadError { .. }));
    }
}
