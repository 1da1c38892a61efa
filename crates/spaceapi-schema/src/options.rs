//! # Validation Configuration
//!
//! [`ValidationOptions`] selects how a validation pass behaves:
//!
//! - `strictness`: `permissive` (default) ignores undeclared object keys,
//!   `strict` reports each one as `UnexpectedField`.
//! - `fail_fast`: stop at the first violation instead of collecting all
//!   of them (default `false`).
//! - `business_rules`: run the cross-field rule layer after structural
//!   validation succeeds (default `true`).
//!
//! Options come from three layers, later layers overriding earlier ones:
//! defaults, a YAML file (`from_yaml_file`), and environment variables
//! (`overlay_env`):
//!
//! - `SPACEAPI_STRICTNESS`: `strict` or `permissive`
//! - `SPACEAPI_FAIL_FAST`: boolean
//! - `SPACEAPI_BUSINESS_RULES`: boolean
//!
//! Booleans accept `true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Treatment of object keys the schema does not declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strictness {
    Strict,
    #[default]
    Permissive,
}

impl Strictness {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Permissive => "permissive",
        }
    }
}

impl fmt::Display for Strictness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strictness {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(Self::Strict),
            "permissive" => Ok(Self::Permissive),
            other => Err(ConfigError::InvalidValue {
                key: "strictness".to_string(),
                value: other.to_string(),
                expected: "strict or permissive",
            }),
        }
    }
}

/// Options for one validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationOptions {
    pub strictness: Strictness,
    pub fail_fast: bool,
    pub business_rules: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            strictness: Strictness::Permissive,
            fail_fast: false,
            business_rules: true,
        }
    }
}

pub const ENV_STRICTNESS: &str = "SPACEAPI_STRICTNESS";
pub const ENV_FAIL_FAST: &str = "SPACEAPI_FAIL_FAST";
pub const ENV_BUSINESS_RULES: &str = "SPACEAPI_BUSINESS_RULES";

impl ValidationOptions {
    /// Defaults with `strictness = strict`.
    pub fn strict() -> Self {
        Self {
            strictness: Strictness::Strict,
            ..Self::default()
        }
    }

    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    pub fn with_business_rules(mut self, enabled: bool) -> Self {
        self.business_rules = enabled;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strictness == Strictness::Strict
    }

    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().overlay_env()
    }

    /// Override fields from `SPACEAPI_*` environment variables that are set.
    pub fn overlay_env(self) -> Result<Self, ConfigError> {
        self.overlay_vars(|key| std::env::var(key).ok())
    }

    /// Override fields from a variable lookup. Unset variables leave the
    /// current value untouched.
    pub fn overlay_vars(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(raw) = lookup(ENV_STRICTNESS) {
            self.strictness = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: ENV_STRICTNESS.to_string(),
                value: raw.clone(),
                expected: "strict or permissive",
            })?;
        }
        if let Some(raw) = lookup(ENV_FAIL_FAST) {
            self.fail_fast = parse_bool(ENV_FAIL_FAST, &raw)?;
        }
        if let Some(raw) = lookup(ENV_BUSINESS_RULES) {
            self.business_rules = parse_bool(ENV_BUSINESS_RULES, &raw)?;
        }
        Ok(self)
    }

    /// Parse options from YAML. Missing keys keep their defaults.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| ConfigError::Parse {
            source_name: "<inline>".to_string(),
            reason: e.to_string(),
        })
    }

    /// Load options from a YAML file.
    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_yaml_str(&content).map_err(|e| match e {
            ConfigError::Parse { reason, .. } => ConfigError::Parse {
                source_name: path.display().to_string(),
                reason,
            },
            other => other,
        })
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw.to_string(),
            expected: "a boolean (true/false, 1/0, yes/no, on/off)",
        }),
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: expected {expected}")]
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },
    #[error("cannot read config file '{path}': {reason}")]
    Read { path: String, reason: String },
    #[error("invalid config in '{source_name}': {reason}")]
    Parse { source_name: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let opts = ValidationOptions::default();
        assert_eq!(opts.strictness, Strictness::Permissive);
        assert!(!opts.fail_fast);
        assert!(opts.business_rules);
        assert!(ValidationOptions::strict().is_strict());
    }

    #[test]
    fn test_overlay_vars() {
        let opts = ValidationOptions::default()
            .overlay_vars(vars(&[(ENV_STRICTNESS, "strict"), (ENV_FAIL_FAST, "YES")]))
            .unwrap();
        assert_eq!(opts.strictness, Strictness::Strict);
        assert!(opts.fail_fast);
        assert!(opts.business_rules);
    }

    #[test]
    fn test_overlay_rejects_garbage() {
        let err = ValidationOptions::default()
            .overlay_vars(vars(&[(ENV_BUSINESS_RULES, "maybe")]))
            .unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidValue { ref key, .. } if key == ENV_BUSINESS_RULES)
        );

        let err = ValidationOptions::default()
            .overlay_vars(vars(&[(ENV_STRICTNESS, "lenient")]))
            .unwrap_err();
        assert!(err.to_string().contains("strict or permissive"));
    }

    #[test]
    fn test_yaml_partial_keeps_defaults() {
        let opts = ValidationOptions::from_yaml_str("strictness: strict\n").unwrap();
        assert_eq!(opts, ValidationOptions::strict());
        assert_eq!(ValidationOptions::from_yaml_str("").unwrap(), ValidationOptions::default());
    }

    #[test]
    fn test_yaml_rejects_unknown_keys() {
        let err = ValidationOptions::from_yaml_str("strictnes: strict\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spaceapi.yaml");
        std::fs::write(&path, "fail_fast: true\nbusiness_rules: false\n").unwrap();
        let opts = ValidationOptions::from_yaml_file(&path).unwrap();
        assert!(opts.fail_fast);
        assert!(!opts.business_rules);
        assert_eq!(opts.strictness, Strictness::Permissive);

        let missing = ValidationOptions::from_yaml_file(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(missing, ConfigError::Read { .. }));
    }

    #[test]
    fn test_strictness_from_str() {
        assert_eq!("strict".parse::<Strictness>().unwrap(), Strictness::Strict);
        assert!("Strict".parse::<Strictness>().is_err());
    }
}
