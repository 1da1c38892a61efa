//! # SpaceAPI Document Validation
//!
//! [`SpaceApiValidator`] runs the full pipeline for a status document:
//!
//! 1. structural validation against the SpaceAPI 0.13 table,
//! 2. decoding into [`spaceapi_core::SpaceApi`],
//! 3. the business rules, when `business_rules` is enabled.
//!
//! Each stage runs only if the previous one succeeded, so a document with
//! structural violations never reaches the rules.

use std::path::Path;

use serde_json::Value;
use spaceapi_core::SpaceApi;

use crate::load::{load_document, parse_document, DocumentFormat};
use crate::node::Schema;
use crate::options::ValidationOptions;
use crate::rules::RuleSet;
use crate::table::space_api_v013;
use crate::validate::{SchemaValidationError, Validator};

/// Validator for SpaceAPI 0.13 status documents.
#[derive(Debug)]
pub struct SpaceApiValidator {
    validator: Validator<'static>,
    rules: RuleSet,
}

impl SpaceApiValidator {
    /// # Errors
    ///
    /// [`SchemaValidationError::SchemaDefinition`] if the schema table is
    /// malformed.
    pub fn new(options: ValidationOptions) -> Result<Self, SchemaValidationError> {
        Ok(Self {
            validator: Validator::new(space_api_v013()?, options),
            rules: RuleSet::space_api(),
        })
    }

    /// Replace the business rules evaluated after decoding.
    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    pub fn options(&self) -> ValidationOptions {
        self.validator.options()
    }

    pub fn schema(&self) -> &'static Schema {
        self.validator.schema()
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Validate an already-parsed document.
    pub fn validate_document(&self, value: &Value) -> Result<SpaceApi, SchemaValidationError> {
        let doc: SpaceApi = self.validator.validate(value)?;
        let options = self.options();
        if !options.business_rules {
            return Ok(doc);
        }
        let violations = self.rules.evaluate(&doc, options.fail_fast);
        tracing::debug!(
            space = %doc.space,
            rules = self.rules.len(),
            violations = violations.len(),
            "business rules evaluated"
        );
        if violations.is_empty() {
            Ok(doc)
        } else {
            Err(SchemaValidationError::ValidationFailed {
                schema_name: self.schema().name().to_string(),
                violations: violations.into(),
            })
        }
    }

    /// Parse `content` as `format`, then validate it.
    pub fn validate_str(
        &self,
        content: &str,
        format: DocumentFormat,
    ) -> Result<SpaceApi, SchemaValidationError> {
        let value = parse_document(content, format, "<input>")?;
        self.validate_document(&value)
    }

    /// Load a JSON or YAML file, then validate it.
    ///
    /// Violations are reported under the schema name followed by the file
    /// path.
    pub fn validate_file(&self, path: &Path) -> Result<SpaceApi, SchemaValidationError> {
        let value = load_document(path)?;
        self.validate_document(&value).map_err(|e| match e {
            SchemaValidationError::ValidationFailed {
                schema_name,
                violations,
            } => SchemaValidationError::ValidationFailed {
                schema_name: format!("{schema_name} ({})", path.display()),
                violations,
            },
            other => other,
        })
    }
}
