//! # Structural Validation
//!
//! Recursive descent over a [`Schema`] and an untyped
//! [`serde_json::Value`], matching each node kind against the runtime
//! kind of the input.
//!
//! ## Contract
//!
//! Validation never fails on malformed input. Every deviation becomes a
//! [`Violation`] with a path from the document root, and the pass either
//! collects all of them or, with `fail_fast`, stops at the first.
//!
//! - Objects: required fields must be present. Undeclared keys are
//!   reported after the declared fields in strict mode and ignored in
//!   permissive mode.
//! - Arrays: the minimum length is checked before the elements.
//! - Literals and enums: exact equality, no coercion. A value of the
//!   wrong type is still an `EnumViolation`.
//! - Scalars: the JSON kind must match exactly. `"1"` is not a number.
//! - Unions: accepted if any alternative accepts. Otherwise, if the input
//!   kind fits no alternative, one `TypeMismatch` lists the expected
//!   kinds. If some alternatives fit the kind, one `UnionMismatch` carries
//!   the first diagnostic of the closest one (fewest violations, earliest
//!   declared on ties).
//!
//! Validation is a pure function of (schema, input, options): the same
//! call always yields the same violations in the same order.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::node::{Field, Kind, Literal, NodeSpec, Schema, SchemaDefinitionError};
use crate::options::ValidationOptions;
use crate::violation::{FieldPath, ValidationViolations, Violation, ViolationKind};

/// Error during schema validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaValidationError {
    /// The document did not conform to the schema.
    #[error("validation failed against schema '{schema_name}':\n{violations}")]
    ValidationFailed {
        /// Name of the schema that was validated against.
        schema_name: String,
        /// Structured list of individual violations.
        violations: ValidationViolations,
    },

    /// The schema table itself is malformed.
    #[error("invalid schema definition: {0}")]
    SchemaDefinition(#[from] SchemaDefinitionError),

    /// The document file could not be loaded or parsed.
    #[error("document load error for '{path}': {reason}")]
    DocumentLoadError {
        /// Path to the document that failed to load.
        path: String,
        /// Reason the document could not be loaded.
        reason: String,
    },

    /// The exported JSON Schema could not be compiled.
    #[error("validator build error for schema '{schema_name}': {reason}")]
    ValidatorBuildError { schema_name: String, reason: String },

    /// The document passed structural validation but does not decode into
    /// the typed model.
    #[error("document conforms to '{schema_name}' but cannot be decoded: {reason}")]
    TypedDecode { schema_name: String, reason: String },
}

impl SchemaValidationError {
    /// The violations of a `ValidationFailed` error.
    pub fn violations(&self) -> Option<&ValidationViolations> {
        match self {
            Self::ValidationFailed { violations, .. } => Some(violations),
            _ => None,
        }
    }
}

/// Run the structural pass and return every violation found.
pub fn check(schema: &Schema, value: &Value, options: &ValidationOptions) -> ValidationViolations {
    let mut walker = Walker::new(*options);
    walker.visit(schema.root(), value);
    if options.fail_fast {
        walker.violations.truncate(1);
    }
    tracing::debug!(
        schema = schema.name(),
        strictness = %options.strictness,
        fail_fast = options.fail_fast,
        violations = walker.violations.len(),
        "structural validation finished"
    );
    walker.violations.into()
}

/// Validate `value` and decode it into `T`.
///
/// # Errors
///
/// [`SchemaValidationError::ValidationFailed`] if the structural pass finds
/// violations, [`SchemaValidationError::TypedDecode`] if `T` rejects a
/// conforming value.
pub fn validate<T: DeserializeOwned>(
    schema: &Schema,
    value: &Value,
    options: &ValidationOptions,
) -> Result<T, SchemaValidationError> {
    Validator::new(schema, *options).validate(value)
}

/// A schema paired with the options for validating against it.
///
/// Cheap to copy; the schema is borrowed, never mutated, and may be shared
/// by any number of validators on any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'s> {
    schema: &'s Schema,
    options: ValidationOptions,
}

impl<'s> Validator<'s> {
    pub fn new(schema: &'s Schema, options: ValidationOptions) -> Self {
        Self { schema, options }
    }

    pub fn schema(&self) -> &'s Schema {
        self.schema
    }

    pub fn options(&self) -> ValidationOptions {
        self.options
    }

    /// Structural violations of `value`; empty if it conforms.
    pub fn check(&self, value: &Value) -> ValidationViolations {
        check(self.schema, value, &self.options)
    }

    /// Structural validation only.
    pub fn validate_value(&self, value: &Value) -> Result<(), SchemaValidationError> {
        let violations = self.check(value);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(SchemaValidationError::ValidationFailed {
                schema_name: self.schema.name().to_string(),
                violations,
            })
        }
    }

    /// Structural validation followed by decoding into `T`.
    pub fn validate<T: DeserializeOwned>(&self, value: &Value) -> Result<T, SchemaValidationError> {
        self.validate_value(value)?;
        <T as Deserialize>::deserialize(value).map_err(|e| SchemaValidationError::TypedDecode {
            schema_name: self.schema.name().to_string(),
            reason: e.to_string(),
        })
    }
}

struct Walker {
    options: ValidationOptions,
    path: FieldPath,
    violations: Vec<Violation>,
}

impl Walker {
    fn new(options: ValidationOptions) -> Self {
        Self {
            options,
            path: FieldPath::root(),
            violations: Vec::new(),
        }
    }

    fn halted(&self) -> bool {
        self.options.fail_fast && !self.violations.is_empty()
    }

    fn report(&mut self, kind: ViolationKind, message: impl Into<String>) {
        self.violations
            .push(Violation::new(self.path.clone(), kind, message));
    }

    fn type_mismatch(&mut self, expected: &str, value: &Value) {
        self.report(
            ViolationKind::TypeMismatch,
            format!("expected {expected}, got {}", json_kind(value)),
        );
    }

    fn visit(&mut self, node: &NodeSpec, value: &Value) {
        match node.kind() {
            Kind::Object(fields) => self.visit_object(fields, value),
            Kind::Array { element, min_len } => self.visit_array(element, *min_len, value),
            Kind::String if !value.is_string() => self.type_mismatch("string", value),
            Kind::Number if !value.is_number() => self.type_mismatch("number", value),
            Kind::Boolean if !value.is_boolean() => self.type_mismatch("boolean", value),
            Kind::Null if !value.is_null() => self.type_mismatch("null", value),
            Kind::Literal(expected) if !expected.matches(value) => self.report(
                ViolationKind::EnumViolation,
                format!("expected {expected}, got {}", render_scalar(value)),
            ),
            Kind::Enum(members) if !members.iter().any(|m| m.matches(value)) => self.report(
                ViolationKind::EnumViolation,
                format!(
                    "expected one of {{{}}}, got {}",
                    join_literals(members),
                    render_scalar(value)
                ),
            ),
            Kind::Union(alternatives) => self.visit_union(alternatives, value),
            _ => {}
        }
    }

    fn visit_object(&mut self, fields: &[Field], value: &Value) {
        let Some(map) = value.as_object() else {
            return self.type_mismatch("object", value);
        };
        for field in fields {
            if self.halted() {
                return;
            }
            match map.get(&field.name) {
                Some(child) => {
                    self.path.push_field(field.name.as_str());
                    self.visit(&field.spec, child);
                    self.path.pop();
                }
                None if field.required => {
                    self.path.push_field(field.name.as_str());
                    self.report(ViolationKind::MissingField, "missing required field");
                    self.path.pop();
                }
                None => {}
            }
        }
        if !self.options.is_strict() {
            return;
        }
        for key in map.keys() {
            if self.halted() {
                return;
            }
            if !fields.iter().any(|f| &f.name == key) {
                self.path.push_field(key.as_str());
                self.report(ViolationKind::UnexpectedField, "field is not declared by the schema");
                self.path.pop();
            }
        }
    }

    fn visit_array(&mut self, element: &NodeSpec, min_len: Option<usize>, value: &Value) {
        let Some(items) = value.as_array() else {
            return self.type_mismatch("array", value);
        };
        if let Some(min) = min_len {
            if items.len() < min {
                self.report(
                    ViolationKind::LengthViolation,
                    format!("expected at least {min} element(s), got {}", items.len()),
                );
            }
        }
        for (i, item) in items.iter().enumerate() {
            if self.halted() {
                return;
            }
            self.path.push_index(i);
            self.visit(element, item);
            self.path.pop();
        }
    }

    fn visit_union(&mut self, alternatives: &[NodeSpec], value: &Value) {
        let candidates: Vec<(usize, &NodeSpec)> = alternatives
            .iter()
            .enumerate()
            .filter(|(_, alt)| accepts_kind(alt, value))
            .collect();
        if candidates.is_empty() {
            let expected: Vec<String> = alternatives.iter().map(expected_label).collect();
            return self.type_mismatch(&expected.join(" or "), value);
        }

        let mut closest: Option<(usize, Vec<Violation>)> = None;
        for (index, alt) in candidates {
            let mut trial = Walker {
                options: self.options.with_fail_fast(false),
                path: self.path.clone(),
                violations: Vec::new(),
            };
            trial.visit(alt, value);
            if trial.violations.is_empty() {
                return;
            }
            let closer = closest
                .as_ref()
                .map_or(true, |(_, best)| trial.violations.len() < best.len());
            if closer {
                closest = Some((index, trial.violations));
            }
        }

        let Some((index, violations)) = closest else {
            return;
        };
        let detail = violations
            .first()
            .map(|v| format!("{}: {}", v.path, v.message))
            .unwrap_or_default();
        self.report(
            ViolationKind::UnionMismatch,
            format!(
                "matches no alternative; closest is #{} ({}), which fails at {detail}",
                index + 1,
                expected_label(&alternatives[index])
            ),
        );
    }
}

/// Runtime kind of a JSON value.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn literal_kind(literal: &Literal) -> &'static str {
    match literal {
        Literal::String(_) => "string",
        Literal::Integer(_) => "number",
        Literal::Bool(_) => "boolean",
    }
}

/// True if the top-level kind of `value` is one `node` could accept.
fn accepts_kind(node: &NodeSpec, value: &Value) -> bool {
    let kind = json_kind(value);
    match node.kind() {
        Kind::Object(_) => kind == "object",
        Kind::Array { .. } => kind == "array",
        Kind::String => kind == "string",
        Kind::Number => kind == "number",
        Kind::Boolean => kind == "boolean",
        Kind::Null => kind == "null",
        Kind::Literal(l) => literal_kind(l) == kind,
        Kind::Enum(members) => members.iter().any(|m| literal_kind(m) == kind),
        Kind::Union(alts) => alts.iter().any(|a| accepts_kind(a, value)),
    }
}

fn expected_label(node: &NodeSpec) -> String {
    match node.kind() {
        Kind::Literal(l) => l.to_string(),
        Kind::Enum(members) => format!("one of {{{}}}", join_literals(members)),
        Kind::Union(alts) => alts.iter().map(expected_label).collect::<Vec<_>>().join(" or "),
        _ => node.kind_name().to_string(),
    }
}

fn join_literals(members: &[Literal]) -> String {
    members
        .iter()
        .map(Literal::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::Array(_) | Value::Object(_) => json_kind(value).to_string(),
        scalar => scalar.to_string(),
    }
}
