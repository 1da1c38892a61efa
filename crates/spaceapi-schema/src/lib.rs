//! # spaceapi-schema — Structural Validation of SpaceAPI Documents
//!
//! Validates untyped JSON/YAML values against the SpaceAPI 0.13 schema and
//! decodes conforming documents into the typed model of `spaceapi-core`.
//!
//! ## Layers
//!
//! - [`node`]: the schema tree ([`NodeSpec`], [`Schema`]) and its
//!   construction-time checks.
//! - [`table`]: the SpaceAPI 0.13 field graph, built once per process.
//! - [`docs`]: help texts keyed by schema path, kept apart from the table.
//! - [`validate`]: the generic structural validator.
//! - [`rules`]: cross-field business rules over the decoded document.
//! - [`space_api`]: [`SpaceApiValidator`], the load/validate/decode/rules
//!   pipeline.
//! - [`export`]: the table rendered as a Draft 2020-12 JSON Schema.
//!
//! ## Example
//!
//! ```no_run
//! use spaceapi_schema::{DocumentFormat, SpaceApiValidator, ValidationOptions};
//!
//! let validator = SpaceApiValidator::new(ValidationOptions::default())?;
//! match validator.validate_str("{}", DocumentFormat::Json) {
//!     Ok(doc) => println!("{} is valid", doc.space),
//!     Err(err) => eprintln!("{err}"),
//! }
//! # Ok::<(), spaceapi_schema::SchemaValidationError>(())
//! ```
//!
//! ## Crate Policy
//!
//! - Depends only on `spaceapi-core` internally.
//! - Malformed input is reported as violations, never as a panic.
//! - The schema table is immutable after construction and shared freely
//!   across threads.

pub mod docs;
pub mod export;
pub mod load;
pub mod node;
pub mod options;
pub mod rules;
pub mod space_api;
pub mod table;
pub mod validate;
pub mod violation;

pub use export::{compile_json_schema, to_json_schema};
pub use load::{load_document, parse_document, DocumentFormat};
pub use node::{Kind, Literal, NodeSpec, Schema, SchemaDefinitionError};
pub use options::{ConfigError, Strictness, ValidationOptions};
pub use rules::{DocumentRule, RuleId, RuleSet};
pub use space_api::SpaceApiValidator;
pub use table::{space_api_v013, SCHEMA_NAME};
pub use validate::{check, validate, SchemaValidationError, Validator};
pub use violation::{FieldPath, PathSegment, ValidationViolations, Violation, ViolationKind};
