//! # Violations
//!
//! A [`Violation`] is one path-addressed reason why an input does not
//! conform to a schema. Violations are data, never panics or early
//! returns: the validator collects them into [`ValidationViolations`].
//!
//! Paths are rendered as `location.lat` or `sensors.humidity[0].unit`,
//! with `(root)` for the document itself. [`FieldPath::to_pointer`]
//! gives the JSON Pointer form (`/sensors/humidity/0/unit`).

use std::fmt;

use serde::{Serialize, Serializer};

use crate::rules::RuleId;

/// One step from a parent value to a child value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Field(String),
    Index(usize),
}

/// Location of a value inside an input document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FieldPath(Vec<PathSegment>);

impl FieldPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub fn push_field(&mut self, name: impl Into<String>) {
        self.0.push(PathSegment::Field(name.into()));
    }

    pub fn push_index(&mut self, index: usize) {
        self.0.push(PathSegment::Index(index));
    }

    pub fn pop(&mut self) {
        self.0.pop();
    }

    /// A copy of this path extended by one field.
    pub fn field(&self, name: impl Into<String>) -> Self {
        let mut child = self.clone();
        child.push_field(name);
        child
    }

    /// A copy of this path extended by one array index.
    pub fn index(&self, index: usize) -> Self {
        let mut child = self.clone();
        child.push_index(index);
        child
    }

    /// RFC 6901 JSON Pointer. The root is the empty string.
    pub fn to_pointer(&self) -> String {
        let mut out = String::new();
        for segment in &self.0 {
            out.push('/');
            match segment {
                PathSegment::Field(name) => {
                    out.push_str(&name.replace('~', "~0").replace('/', "~1"))
                }
                PathSegment::Index(i) => out.push_str(&i.to_string()),
            }
        }
        out
    }

    /// The schema path addressing this location: indices become `[]`.
    pub fn schema_path(&self) -> String {
        let mut out = String::new();
        for segment in &self.0 {
            match segment {
                PathSegment::Field(name) => {
                    if !out.is_empty() {
                        out.push('.');
                    }
                    out.push_str(name);
                }
                PathSegment::Index(_) => out.push_str("[]"),
            }
        }
        out
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("(root)");
        }
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Field(name) if i == 0 => f.write_str(name)?,
                PathSegment::Field(name) => write!(f, ".{name}")?,
                PathSegment::Index(idx) => write!(f, "[{idx}]")?,
            }
        }
        Ok(())
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Category of a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// A required object key is absent.
    MissingField,
    /// An undeclared key is present under strict mode.
    UnexpectedField,
    /// The runtime kind of the input does not match the expected kind.
    TypeMismatch,
    /// A scalar is not among the allowed literal values.
    EnumViolation,
    /// An array is shorter than its minimum length.
    LengthViolation,
    /// No alternative of a union matched.
    UnionMismatch,
    /// A cross-field rule evaluated after structural validation failed.
    BusinessRule(RuleId),
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField => f.write_str("missing field"),
            Self::UnexpectedField => f.write_str("unexpected field"),
            Self::TypeMismatch => f.write_str("type mismatch"),
            Self::EnumViolation => f.write_str("enum violation"),
            Self::LengthViolation => f.write_str("length violation"),
            Self::UnionMismatch => f.write_str("union mismatch"),
            Self::BusinessRule(rule) => write!(f, "rule {rule}"),
        }
    }
}

/// A single validation violation with structured context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Location of the offending value in the input.
    pub path: FieldPath,
    pub kind: ViolationKind,
    /// Human-readable description of the violation.
    pub message: String,
}

impl Violation {
    pub fn new(path: FieldPath, kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            path,
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  {}: {}", self.path, self.message)
    }
}

/// Collection of validation violations, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationViolations {
    violations: Vec<Violation>,
}

impl ValidationViolations {
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }

    /// Violations whose rendered path equals `path` (e.g. `"location.lat"`).
    pub fn at<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a Violation> + 'a {
        self.violations
            .iter()
            .filter(move |v| v.path.to_string() == path)
    }

    /// True if a violation of `kind` was reported at `path`.
    pub fn contains(&self, kind: ViolationKind, path: &str) -> bool {
        self.at(path).any(|v| v.kind == kind)
    }

    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

impl From<Vec<Violation>> for ValidationViolations {
    fn from(violations: Vec<Violation>) -> Self {
        Self { violations }
    }
}

impl IntoIterator for ValidationViolations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationViolations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

impl fmt::Display for ValidationViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn humidity_unit_path() -> FieldPath {
        let mut path = FieldPath::root();
        path.push_field("sensors");
        path.push_field("humidity");
        path.push_index(0);
        path.push_field("unit");
        path
    }

    #[test]
    fn test_path_display() {
        assert_eq!(humidity_unit_path().to_string(), "sensors.humidity[0].unit");
        assert_eq!(FieldPath::root().to_string(), "(root)");
        assert_eq!(FieldPath::root().field("location").field("lat").to_string(), "location.lat");
    }

    #[test]
    fn test_path_pointer() {
        assert_eq!(humidity_unit_path().to_pointer(), "/sensors/humidity/0/unit");
        assert_eq!(FieldPath::root().to_pointer(), "");
        assert_eq!(FieldPath::root().field("a/b~c").to_pointer(), "/a~1b~0c");
    }

    #[test]
    fn test_schema_path_strips_indices() {
        assert_eq!(humidity_unit_path().schema_path(), "sensors.humidity[].unit");
        assert_eq!(FieldPath::root().field("cam").index(2).schema_path(), "cam[]");
    }

    #[test]
    fn test_violation_display_format() {
        let v = Violation::new(
            FieldPath::root().field("state").field("open"),
            ViolationKind::TypeMismatch,
            "expected boolean or null, got string",
        );
        assert_eq!(v.to_string(), "  state.open: expected boolean or null, got string");
    }

    #[test]
    fn test_violation_display_root() {
        let v = Violation::new(
            FieldPath::root(),
            ViolationKind::TypeMismatch,
            "expected object, got array",
        );
        assert!(v.to_string().contains("(root)"));
    }

    #[test]
    fn test_violation_serializes_path_as_string() {
        let v = Violation::new(humidity_unit_path(), ViolationKind::EnumViolation, "bad unit");
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["path"], "sensors.humidity[0].unit");
        assert_eq!(json["kind"], "enum_violation");
    }

    #[test]
    fn test_collection_lookup() {
        let violations = ValidationViolations::from(vec![
            Violation::new(
                FieldPath::root().field("space"),
                ViolationKind::MissingField,
                "missing",
            ),
            Violation::new(FieldPath::root().field("url"), ViolationKind::TypeMismatch, "bad"),
        ]);
        assert_eq!(violations.len(), 2);
        assert!(violations.contains(ViolationKind::MissingField, "space"));
        assert!(!violations.contains(ViolationKind::MissingField, "url"));
        assert_eq!(violations.at("url").count(), 1);
        assert_eq!(violations.to_string().lines().count(), 2);
    }
}
