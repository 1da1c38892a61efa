//! # Node Specifications
//!
//! A schema is a tree of [`NodeSpec`]s. Each node has a [`Kind`]: one of
//! the scalar kinds, a fixed [`Literal`], an enumeration of literals, an
//! object with named fields, an array with an element specification, or a
//! union of alternatives.
//!
//! Node specifications carry no documentation. Help texts live in
//! [`crate::docs`], keyed by schema path, so the validator never touches
//! them.
//!
//! ## Schema Paths
//!
//! Nodes are addressed by dotted field names; `[]` descends into an array
//! element. `sensors.humidity[].unit` is the unit of every humidity
//! reading. The root is the empty path.
//!
//! ## Construction
//!
//! Trees are assembled with the builder functions in this module and
//! frozen by [`Schema::new`], which checks every structural invariant once
//! and fails with [`SchemaDefinitionError`] instead of deferring the
//! problem to validation time.

use std::collections::HashSet;
use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// A fixed scalar value an input must equal exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Literal {
    String(String),
    Integer(i64),
    Bool(bool),
}

impl Literal {
    /// Exact equality against a JSON value. No coercion: `"1"` never
    /// matches `1`, and `1.0` only matches if JSON stored it as an integer.
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::String(expected), Value::String(actual)) => expected == actual,
            (Self::Integer(expected), Value::Number(actual)) => actual.as_i64() == Some(*expected),
            (Self::Bool(expected), Value::Bool(actual)) => expected == actual,
            _ => false,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Self::String(s) => Value::String(s.clone()),
            Self::Integer(i) => Value::from(*i),
            Self::Bool(b) => Value::Bool(*b),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s:?}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for Literal {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// The shape a node accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum Kind {
    Object(Vec<Field>),
    Array {
        element: Box<NodeSpec>,
        min_len: Option<usize>,
    },
    String,
    Number,
    Boolean,
    Null,
    Literal(Literal),
    Enum(Vec<Literal>),
    Union(Vec<NodeSpec>),
}

/// A named child of an object node.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub spec: NodeSpec,
    pub required: bool,
}

/// One typed unit of the schema tree.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSpec {
    kind: Kind,
}

impl NodeSpec {
    pub fn new(kind: Kind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    /// Short name of the node kind, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            Kind::Object(_) => "object",
            Kind::Array { .. } => "array",
            Kind::String => "string",
            Kind::Number => "number",
            Kind::Boolean => "boolean",
            Kind::Null => "null",
            Kind::Literal(_) => "literal",
            Kind::Enum(_) => "enum",
            Kind::Union(_) => "union",
        }
    }

    /// Declared fields of an object node; empty for every other kind.
    pub fn fields(&self) -> &[Field] {
        match &self.kind {
            Kind::Object(fields) => fields,
            _ => &[],
        }
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields().iter().find(|f| f.name == name)
    }

    /// Element specification of an array node.
    pub fn element(&self) -> Option<&NodeSpec> {
        match &self.kind {
            Kind::Array { element, .. } => Some(element),
            _ => None,
        }
    }
}

/// Builder for object nodes.
#[derive(Debug, Clone, Default)]
pub struct ObjectSpec {
    fields: Vec<Field>,
}

impl ObjectSpec {
    pub fn required(self, name: impl Into<String>, spec: impl Into<NodeSpec>) -> Self {
        self.field(name, spec, true)
    }

    pub fn optional(self, name: impl Into<String>, spec: impl Into<NodeSpec>) -> Self {
        self.field(name, spec, false)
    }

    fn field(mut self, name: impl Into<String>, spec: impl Into<NodeSpec>, required: bool) -> Self {
        self.fields.push(Field {
            name: name.into(),
            spec: spec.into(),
            required,
        });
        self
    }
}

impl From<ObjectSpec> for NodeSpec {
    fn from(obj: ObjectSpec) -> Self {
        NodeSpec::new(Kind::Object(obj.fields))
    }
}

/// Builder for array nodes.
#[derive(Debug, Clone)]
pub struct ArraySpec {
    element: NodeSpec,
    min_len: Option<usize>,
}

impl ArraySpec {
    pub fn min_len(mut self, min: usize) -> Self {
        self.min_len = Some(min);
        self
    }
}

impl From<ArraySpec> for NodeSpec {
    fn from(arr: ArraySpec) -> Self {
        NodeSpec::new(Kind::Array {
            element: Box::new(arr.element),
            min_len: arr.min_len,
        })
    }
}

pub fn object() -> ObjectSpec {
    ObjectSpec::default()
}

pub fn array_of(element: impl Into<NodeSpec>) -> ArraySpec {
    ArraySpec {
        element: element.into(),
        min_len: None,
    }
}

pub fn string() -> NodeSpec {
    NodeSpec::new(Kind::String)
}

pub fn number() -> NodeSpec {
    NodeSpec::new(Kind::Number)
}

pub fn boolean() -> NodeSpec {
    NodeSpec::new(Kind::Boolean)
}

pub fn null() -> NodeSpec {
    NodeSpec::new(Kind::Null)
}

pub fn literal(value: impl Into<Literal>) -> NodeSpec {
    NodeSpec::new(Kind::Literal(value.into()))
}

pub fn one_of<I, L>(values: I) -> NodeSpec
where
    I: IntoIterator<Item = L>,
    L: Into<Literal>,
{
    NodeSpec::new(Kind::Enum(values.into_iter().map(Into::into).collect()))
}

pub fn union<I>(alternatives: I) -> NodeSpec
where
    I: IntoIterator<Item = NodeSpec>,
{
    NodeSpec::new(Kind::Union(alternatives.into_iter().collect()))
}

/// A malformed schema tree. Raised once, at construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaDefinitionError {
    #[error("duplicate field '{field}' in object at '{path}'")]
    DuplicateField { path: String, field: String },

    #[error("enum at '{path}' has no allowed values")]
    EmptyEnum { path: String },

    #[error("enum at '{path}' lists {member} more than once")]
    DuplicateEnumMember { path: String, member: String },

    #[error("union at '{path}' has {alternatives} alternative(s); at least two are required")]
    DegenerateUnion { path: String, alternatives: usize },
}

/// An immutable, checked schema tree.
#[derive(Debug, Clone)]
pub struct Schema {
    name: String,
    root: NodeSpec,
}

impl Schema {
    /// Freeze a node tree into a schema.
    ///
    /// # Errors
    ///
    /// Returns the first [`SchemaDefinitionError`] found in a depth-first,
    /// declaration-order walk of the tree.
    pub fn new(
        name: impl Into<String>,
        root: impl Into<NodeSpec>,
    ) -> Result<Self, SchemaDefinitionError> {
        let root = root.into();
        check_node(&root, "")?;
        Ok(Self {
            name: name.into(),
            root,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> &NodeSpec {
        &self.root
    }

    /// Resolve a schema path such as `sensors.humidity[].unit`.
    pub fn node_at(&self, path: &str) -> Option<&NodeSpec> {
        let mut node = &self.root;
        if path.is_empty() {
            return Some(node);
        }
        for segment in path.split('.') {
            let (name, depth) = split_brackets(segment);
            if !name.is_empty() {
                node = &node.field(name)?.spec;
            }
            for _ in 0..depth {
                node = node.element()?;
            }
        }
        Some(node)
    }

    /// Every node path below the root, in declaration order.
    ///
    /// Arrays contribute both their own path and their element path
    /// (`cam`, `cam[]`). Union alternatives are not listed.
    pub fn paths(&self) -> Vec<String> {
        let mut out = Vec::new();
        collect_paths(&self.root, "", &mut out);
        out
    }
}

/// Append a field name to a schema path.
pub(crate) fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}.{name}")
    }
}

fn split_brackets(segment: &str) -> (&str, usize) {
    let mut name = segment;
    let mut depth = 0;
    while let Some(rest) = name.strip_suffix("[]") {
        name = rest;
        depth += 1;
    }
    (name, depth)
}

fn collect_paths(node: &NodeSpec, path: &str, out: &mut Vec<String>) {
    match node.kind() {
        Kind::Object(fields) => {
            for field in fields {
                let child = join_path(path, &field.name);
                out.push(child.clone());
                collect_paths(&field.spec, &child, out);
            }
        }
        Kind::Array { element, .. } => {
            let child = format!("{path}[]");
            out.push(child.clone());
            collect_paths(element, &child, out);
        }
        _ => {}
    }
}

fn check_node(node: &NodeSpec, path: &str) -> Result<(), SchemaDefinitionError> {
    match node.kind() {
        Kind::Object(fields) => {
            let mut seen = HashSet::new();
            for field in fields {
                if !seen.insert(field.name.as_str()) {
                    return Err(SchemaDefinitionError::DuplicateField {
                        path: path.to_string(),
                        field: field.name.clone(),
                    });
                }
                check_node(&field.spec, &join_path(path, &field.name))?;
            }
        }
        Kind::Array { element, .. } => check_node(element, &format!("{path}[]"))?,
        Kind::Enum(members) => {
            if members.is_empty() {
                return Err(SchemaDefinitionError::EmptyEnum {
                    path: path.to_string(),
                });
            }
            let mut seen = HashSet::new();
            for member in members {
                if !seen.insert(member) {
                    return Err(SchemaDefinitionError::DuplicateEnumMember {
                        path: path.to_string(),
                        member: member.to_string(),
                    });
                }
            }
        }
        Kind::Union(alternatives) => {
            if alternatives.len() < 2 {
                return Err(SchemaDefinitionError::DegenerateUnion {
                    path: path.to_string(),
                    alternatives: alternatives.len(),
                });
            }
            for (i, alt) in alternatives.iter().enumerate() {
                check_node(alt, &format!("{path}|{i}"))?;
            }
        }
        Kind::String | Kind::Number | Kind::Boolean | Kind::Null | Kind::Literal(_) => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_literal_matching_is_exact() {
        assert!(Literal::from("%").matches(&json!("%")));
        assert!(!Literal::from("%").matches(&json!("% ")));
        assert!(!Literal::from("1").matches(&json!(1)));
        assert!(Literal::from(1_i64).matches(&json!(1)));
        assert!(!Literal::from(1_i64).matches(&json!(1.5)));
        assert!(!Literal::from(true).matches(&json!("true")));
    }

    #[test]
    fn test_literal_display_quotes_strings() {
        assert_eq!(Literal::from("hPA").to_string(), "\"hPA\"");
        assert_eq!(Literal::from(false).to_string(), "false");
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let root = object().required("a", string()).optional("a", number());
        let err = Schema::new("dup", root).unwrap_err();
        assert_eq!(
            err,
            SchemaDefinitionError::DuplicateField {
                path: String::new(),
                field: "a".into()
            }
        );
    }

    #[test]
    fn test_empty_enum_rejected() {
        let root = object().required("unit", one_of(Vec::<&str>::new()));
        let err = Schema::new("empty", root).unwrap_err();
        assert_eq!(err, SchemaDefinitionError::EmptyEnum { path: "unit".into() });
    }

    #[test]
    fn test_duplicate_enum_member_rejected() {
        let unit = object().required("unit", one_of(["W", "mW", "W"]));
        let root = object().required("items", array_of(unit));
        let err = Schema::new("dup-enum", root).unwrap_err();
        assert_eq!(
            err,
            SchemaDefinitionError::DuplicateEnumMember {
                path: "items[].unit".into(),
                member: "\"W\"".into()
            }
        );
    }

    #[test]
    fn test_degenerate_union_rejected() {
        let root = object().required("open", union([boolean()]));
        let err = Schema::new("union", root).unwrap_err();
        assert!(matches!(err, SchemaDefinitionError::DegenerateUnion { alternatives: 1, .. }));
    }

    #[test]
    fn test_node_at_resolves_array_elements() {
        let schema = Schema::new(
            "nested",
            object().optional(
                "sensors",
                object().optional("humidity", array_of(object().required("unit", literal("%")))),
            ),
        )
        .unwrap();
        assert_eq!(schema.node_at("").unwrap().kind_name(), "object");
        assert_eq!(schema.node_at("sensors.humidity").unwrap().kind_name(), "array");
        assert_eq!(schema.node_at("sensors.humidity[]").unwrap().kind_name(), "object");
        assert_eq!(
            schema.node_at("sensors.humidity[].unit").unwrap().kind(),
            &Kind::Literal(Literal::from("%"))
        );
        assert!(schema.node_at("sensors.humidity.unit").is_none());
        assert!(schema.node_at("sensors.wind").is_none());
    }

    #[test]
    fn test_paths_in_declaration_order() {
        let schema = Schema::new(
            "paths",
            object()
                .required("b", string())
                .optional("a", array_of(string()).min_len(1)),
        )
        .unwrap();
        assert_eq!(schema.paths(), vec!["b", "a", "a[]"]);
    }
}
