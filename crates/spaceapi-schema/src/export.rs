//! # JSON Schema Export
//!
//! Renders a [`Schema`] as a JSON Schema (Draft 2020-12) document so that
//! consumers outside this crate can validate against the same contract
//! with any JSON Schema implementation.
//!
//! | Node kind | JSON Schema |
//! |---|---|
//! | object | `type: object`, `properties`, `required` |
//! | array | `type: array`, `items`, `minItems` |
//! | scalar | `type` |
//! | literal | `const` |
//! | enum | `enum` |
//! | union | `anyOf` |
//!
//! Help texts from [`crate::docs`] become `description` keywords. In
//! strict mode every object carries `additionalProperties: false`.
//!
//! Business rules have no JSON Schema counterpart and are not exported.

use serde_json::{json, Map, Value};

use crate::docs;
use crate::node::{join_path, Kind, Literal, NodeSpec, Schema};
use crate::options::Strictness;
use crate::validate::SchemaValidationError;

pub const DRAFT_2020_12: &str = "https://json-schema.org/draft/2020-12/schema";

/// Render `schema` as a Draft 2020-12 JSON Schema.
pub fn to_json_schema(schema: &Schema, strictness: Strictness) -> Value {
    let mut root = render(schema.root(), "", strictness);
    if let Value::Object(map) = &mut root {
        map.insert("$schema".to_string(), json!(DRAFT_2020_12));
        map.insert("title".to_string(), json!(schema.name()));
    }
    root
}

/// Compile the exported JSON Schema with the `jsonschema` crate.
///
/// # Errors
///
/// Returns [`SchemaValidationError::ValidatorBuildError`] if the rendered
/// document is not a valid JSON Schema.
pub fn compile_json_schema(
    schema: &Schema,
    strictness: Strictness,
) -> Result<jsonschema::Validator, SchemaValidationError> {
    let rendered = to_json_schema(schema, strictness);
    let mut opts = jsonschema::options();
    opts.with_draft(jsonschema::Draft::Draft202012);
    opts.build(&rendered)
        .map_err(|e| SchemaValidationError::ValidatorBuildError {
            schema_name: schema.name().to_string(),
            reason: e.to_string(),
        })
}

fn render(node: &NodeSpec, path: &str, strictness: Strictness) -> Value {
    let mut out = match node.kind() {
        Kind::Object(fields) => {
            let mut properties = Map::new();
            let mut required = Vec::new();
            for field in fields {
                let child = join_path(path, &field.name);
                properties.insert(field.name.clone(), render(&field.spec, &child, strictness));
                if field.required {
                    required.push(json!(field.name));
                }
            }
            let mut obj = json!({ "type": "object", "properties": properties });
            if !required.is_empty() {
                obj["required"] = Value::Array(required);
            }
            if strictness == Strictness::Strict {
                obj["additionalProperties"] = json!(false);
            }
            obj
        }
        Kind::Array { element, min_len } => {
            let mut arr = json!({
                "type": "array",
                "items": render(element, &format!("{path}[]"), strictness),
            });
            if let Some(min) = min_len {
                arr["minItems"] = json!(min);
            }
            arr
        }
        Kind::String => json!({ "type": "string" }),
        Kind::Number => json!({ "type": "number" }),
        Kind::Boolean => json!({ "type": "boolean" }),
        Kind::Null => json!({ "type": "null" }),
        Kind::Literal(literal) => json!({ "const": literal.to_json() }),
        Kind::Enum(members) => {
            json!({ "enum": members.iter().map(Literal::to_json).collect::<Vec<_>>() })
        }
        Kind::Union(alternatives) => json!({
            "anyOf": alternatives
                .iter()
                .map(|alt| render(alt, path, strictness))
                .collect::<Vec<_>>()
        }),
    };
    if let Some(text) = docs::describe(path) {
        out["description"] = json!(text);
    }
    out
}

/// JSON Pointers of every object in a JSON Schema document that does not
/// set `additionalProperties: false`.
pub fn open_objects(json_schema: &Value) -> Vec<String> {
    let mut found = Vec::new();
    collect_open_objects(json_schema, "", &mut found);
    found
}

fn collect_open_objects(node: &Value, pointer: &str, found: &mut Vec<String>) {
    let Some(obj) = node.as_object() else {
        return;
    };
    if obj.get("type").and_then(Value::as_str) == Some("object")
        && obj.get("additionalProperties") != Some(&Value::Bool(false))
    {
        found.push(pointer.to_string());
    }
    if let Some(props) = obj.get("properties").and_then(Value::as_object) {
        for (name, child) in props {
            collect_open_objects(child, &format!("{pointer}/properties/{name}"), found);
        }
    }
    if let Some(items) = obj.get("items") {
        collect_open_objects(items, &format!("{pointer}/items"), found);
    }
    if let Some(alts) = obj.get("anyOf").and_then(Value::as_array) {
        for (i, alt) in alts.iter().enumerate() {
            collect_open_objects(alt, &format!("{pointer}/anyOf/{i}"), found);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{array_of, boolean, literal, null, number, object, string, union};
    use crate::table::space_api_v013;

    fn tiny() -> Schema {
        Schema::new(
            "tiny",
            object()
                .required("open", union([boolean(), null()]))
                .optional(
                    "humidity",
                    array_of(
                        object()
                            .required("value", number())
                            .required("unit", literal("%")),
                    )
                    .min_len(1),
                )
                .optional("note", string()),
        )
        .unwrap()
    }

    #[test]
    fn test_render_keywords() {
        let rendered = to_json_schema(&tiny(), Strictness::Permissive);
        assert_eq!(rendered["$schema"], DRAFT_2020_12);
        assert_eq!(rendered["title"], "tiny");
        assert_eq!(rendered["required"], json!(["open"]));
        assert_eq!(rendered["properties"]["open"]["anyOf"][1]["type"], "null");
        assert_eq!(rendered["properties"]["humidity"]["minItems"], 1);
        assert_eq!(rendered["properties"]["humidity"]["items"]["properties"]["unit"]["const"], "%");
        assert!(rendered.get("additionalProperties").is_none());
    }

    #[test]
    fn test_strict_closes_every_object() {
        let permissive = to_json_schema(&tiny(), Strictness::Permissive);
        assert_eq!(open_objects(&permissive), vec!["", "/properties/humidity/items"]);

        let strict = to_json_schema(&tiny(), Strictness::Strict);
        assert!(open_objects(&strict).is_empty());
    }

    #[test]
    fn test_descriptions_come_from_docs() {
        let rendered = to_json_schema(space_api_v013().unwrap(), Strictness::Permissive);
        assert_eq!(rendered["properties"]["space"]["description"], "The name of your space");
        let radiation = &rendered["properties"]["sensors"]["properties"]["radiation"];
        assert_eq!(
            radiation["properties"]["beta"]["items"]["properties"]["dead_time"]["description"],
            docs::describe("sensors.radiation.*[].dead_time").unwrap()
        );
    }

    #[test]
    fn test_exported_schema_compiles() {
        let compiled = compile_json_schema(&tiny(), Strictness::Strict).unwrap();
        assert!(compiled.is_valid(&json!({ "open": null })));
        assert!(!compiled.is_valid(&json!({ "open": "yes" })));
        assert!(!compiled.is_valid(&json!({ "open": true, "humidity": [] })));
        assert!(!compiled.is_valid(&json!({ "open": true, "extra": 1 })));

        let table = space_api_v013().unwrap();
        assert!(compile_json_schema(table, Strictness::Permissive).is_ok());
    }
}
