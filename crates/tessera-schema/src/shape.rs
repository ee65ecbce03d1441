//! Defaults ↔ schema shape checking.
//!
//! A section's defaults must carry every field its schema declares, no field
//! it does not, and each value in the declared kind, at every depth. The
//! check runs once per section, at registration.

use serde_json::{Map, Value};

use crate::error::SchemaError;
use crate::field::{FieldKind, FieldSchema, Properties, object_json_schema};

/// Check that a schema tree is well formed.
///
/// Arrays must declare an item schema; only arrays may carry one, and only
/// objects may carry child properties.
///
/// # Errors
///
/// Returns `SchemaError::Malformed` naming the first offending field path.
pub fn check_properties(properties: &Properties) -> Result<(), SchemaError> {
    for (name, field) in properties {
        if name.is_empty() {
            return Err(SchemaError::Malformed {
                path: "/".into(),
                reason: "empty field name".into(),
            });
        }
        check_field(&format!("/{name}"), field)?;
    }
    Ok(())
}

fn check_field(path: &str, field: &FieldSchema) -> Result<(), SchemaError> {
    let malformed = |reason: &str| SchemaError::Malformed {
        path: path.to_string(),
        reason: reason.to_string(),
    };

    match (field.kind, &field.items) {
        (FieldKind::Array, None) => return Err(malformed("array field has no item schema")),
        (FieldKind::Array, Some(items)) => check_field(&format!("{path}/items"), items)?,
        (_, Some(_)) => return Err(malformed("only array fields may declare items")),
        (_, None) => {}
    }

    if field.kind == FieldKind::Object {
        check_properties(&field.properties).map_err(|e| match e {
            SchemaError::Malformed { path: inner, reason } => SchemaError::Malformed {
                path: format!("{path}{inner}"),
                reason,
            },
            other => other,
        })?;
    } else if !field.properties.is_empty() {
        return Err(malformed("only object fields may declare properties"));
    }

    Ok(())
}

/// Check a defaults record against a component's root properties.
///
/// # Errors
///
/// Returns `SchemaError::Malformed` if the schema itself is malformed,
/// `SchemaError::Generation` if its JSON Schema projection fails to compile,
/// or `SchemaError::ShapeMismatch` listing every disagreement.
pub fn check_defaults(
    properties: &Properties,
    defaults: &Map<String, Value>,
) -> Result<(), SchemaError> {
    check_properties(properties)?;

    let schema = object_json_schema(properties);
    let validator =
        jsonschema::validator_for(&schema).map_err(|e| SchemaError::Generation(format!("{e}")))?;

    let instance = Value::Object(defaults.clone());
    let errors: Vec<String> = validator
        .iter_errors(&instance)
        .map(|e| {
            let path = e.instance_path.to_string();
            if path.is_empty() {
                format!("{e}")
            } else {
                format!("{path}: {e}")
            }
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(SchemaError::ShapeMismatch { errors })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn properties() -> Properties {
        [
            ("headline".to_string(), FieldSchema::string("Headline")),
            (
                "benefits".to_string(),
                FieldSchema::array(
                    "Benefits",
                    FieldSchema::object([
                        ("title", FieldSchema::string("Title")),
                        ("iconName", FieldSchema::string("Icon")),
                    ]),
                ),
            ),
        ]
        .into_iter()
        .collect()
    }

    fn record(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    fn mismatch_errors(result: Result<(), SchemaError>) -> Vec<String> {
        match result {
            Err(SchemaError::ShapeMismatch { errors }) => errors,
            other => panic!("expected ShapeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn matching_defaults_pass() {
        let defaults = record(json!({
            "headline": "X",
            "benefits": [{"title": "A", "iconName": "Heart"}]
        }));
        assert!(check_defaults(&properties(), &defaults).is_ok());
    }

    #[test]
    fn missing_field_is_reported() {
        let defaults = record(json!({"benefits": []}));
        let errors = mismatch_errors(check_defaults(&properties(), &defaults));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("headline"), "{errors:?}");
    }

    #[test]
    fn unschematized_field_is_reported() {
        let defaults = record(json!({"headline": "X", "benefits": [], "subtext": "Y"}));
        let errors = mismatch_errors(check_defaults(&properties(), &defaults));
        assert!(errors.iter().any(|e| e.contains("subtext")), "{errors:?}");
    }

    #[test]
    fn wrong_kind_is_reported() {
        let defaults = record(json!({"headline": 3, "benefits": []}));
        let errors = mismatch_errors(check_defaults(&properties(), &defaults));
        assert!(errors.iter().any(|e| e.contains("/headline")), "{errors:?}");
    }

    #[test]
    fn nested_item_mismatch_is_reported_with_path() {
        let defaults = record(json!({
            "headline": "X",
            "benefits": [{"title": "A"}]
        }));
        let errors = mismatch_errors(check_defaults(&properties(), &defaults));
        assert!(errors.iter().any(|e| e.starts_with("/benefits/0")), "{errors:?}");
    }

    #[test]
    fn array_without_items_is_malformed() {
        let mut field = FieldSchema::array("List", FieldSchema::string("x"));
        field.items = None;
        let props: Properties = [("list".to_string(), field)].into_iter().collect();
        let err = check_properties(&props).unwrap_err();
        assert!(matches!(err, SchemaError::Malformed { ref path, .. } if path == "/list"));
    }

    #[test]
    fn items_on_string_is_malformed() {
        let mut field = FieldSchema::string("Name");
        field.items = Some(Box::new(FieldSchema::string("x")));
        let props: Properties = [("name".to_string(), field)].into_iter().collect();
        assert!(check_properties(&props).is_err());
    }

    #[test]
    fn nested_malformed_path_is_qualified() {
        let mut inner = FieldSchema::array("Tags", FieldSchema::string("x"));
        inner.items = None;
        let outer = FieldSchema::array("Rows", FieldSchema::object([("tags", inner)]));
        let props: Properties = [("rows".to_string(), outer)].into_iter().collect();
        let err = check_properties(&props).unwrap_err();
        assert!(
            matches!(err, SchemaError::Malformed { ref path, .. } if path == "/rows/items/tags"),
            "{err:?}"
        );
    }
}
