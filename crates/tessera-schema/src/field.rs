//! Field schema tree.

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// Ordered child fields of an object (or of a component's root).
pub type Properties = IndexMap<String, FieldSchema>;

/// The value kind of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    String,
    Boolean,
    Number,
    Array,
    Object,
}

impl FieldKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::Array => "array",
            Self::Object => "object",
        }
    }

    /// Whether a JSON value has this kind.
    #[must_use]
    pub const fn matches(self, value: &Value) -> bool {
        matches!(
            (self, value),
            (Self::String, Value::String(_))
                | (Self::Boolean, Value::Bool(_))
                | (Self::Number, Value::Number(_))
                | (Self::Array, Value::Array(_))
                | (Self::Object, Value::Object(_))
        )
    }
}

/// Describes one configurable field.
///
/// Kind-specific parts live beside `kind` rather than inside it so the JSON
/// matches the editor format: `{"type": "array", "title": "...", "items": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FieldSchema {
    #[serde(rename = "type")]
    pub kind: FieldKind,
    /// Human label shown by the editor. Primitive array items may omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Element schema. Only meaningful when kind is `Array`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<FieldSchema>>,
    /// Child fields. Only meaningful when kind is `Object`.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: Properties,
    /// Editor input placeholder, exported through the `ui` hint table.
    #[serde(skip)]
    pub placeholder: Option<String>,
}

impl FieldSchema {
    fn simple(kind: FieldKind, title: &str) -> Self {
        Self {
            kind,
            title: Some(title.into()),
            items: None,
            properties: Properties::new(),
            placeholder: None,
        }
    }

    /// Shorthand for a titled text field.
    #[must_use]
    pub fn string(title: &str) -> Self {
        Self::simple(FieldKind::String, title)
    }

    /// Shorthand for a titled boolean field.
    #[must_use]
    pub fn boolean(title: &str) -> Self {
        Self::simple(FieldKind::Boolean, title)
    }

    /// Shorthand for a titled numeric field.
    #[must_use]
    pub fn number(title: &str) -> Self {
        Self::simple(FieldKind::Number, title)
    }

    /// Shorthand for a titled array field.
    #[must_use]
    pub fn array(title: &str, items: Self) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::simple(FieldKind::Array, title)
        }
    }

    /// Untitled object, typically an array item.
    #[must_use]
    pub fn object<'a>(fields: impl IntoIterator<Item = (&'a str, Self)>) -> Self {
        Self {
            kind: FieldKind::Object,
            title: None,
            items: None,
            properties: fields
                .into_iter()
                .map(|(name, field)| (name.to_string(), field))
                .collect(),
            placeholder: None,
        }
    }

    /// Untitled primitive, typically an array item.
    #[must_use]
    pub fn untitled(kind: FieldKind) -> Self {
        Self {
            title: None,
            ..Self::simple(kind, "")
        }
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Nesting depth; a primitive is 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        let below = match self.kind {
            FieldKind::Array => self.items.as_ref().map_or(0, |item| item.depth()),
            FieldKind::Object => self
                .properties
                .values()
                .map(Self::depth)
                .max()
                .unwrap_or(0),
            _ => 0,
        };
        1 + below
    }

    /// Project into standard JSON Schema.
    ///
    /// Objects list every declared field as required and forbid others, so
    /// validating a value checks its shape in both directions.
    #[must_use]
    pub fn to_json_schema(&self) -> Value {
        let mut schema = match self.kind {
            FieldKind::Object => object_json_schema(&self.properties),
            kind => json!({ "type": kind.as_str() }),
        };
        if let Value::Object(map) = &mut schema {
            if let Some(title) = &self.title {
                map.insert("title".into(), Value::String(title.clone()));
            }
            if let Some(items) = &self.items {
                map.insert("items".into(), items.to_json_schema());
            }
        }
        schema
    }
}

/// JSON Schema for an object with exactly the given fields.
#[must_use]
pub fn object_json_schema(properties: &Properties) -> Value {
    let fields: Map<String, Value> = properties
        .iter()
        .map(|(name, field)| (name.clone(), field.to_json_schema()))
        .collect();
    let required: Vec<&str> = properties.keys().map(String::as_str).collect();
    json!({
        "type": "object",
        "properties": fields,
        "required": required,
        "additionalProperties": false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn benefits() -> FieldSchema {
        FieldSchema::array(
            "Benefits",
            FieldSchema::object([
                ("title", FieldSchema::string("Title")),
                ("description", FieldSchema::string("Description")),
                ("iconName", FieldSchema::string("Icon Name")),
            ]),
        )
    }

    #[test]
    fn serializes_editor_format() {
        let json = serde_json::to_value(benefits()).unwrap();
        assert_eq!(
            json,
            json!({
                "type": "array",
                "title": "Benefits",
                "items": {
                    "type": "object",
                    "properties": {
                        "title": {"type": "string", "title": "Title"},
                        "description": {"type": "string", "title": "Description"},
                        "iconName": {"type": "string", "title": "Icon Name"}
                    }
                }
            })
        );
    }

    #[test]
    fn placeholder_is_not_serialized_inline() {
        let field = FieldSchema::string("CTA Link").with_placeholder("Enter URL");
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json, json!({"type": "string", "title": "CTA Link"}));
    }

    #[test]
    fn property_order_is_preserved() {
        let field = benefits();
        let items = field.items.unwrap();
        let names: Vec<&str> = items.properties.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["title", "description", "iconName"]);
    }

    #[test]
    fn depth_counts_nesting() {
        assert_eq!(FieldSchema::string("x").depth(), 1);
        assert_eq!(FieldSchema::number("n").depth(), 1);
        assert_eq!(
            FieldSchema::array("x", FieldSchema::untitled(FieldKind::String)).depth(),
            2
        );
        assert_eq!(benefits().depth(), 3);
    }

    #[test]
    fn untitled_primitive_has_no_title() {
        let json = serde_json::to_value(FieldSchema::untitled(FieldKind::String)).unwrap();
        assert_eq!(json, json!({"type": "string"}));
    }

    #[test]
    fn json_schema_projection_is_strict() {
        let schema = benefits().to_json_schema();
        assert_eq!(schema["type"], json!("array"));
        assert_eq!(
            schema["items"]["required"],
            json!(["title", "description", "iconName"])
        );
        assert_eq!(schema["items"]["additionalProperties"], json!(false));
    }

    #[test]
    fn kind_matches_values() {
        assert!(FieldKind::String.matches(&json!("a")));
        assert!(FieldKind::Number.matches(&json!(1.5)));
        assert!(FieldKind::Boolean.matches(&json!(true)));
        assert!(FieldKind::Array.matches(&json!([])));
        assert!(FieldKind::Object.matches(&json!({})));
        assert!(!FieldKind::Array.matches(&json!("[]")));
    }

    #[test]
    fn deserializes_editor_format() {
        let field: FieldSchema = serde_json::from_value(json!({
            "type": "array",
            "title": "Features",
            "items": {"type": "string"}
        }))
        .unwrap();
        assert_eq!(
            field,
            FieldSchema::array("Features", FieldSchema::untitled(FieldKind::String))
        );
    }
}
