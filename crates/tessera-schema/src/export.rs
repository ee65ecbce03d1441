//! Editor-facing component schema documents.
//!
//! This is the only wire contract toward the visual page builder. Every
//! document is plain JSON: no functions, no cycles.

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::field::Properties;

/// Identity and catalog metadata of a component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ComponentMeta {
    /// Process-unique component name (e.g. `hero-section`).
    pub name: String,
    pub title: String,
    pub description: String,
    /// Editor menu group (e.g. `Content`, `Navigation`).
    pub group: String,
}

impl ComponentMeta {
    #[must_use]
    pub fn new(name: &str, title: &str, description: &str, group: &str) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            description: description.into(),
            group: group.into(),
        }
    }
}

/// Per-field editor presentation hints.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct UiHint {
    #[serde(
        rename = "ui:placeholder",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub placeholder: Option<String>,
}

/// What the editor receives for one registered component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ComponentSchema {
    pub name: String,
    pub title: String,
    pub description: String,
    pub group: String,
    pub properties: Properties,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub ui: IndexMap<String, UiHint>,
}

impl ComponentSchema {
    /// Build the export document, lifting top-level placeholders into `ui`.
    #[must_use]
    pub fn new(meta: &ComponentMeta, properties: &Properties) -> Self {
        let ui = properties
            .iter()
            .filter_map(|(name, field)| {
                field.placeholder.as_ref().map(|placeholder| {
                    (
                        name.clone(),
                        UiHint {
                            placeholder: Some(placeholder.clone()),
                        },
                    )
                })
            })
            .collect();

        Self {
            name: meta.name.clone(),
            title: meta.title.clone(),
            description: meta.description.clone(),
            group: meta.group.clone(),
            properties: properties.clone(),
            ui,
        }
    }

    /// JSON Schema describing the export document itself.
    #[must_use]
    pub fn document_schema() -> serde_json::Value {
        schemars::schema_for!(ComponentSchema).to_value()
    }
}
