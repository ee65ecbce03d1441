//! Properties that must hold for every built-in section.

use pretty_assertions::assert_eq;
use serde_json::{Map, Value};
use tessera_core::{DuplicatePolicy, OverrideRecord, resolve};
use tessera_registry::{Registry, RegistryBuilder};
use tessera_schema::{FieldKind, FieldSchema, Properties};
use tessera_sections::{SECTION_NAMES, build_registry, register_all};

fn registry() -> Registry {
    build_registry(DuplicatePolicy::Reject).expect("built-in sections register cleanly")
}

/// Walk schema and value together, asserting identical field sets and kinds.
fn assert_field_shape(path: &str, field: &FieldSchema, value: &Value) {
    assert!(
        field.kind.matches(value),
        "{path}: expected {}, got {value}",
        field.kind.as_str()
    );
    match (field.kind, value) {
        (FieldKind::Array, Value::Array(elements)) => {
            let items = field.items.as_ref().expect("array declares items");
            assert!(!elements.is_empty(), "{path}: sample array is empty");
            for (idx, element) in elements.iter().enumerate() {
                assert_field_shape(&format!("{path}/{idx}"), items, element);
            }
        }
        (FieldKind::Object, Value::Object(map)) => {
            assert_object_shape(path, &field.properties, map);
        }
        _ => {}
    }
}

fn assert_object_shape(path: &str, properties: &Properties, map: &Map<String, Value>) {
    let mut schema_keys: Vec<&str> = properties.keys().map(String::as_str).collect();
    let mut value_keys: Vec<&str> = map.keys().map(String::as_str).collect();
    schema_keys.sort_unstable();
    value_keys.sort_unstable();
    assert_eq!(schema_keys, value_keys, "field sets differ at '{path}'");
    for (name, field) in properties {
        assert_field_shape(&format!("{path}/{name}"), field, &map[name]);
    }
}

#[test]
fn every_declared_section_is_registered_once() {
    let reg = registry();
    assert_eq!(reg.names(), SECTION_NAMES.to_vec());
    for name in SECTION_NAMES {
        assert!(reg.lookup(name).is_some(), "missing {name}");
    }
    assert!(reg.lookup("does-not-exist").is_none());
}

#[test]
fn empty_override_resolves_to_defaults() {
    for entry in registry().list() {
        assert_eq!(
            &resolve(entry.defaults(), &OverrideRecord::new()),
            entry.defaults(),
            "{}",
            entry.name()
        );
    }
}

#[test]
fn defaults_and_schema_share_shape() {
    for entry in registry().list() {
        assert_object_shape(entry.name(), entry.properties(), entry.defaults());
    }
}

#[test]
fn schemas_stay_shallow() {
    for entry in registry().list() {
        for (name, field) in entry.properties() {
            assert!(field.depth() <= 3, "{}/{name} nests too deep", entry.name());
        }
    }
}

#[test]
fn every_field_has_a_title() {
    for entry in registry().list() {
        for (name, field) in entry.properties() {
            assert!(field.title.is_some(), "{}/{name} has no title", entry.name());
        }
    }
}

#[test]
fn every_section_renders_its_defaults() {
    let reg = registry();
    for name in SECTION_NAMES {
        let html = reg
            .render(name, &OverrideRecord::new())
            .expect("registered")
            .to_html();
        assert!(!html.is_empty(), "{name} rendered nothing");
    }
}

#[test]
fn override_precedence_and_preservation_hold_per_field() {
    for entry in registry().list() {
        for key in entry.defaults().keys() {
            let mut overrides = OverrideRecord::new();
            overrides.insert(key.clone(), Value::String("override".into()));
            let resolved = entry.resolve(&overrides);

            assert_eq!(resolved[key], Value::String("override".into()));
            for (other, default) in entry.defaults() {
                if other != key {
                    assert_eq!(&resolved[other], default, "{}/{other}", entry.name());
                }
            }
            // mistyped values must not break rendering
            let _ = entry.render(&overrides).to_html();
        }
    }
}

#[test]
fn groups_cover_editor_menus() {
    let reg = registry();
    let groups = reg.groups();
    let keys: Vec<&str> = groups.keys().copied().collect();
    assert_eq!(keys, vec!["Navigation", "Hero", "Content", "Conversion"]);
    let navigation: Vec<&str> = groups["Navigation"].iter().map(|e| e.name()).collect();
    assert_eq!(navigation, vec!["navigation-section", "footer-section"]);
}

#[test]
fn registering_twice_reports_conflicts_and_keeps_first() {
    let mut builder = RegistryBuilder::new(DuplicatePolicy::Reject);
    assert!(register_all(&mut builder).is_empty());
    let errors = register_all(&mut builder);
    assert_eq!(errors.len(), SECTION_NAMES.len());
    assert!(errors.iter().all(tessera_registry::RegistryError::is_conflict));
    assert_eq!(builder.seal().len(), SECTION_NAMES.len());
}

#[test]
fn export_is_plain_json() {
    let docs = registry().export();
    let json = serde_json::to_value(&docs).unwrap();
    let back: Vec<tessera_schema::ComponentSchema> = serde_json::from_value(json.clone()).unwrap();
    assert_eq!(back.len(), docs.len());

    let nav = &json[0];
    assert_eq!(nav["name"], "navigation-section");
    assert_eq!(nav["group"], "Navigation");
    assert_eq!(nav["properties"]["links"]["items"]["properties"]["href"]["title"], "URL");
    assert_eq!(nav["ui"]["ctaLink"]["ui:placeholder"], "Enter URL or anchor ID");

    let pricing = &json[6];
    assert_eq!(pricing["properties"]["features"]["items"], serde_json::json!({"type": "string"}));
}

#[test]
fn export_validates_against_generated_schema() {
    let schema = tessera_schema::ComponentSchema::document_schema();
    let validator = jsonschema::validator_for(&schema).expect("schema compiles");
    for doc in registry().export() {
        let instance = serde_json::to_value(&doc).unwrap();
        let errors: Vec<String> = validator
            .iter_errors(&instance)
            .map(|e| format!("{e}"))
            .collect();
        assert!(errors.is_empty(), "{}: {errors:?}", doc.name);
    }
}
