//! Props records and the shallow resolver.
//!
//! A section declares a [`DefaultsRecord`] with every field populated. Hosts
//! and editors supply an [`OverrideRecord`] holding any subset of fields.
//! [`resolve`] merges the two per top-level key: a supplied value replaces
//! the default wholesale, arrays and nested objects included.
//!
//! Override values are untrusted. The resolver never inspects their kind, so
//! a string where an array was expected reaches the renderer unchanged.
//! Renderers read props through [`PropsView`], which falls back to the
//! default when a field is absent or has an unusable kind.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::CoreError;

/// Canonical sample values for every field of a component.
pub type DefaultsRecord = Map<String, Value>;

/// Caller- or editor-supplied partial values.
pub type OverrideRecord = Map<String, Value>;

/// Defaults with overrides applied; exactly the defaults' top-level shape.
pub type ResolvedProps = Map<String, Value>;

/// Merge `overrides` onto `defaults`.
///
/// For every top-level key of `defaults`, a present, non-null override value
/// wins in whole. Keys the defaults do not declare are dropped.
#[must_use]
pub fn resolve(defaults: &DefaultsRecord, overrides: &OverrideRecord) -> ResolvedProps {
    defaults
        .iter()
        .map(|(key, default)| {
            let value = match overrides.get(key) {
                None | Some(Value::Null) => default,
                Some(supplied) => supplied,
            };
            (key.clone(), value.clone())
        })
        .collect()
}

/// Resolve and deserialize into the component's typed props.
///
/// # Errors
///
/// Returns [`CoreError::Conversion`] if an override value has a kind the
/// typed props cannot accept.
pub fn resolve_as<T: DeserializeOwned>(
    defaults: &DefaultsRecord,
    overrides: &OverrideRecord,
) -> Result<T, CoreError> {
    let resolved = resolve(defaults, overrides);
    Ok(serde_json::from_value(Value::Object(resolved))?)
}

/// Convert typed props into a JSON record.
///
/// # Errors
///
/// Returns [`CoreError::Conversion`] if serialization fails, or
/// [`CoreError::NotAnObject`] if `T` does not serialize to a JSON object.
pub fn to_record<T: Serialize>(props: &T) -> Result<Map<String, Value>, CoreError> {
    match serde_json::to_value(props)? {
        Value::Object(map) => Ok(map),
        other => Err(CoreError::NotAnObject {
            found: kind_name(&other),
        }),
    }
}

/// Accept an override payload from an external source.
///
/// `null` is an empty override.
///
/// # Errors
///
/// Returns [`CoreError::NotAnObject`] for any other non-object payload.
pub fn override_from_value(value: Value) -> Result<OverrideRecord, CoreError> {
    match value {
        Value::Null => Ok(OverrideRecord::new()),
        Value::Object(map) => Ok(map),
        other => Err(CoreError::NotAnObject {
            found: kind_name(&other),
        }),
    }
}

const fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Read-only view over resolved props for renderers.
///
/// Each accessor takes the resolved value when it has the expected kind,
/// otherwise the default value, otherwise the empty value of that kind.
#[derive(Debug, Clone, Copy)]
pub struct PropsView<'a> {
    resolved: &'a ResolvedProps,
    defaults: &'a DefaultsRecord,
}

impl<'a> PropsView<'a> {
    #[must_use]
    pub const fn new(resolved: &'a ResolvedProps, defaults: &'a DefaultsRecord) -> Self {
        Self { resolved, defaults }
    }

    fn pick(&self, key: &str, usable: fn(&Value) -> bool) -> Option<&'a Value> {
        self.resolved
            .get(key)
            .filter(|v| usable(v))
            .or_else(|| self.defaults.get(key).filter(|v| usable(v)))
    }

    #[must_use]
    pub fn text(&self, key: &str) -> &'a str {
        self.pick(key, Value::is_string)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn flag(&self, key: &str) -> bool {
        self.pick(key, Value::is_boolean)
            .and_then(Value::as_bool)
            .unwrap_or_default()
    }

    /// Object items of an array field. Non-object elements are skipped.
    #[must_use]
    pub fn items(&self, key: &str) -> Vec<Item<'a>> {
        self.pick(key, Value::is_array)
            .and_then(Value::as_array)
            .map(|values| {
                values
                    .iter()
                    .filter_map(Value::as_object)
                    .map(Item)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// String elements of an array field. Non-string elements are skipped.
    #[must_use]
    pub fn strings(&self, key: &str) -> Vec<&'a str> {
        self.pick(key, Value::is_array)
            .and_then(Value::as_array)
            .map(|values| values.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }
}

/// One object element of an array field.
///
/// Item fields have no per-item default, so an absent or mistyped field reads
/// as the empty value of its kind.
#[derive(Debug, Clone, Copy)]
pub struct Item<'a>(&'a Map<String, Value>);

impl<'a> Item<'a> {
    #[must_use]
    pub fn text(&self, key: &str) -> &'a str {
        self.0.get(key).and_then(Value::as_str).unwrap_or_default()
    }

    #[must_use]
    pub fn flag(&self, key: &str) -> bool {
        self.0.get(key).and_then(Value::as_bool).unwrap_or_default()
    }
}
