//! Opaque comment/post records handed to the actions menu.
//!
//! # Design
//! - Keep the record schema-free; only action derivation and the demo store read fields.
//! - Accept API payloads as-is so hosts can pass JSON straight through.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors raised while building a [`ContentRecord`] from raw payloads.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Payload was not valid JSON.
    #[error("invalid content payload")]
    InvalidJson {
        /// Underlying serde error.
        source: serde_json::Error,
    },
    /// Payload parsed but was not a JSON object.
    #[error("content payload is not an object")]
    NotAnObject {
        /// JSON type name that was found instead.
        found: &'static str,
    },
}

/// A comment or post, kept as an opaque key/value mapping.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentRecord {
    fields: Map<String, Value>,
}

impl ContentRecord {
    /// Empty record with no fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a record from a JSON object payload.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::InvalidJson`] for malformed input and
    /// [`ContentError::NotAnObject`] when the payload is not an object.
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let value =
            serde_json::from_str(raw).map_err(|source| ContentError::InvalidJson { source })?;
        Self::from_value(value)
    }

    /// Wrap an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::NotAnObject`] when the value is not an object.
    pub fn from_value(value: Value) -> Result<Self, ContentError> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(ContentError::NotAnObject {
                found: json_type_name(&other),
            }),
        }
    }

    /// Builder-style field assignment.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Insert or replace a field.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Raw field access.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Field as a string, if present and a string.
    #[must_use]
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Field as a boolean, if present and a boolean.
    #[must_use]
    pub fn bool_field(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    /// Record identifier; numeric ids are rendered as strings.
    #[must_use]
    pub fn id(&self) -> Option<String> {
        match self.get("id")? {
            Value::String(id) => Some(id.clone()),
            Value::Number(id) => Some(id.to_string()),
            _ => None,
        }
    }

    /// Field names the current user may change, as listed in `editable_fields`.
    pub fn editable_fields(&self) -> impl Iterator<Item = &str> {
        self.get("editable_fields")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_str)
    }
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_object_payloads() {
        let record = ContentRecord::from_json(
            r#"{"id": 7, "editable_fields": ["raw_body", 3, "pinned"], "pinned": false}"#,
        )
        .unwrap();
        assert_eq!(record.id().as_deref(), Some("7"));
        assert_eq!(record.bool_field("pinned"), Some(false));
        assert_eq!(
            record.editable_fields().collect::<Vec<_>>(),
            vec!["raw_body", "pinned"]
        );
    }

    #[test]
    fn rejects_non_object_payloads() {
        let err = ContentRecord::from_json("[1, 2]").unwrap_err();
        assert!(matches!(err, ContentError::NotAnObject { found: "array" }));
        assert!(matches!(
            ContentRecord::from_json("{").unwrap_err(),
            ContentError::InvalidJson { .. }
        ));
    }

    #[test]
    fn builder_sets_and_replaces_fields() {
        let record = ContentRecord::new()
            .with_field("id", "c-1")
            .with_field("closed", true)
            .with_field("closed", false);
        assert_eq!(record.id().as_deref(), Some("c-1"));
        assert_eq!(record.bool_field("closed"), Some(false));
        assert_eq!(record.str_field("closed"), None);
        assert_eq!(record.editable_fields().count(), 0);
    }

    #[test]
    fn serializes_transparently() {
        let record = ContentRecord::new().with_field("url", "https://example.test/t/1");
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value, json!({"url": "https://example.test/t/1"}));
    }
}
