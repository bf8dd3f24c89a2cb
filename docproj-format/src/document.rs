//! Document model and records
//!
//! A [`Document`] is an insertion-ordered map of field names to JSON values.
//! Object values are nested documents, arrays are ordered value sequences and
//! every other value is an opaque scalar.

use crate::mode::Channel;
use serde_json::{Map, Value};

/// Ordered mapping of field name to value
pub type Document = Map<String, Value>;

/// A record carrying an optional key document and an optional value document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    /// Key-side document
    pub key: Option<Document>,
    /// Value-side document
    pub value: Option<Document>,
}

impl Record {
    /// Create a record from optional key and value documents
    pub fn new(key: Option<Document>, value: Option<Document>) -> Self {
        Self { key, value }
    }

    /// Record with only a key document
    pub fn with_key(key: Document) -> Self {
        Self::new(Some(key), None)
    }

    /// Record with only a value document
    pub fn with_value(value: Document) -> Self {
        Self::new(None, Some(value))
    }

    /// Build a record from JSON values; anything that is not an object is treated as absent
    pub fn from_json(key: Value, value: Value) -> Self {
        Self::new(into_document(key), into_document(value))
    }

    /// Document for `channel`, if present
    pub fn document(&self, channel: Channel) -> Option<&Document> {
        match channel {
            Channel::Key => self.key.as_ref(),
            Channel::Value => self.value.as_ref(),
        }
    }

    /// Mutable document for `channel`, if present
    pub fn document_mut(&mut self, channel: Channel) -> Option<&mut Document> {
        match channel {
            Channel::Key => self.key.as_mut(),
            Channel::Value => self.value.as_mut(),
        }
    }
}

fn into_document(value: Value) -> Option<Document> {
    match value {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

/// Get a human-readable type name
pub fn value_kind(value: &Value) -> &'static str {
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
    fn record_from_json_drops_non_objects() {
        let record = Record::from_json(json!("key-string"), json!({"a": 1}));
        assert!(record.key.is_none());
        assert_eq!(record.value.unwrap().get("a"), Some(&json!(1)));
    }

    #[test]
    fn record_document_accessors_follow_channel() {
        let key = json!({"k": 1}).as_object().cloned().unwrap();
        let mut record = Record::with_key(key.clone());

        assert_eq!(record.document(Channel::Key), Some(&key));
        assert!(record.document(Channel::Value).is_none());

        record
            .document_mut(Channel::Key)
            .unwrap()
            .insert("k2".to_string(), json!(2));
        assert_eq!(record.key.as_ref().unwrap().len(), 2);
        assert!(record.document_mut(Channel::Value).is_none());
    }

    #[test]
    fn value_kind_names() {
        assert_eq!(value_kind(&json!(null)), "null");
        assert_eq!(value_kind(&json!({})), "object");
        assert_eq!(value_kind(&json!([])), "array");
        assert_eq!(value_kind(&json!(1.5)), "number");
    }
}
