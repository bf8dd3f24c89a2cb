//! docproj Test Utilities
//!
//! This crate provides shared testing utilities and helpers for the docproj project.

use docproj_format::document::value_kind;
use docproj_format::Document;
use serde_json::Value;
use std::sync::Once;

pub mod strategies;

/// Builder for creating test documents with common patterns
///
/// Fields keep the order they are added in.
pub struct DocumentBuilder {
    fields: Document,
}

impl DocumentBuilder {
    /// Create a new document builder
    pub fn new() -> Self {
        Self {
            fields: Document::new(),
        }
    }

    /// Add the `_id` field
    pub fn id(self, value: i64) -> Self {
        self.int(docproj_format::constants::ID_FIELD, value)
    }

    /// Add a field with a string value
    pub fn string(mut self, key: &str, value: &str) -> Self {
        self.fields
            .insert(key.to_string(), Value::String(value.to_string()));
        self
    }

    /// Add a field with an integer value
    pub fn int(mut self, key: &str, value: i64) -> Self {
        self.fields.insert(key.to_string(), Value::Number(value.into()));
        self
    }

    /// Add a field with a boolean value
    pub fn bool(mut self, key: &str, value: bool) -> Self {
        self.fields.insert(key.to_string(), Value::Bool(value));
        self
    }

    /// Add a field with a null value
    pub fn null(mut self, key: &str) -> Self {
        self.fields.insert(key.to_string(), Value::Null);
        self
    }

    /// Add a nested document
    pub fn document(mut self, key: &str, value: DocumentBuilder) -> Self {
        self.fields
            .insert(key.to_string(), Value::Object(value.build()));
        self
    }

    /// Add a field with an array value
    pub fn array(mut self, key: &str, value: Vec<Value>) -> Self {
        self.fields.insert(key.to_string(), Value::Array(value));
        self
    }

    /// Build the document
    pub fn build(self) -> Document {
        self.fields
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a `json!` object literal into a document; panics on non-objects
pub fn doc(value: Value) -> Document {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {}", value_kind(&other)),
    }
}

/// Whether no document in `after` has more fields than the document at the
/// same position in `before`
///
/// Documents are paired by field name and array index; documents that no
/// longer exist in `after` are skipped.
pub fn no_level_grew(before: &Document, after: &Document) -> bool {
    if after.len() > before.len() {
        return false;
    }
    after.iter().all(|(key, after_value)| match before.get(key) {
        Some(before_value) => value_did_not_grow(before_value, after_value),
        None => false,
    })
}

fn value_did_not_grow(before: &Value, after: &Value) -> bool {
    match (before, after) {
        (Value::Object(b), Value::Object(a)) => no_level_grew(b, a),
        (Value::Array(b), Value::Array(a)) => {
            a.len() == b.len()
                && b.iter()
                    .zip(a.iter())
                    .all(|(b, a)| value_did_not_grow(b, a))
        }
        (b, a) => b == a,
    }
}

static TRACING: Once = Once::new();

/// Install a test tracing subscriber honouring `RUST_LOG`; safe to call repeatedly
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
