//! `proptest` strategies for documents and field paths
//!
//! Field names come from a small vocabulary (including `_id`) so generated
//! paths hit generated documents often.

use docproj_format::Document;
use proptest::prelude::*;
use serde_json::Value;

/// Field names used by generated documents and paths
pub const FIELD_NAMES: &[&str] = &["_id", "a", "b", "c", "arr", "x", ""];

/// A field name from [`FIELD_NAMES`]
pub fn field_name() -> impl Strategy<Value = String> {
    prop::sample::select(FIELD_NAMES).prop_map(|name| name.to_string())
}

/// A scalar JSON value
pub fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| Value::Number(n.into())),
        "[a-z]{0,6}".prop_map(Value::String),
    ]
}

/// Any JSON value nested at most `depth` levels
pub fn value(depth: u32) -> impl Strategy<Value = Value> {
    scalar().prop_recursive(depth, 64, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec((field_name(), inner), 0..5)
                .prop_map(|fields| Value::Object(fields.into_iter().collect())),
        ]
    })
}

/// A document nested at most `depth` levels
pub fn document(depth: u32) -> impl Strategy<Value = Document> {
    prop::collection::vec((field_name(), value(depth)), 0..6)
        .prop_map(|fields| fields.into_iter().collect())
}

/// A document whose every top-level field is a scalar
pub fn flat_document() -> impl Strategy<Value = Document> {
    prop::collection::vec((field_name(), scalar()), 0..6)
        .prop_map(|fields| fields.into_iter().collect())
}

/// A path segment: a field name or a wildcard
pub fn segment() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => field_name(),
        1 => Just("*".to_string()),
        1 => Just("**".to_string()),
    ]
}

/// A dot-separated path of 1 to `max_segments` segments
pub fn path(max_segments: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(segment(), 1..=max_segments).prop_map(|parts| parts.join("."))
}

/// A set of up to `max_paths` paths
pub fn path_set(max_paths: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(path(4), 0..=max_paths)
}
