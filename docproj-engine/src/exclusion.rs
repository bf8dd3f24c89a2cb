//! Exclusion (blacklist) projection
//!
//! Each configured path is applied on its own, removing whatever it matches:
//!
//! - a literal terminal segment removes that field
//! - a literal inner segment descends into a document value, or into every
//!   document element of an array value; other values stop the path
//! - `**` removes every field at its level, whatever follows it
//! - `*` removes every non-document field at its level; document fields are
//!   kept and, if a non-blank sub-path remains, projected with it
//!
//! The protected field is never removed, and wildcards skip it entirely.

use crate::projector::Projector;
use docproj_format::path::is_blank_remainder;
use docproj_format::{Document, FieldPath, ProjectionMode, Segment};
use serde_json::Value;

/// Removes matched fields
#[derive(Debug, Clone)]
pub struct ExclusionProjector {
    paths: Vec<FieldPath>,
    protected_field: String,
}

impl ExclusionProjector {
    /// Create a projector removing `paths`, never touching `protected_field`
    pub fn new(paths: Vec<FieldPath>, protected_field: impl Into<String>) -> Self {
        Self {
            paths,
            protected_field: protected_field.into(),
        }
    }

    /// Apply a single path to `doc`
    pub fn project_path(&self, path: &FieldPath, doc: &mut Document) {
        self.exclude(path.segments(), doc);
    }

    fn exclude(&self, segments: &[Segment], doc: &mut Document) {
        let Some((first, rest)) = segments.split_first() else {
            return;
        };

        match first {
            Segment::AnyField | Segment::AnyDepth => self.exclude_wildcard(first, rest, doc),
            Segment::Field(name) if rest.is_empty() => self.remove_field(name, doc),
            Segment::Field(name) => match doc.get_mut(name.as_str()) {
                Some(Value::Object(child)) => self.exclude(rest, child),
                Some(Value::Array(items)) => {
                    for item in items.iter_mut() {
                        if let Value::Object(child) = item {
                            self.exclude(rest, child);
                        }
                    }
                }
                _ => {}
            },
        }
    }

    fn remove_field(&self, name: &str, doc: &mut Document) {
        if name == self.protected_field || !doc.contains_key(name) {
            return;
        }
        // retain keeps the order of the remaining fields
        doc.retain(|key, _| key != name);
    }

    fn exclude_wildcard(&self, wildcard: &Segment, rest: &[Segment], doc: &mut Document) {
        let descend = !is_blank_remainder(rest);

        doc.retain(|key, value| {
            if *key == self.protected_field {
                return true;
            }
            match wildcard {
                Segment::AnyDepth => false,
                _ => match value {
                    Value::Object(child) => {
                        if descend {
                            self.exclude(rest, child);
                        }
                        true
                    }
                    _ => false,
                },
            }
        });
    }
}

impl Projector for ExclusionProjector {
    fn mode(&self) -> ProjectionMode {
        ProjectionMode::Exclude
    }

    fn paths(&self) -> &[FieldPath] {
        &self.paths
    }

    fn protected_field(&self) -> &str {
        &self.protected_field
    }

    fn project(&self, doc: &mut Document) {
        for path in &self.paths {
            self.project_path(path, doc);
        }
    }
}
