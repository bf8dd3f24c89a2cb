//! Inclusion (whitelist) projection
//!
//! All configured paths are evaluated together, one document level at a time.
//! At each level every field is marked by the paths that reach it, unmarked
//! fields are swept, and fields kept only as ancestors are descended into with
//! the sub-paths that remain. Marks, strongest first:
//!
//! - whole: `**`, a terminal literal, or `*` on a non-document value; the
//!   field is kept with everything below it
//! - ancestor: a literal with more path, or `*` on a document value; the
//!   field is kept and its own contents are projected with the remaining
//!   sub-paths (none remain for a terminal `*`, so only the protected field
//!   survives inside it)
//!
//! A terminal `*` is therefore not the union of the literal names at its
//! level: on `{"_id": 1, "b": {"c": 3}}`, `*` yields `{"_id": 1, "b": {}}`
//! while `b` keeps `{"c": 3}` whole.
//!
//! Ancestor arrays are projected element by element; non-document elements
//! are left as they are. The protected field is kept at every level.

use crate::projector::Projector;
use docproj_format::path::is_blank_remainder;
use docproj_format::{Document, FieldPath, ProjectionMode, Segment};
use serde_json::Value;
use smallvec::SmallVec;

type Remainders<'p> = SmallVec<[&'p [Segment]; 4]>;

/// Retention decided for one field
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Mark {
    Drop,
    Ancestor,
    Whole,
}

/// Keeps only matched fields and their ancestors
#[derive(Debug, Clone)]
pub struct InclusionProjector {
    paths: Vec<FieldPath>,
    protected_field: String,
}

impl InclusionProjector {
    /// Create a projector keeping `paths` plus `protected_field`
    pub fn new(paths: Vec<FieldPath>, protected_field: impl Into<String>) -> Self {
        Self {
            paths,
            protected_field: protected_field.into(),
        }
    }

    fn include(&self, active: &[&[Segment]], doc: &mut Document) {
        doc.retain(|key, value| {
            if *key == self.protected_field {
                return true;
            }

            let mut nested = Remainders::new();
            match mark_field(key, value, active, &mut nested) {
                Mark::Drop => false,
                Mark::Whole => true,
                Mark::Ancestor => {
                    self.include_children(&nested, value);
                    true
                }
            }
        });
    }

    fn include_children(&self, nested: &[&[Segment]], value: &mut Value) {
        match value {
            Value::Object(child) => self.include(nested, child),
            Value::Array(items) => {
                for item in items.iter_mut() {
                    if let Value::Object(child) = item {
                        self.include(nested, child);
                    }
                }
            }
            _ => {}
        }
    }
}

/// Strongest mark any active path gives `key`, collecting the sub-paths that
/// continue below it into `nested`
fn mark_field<'p>(
    key: &str,
    value: &Value,
    active: &[&'p [Segment]],
    nested: &mut Remainders<'p>,
) -> Mark {
    let mut mark = Mark::Drop;

    for segments in active {
        let Some((first, rest)) = segments.split_first() else {
            continue;
        };

        let path_mark = match first {
            Segment::AnyDepth => Mark::Whole,
            Segment::AnyField => match value {
                Value::Object(_) => {
                    if !is_blank_remainder(rest) {
                        nested.push(rest);
                    }
                    Mark::Ancestor
                }
                _ => Mark::Whole,
            },
            Segment::Field(name) if name == key => {
                if rest.is_empty() {
                    Mark::Whole
                } else {
                    nested.push(rest);
                    Mark::Ancestor
                }
            }
            Segment::Field(_) => Mark::Drop,
        };

        mark = mark.max(path_mark);
        if mark == Mark::Whole {
            break;
        }
    }

    mark
}

impl Projector for InclusionProjector {
    fn mode(&self) -> ProjectionMode {
        ProjectionMode::Include
    }

    fn paths(&self) -> &[FieldPath] {
        &self.paths
    }

    fn protected_field(&self) -> &str {
        &self.protected_field
    }

    fn project(&self, doc: &mut Document) {
        let active: Vec<&[Segment]> = self.paths.iter().map(FieldPath::segments).collect();
        self.include(&active, doc);
    }
}
