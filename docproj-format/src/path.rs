//! Dot-separated field paths
//!
//! A path such as `profile.addresses.*.zip` is split on
//! [`SUB_FIELD_SEPARATOR`] into [`Segment`]s once, when configuration is
//! loaded. Splitting every separator up front gives the same segments as
//! repeatedly splitting at the first separator: a trailing separator yields a
//! final empty field name (`"a."` is `a` then `""`), and the empty path is a
//! single empty field name.

use crate::constants::{DOUBLE_WILDCARD, SINGLE_WILDCARD, SUB_FIELD_SEPARATOR};
use crate::error::{ProjectionError, Result};
use crate::limits::PathLimits;
use smallvec::SmallVec;
use std::fmt;

/// One unit of a field path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Literal field name (possibly empty)
    Field(String),
    /// `*`: every field at this level
    AnyField,
    /// `**`: every field at this level and everything below it
    AnyDepth,
}

impl Segment {
    /// Classify a raw segment; only an exact `*` or `**` is a wildcard
    pub fn parse(raw: &str) -> Self {
        match raw {
            SINGLE_WILDCARD => Segment::AnyField,
            DOUBLE_WILDCARD => Segment::AnyDepth,
            name => Segment::Field(name.to_string()),
        }
    }

    /// Whether this segment is `*` or `**`
    pub fn is_wildcard(&self) -> bool {
        !matches!(self, Segment::Field(_))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Field(name) => f.write_str(name),
            Segment::AnyField => f.write_str(SINGLE_WILDCARD),
            Segment::AnyDepth => f.write_str(DOUBLE_WILDCARD),
        }
    }
}

/// A parsed field path; never empty
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    source: String,
    segments: SmallVec<[Segment; 4]>,
}

impl FieldPath {
    /// Parse `path`, enforcing `limits`
    pub fn parse(path: &str, limits: &PathLimits) -> Result<Self> {
        if path.len() > limits.max_path_length {
            return Err(ProjectionError::PathTooLong {
                path: truncate_for_display(path),
                length: path.len(),
                max_length: limits.max_path_length,
            });
        }

        let segments: SmallVec<[Segment; 4]> =
            path.split(SUB_FIELD_SEPARATOR).map(Segment::parse).collect();

        if segments.len() > limits.max_segments {
            return Err(ProjectionError::PathTooDeep {
                path: truncate_for_display(path),
                depth: segments.len(),
                max_depth: limits.max_segments,
            });
        }

        Ok(Self {
            source: path.to_string(),
            segments,
        })
    }

    /// Parse every path in `paths`
    pub fn parse_all<I, S>(paths: I, limits: &PathLimits) -> Result<Vec<Self>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        paths
            .into_iter()
            .map(|p| Self::parse(p.as_ref(), limits))
            .collect()
    }

    /// Path text as configured
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Parsed segments, at least one
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Whether any segment is a wildcard
    pub fn has_wildcard(&self) -> bool {
        self.segments.iter().any(Segment::is_wildcard)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Whether a remaining sub-path is blank: nothing left, or only the empty
/// name left behind by a trailing separator.
pub fn is_blank_remainder(rest: &[Segment]) -> bool {
    match rest {
        [] => true,
        [Segment::Field(name)] => name.is_empty(),
        _ => false,
    }
}

fn truncate_for_display(path: &str) -> String {
    const MAX_DISPLAY: usize = 64;
    if path.len() <= MAX_DISPLAY {
        return path.to_string();
    }
    let mut end = MAX_DISPLAY;
    while !path.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &path[..end])
}
