//! Constants shared by path parsing and the projectors

/// Separator between the segments of a field path.
pub const SUB_FIELD_SEPARATOR: char = '.';

/// Segment matching every field at exactly one level.
pub const SINGLE_WILDCARD: &str = "*";

/// Segment matching every field at the current level and all levels below.
pub const DOUBLE_WILDCARD: &str = "**";

/// Document identifier field; exclusion never removes it and inclusion always keeps it.
pub const ID_FIELD: &str = "_id";
