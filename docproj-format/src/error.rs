//! Error types for docproj

use thiserror::Error;

/// docproj error types
///
/// Every variant is raised while loading or validating configuration.
/// Projecting a document never fails.
#[derive(Debug, Error)]
pub enum ProjectionError {
    /// Configured projection type is not one of the recognised names.
    #[error(
        "Invalid projection type '{value}' for the {channel} channel. \
         Expected one of: none (or empty), exclude (blacklist, blocklist), include (whitelist, allowlist)"
    )]
    InvalidProjectionType {
        /// Channel whose setting was rejected ("key", "value" or "unknown")
        channel: String,
        /// The rejected setting
        value: String,
    },
    /// A field path is longer than the configured limit.
    #[error("Field path too long: {length} bytes (max: {max_length}) in '{path}'")]
    PathTooLong {
        /// Offending path, truncated for display
        path: String,
        /// Actual length in bytes
        length: usize,
        /// Configured maximum
        max_length: usize,
    },
    /// A field path has more segments than the configured limit.
    #[error("Field path too deep: '{path}' has {depth} segments (max: {max_depth})")]
    PathTooDeep {
        /// Offending path
        path: String,
        /// Number of segments
        depth: usize,
        /// Configured maximum
        max_depth: usize,
    },
    /// Path limits are above the hard maximums.
    #[error("Path limits exceed hard maximums: {0}")]
    LimitsExceedHardMaximum(String),
    /// Configuration source could not be decoded.
    #[error("Configuration error: {0}")]
    Config(String),
    /// I/O operation failed while reading configuration.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ProjectionError>;
