//! TOML configuration loading
//!
//! ```toml
//! protected_field = "_id"
//!
//! [key]
//! projection_type = "none"
//!
//! [value]
//! projection_type = "blocklist"
//! projection_list = "password,profile.ssn,*.internal"
//!
//! [limits]
//! max_segments = 32
//! ```
//!
//! Every section is optional. Loading validates the result, so an unknown
//! projection type or an over-limit path fails here rather than per record.

use docproj_format::{ProjectionConfig, ProjectionError, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Parse and validate configuration from TOML text
pub fn load_config_str(source: &str) -> Result<ProjectionConfig> {
    let config: ProjectionConfig =
        toml::from_str(source).map_err(|e| ProjectionError::Config(e.to_string()))?;
    config.validate()?;

    debug!(
        key = ?config.key.projection_type,
        value = ?config.value.projection_type,
        key_paths = config.key.projection_list.len(),
        value_paths = config.value.projection_list.len(),
        "loaded projection config"
    );

    Ok(config)
}

/// Read, parse and validate a TOML configuration file
pub fn load_config(path: impl AsRef<Path>) -> Result<ProjectionConfig> {
    let source = fs::read_to_string(path.as_ref())?;
    load_config_str(&source)
}
