//! Projection modes, configured projection types and record channels

use crate::error::{ProjectionError, Result};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Side of a record a projector operates on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// The record's key document
    Key,
    /// The record's value document
    Value,
}

impl Channel {
    /// Both channels, key first
    pub const ALL: [Channel; 2] = [Channel::Key, Channel::Value];

    /// Lowercase channel name
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Key => "key",
            Channel::Value => "value",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mode a projector is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectionMode {
    /// Remove matched fields (blacklist)
    Exclude,
    /// Keep only matched fields and their ancestors (whitelist)
    Include,
}

impl ProjectionMode {
    /// Both modes, exclusion first
    pub const ALL: [ProjectionMode; 2] = [ProjectionMode::Exclude, ProjectionMode::Include];

    /// Canonical mode name
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectionMode::Exclude => "exclude",
            ProjectionMode::Include => "include",
        }
    }
}

impl fmt::Display for ProjectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Projection type configured for one channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum ProjectionType {
    /// Projection disabled for the channel
    #[default]
    None,
    /// Exclusion projection
    Exclude,
    /// Inclusion projection
    Include,
}

impl ProjectionType {
    /// The projector mode this type enables, if any
    pub fn mode(&self) -> Option<ProjectionMode> {
        match self {
            ProjectionType::None => None,
            ProjectionType::Exclude => Some(ProjectionMode::Exclude),
            ProjectionType::Include => Some(ProjectionMode::Include),
        }
    }

    /// Whether this type selects `mode`
    pub fn selects(&self, mode: ProjectionMode) -> bool {
        self.mode() == Some(mode)
    }

    /// Parse a setting for `channel`, matching names case-insensitively
    ///
    /// An empty or all-whitespace setting means `none`, the same as leaving
    /// it unset. Any other unrecognised name is an error.
    pub fn parse_for(channel: &str, value: &str) -> Result<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "none" | "" => Ok(ProjectionType::None),
            "exclude" | "exclusion" | "blacklist" | "blocklist" => Ok(ProjectionType::Exclude),
            "include" | "inclusion" | "whitelist" | "allowlist" => Ok(ProjectionType::Include),
            _ => Err(ProjectionError::InvalidProjectionType {
                channel: channel.to_string(),
                value: value.to_string(),
            }),
        }
    }
}

impl FromStr for ProjectionType {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_for("unknown", s)
    }
}

impl TryFrom<String> for ProjectionType {
    type Error = ProjectionError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<ProjectionMode> for ProjectionType {
    fn from(mode: ProjectionMode) -> Self {
        match mode {
            ProjectionMode::Exclude => ProjectionType::Exclude,
            ProjectionMode::Include => ProjectionType::Include,
        }
    }
}
