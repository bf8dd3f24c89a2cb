//! Field path limits

use crate::error::{ProjectionError, Result};
use serde::Deserialize;

/// Limits applied to configured field paths
///
/// Projection recurses once per path segment, so `max_segments` also bounds
/// the call depth of a projection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PathLimits {
    /// Maximum path length in bytes (default: 1,024, hard: 8,192)
    pub max_path_length: usize,
    /// Maximum number of segments per path (default: 64, hard: 512)
    pub max_segments: usize,
}

impl Default for PathLimits {
    fn default() -> Self {
        Self {
            max_path_length: 1_024,
            max_segments: 64,
        }
    }
}

impl PathLimits {
    /// Hard maximum limits that cannot be exceeded
    pub fn hard_maximums() -> Self {
        Self {
            max_path_length: 8_192,
            max_segments: 512,
        }
    }

    /// Validate limits against hard maximums
    pub fn validate(&self) -> Result<()> {
        let hard = Self::hard_maximums();

        if self.max_path_length > hard.max_path_length {
            return Err(ProjectionError::LimitsExceedHardMaximum(format!(
                "max_path_length {} exceeds hard limit {}",
                self.max_path_length, hard.max_path_length
            )));
        }

        if self.max_segments > hard.max_segments {
            return Err(ProjectionError::LimitsExceedHardMaximum(format!(
                "max_segments {} exceeds hard limit {}",
                self.max_segments, hard.max_segments
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_limits_default_within_hard_max() {
        assert!(PathLimits::default().validate().is_ok());
        assert!(PathLimits::hard_maximums().validate().is_ok());
    }

    #[test]
    fn path_limits_rejects_excessive_length() {
        let mut limits = PathLimits::default();
        limits.max_path_length = 10_000;
        assert!(matches!(
            limits.validate(),
            Err(ProjectionError::LimitsExceedHardMaximum(_))
        ));
    }

    #[test]
    fn path_limits_rejects_excessive_segments() {
        let mut limits = PathLimits::default();
        limits.max_segments = 1_000;
        assert!(limits.validate().is_err());
    }
}
