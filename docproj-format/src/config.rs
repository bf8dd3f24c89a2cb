//! Projection configuration value objects
//!
//! Configuration is read once when projectors are built; nothing is looked up
//! again per record.

use crate::constants::ID_FIELD;
use crate::error::{ProjectionError, Result};
use crate::limits::PathLimits;
use crate::mode::{Channel, ProjectionType};
use crate::path::FieldPath;
use serde::{Deserialize, Deserializer};

/// Projection settings for one channel
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChannelConfig {
    /// Which projector, if any, is active for the channel
    pub projection_type: ProjectionType,
    /// Dot-separated field paths
    #[serde(deserialize_with = "deserialize_field_list")]
    pub projection_list: Vec<String>,
}

impl ChannelConfig {
    /// Channel settings with the given type and paths
    pub fn new<I, S>(projection_type: ProjectionType, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            projection_type,
            projection_list: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// Channel settings parsed from a type name and a comma-separated path list
    pub fn from_settings(channel: Channel, projection_type: &str, list: &str) -> Result<Self> {
        Ok(Self {
            projection_type: ProjectionType::parse_for(channel.as_str(), projection_type)?,
            projection_list: split_field_list(list),
        })
    }
}

/// Complete projection configuration for both channels
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Key channel settings
    pub key: ChannelConfig,
    /// Value channel settings
    pub value: ChannelConfig,
    /// Field never removed by exclusion and always kept by inclusion
    pub protected_field: String,
    /// Limits applied to every configured path
    pub limits: PathLimits,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            key: ChannelConfig::default(),
            value: ChannelConfig::default(),
            protected_field: ID_FIELD.to_string(),
            limits: PathLimits::default(),
        }
    }
}

impl ProjectionConfig {
    /// Settings for `channel`
    pub fn channel(&self, channel: Channel) -> &ChannelConfig {
        match channel {
            Channel::Key => &self.key,
            Channel::Value => &self.value,
        }
    }

    /// Replace the settings for `channel`
    pub fn with_channel(mut self, channel: Channel, config: ChannelConfig) -> Self {
        match channel {
            Channel::Key => self.key = config,
            Channel::Value => self.value = config,
        }
        self
    }

    /// Parse the configured paths of `channel`
    pub fn paths(&self, channel: Channel) -> Result<Vec<FieldPath>> {
        FieldPath::parse_all(&self.channel(channel).projection_list, &self.limits)
    }

    /// Check limits and every configured path
    pub fn validate(&self) -> Result<()> {
        self.limits.validate()?;
        if self.protected_field.is_empty() {
            return Err(ProjectionError::Config(
                "protected_field must not be empty".to_string(),
            ));
        }
        for channel in Channel::ALL {
            self.paths(channel)?;
        }
        Ok(())
    }
}

/// Split a comma-separated path list, trimming entries and dropping blanks
pub fn split_field_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FieldList {
    List(Vec<String>),
    Csv(String),
}

fn deserialize_field_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match FieldList::deserialize(deserializer)? {
        FieldList::List(entries) => entries
            .iter()
            .map(|entry| entry.trim())
            .filter(|entry| !entry.is_empty())
            .map(str::to_string)
            .collect(),
        FieldList::Csv(list) => split_field_list(&list),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn split_field_list_trims_and_drops_blanks() {
        assert_eq!(
            split_field_list(" a.b , ,c,,*.d "),
            vec!["a.b".to_string(), "c".to_string(), "*.d".to_string()]
        );
        assert!(split_field_list("").is_empty());
    }

    #[test]
    fn channel_config_accepts_list_or_csv() {
        let from_list: ChannelConfig = serde_json::from_value(json!({
            "projection_type": "whitelist",
            "projection_list": ["a", " b.c ", ""]
        }))
        .unwrap();
        let from_csv: ChannelConfig = serde_json::from_value(json!({
            "projection_type": "INCLUDE",
            "projection_list": "a, b.c"
        }))
        .unwrap();

        assert_eq!(from_list, from_csv);
        assert_eq!(from_list.projection_type, ProjectionType::Include);
    }

    #[test]
    fn channel_config_rejects_unknown_type() {
        let result: std::result::Result<ChannelConfig, _> =
            serde_json::from_value(json!({"projection_type": "sometimes"}));
        assert!(result.is_err());
    }

    #[test]
    fn from_settings_reports_channel() {
        let err = ChannelConfig::from_settings(Channel::Key, "nope", "a").unwrap_err();
        assert!(err.to_string().contains("key channel"));
    }

    #[test]
    fn default_config_disables_both_channels() {
        let config = ProjectionConfig::default();
        assert_eq!(config.key.projection_type, ProjectionType::None);
        assert_eq!(config.value.projection_type, ProjectionType::None);
        assert_eq!(config.protected_field, ID_FIELD);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_over_limit_paths() {
        let mut config = ProjectionConfig::default().with_channel(
            Channel::Value,
            ChannelConfig::new(ProjectionType::Exclude, ["a.b.c.d"]),
        );
        config.limits.max_segments = 2;
        assert!(matches!(
            config.validate(),
            Err(ProjectionError::PathTooDeep { .. })
        ));
    }

    #[test]
    fn validate_rejects_empty_protected_field() {
        let mut config = ProjectionConfig::default();
        config.protected_field.clear();
        assert!(matches!(config.validate(), Err(ProjectionError::Config(_))));
    }
}
