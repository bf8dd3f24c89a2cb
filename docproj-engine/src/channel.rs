//! Channel selection
//!
//! A [`ChannelProjector`] binds one projector mode to one record channel. It
//! reads its configuration once at construction; a selector whose channel is
//! configured for a different type (or `none`) stays disabled and leaves every
//! record untouched.

use crate::projector::{projector_for, Projector};
use docproj_format::{Channel, ProjectionConfig, ProjectionMode, Record, Result};
use tracing::{debug, trace, warn};

/// Projector bound to a mode and a channel
#[derive(Debug)]
pub struct ChannelProjector {
    channel: Channel,
    enabled: bool,
    projector: Box<dyn Projector>,
}

impl ChannelProjector {
    /// Build the selector for `mode` on `channel` from `config`
    ///
    /// Fails only when the channel's paths violate the configured limits.
    pub fn new(channel: Channel, mode: ProjectionMode, config: &ProjectionConfig) -> Result<Self> {
        let channel_config = config.channel(channel);
        let enabled = channel_config.projection_type.selects(mode);
        let paths = config.paths(channel)?;

        debug!(
            channel = %channel,
            mode = %mode,
            enabled,
            paths = paths.len(),
            "built channel projector"
        );
        if enabled && paths.is_empty() {
            match mode {
                ProjectionMode::Exclude => warn!(
                    channel = %channel,
                    "exclusion enabled with an empty path list; records pass unchanged"
                ),
                ProjectionMode::Include => warn!(
                    channel = %channel,
                    protected = %config.protected_field,
                    "inclusion enabled with an empty path list; only the protected field is kept"
                ),
            }
        }

        Ok(Self {
            channel,
            enabled,
            projector: projector_for(mode, paths, config.protected_field.clone()),
        })
    }

    /// Channel this selector projects
    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Mode of the bound projector
    pub fn mode(&self) -> ProjectionMode {
        self.projector.mode()
    }

    /// Whether the configured type for the channel matches this selector's mode
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The bound projector
    pub fn projector(&self) -> &dyn Projector {
        self.projector.as_ref()
    }

    /// Project the record's document for this channel in place
    ///
    /// No-op when disabled or when the record has no document for the channel.
    pub fn process(&self, record: &mut Record) {
        if !self.enabled {
            return;
        }
        let Some(doc) = record.document_mut(self.channel) else {
            trace!(channel = %self.channel, "no document for channel; skipping");
            return;
        };

        if tracing::enabled!(tracing::Level::TRACE) {
            // Top-level counts only; a deep walk would not be bounded by path limits
            let before = doc.len();
            self.projector.project(doc);
            trace!(
                channel = %self.channel,
                mode = %self.projector.mode(),
                top_level_before = before,
                top_level_after = doc.len(),
                "projected document"
            );
        } else {
            self.projector.project(doc);
        }
    }
}
