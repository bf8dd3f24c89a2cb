//! The full projection chain over both modes and both channels
//!
//! A chain holds the four selectors {exclude, include} × {key, value}. At
//! most one mode is enabled per channel, so processing a record runs at most
//! two projections.

use crate::channel::ChannelProjector;
use docproj_format::{Channel, ProjectionConfig, ProjectionMode, Record, Result};
use rayon::prelude::*;
use tracing::debug;

const DEFAULT_MIN_PARALLEL_RECORDS: usize = 64;

/// Controls when batches are projected on the rayon pool
#[derive(Debug, Clone, Copy)]
pub struct BatchConfig {
    /// Batches smaller than this are projected on the calling thread
    pub min_parallel_records: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            min_parallel_records: DEFAULT_MIN_PARALLEL_RECORDS,
        }
    }
}

/// Outcome of a batch projection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    /// Records processed
    pub records: usize,
    /// Whether the rayon pool was used
    pub parallel: bool,
}

/// Every channel selector built from one configuration
#[derive(Debug)]
pub struct ProjectionChain {
    selectors: Vec<ChannelProjector>,
    batch: BatchConfig,
}

impl ProjectionChain {
    /// Validate `config` and build all four selectors
    pub fn from_config(config: &ProjectionConfig) -> Result<Self> {
        config.validate()?;

        let mut selectors = Vec::with_capacity(4);
        for mode in ProjectionMode::ALL {
            for channel in Channel::ALL {
                selectors.push(ChannelProjector::new(channel, mode, config)?);
            }
        }

        debug!(
            enabled = selectors.iter().filter(|s| s.is_enabled()).count(),
            "built projection chain"
        );

        Ok(Self {
            selectors,
            batch: BatchConfig::default(),
        })
    }

    /// Override batch behaviour
    pub fn with_batch_config(mut self, batch: BatchConfig) -> Self {
        self.batch = batch;
        self
    }

    /// All selectors, enabled or not
    pub fn selectors(&self) -> &[ChannelProjector] {
        &self.selectors
    }

    /// Selectors that will act on records
    pub fn enabled(&self) -> impl Iterator<Item = &ChannelProjector> {
        self.selectors.iter().filter(|s| s.is_enabled())
    }

    /// Whether any selector is enabled
    pub fn is_active(&self) -> bool {
        self.enabled().next().is_some()
    }

    /// Project one record in place
    pub fn process(&self, record: &mut Record) {
        for selector in self.enabled() {
            selector.process(record);
        }
    }

    /// Project many distinct records in place
    pub fn process_batch(&self, records: &mut [Record]) -> BatchSummary {
        let parallel = self.is_active() && records.len() >= self.batch.min_parallel_records;

        if parallel {
            records.par_iter_mut().for_each(|record| self.process(record));
        } else if self.is_active() {
            records.iter_mut().for_each(|record| self.process(record));
        }

        debug!(records = records.len(), parallel, "processed batch");

        BatchSummary {
            records: records.len(),
            parallel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docproj_format::{ChannelConfig, ProjectionType};
    use serde_json::json;

    fn chain() -> ProjectionChain {
        let config = ProjectionConfig::default()
            .with_channel(
                Channel::Key,
                ChannelConfig::new(ProjectionType::Include, ["id"]),
            )
            .with_channel(
                Channel::Value,
                ChannelConfig::new(ProjectionType::Exclude, ["secret", "*.internal"]),
            );
        ProjectionChain::from_config(&config).unwrap()
    }

    #[test]
    fn builds_four_selectors_with_one_per_channel_enabled() {
        let chain = chain();
        assert_eq!(chain.selectors().len(), 4);

        let enabled: Vec<(Channel, ProjectionMode)> =
            chain.enabled().map(|s| (s.channel(), s.mode())).collect();
        assert_eq!(
            enabled,
            vec![
                (Channel::Value, ProjectionMode::Exclude),
                (Channel::Key, ProjectionMode::Include),
            ]
        );
    }

    #[test]
    fn process_applies_each_channel() {
        let mut record = Record::from_json(
            json!({"id": 7, "shard": 2}),
            json!({"_id": 1, "secret": "x", "meta": {"internal": true, "tag": "a"}}),
        );
        chain().process(&mut record);

        assert_eq!(serde_json::Value::Object(record.key.unwrap()), json!({"id": 7}));
        assert_eq!(
            serde_json::Value::Object(record.value.unwrap()),
            json!({"_id": 1, "meta": {"tag": "a"}})
        );
    }

    #[test]
    fn default_config_is_inactive() {
        let chain = ProjectionChain::from_config(&ProjectionConfig::default()).unwrap();
        assert!(!chain.is_active());

        let mut records = vec![Record::from_json(json!({"a": 1}), json!({"b": 2}))];
        let original = records.clone();
        let summary = chain.process_batch(&mut records);
        assert_eq!(records, original);
        assert!(!summary.parallel);
    }

    #[test]
    fn batch_matches_sequential_processing() {
        let chain = chain().with_batch_config(BatchConfig {
            min_parallel_records: 2,
        });
        let mut records: Vec<Record> = (0..100)
            .map(|i| {
                Record::from_json(
                    json!({"id": i, "other": i}),
                    json!({"_id": i, "secret": i, "n": {"internal": i, "keep": i}}),
                )
            })
            .collect();
        let mut expected = records.clone();
        for record in expected.iter_mut() {
            chain.process(record);
        }

        let summary = chain.process_batch(&mut records);
        assert_eq!(summary, BatchSummary { records: 100, parallel: true });
        assert_eq!(records, expected);
    }

    #[test]
    fn from_config_rejects_invalid_limits() {
        let mut config = ProjectionConfig::default();
        config.limits.max_segments = 100_000;
        assert!(ProjectionChain::from_config(&config).is_err());
    }
}
