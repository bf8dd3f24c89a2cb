//! docproj Engine - Field projection over documents
//!
//! This crate provides the projection engine:
//!
//! - Exclusion (blacklist) and inclusion (whitelist) projectors behind the
//!   [`Projector`] trait
//! - Channel selectors binding a projector to a record's key or value
//! - The projection chain over every mode and channel, with batch processing
//! - TOML configuration loading
//!
//! ```
//! use docproj_engine::{load_config_str, ProjectionChain, Record};
//! use serde_json::json;
//!
//! let config = load_config_str(
//!     r#"
//!     [value]
//!     projection_type = "exclude"
//!     projection_list = "b.c"
//!     "#,
//! )
//! .unwrap();
//! let chain = ProjectionChain::from_config(&config).unwrap();
//!
//! let mut record = Record::from_json(json!(null), json!({"_id": 1, "a": 2, "b": {"c": 3, "d": 4}}));
//! chain.process(&mut record);
//! assert_eq!(
//!     serde_json::Value::Object(record.value.unwrap()),
//!     json!({"_id": 1, "a": 2, "b": {"d": 4}})
//! );
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod chain;
pub mod channel;
pub mod config;
pub mod exclusion;
pub mod inclusion;
pub mod projector;

// Re-export commonly used types
pub use docproj_format::{
    Channel, ChannelConfig, Document, FieldPath, PathLimits, ProjectionConfig, ProjectionError,
    ProjectionMode, ProjectionType, Record, Result, Segment,
};

// Re-export our own types
pub use chain::{BatchConfig, BatchSummary, ProjectionChain};
pub use channel::ChannelProjector;
pub use config::{load_config, load_config_str};
pub use exclusion::ExclusionProjector;
pub use inclusion::InclusionProjector;
pub use projector::{projector_for, Projector};
