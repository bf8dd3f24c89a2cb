//! docproj Format - Core primitives for document field projection
//!
//! This crate provides the building blocks shared by the projection engine
//! with no I/O dependencies. It includes:
//!
//! - Constants (separator, wildcards, identifier field)
//! - The document and record model
//! - Field path parsing
//! - Projection modes, channels and configured projection types
//! - Configuration value objects
//! - Path limits
//! - Error types

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod constants;
pub mod document;
pub mod error;
pub mod limits;
pub mod mode;
pub mod path;

// Re-export commonly used types
pub use config::{ChannelConfig, ProjectionConfig};
pub use document::{Document, Record};
pub use error::{ProjectionError, Result};
pub use limits::PathLimits;
pub use mode::{Channel, ProjectionMode, ProjectionType};
pub use path::{FieldPath, Segment};
