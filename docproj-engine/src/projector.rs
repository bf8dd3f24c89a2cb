//! Projector trait and construction by mode

use crate::exclusion::ExclusionProjector;
use crate::inclusion::InclusionProjector;
use docproj_format::{Document, FieldPath, ProjectionMode};
use std::fmt::Debug;

/// Structural transform of a document driven by a fixed set of field paths
///
/// Implementations hold only immutable configuration, so one projector can be
/// shared across threads projecting distinct documents.
pub trait Projector: Send + Sync + Debug {
    /// Mode this projector implements
    fn mode(&self) -> ProjectionMode;

    /// Configured paths
    fn paths(&self) -> &[FieldPath];

    /// Field protected at every level the projection reaches
    fn protected_field(&self) -> &str;

    /// Project `doc` in place. Never fails; unmatched paths are no-ops.
    fn project(&self, doc: &mut Document);
}

/// Build the projector for `mode`
pub fn projector_for(
    mode: ProjectionMode,
    paths: Vec<FieldPath>,
    protected_field: impl Into<String>,
) -> Box<dyn Projector> {
    match mode {
        ProjectionMode::Exclude => Box::new(ExclusionProjector::new(paths, protected_field)),
        ProjectionMode::Include => Box::new(InclusionProjector::new(paths, protected_field)),
    }
}
