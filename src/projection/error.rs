use crate::display::DisplayError;

use super::Edge;

/// Failures of the projection engine.
///
/// Degenerate geometry is reported instead of being carried forward as
/// NaN or infinity.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProjectionError {
    #[error("invalid display: {0}")]
    InvalidDisplay(#[from] DisplayError),
    #[error("display plane passes through the eye (distance {distance}); cannot compute projection")]
    EyeOnPlane { distance: f64 },
    #[error("{edge} edge of the display has zero length")]
    DegenerateEdge { edge: Edge },
    #[error("near distance must be finite and greater than zero, got {value}")]
    InvalidNearDistance { value: f64 },
}
