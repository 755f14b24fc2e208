//! Off-center projection of flat displays seen from an eye at the origin.
//!
//! Every function here is pure: it takes a [`Display`] by reference and
//! returns freshly built values.

mod corners;
mod edges;
mod error;
mod frustum;
mod nearest;
mod offcenter;

pub use corners::{Corner, DisplayCorners, local_corners, projection_corners};
pub use edges::{
    Edge, EdgeDistanceMode, EdgeDistances, EdgeSet, ParseEdgeModeError,
    precise_edge_distances, precise_edge_distances_with_tolerance, stable_edge_distances,
};
pub use error::ProjectionError;
pub use frustum::{DEFAULT_NEAR_DISTANCE, Frustum, near_plane_frustum};
pub use nearest::{NearestPoint, nearest_point_on_plane};
pub use offcenter::{
    AngularExtents, CornerAngles, NORMALIZED_SENTINEL, OffcenterMetrics, offcenter_metrics,
};

use serde::Serialize;

use crate::display::Display;
use crate::geom::Tolerance;

/// Knobs for [`project_with_options`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionOptions {
    pub edge_mode: EdgeDistanceMode,
    pub near_distance: f64,
    /// Eye-on-plane threshold used for the frustum.
    pub tolerance: Tolerance,
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        Self {
            edge_mode: EdgeDistanceMode::Stable,
            near_distance: DEFAULT_NEAR_DISTANCE,
            tolerance: Tolerance::DEFAULT,
        }
    }
}

impl ProjectionOptions {
    #[must_use]
    pub const fn with_edge_mode(mut self, edge_mode: EdgeDistanceMode) -> Self {
        self.edge_mode = edge_mode;
        self
    }

    #[must_use]
    pub const fn with_near_distance(mut self, near_distance: f64) -> Self {
        self.near_distance = near_distance;
        self
    }
}

/// Everything the engine derives for one display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaneProjection {
    pub nearest: NearestPoint,
    pub corners: DisplayCorners,
    pub corners_relative_to_nearest: DisplayCorners,
    pub edge_distances: EdgeDistances,
    pub frustum: Frustum,
    pub offcenter: OffcenterMetrics,
}

impl PlaneProjection {
    /// Frustum at another near distance, reusing the stored corners.
    pub fn frustum_at(&self, near_distance: f64) -> Result<Frustum, ProjectionError> {
        Frustum::from_relative_corners(
            &self.corners_relative_to_nearest,
            self.nearest.distance,
            near_distance,
        )
    }

    /// Edge distances with the other algorithm. `Stable` needs the display
    /// itself; `Precise` only the stored relative corners.
    pub fn edge_distances_with(
        &self,
        display: &Display,
        mode: EdgeDistanceMode,
    ) -> Result<EdgeDistances, ProjectionError> {
        match mode {
            EdgeDistanceMode::Stable => Ok(stable_edge_distances(display, &self.nearest)),
            EdgeDistanceMode::Precise => precise_edge_distances(&self.corners_relative_to_nearest),
        }
    }
}

/// Project `display` with [`ProjectionOptions::default`].
pub fn project(display: &Display) -> Result<PlaneProjection, ProjectionError> {
    project_with_options(display, &ProjectionOptions::default())
}

pub fn project_with_options(
    display: &Display,
    options: &ProjectionOptions,
) -> Result<PlaneProjection, ProjectionError> {
    display.validate()?;
    log::debug!(
        "projecting {:?} ({}x{} at {:?}, {:?}) edges={:?} near={}",
        display.style.name,
        display.width,
        display.height,
        display.position(),
        display.orientation(),
        options.edge_mode,
        options.near_distance
    );

    let nearest = nearest_point_on_plane(display);
    if nearest.distance < 0.0 {
        log::warn!(
            "display {:?} faces away from the eye (signed distance {})",
            display.style.name,
            nearest.distance
        );
    }

    let corners = projection_corners(display);
    let relative = corners.relative_to(nearest.point);

    let frustum = Frustum::from_relative_corners_with_tolerance(
        &relative,
        nearest.distance,
        options.near_distance,
        options.tolerance,
    )?;

    let edge_distances = match options.edge_mode {
        EdgeDistanceMode::Stable => stable_edge_distances(display, &nearest),
        EdgeDistanceMode::Precise => precise_edge_distances(&relative)?,
    };

    Ok(PlaneProjection {
        nearest,
        corners,
        corners_relative_to_nearest: relative,
        edge_distances,
        frustum,
        offcenter: offcenter_metrics(display, &corners, &nearest),
    })
}

/// Edge distances of `display` without building a full projection.
pub fn edge_distances(
    display: &Display,
    mode: EdgeDistanceMode,
) -> Result<EdgeDistances, ProjectionError> {
    display.validate()?;
    let nearest = nearest_point_on_plane(display);
    match mode {
        EdgeDistanceMode::Stable => Ok(stable_edge_distances(display, &nearest)),
        EdgeDistanceMode::Precise => {
            precise_edge_distances(&projection_corners(display).relative_to(nearest.point))
        }
    }
}

/// Holds a set of [`ProjectionOptions`] so callers can project many
/// displays the same way.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProjectionEngine {
    options: ProjectionOptions,
}

impl ProjectionEngine {
    #[must_use]
    pub const fn new(options: ProjectionOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> &ProjectionOptions {
        &self.options
    }

    pub fn set_edge_mode(&mut self, edge_mode: EdgeDistanceMode) {
        self.options.edge_mode = edge_mode;
    }

    pub fn set_near_distance(&mut self, near_distance: f64) -> Result<(), ProjectionError> {
        if !(near_distance.is_finite() && near_distance > 0.0) {
            return Err(ProjectionError::InvalidNearDistance {
                value: near_distance,
            });
        }
        self.options.near_distance = near_distance;
        Ok(())
    }

    pub fn project(&self, display: &Display) -> Result<PlaneProjection, ProjectionError> {
        project_with_options(display, &self.options)
    }

    /// Projects every display, keeping the per-display outcome.
    pub fn project_all<'a>(
        &'a self,
        displays: &'a [Display],
    ) -> impl Iterator<Item = Result<PlaneProjection, ProjectionError>> + 'a {
        displays.iter().map(|display| self.project(display))
    }

    pub fn near_plane_frustum(&self, display: &Display) -> Result<Frustum, ProjectionError> {
        near_plane_frustum(display, self.options.near_distance)
    }
}

#[cfg(test)]
mod tests;
