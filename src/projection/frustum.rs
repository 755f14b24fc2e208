use serde::Serialize;

use crate::display::Display;
use crate::geom::Tolerance;

use super::corners::{DisplayCorners, projection_corners};
use super::nearest::nearest_point_on_plane;
use super::ProjectionError;

/// Near-clip distance used when the caller does not pick one (meters).
pub const DEFAULT_NEAR_DISTANCE: f64 = 0.1;

/// Asymmetric frustum extents at `near_distance`, ready to feed an
/// off-center projection (`glFrustum`-style left/right/bottom/top/near).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Frustum {
    pub near_distance: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Frustum {
    /// Scale corners given relative to the nearest point down to the near plane.
    ///
    /// `left`/`top` come from the top-left corner, `right` from the top-right
    /// corner and `bottom` from the bottom-left corner.
    pub fn from_relative_corners(
        relative_corners: &DisplayCorners,
        eye_to_nearest: f64,
        near_distance: f64,
    ) -> Result<Self, ProjectionError> {
        Self::from_relative_corners_with_tolerance(
            relative_corners,
            eye_to_nearest,
            near_distance,
            Tolerance::DEFAULT,
        )
    }

    pub fn from_relative_corners_with_tolerance(
        relative_corners: &DisplayCorners,
        eye_to_nearest: f64,
        near_distance: f64,
        tol: Tolerance,
    ) -> Result<Self, ProjectionError> {
        validate_near_distance(near_distance)?;
        let tol = tol.valid_or(Tolerance::DEFAULT);
        if !eye_to_nearest.is_finite() || tol.approx_zero_f64(eye_to_nearest) {
            return Err(ProjectionError::EyeOnPlane {
                distance: eye_to_nearest,
            });
        }

        let scale = near_distance / eye_to_nearest;
        let scaled = relative_corners.map(|corner| corner * scale);

        Ok(Self {
            near_distance,
            left: scaled.top_left().x,
            right: scaled.top_right().x,
            top: scaled.top_left().y,
            bottom: scaled.bottom_left().y,
        })
    }

    /// The same frustum moved to another near distance. Extents scale
    /// linearly with the distance.
    ///
    /// Fails if either the target or the stored near distance is not a
    /// finite positive value.
    pub fn at_near_distance(&self, near_distance: f64) -> Result<Self, ProjectionError> {
        validate_near_distance(self.near_distance)?;
        validate_near_distance(near_distance)?;
        let factor = near_distance / self.near_distance;
        Ok(Self {
            near_distance,
            left: self.left * factor,
            right: self.right * factor,
            top: self.top * factor,
            bottom: self.bottom * factor,
        })
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    /// Row-major OpenGL-style off-center projection matrix (right-handed,
    /// camera looking down -Z, clip z in [-1, 1]).
    ///
    /// Returns `None` when the extents are empty or `far` is not beyond the
    /// near plane.
    #[must_use]
    pub fn projection_matrix(&self, far: f64) -> Option<[[f64; 4]; 4]> {
        let n = self.near_distance;
        let (l, r, b, t) = (self.left, self.right, self.bottom, self.top);
        let width = r - l;
        let height = t - b;
        let depth = far - n;
        if !(far.is_finite() && width.abs() > 0.0 && height.abs() > 0.0 && depth > 0.0) {
            return None;
        }

        Some([
            [2.0 * n / width, 0.0, (r + l) / width, 0.0],
            [0.0, 2.0 * n / height, (t + b) / height, 0.0],
            [0.0, 0.0, -(far + n) / depth, -2.0 * far * n / depth],
            [0.0, 0.0, -1.0, 0.0],
        ])
    }
}

/// Frustum of `display` at `near_distance` (see [`DEFAULT_NEAR_DISTANCE`]).
pub fn near_plane_frustum(display: &Display, near_distance: f64) -> Result<Frustum, ProjectionError> {
    display.validate()?;
    let nearest = nearest_point_on_plane(display);
    let relative = projection_corners(display).relative_to(nearest.point);
    Frustum::from_relative_corners(&relative, nearest.distance, near_distance)
}

fn validate_near_distance(near_distance: f64) -> Result<(), ProjectionError> {
    if near_distance.is_finite() && near_distance > 0.0 {
        Ok(())
    } else {
        Err(ProjectionError::InvalidNearDistance {
            value: near_distance,
        })
    }
}
