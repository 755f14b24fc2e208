use serde::Serialize;

use crate::display::Display;
use crate::geom::Vec3;

/// Foot of the perpendicular from the eye onto the display plane.
///
/// `normal` is the unit plane normal on the viewing side (`-Z` for an
/// unrotated display). `distance` is the eye's signed distance from the plane
/// along that normal: positive when the eye is in front of the panel, negative
/// when the panel faces away. Serializes as `{x, y, z, distance, normal}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NearestPoint {
    #[serde(flatten)]
    pub point: Vec3,
    pub distance: f64,
    pub normal: Vec3,
}

impl NearestPoint {
    #[must_use]
    pub fn faces_eye(&self) -> bool {
        self.distance > 0.0
    }
}

/// Nearest point on the infinite plane of `display` to the eye.
///
/// A plane through the eye yields `distance == 0` and the origin; that is a
/// valid answer here and only becomes an error when a frustum is requested.
#[must_use]
pub fn nearest_point_on_plane(display: &Display) -> NearestPoint {
    let normal = display.rotation().plane_normal();
    let along_normal = display.position().dot(normal);
    NearestPoint {
        point: normal * along_normal,
        distance: -along_normal,
        normal,
    }
}
