use serde::Serialize;

use crate::display::Display;
use crate::geom::{Tolerance, Vec3};

use super::corners::{Corner, DisplayCorners};
use super::nearest::NearestPoint;

/// Value used for a normalized corner coordinate when the corner lies (almost)
/// in the eye's own z = 0 plane.
pub const NORMALIZED_SENTINEL: f64 = 1000.0;

/// Direction from the eye to a corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CornerAngles {
    /// `atan2(x, z)` in degrees, positive to the right.
    pub horizontal: f64,
    /// `atan2(y, z)` in degrees, positive upwards.
    pub vertical: f64,
    pub distance: f64,
}

/// Angular and z = 1 extents of a display as seen from the eye.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AngularExtents {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
    pub left_m: f64,
    pub right_m: f64,
    pub bottom_m: f64,
    pub top_m: f64,
}

/// Off-center viewing figures derived from the corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OffcenterMetrics {
    pub eye_to_display_distance: f64,
    pub corner_distances: [f64; 4],
    /// Each corner dotted with the plane normal.
    pub corner_projected_distances: [f64; 4],
    pub angles_to_corners: [CornerAngles; 4],
    /// Corners projected onto the plane z = 1.
    pub normalized_corners: [Vec3; 4],
    pub extents: AngularExtents,
    pub fov_horizontal: f64,
    pub fov_vertical: f64,
    /// `(right + left) / (right - left)`; `None` for a zero-width view.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_asymmetry: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_asymmetry: Option<f64>,
}

#[must_use]
pub fn offcenter_metrics(
    display: &Display,
    corners: &DisplayCorners,
    nearest: &NearestPoint,
) -> OffcenterMetrics {
    let points = corners.as_array();
    let angles = points.map(corner_angles);
    let normalized = points.map(normalize_to_unit_depth);

    let h = |corner: Corner| angles[corner.index()].horizontal;
    let v = |corner: Corner| angles[corner.index()].vertical;
    let nx = |corner: Corner| normalized[corner.index()].x;
    let ny = |corner: Corner| normalized[corner.index()].y;

    let extents = AngularExtents {
        left: h(Corner::TopLeft).min(h(Corner::BottomLeft)),
        right: h(Corner::TopRight).max(h(Corner::BottomRight)),
        bottom: v(Corner::BottomLeft).min(v(Corner::BottomRight)),
        top: v(Corner::TopLeft).max(v(Corner::TopRight)),
        left_m: nx(Corner::TopLeft).min(nx(Corner::BottomLeft)),
        right_m: nx(Corner::TopRight).max(nx(Corner::BottomRight)),
        bottom_m: ny(Corner::BottomLeft).min(ny(Corner::BottomRight)),
        top_m: ny(Corner::TopLeft).max(ny(Corner::TopRight)),
    };

    OffcenterMetrics {
        eye_to_display_distance: display.position().length(),
        corner_distances: points.map(Vec3::length),
        corner_projected_distances: points.map(|p| p.dot(nearest.normal)),
        angles_to_corners: angles,
        normalized_corners: normalized,
        extents,
        fov_horizontal: extents.right - extents.left,
        fov_vertical: extents.top - extents.bottom,
        horizontal_asymmetry: asymmetry(extents.left, extents.right),
        vertical_asymmetry: asymmetry(extents.bottom, extents.top),
    }
}

fn corner_angles(p: Vec3) -> CornerAngles {
    CornerAngles {
        horizontal: p.x.atan2(p.z).to_degrees(),
        vertical: p.y.atan2(p.z).to_degrees(),
        distance: p.length(),
    }
}

fn normalize_to_unit_depth(p: Vec3) -> Vec3 {
    if p.z.abs() > Tolerance::NORMALIZED_Z.eps {
        Vec3::new(p.x / p.z, p.y / p.z, 1.0)
    } else {
        Vec3::new(
            NORMALIZED_SENTINEL.copysign(sentinel_sign(p.x)),
            NORMALIZED_SENTINEL.copysign(sentinel_sign(p.y)),
            1.0,
        )
    }
}

/// Positive only for strictly positive input; zero maps to the negative side.
fn sentinel_sign(value: f64) -> f64 {
    if value > 0.0 { 1.0 } else { -1.0 }
}

fn asymmetry(low: f64, high: f64) -> Option<f64> {
    let span = high - low;
    if span.abs() > Tolerance::DEFAULT.eps {
        Some((high + low) / span)
    } else {
        None
    }
}
