use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::display::Display;
use crate::geom::{Tolerance, Vec3};

use super::corners::{Corner, DisplayCorners};
use super::nearest::NearestPoint;
use super::ProjectionError;

/// One of the four display edges, named in the display's own frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    pub const ALL: [Self; 4] = [Self::Left, Self::Top, Self::Right, Self::Bottom];

    /// Start and end corner of the edge segment.
    #[must_use]
    pub const fn endpoints(self) -> (Corner, Corner) {
        match self {
            Self::Left => (Corner::TopLeft, Corner::BottomLeft),
            Self::Top => (Corner::TopLeft, Corner::TopRight),
            Self::Right => (Corner::TopRight, Corner::BottomRight),
            Self::Bottom => (Corner::BottomLeft, Corner::BottomRight),
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Right => "Right",
            Self::Top => "Top",
            Self::Bottom => "Bottom",
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
        })
    }
}

/// Which edge-distance algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeDistanceMode {
    /// Offsets measured along the display's rotated local axes. Signed, and
    /// unaffected by panel tilt.
    #[default]
    Stable,
    /// Literal point-to-segment distances in 3D. Unsigned; can drift from
    /// `Stable` for strongly tilted panels.
    Precise,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown edge distance mode `{0}` (expected `stable` or `precise`)")]
pub struct ParseEdgeModeError(String);

impl FromStr for EdgeDistanceMode {
    type Err = ParseEdgeModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stable" => Ok(Self::Stable),
            "precise" => Ok(Self::Precise),
            _ => Err(ParseEdgeModeError(s.to_owned())),
        }
    }
}

/// A value for each display edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EdgeSet<T> {
    pub left: T,
    pub right: T,
    pub top: T,
    pub bottom: T,
}

impl<T: Copy> EdgeSet<T> {
    #[must_use]
    pub fn get(&self, edge: Edge) -> T {
        match edge {
            Edge::Left => self.left,
            Edge::Right => self.right,
            Edge::Top => self.top,
            Edge::Bottom => self.bottom,
        }
    }

    #[must_use]
    pub fn map<U>(&self, mut f: impl FnMut(T) -> U) -> EdgeSet<U> {
        EdgeSet {
            left: f(self.left),
            right: f(self.right),
            top: f(self.top),
            bottom: f(self.bottom),
        }
    }
}

/// Distances from the nearest point to each display edge.
///
/// `nearest_points` are expressed relative to the nearest point (which is
/// the origin of that frame). Both algorithms fill the same shape so callers
/// can switch between them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeDistances {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    pub nearest_points: EdgeSet<Vec3>,
    pub magnitudes: EdgeSet<f64>,
    pub mode: EdgeDistanceMode,
}

impl EdgeDistances {
    #[must_use]
    pub fn get(&self, edge: Edge) -> f64 {
        match edge {
            Edge::Left => self.left,
            Edge::Right => self.right,
            Edge::Top => self.top,
            Edge::Bottom => self.bottom,
        }
    }

    #[must_use]
    pub fn magnitude(&self, edge: Edge) -> f64 {
        self.magnitudes.get(edge)
    }
}

/// Edge offsets along the display's rotated local axes.
///
/// With `c` the vector from the nearest point to the display center,
/// `left = c·X - w/2`, `right = c·X + w/2`, `top = c·Y + h/2`,
/// `bottom = c·Y - h/2`. Signs follow the local axes, so a nearest point
/// inside the panel gives a negative `left` and `bottom`.
#[must_use]
pub fn stable_edge_distances(display: &Display, nearest: &NearestPoint) -> EdgeDistances {
    let rotation = display.rotation();
    let local_x = rotation.local_x();
    let local_y = rotation.local_y();

    let to_center = display.position() - nearest.point;
    let center_x = to_center.dot(local_x);
    let center_y = to_center.dot(local_y);

    let left = center_x - display.half_width();
    let right = center_x + display.half_width();
    let top = center_y + display.half_height();
    let bottom = center_y - display.half_height();

    // Closest point on each edge segment, clamped along the edge.
    let along_x = clamp(0.0, left, right);
    let along_y = clamp(0.0, bottom, top);
    let in_plane = |u: f64, v: f64| local_x * u + local_y * v;

    let nearest_points = EdgeSet {
        left: in_plane(left, along_y),
        right: in_plane(right, along_y),
        top: in_plane(along_x, top),
        bottom: in_plane(along_x, bottom),
    };

    let signed = EdgeSet {
        left,
        right,
        top,
        bottom,
    };

    EdgeDistances {
        left,
        right,
        top,
        bottom,
        nearest_points,
        magnitudes: signed.map(f64::abs),
        mode: EdgeDistanceMode::Stable,
    }
}

/// Point-to-segment distances from the nearest point to each edge.
///
/// `relative_corners` must already be expressed relative to the nearest point;
/// pass the corners of an existing projection to avoid recomputing them.
pub fn precise_edge_distances(
    relative_corners: &DisplayCorners,
) -> Result<EdgeDistances, ProjectionError> {
    precise_edge_distances_with_tolerance(relative_corners, Tolerance::ZERO_LENGTH)
}

pub fn precise_edge_distances_with_tolerance(
    relative_corners: &DisplayCorners,
    tol: Tolerance,
) -> Result<EdgeDistances, ProjectionError> {
    let tol = tol.valid_or(Tolerance::ZERO_LENGTH);
    let segment = |edge: Edge| {
        let (start, end) = edge.endpoints();
        closest_on_segment(relative_corners[start], relative_corners[end], tol)
            .ok_or(ProjectionError::DegenerateEdge { edge })
    };

    let nearest_points = EdgeSet {
        left: segment(Edge::Left)?,
        top: segment(Edge::Top)?,
        right: segment(Edge::Right)?,
        bottom: segment(Edge::Bottom)?,
    };
    let distances = nearest_points.map(Vec3::length);

    Ok(EdgeDistances {
        left: distances.left,
        right: distances.right,
        top: distances.top,
        bottom: distances.bottom,
        nearest_points,
        magnitudes: distances,
        mode: EdgeDistanceMode::Precise,
    })
}

/// Closest point to the origin on the segment `start → end`.
fn closest_on_segment(start: Vec3, end: Vec3, tol: Tolerance) -> Option<Vec3> {
    let edge = end - start;
    let length = edge.length();
    if !length.is_finite() || length <= tol.eps {
        return None;
    }
    let direction = edge / length;
    let projection = -start.dot(direction);
    let t = projection.min(length).max(0.0);
    Some(start + direction * t)
}

fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}
