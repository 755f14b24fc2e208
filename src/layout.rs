//! Placement of displays that share an edge with a reference display.

use serde::Serialize;

use crate::display::Display;
use crate::geom::{Orientation, Rotation};
use crate::projection::{DisplayCorners, local_corners, projection_corners};

/// Gaps between the corners two side-by-side displays should share.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EdgeGap {
    pub top: f64,
    pub bottom: f64,
}

impl EdgeGap {
    #[must_use]
    pub fn max(&self) -> f64 {
        self.top.max(self.bottom)
    }

    #[must_use]
    pub fn touches(&self, tolerance: f64) -> bool {
        self.top <= tolerance && self.bottom <= tolerance
    }
}

/// A display of `width` x `height` turned by `yaw` degrees whose left edge
/// midpoint lands on the right edge midpoint of `reference`.
#[must_use]
pub fn place_right_of(reference: &Display, width: f64, height: f64, yaw: f64) -> Display {
    let anchor = projection_corners(reference).right_edge_midpoint();
    let local = rotated_local_corners(width, height, yaw);
    Display::new(width, height, anchor - local.left_edge_midpoint(), Orientation::yaw(yaw))
}

/// Mirror of [`place_right_of`]: the new display's right edge meets the
/// reference's left edge.
#[must_use]
pub fn place_left_of(reference: &Display, width: f64, height: f64, yaw: f64) -> Display {
    let anchor = projection_corners(reference).left_edge_midpoint();
    let local = rotated_local_corners(width, height, yaw);
    Display::new(width, height, anchor - local.right_edge_midpoint(), Orientation::yaw(yaw))
}

/// Distances between `left`'s right-hand corners and `right`'s left-hand
/// corners (top pair, bottom pair).
#[must_use]
pub fn shared_edge_gap(left: &DisplayCorners, right: &DisplayCorners) -> EdgeGap {
    EdgeGap {
        top: left.top_right().distance_to(right.top_left()),
        bottom: left.bottom_right().distance_to(right.bottom_left()),
    }
}

fn rotated_local_corners(width: f64, height: f64, yaw: f64) -> DisplayCorners {
    let rotation = Rotation::from_orientation(Orientation::yaw(yaw));
    local_corners(width, height).map(|corner| rotation.apply(corner))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{Tolerance, Vec3};

    #[test]
    fn placed_display_shares_both_corners() {
        let center = Display::facing_eye(1.0, 0.6, 1.0);
        let right = place_right_of(&center, 1.0, 0.6, 30.0);
        let gap = shared_edge_gap(&projection_corners(&center), &projection_corners(&right));
        assert!(gap.touches(1e-12), "{gap:?}");
        assert_eq!(right.yaw, 30.0);
    }

    #[test]
    fn left_placement_mirrors_right_placement() {
        let center = Display::facing_eye(1.0, 0.6, 1.0);
        let left = place_left_of(&center, 0.8, 0.6, -30.0);
        let gap = shared_edge_gap(&projection_corners(&left), &projection_corners(&center));
        assert!(gap.max() < 1e-12, "{gap:?}");
        assert!(left.x < 0.0);
    }

    #[test]
    fn right_display_center_follows_yaw() {
        let center = Display::facing_eye(1.44, 0.81, 1.16);
        let right = place_right_of(&center, 1.44, 0.81, 47.0);
        let (s, c) = 47f64.to_radians().sin_cos();
        let expected = Vec3::new(0.72 + 0.72 * c, 0.0, 1.16 + 0.72 * s);
        assert!(Tolerance::new(1e-12).approx_eq_vec3(right.position(), expected));
    }
}
