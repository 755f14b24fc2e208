//! Plain-text summaries of projection results.
//!
//! Distances are printed with three decimals and an `m` suffix; frustum
//! extents are printed bare since they live on the near plane.

use std::fmt;

use crate::geom::Vec3;
use crate::projection::{Edge, EdgeDistances, Frustum, PlaneProjection};

struct Point(Vec3);

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.0.x, self.0.y, self.0.z)
    }
}

/// Edge distances as `Left: 0.720m` lines, in left, top, right, bottom order.
pub struct EdgeDistancesReport<'a>(pub &'a EdgeDistances);

impl fmt::Display for EdgeDistancesReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Distances from nearest point to edges ({:?}):", self.0.mode)?;
        for edge in Edge::ALL {
            writeln!(f, "{}: {:.3}m", edge.label(), self.0.get(edge))?;
        }
        Ok(())
    }
}

pub struct FrustumReport<'a>(pub &'a Frustum);

impl fmt::Display for FrustumReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let frustum = self.0;
        writeln!(
            f,
            "Camera near plane frustum (distance: {}m):",
            frustum.near_distance
        )?;
        writeln!(f, "Top: {:.3}", frustum.top)?;
        writeln!(f, "Left: {:.3}", frustum.left)?;
        writeln!(f, "Right: {:.3}", frustum.right)?;
        writeln!(f, "Bottom: {:.3}", frustum.bottom)
    }
}

pub struct ProjectionReport<'a>(pub &'a PlaneProjection);

impl fmt::Display for ProjectionReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let projection = self.0;
        let nearest = &projection.nearest;
        writeln!(f, "Off-center projection parameters:")?;
        writeln!(f, "Eye to nearest point: {:.3}m", nearest.distance)?;
        writeln!(f, "Nearest point on plane: {}", Point(nearest.point))?;
        writeln!(f)?;
        writeln!(f, "Corner vectors from nearest point:")?;
        for (corner, point) in projection.corners_relative_to_nearest.iter() {
            writeln!(f, "{}: {}", corner.label(), Point(point))?;
        }
        writeln!(f)?;
        write!(f, "{}", EdgeDistancesReport(&projection.edge_distances))?;
        writeln!(f)?;
        write!(f, "{}", FrustumReport(&projection.frustum))?;
        let offcenter = &projection.offcenter;
        writeln!(f)?;
        writeln!(
            f,
            "Field of view: {:.1}° x {:.1}°",
            offcenter.fov_horizontal, offcenter.fov_vertical
        )
    }
}

#[must_use]
pub fn format_edge_distances(distances: &EdgeDistances) -> String {
    EdgeDistancesReport(distances).to_string()
}

#[must_use]
pub fn format_frustum(frustum: &Frustum) -> String {
    FrustumReport(frustum).to_string()
}

#[must_use]
pub fn format_projection(projection: &PlaneProjection) -> String {
    ProjectionReport(projection).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::Display;
    use crate::projection::project;

    #[test]
    fn edge_lines_use_three_decimals_and_meters() {
        let projection = project(&Display::facing_eye(1.44, 0.81, 1.16)).unwrap();
        let text = format_edge_distances(&projection.edge_distances);
        assert!(text.contains("Left: -0.720m"), "{text}");
        assert!(text.contains("Right: 0.720m"));
        assert!(text.contains("Top: 0.405m"));
        assert!(text.contains("Bottom: -0.405m"));
    }

    #[test]
    fn full_report_lists_corners_and_frustum() {
        let projection = project(&Display::facing_eye(1.44, 0.81, 1.16)).unwrap();
        let text = format_projection(&projection);
        assert!(text.contains("Eye to nearest point: 1.160m"));
        assert!(text.contains("Top-Left: (-0.720, 0.405, 0.000)"), "{text}");
        assert!(text.contains("Bottom-Right: (0.720, -0.405, 0.000)"));
        assert!(text.contains("Camera near plane frustum (distance: 0.1m):"));
        assert!(text.contains("Right: 0.062"));
    }
}
