use crate::display::Display;
use crate::geom::{Orientation, Tolerance, Vec3};
use crate::projection::{Corner, projection_corners};

const TIGHT: Tolerance = Tolerance::new(1e-12);

#[test]
fn unrotated_corners_sit_at_half_extents() {
    let corners = projection_corners(&Display::facing_eye(1.44, 0.81, 1.16));
    let expected = [
        Vec3::new(-0.72, 0.405, 1.16),
        Vec3::new(0.72, 0.405, 1.16),
        Vec3::new(-0.72, -0.405, 1.16),
        Vec3::new(0.72, -0.405, 1.16),
    ];
    for (corner, point) in corners.iter() {
        assert!(
            TIGHT.approx_eq_vec3(point, expected[corner.index()]),
            "{} was {point:?}",
            corner.label()
        );
    }
}

#[test]
fn centroid_is_display_center_for_any_orientation() {
    let orientations = [
        Orientation::IDENTITY,
        Orientation::yaw(47.0),
        Orientation::new(-20.0, 15.0, 5.0),
        Orientation::new(170.0, -80.0, 90.0),
    ];
    for orientation in orientations {
        let display = Display::new(1.2, 0.7, Vec3::new(0.3, -0.2, 1.4), orientation);
        let centroid = projection_corners(&display).centroid();
        assert!(
            TIGHT.approx_eq_vec3(centroid, display.position()),
            "{orientation:?}"
        );
    }
}

#[test]
fn rotated_corners_keep_panel_size() {
    let display = Display::new(1.2, 0.7, Vec3::new(0.0, 0.0, 2.0), Orientation::new(33.0, -12.0, 8.0));
    let corners = projection_corners(&display);
    let top = corners[Corner::TopLeft].distance_to(corners[Corner::TopRight]);
    let left = corners[Corner::TopLeft].distance_to(corners[Corner::BottomLeft]);
    let diagonal = corners[Corner::TopLeft].distance_to(corners[Corner::BottomRight]);
    assert!((top - 1.2).abs() < 1e-12);
    assert!((left - 0.7).abs() < 1e-12);
    assert!((diagonal - (1.2f64.powi(2) + 0.7f64.powi(2)).sqrt()).abs() < 1e-12);
}

#[test]
fn positive_yaw_pushes_right_edge_away() {
    let display = Display::new(1.0, 0.5, Vec3::new(0.0, 0.0, 1.0), Orientation::yaw(30.0));
    let corners = projection_corners(&display);
    assert!(corners.top_right().z > corners.top_left().z);
    assert!((corners.top_right().y - corners.top_left().y).abs() < 1e-12);
}
