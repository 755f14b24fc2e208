use crate::display::Display;
use crate::geom::{Orientation, Vec3};
use crate::projection::{
    Edge, EdgeDistanceMode, edge_distances, nearest_point_on_plane, projection_corners,
    stable_edge_distances,
};

fn unrotated_displays() -> Vec<Display> {
    vec![
        Display::facing_eye(1.44, 0.81, 1.16),
        Display::new(1.44, 0.81, Vec3::new(0.3, -0.1, 1.16), Orientation::IDENTITY),
        Display::new(0.6, 2.0, Vec3::new(-0.25, 0.9, 0.5), Orientation::IDENTITY),
    ]
}

#[test]
fn stable_and_precise_agree_without_tilt() {
    for display in unrotated_displays() {
        let stable = edge_distances(&display, EdgeDistanceMode::Stable).unwrap();
        let precise = edge_distances(&display, EdgeDistanceMode::Precise).unwrap();
        for edge in Edge::ALL {
            assert!(
                (stable.magnitude(edge) - precise.magnitude(edge)).abs() < 1e-6,
                "{edge} of {display:?}: {} vs {}",
                stable.magnitude(edge),
                precise.magnitude(edge)
            );
            assert!(
                (stable.nearest_points.get(edge) - precise.nearest_points.get(edge)).length()
                    < 1e-9,
                "{edge} nearest point"
            );
        }
    }
}

#[test]
fn stable_values_are_signed_along_local_axes() {
    let display = Display::new(1.0, 0.5, Vec3::new(0.2, 0.0, 1.0), Orientation::IDENTITY);
    let distances = edge_distances(&display, EdgeDistanceMode::Stable).unwrap();
    assert!((distances.left + 0.3).abs() < 1e-12);
    assert!((distances.right - 0.7).abs() < 1e-12);
    assert!((distances.top - 0.25).abs() < 1e-12);
    assert!((distances.bottom + 0.25).abs() < 1e-12);
    assert!((distances.magnitudes.left - 0.3).abs() < 1e-12);
    assert_eq!(distances.mode, EdgeDistanceMode::Stable);
}

#[test]
fn stable_edges_follow_a_yawed_panel() {
    let display = Display::new(1.2, 0.6, Vec3::new(0.0, 0.0, 1.5), Orientation::yaw(40.0));
    let nearest = nearest_point_on_plane(&display);
    let distances = stable_edge_distances(&display, &nearest);
    let center_offset = (display.position() - nearest.point).dot(display.rotation().local_x());
    assert!((distances.left - (center_offset - 0.6)).abs() < 1e-12);
    assert!((distances.right - (center_offset + 0.6)).abs() < 1e-12);
    assert!((distances.top - 0.3).abs() < 1e-12);
    assert!((distances.bottom + 0.3).abs() < 1e-12);
}

#[test]
fn precise_distances_are_unsigned_and_match_corners() {
    let display = Display::new(1.2, 0.6, Vec3::new(0.2, 0.1, 1.5), Orientation::new(25.0, 10.0, 0.0));
    let precise = edge_distances(&display, EdgeDistanceMode::Precise).unwrap();
    let nearest = nearest_point_on_plane(&display);
    let relative = projection_corners(&display).relative_to(nearest.point);
    for edge in Edge::ALL {
        let value = precise.get(edge);
        assert!(value >= 0.0);
        assert_eq!(value, precise.magnitude(edge));
        let (start, end) = edge.endpoints();
        let bound = relative[start].length().min(relative[end].length());
        assert!(value <= bound + 1e-12, "{edge} farther than its own corners");
    }
}

#[test]
fn precise_differs_once_nearest_point_leaves_the_panel() {
    let display = Display::new(1.0, 0.5, Vec3::new(1.0, 0.0, 1.0), Orientation::IDENTITY);
    let stable = edge_distances(&display, EdgeDistanceMode::Stable).unwrap();
    let precise = edge_distances(&display, EdgeDistanceMode::Precise).unwrap();
    assert!((stable.magnitude(Edge::Left) - precise.magnitude(Edge::Left)).abs() < 1e-12);
    assert!((stable.top - 0.25).abs() < 1e-12);
    assert!((precise.top - (0.5f64.powi(2) + 0.25f64.powi(2)).sqrt()).abs() < 1e-12);
}

#[test]
fn invalid_display_is_rejected_before_any_math() {
    let display = Display::facing_eye(f64::NAN, 0.5, 1.0);
    assert!(edge_distances(&display, EdgeDistanceMode::Precise).is_err());
}
