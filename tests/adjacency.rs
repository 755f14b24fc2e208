//! Two 65" panels meeting at a 47° seam.

use viewcal_engine::display::Display;
use viewcal_engine::geom::{Orientation, Rotation};
use viewcal_engine::layout::{place_right_of, shared_edge_gap};
use viewcal_engine::projection::{local_corners, project, projection_corners};

const WIDTH: f64 = 1.44;
const HEIGHT: f64 = 0.81;
const YAW: f64 = 47.0;

fn center_display() -> Display {
    Display::facing_eye(WIDTH, HEIGHT, 1.16)
}

#[test]
fn right_display_at_47_degrees_shares_the_seam() {
    let center = center_display();
    let center_corners = projection_corners(&center);

    // Place the right panel by hand: its rotated local-left edge midpoint
    // goes onto the center panel's right edge midpoint.
    let rotation = Rotation::from_orientation(Orientation::yaw(YAW));
    let local_left_mid = local_corners(WIDTH, HEIGHT)
        .map(|corner| rotation.apply(corner))
        .left_edge_midpoint();
    let position = center_corners.right_edge_midpoint() - local_left_mid;
    let right = Display::new(WIDTH, HEIGHT, position, Orientation::yaw(YAW));
    let right_corners = projection_corners(&right);

    let seam = right_corners.left_edge_midpoint() - center_corners.right_edge_midpoint();
    assert!(seam.length() < 0.01);

    let top = center_corners.top_right().distance_to(right_corners.top_left());
    let bottom = center_corners.bottom_right().distance_to(right_corners.bottom_left());
    assert!(top < 0.01, "top corners {top}m apart");
    assert!(bottom < 0.01, "bottom corners {bottom}m apart");

    assert_eq!(right, place_right_of(&center, WIDTH, HEIGHT, YAW));
}

#[test]
fn both_panels_still_project_cleanly() {
    let center = center_display();
    let right = place_right_of(&center, WIDTH, HEIGHT, YAW);

    let center_projection = project(&center).expect("center projects");
    let right_projection = project(&right).expect("right projects");

    assert!((center_projection.nearest.distance - 1.16).abs() < 1e-12);
    assert!(right_projection.nearest.faces_eye());
    assert!(right_projection.nearest.distance > 0.0);

    let gap = shared_edge_gap(&center_projection.corners, &right_projection.corners);
    assert!(gap.max() < 0.01, "{gap:?}");

    // The shared corner sits at the same place in both eye-space corner sets.
    assert!(
        (center_projection.corners.top_right() - right_projection.corners.top_left()).length()
            < 0.01
    );
    assert_eq!(right.position().y, 0.0);
    assert!(right.position().x > WIDTH / 2.0);
}
