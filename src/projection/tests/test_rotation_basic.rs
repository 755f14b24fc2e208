use crate::geom::{Orientation, Rotation, Tolerance, Vec3, rotate_vector};

fn close(a: Vec3, b: Vec3) -> bool {
    Tolerance::DEFAULT.approx_eq_vec3(a, b)
}

#[test]
fn yaw_round_trip_restores_vector() {
    let vectors = [
        Vec3::new(1.0, 2.0, 3.0),
        Vec3::new(-0.72, 0.405, 0.0),
        Vec3::new(0.0, 0.0, -1.0),
    ];
    for yaw in [-170.0, -47.0, 0.5, 47.0, 90.0, 359.0] {
        for v in vectors {
            let there = rotate_vector(v, Orientation::yaw(yaw));
            let back = rotate_vector(there, Orientation::yaw(-yaw));
            assert!(close(back, v), "yaw {yaw}: {v:?} -> {back:?}");
        }
    }
}

#[test]
fn rotation_is_applied_roll_then_pitch_then_yaw() {
    let orientation = Orientation::new(30.0, 20.0, 10.0);
    let v = Vec3::new(0.3, -0.4, 0.5);
    let stepwise = Rotation::yaw(30f64.to_radians()).apply(
        Rotation::pitch(20f64.to_radians()).apply(Rotation::roll(10f64.to_radians()).apply(v)),
    );
    assert!(close(rotate_vector(v, orientation), stepwise));
}

#[test]
fn rotation_preserves_length_and_orthogonality() {
    let rotation = Rotation::from_orientation(Orientation::new(-65.0, 40.0, 12.0));
    let x = rotation.local_x();
    let y = rotation.local_y();
    let n = rotation.plane_normal();
    assert!((x.length() - 1.0).abs() < 1e-12);
    assert!((y.length() - 1.0).abs() < 1e-12);
    assert!(x.dot(y).abs() < 1e-12);
    assert!(x.dot(n).abs() < 1e-12);
    assert!(y.dot(n).abs() < 1e-12);
}

#[test]
fn pitch_tilts_normal_vertically() {
    let n = Rotation::from_orientation(Orientation::new(0.0, 90.0, 0.0)).plane_normal();
    assert!(close(n, Vec3::new(0.0, 1.0, 0.0)));
}
