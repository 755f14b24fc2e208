use super::Vec3;

/// Display orientation in degrees.
///
/// Rotations are applied roll (about Z), then pitch (about X), then yaw
/// (about Y). Changing that order changes every derived corner and normal.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    pub yaw: f64,
    pub pitch: f64,
    pub roll: f64,
}

impl Orientation {
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(yaw: f64, pitch: f64, roll: f64) -> Self {
        Self { yaw, pitch, roll }
    }

    #[must_use]
    pub const fn yaw(yaw: f64) -> Self {
        Self::new(yaw, 0.0, 0.0)
    }
}

/// Precomputed roll → pitch → yaw rotation.
///
/// Stored as a row-major 3x3 matrix `yaw * pitch * roll`. The yaw matrix uses
/// `x' = x cos - z sin`, `z' = x sin + z cos`, so positive yaw swings the
/// display's local +X axis towards +Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    m: [[f64; 3]; 3],
}

impl Rotation {
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Rotation about Z by `angle` radians.
    #[must_use]
    pub fn roll(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            m: [[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Rotation about X by `angle` radians.
    #[must_use]
    pub fn pitch(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            m: [[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]],
        }
    }

    /// Rotation about Y by `angle` radians.
    #[must_use]
    pub fn yaw(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            m: [[c, 0.0, -s], [0.0, 1.0, 0.0], [s, 0.0, c]],
        }
    }

    /// Compose roll, pitch and yaw from an orientation given in degrees.
    #[must_use]
    pub fn from_orientation(orientation: Orientation) -> Self {
        let roll = Self::roll(orientation.roll.to_radians());
        let pitch = Self::pitch(orientation.pitch.to_radians());
        let yaw = Self::yaw(orientation.yaw.to_radians());
        yaw.compose(pitch).compose(roll)
    }

    /// Matrix product `self * other`: `other` is applied first.
    #[must_use]
    pub fn compose(self, other: Self) -> Self {
        let mut result = Self::identity();
        for i in 0..3 {
            for j in 0..3 {
                result.m[i][j] = self.m[i][0] * other.m[0][j]
                    + self.m[i][1] * other.m[1][j]
                    + self.m[i][2] * other.m[2][j];
            }
        }
        result
    }

    #[must_use]
    pub fn apply(self, v: Vec3) -> Vec3 {
        let m = &self.m;
        Vec3::new(
            m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z,
            m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z,
            m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z,
        )
    }

    /// Display's local right axis in eye space.
    #[must_use]
    pub fn local_x(self) -> Vec3 {
        self.apply(Vec3::X)
    }

    /// Display's local up axis in eye space.
    #[must_use]
    pub fn local_y(self) -> Vec3 {
        self.apply(Vec3::Y)
    }

    /// Unit normal of the display plane, starting from `-Z` (facing the eye).
    ///
    /// Roll spins the plane about its own normal and leaves `-Z` untouched, so
    /// only pitch and yaw contribute.
    #[must_use]
    pub fn plane_normal(self) -> Vec3 {
        let n = self.apply(-Vec3::Z);
        n.normalized().unwrap_or(-Vec3::Z)
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::identity()
    }
}

/// Rotate `v` by `orientation` (degrees, roll → pitch → yaw).
#[must_use]
pub fn rotate_vector(v: Vec3, orientation: Orientation) -> Vec3 {
    Rotation::from_orientation(orientation).apply(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Tolerance;

    fn assert_vec_close(a: Vec3, b: Vec3, eps: f64) {
        assert!(
            Tolerance::new(eps).approx_eq_vec3(a, b),
            "expected {b:?}, got {a:?} (eps {eps})"
        );
    }

    #[test]
    fn identity_leaves_vectors_alone() {
        let v = Vec3::new(0.3, -1.2, 4.0);
        assert_eq!(rotate_vector(v, Orientation::IDENTITY), v);
    }

    #[test]
    fn yaw_round_trip_restores_vector() {
        let v = Vec3::new(0.72, 0.405, 1.16);
        for yaw in [-170.0, -47.0, 0.5, 33.0, 90.0, 179.0] {
            let there = rotate_vector(v, Orientation::yaw(yaw));
            let back = rotate_vector(there, Orientation::yaw(-yaw));
            assert_vec_close(back, v, 1e-9);
        }
    }

    #[test]
    fn positive_yaw_swings_local_x_towards_plus_z() {
        let rot = Rotation::from_orientation(Orientation::yaw(90.0));
        assert_vec_close(rot.local_x(), Vec3::Z, 1e-12);
        assert_vec_close(rot.local_y(), Vec3::Y, 1e-12);
    }

    #[test]
    fn roll_is_applied_before_pitch_and_yaw() {
        // Roll 90 maps X to Y; pitch 90 then maps Y to Z.
        let rot = Rotation::from_orientation(Orientation::new(0.0, 90.0, 90.0));
        assert_vec_close(rot.local_x(), Vec3::Z, 1e-12);

        // Reversed order would have left X untouched by pitch and rolled it to Y.
        let reversed = Rotation::roll(90f64.to_radians()).compose(Rotation::pitch(90f64.to_radians()));
        assert_vec_close(reversed.local_x(), Vec3::Y, 1e-12);
    }

    #[test]
    fn roll_does_not_change_plane_normal() {
        let a = Rotation::from_orientation(Orientation::new(20.0, -10.0, 0.0));
        let b = Rotation::from_orientation(Orientation::new(20.0, -10.0, 65.0));
        assert_vec_close(a.plane_normal(), b.plane_normal(), 1e-12);
    }

    #[test]
    fn plane_normal_is_unit_and_orthogonal_to_local_axes() {
        let rot = Rotation::from_orientation(Orientation::new(31.0, -12.0, 7.0));
        let n = rot.plane_normal();
        assert!((n.length() - 1.0).abs() < 1e-12);
        assert!(n.dot(rot.local_x()).abs() < 1e-12);
        assert!(n.dot(rot.local_y()).abs() < 1e-12);
    }

    #[test]
    fn pitch_tilts_normal_in_y() {
        let rot = Rotation::from_orientation(Orientation::new(0.0, 30.0, 0.0));
        let n = rot.plane_normal();
        let (s, c) = 30f64.to_radians().sin_cos();
        assert_vec_close(n, Vec3::new(0.0, s, -c), 1e-12);
    }
}
