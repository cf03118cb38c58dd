use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Orthonormal camera frame derived from yaw and pitch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Basis {
    pub front: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

impl Basis {
    /// Build the frame from Euler angles in degrees.
    ///
    /// `right` is derived from `front` and `world_up`, then `up` from `right` and
    /// `front`, so `right` stays level while `up` tilts with pitch. `front` must
    /// not be parallel to `world_up`; a pitch limit below 90° guarantees that
    /// for a vertical `world_up`.
    pub fn from_euler(yaw: f32, pitch: f32, world_up: Vec3) -> Self {
        let (yaw, pitch) = (yaw.to_radians(), pitch.to_radians());
        let front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
        let right = front.cross(world_up).normalize();
        let up = right.cross(front).normalize();
        Self { front, right, up }
    }
}

/// Projection of `v` onto the horizontal plane, renormalised.
///
/// Returns zero when `v` is vertical.
pub(crate) fn horizontal(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z).normalize_or_zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_orthonormal(b: &Basis) {
        for v in [b.front, b.right, b.up] {
            assert!((v.length() - 1.0).abs() < EPS, "not unit: {v:?}");
        }
        assert!(b.front.dot(b.right).abs() < EPS);
        assert!(b.front.dot(b.up).abs() < EPS);
        assert!(b.right.dot(b.up).abs() < EPS);
    }

    #[test]
    fn orthonormal_over_angle_grid() {
        let mut yaw = -720.0;
        while yaw <= 720.0 {
            let mut pitch = -89.0;
            while pitch <= 89.0 {
                assert_orthonormal(&Basis::from_euler(yaw, pitch, Vec3::Y));
                pitch += 8.9;
            }
            yaw += 37.5;
        }
        assert_orthonormal(&Basis::from_euler(12.0, 89.0, Vec3::Y));
        assert_orthonormal(&Basis::from_euler(12.0, -89.0, Vec3::Y));
    }

    #[test]
    fn default_orientation_faces_negative_z() {
        let b = Basis::from_euler(-90.0, 0.0, Vec3::Y);
        assert!(b.front.abs_diff_eq(Vec3::NEG_Z, EPS));
        assert!(b.right.abs_diff_eq(Vec3::X, EPS));
        assert!(b.up.abs_diff_eq(Vec3::Y, EPS));
    }

    #[test]
    fn right_stays_level_when_pitching() {
        let b = Basis::from_euler(30.0, 60.0, Vec3::Y);
        assert!(b.right.y.abs() < EPS);
        assert!(b.up.y > 0.0 && b.up.y < 1.0);
    }

    #[test]
    fn horizontal_drops_vertical_component() {
        let h = horizontal(Vec3::new(3.0, 10.0, 4.0));
        assert!(h.abs_diff_eq(Vec3::new(0.6, 0.0, 0.8), EPS));
        assert_eq!(horizontal(Vec3::Y), Vec3::ZERO);
    }
}
