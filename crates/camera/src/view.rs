use glam::{Mat4, Vec3, Vec4};

/// Right-handed view matrix looking from `eye` toward `target`.
///
/// Translates the world so `eye` sits at the origin, then rotates into the
/// camera axes (`z` points from the target back to the eye). Agrees with
/// `Mat4::look_at_rh` up to float error.
pub fn look_at(eye: Vec3, target: Vec3, world_up: Vec3) -> Mat4 {
    let z_axis = (eye - target).normalize();
    let x_axis = world_up.normalize().cross(z_axis).normalize();
    let y_axis = z_axis.cross(x_axis);

    // Rows of the rotation are the camera axes.
    let rotation = Mat4::from_cols(
        Vec4::new(x_axis.x, y_axis.x, z_axis.x, 0.0),
        Vec4::new(x_axis.y, y_axis.y, z_axis.y, 0.0),
        Vec4::new(x_axis.z, y_axis.z, z_axis.z, 0.0),
        Vec4::W,
    );
    let translation = Mat4::from_translation(-eye);

    rotation * translation
}
