use nalgebra::{Rotation3, UnitQuaternion, Vector3};
use std::f64::consts::PI;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(start: f64, end: f64, factor: f64) -> f64 {
    start + (end - start) * factor.clamp(0.0, 1.0)
}

/// Rotation matrix for an Euler triple stored as `(pitch, yaw, roll)`.
///
/// `x` is pitch about the local X axis, `y` is yaw about Y and `z` is roll
/// about Z. The matrix is composed as `yaw * pitch * roll`, so roll is applied
/// first to a point and yaw last. Every transform in the crate goes through
/// this function; changing the order changes every stored rotation.
pub fn euler_rotation(angles: &Vector3<f64>) -> Rotation3<f64> {
    let pitch = Rotation3::from_axis_angle(&Vector3::x_axis(), angles.x);
    let yaw = Rotation3::from_axis_angle(&Vector3::y_axis(), angles.y);
    let roll = Rotation3::from_axis_angle(&Vector3::z_axis(), angles.z);
    yaw * pitch * roll
}

/// Quaternion form of [`euler_rotation`].
pub fn euler_quaternion(angles: &Vector3<f64>) -> UnitQuaternion<f64> {
    UnitQuaternion::from_rotation_matrix(&euler_rotation(angles))
}

/// Rotate `point` about `pivot`: translate into the pivot frame, rotate, translate back.
pub fn rotate_about_pivot(
    point: &Vector3<f64>,
    pivot: &Vector3<f64>,
    rotation: &Rotation3<f64>,
) -> Vector3<f64> {
    pivot + rotation * (point - pivot)
}

/// True when every component is exactly zero.
#[inline]
pub fn is_zero(v: &Vector3<f64>) -> bool {
    v.x == 0.0 && v.y == 0.0 && v.z == 0.0
}
