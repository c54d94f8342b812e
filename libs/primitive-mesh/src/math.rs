//! # Math Helpers
//!
//! Closed-form helpers shared by the sphere builder and the animator.

use glam::{Quat, Vec3};

/// Maps a latitude/longitude pair onto the unit sphere.
///
/// The reference point `(0, 0, 1)` is first rotated about the X axis by
/// `lat`, tilting it toward a pole, then about the Y axis by `long`,
/// sweeping it around the equator. Equivalent to
/// `(cos(lat)·sin(long), -sin(lat), cos(lat)·cos(long))`.
///
/// # Example
///
/// ```rust
/// use primitive_mesh::math::spherical_to_cartesian;
/// use glam::Vec3;
///
/// let p = spherical_to_cartesian(0.0, 0.0);
/// assert!(p.abs_diff_eq(Vec3::Z, 1e-6));
/// ```
pub fn spherical_to_cartesian(lat: f32, long: f32) -> Vec3 {
    let rotation = Quat::from_rotation_y(long) * Quat::from_rotation_x(lat);
    rotation * Vec3::Z
}

/// Linear interpolation between `a` and `b`.
///
/// ```rust
/// use primitive_mesh::math::lerp;
/// assert_eq!(lerp(1.0, 1.4, 0.0), 1.0);
/// assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
/// ```
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
