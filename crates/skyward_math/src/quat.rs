//! Unit quaternion rotations

use serde::{Serialize, Deserialize};

use crate::{Euler, EulerOrder, Vec3};

/// Rotation quaternion (x, y, z, w) with w the scalar part
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quat {
    pub const IDENTITY: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Create from an `[x, y, z, w]` array (glTF order)
    #[inline]
    pub const fn from_array(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    /// Rotation of `angle` radians around `axis`
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let axis = axis.normalized();
        let (s, c) = (angle * 0.5).sin_cos();
        Self::new(axis.x * s, axis.y * s, axis.z * s, c)
    }

    /// Rotation equivalent to Euler angles in their stated order
    pub fn from_euler(e: Euler) -> Self {
        let qx = Self::from_axis_angle(Vec3::X, e.x);
        let qy = Self::from_axis_angle(Vec3::Y, e.y);
        let qz = Self::from_axis_angle(Vec3::Z, e.z);

        match e.order {
            EulerOrder::XYZ => qx.mul(qy).mul(qz),
            EulerOrder::YXZ => qy.mul(qx).mul(qz),
        }
    }

    /// Hamilton product: `self * other` applies `other` first
    pub fn mul(self, other: Self) -> Self {
        let (a, b) = (self, other);
        Self::new(
            a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
        )
    }

    /// Inverse rotation (conjugate of a unit quaternion)
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    #[inline]
    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }

    /// Renormalize; a degenerate quaternion becomes identity
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len > 1e-10 {
            let inv = 1.0 / len;
            Self::new(self.x * inv, self.y * inv, self.z * inv, self.w * inv)
        } else {
            Self::IDENTITY
        }
    }

    /// Rotate a vector
    pub fn rotate(self, v: Vec3) -> Vec3 {
        let q = Vec3::new(self.x, self.y, self.z);
        let t = q.cross(v) * 2.0;
        v + t * self.w + q.cross(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPSILON: f32 = 0.0001;

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPSILON
    }

    #[test]
    fn test_identity_rotation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Quat::IDENTITY.rotate(v), v);
    }

    #[test]
    fn test_yaw_turns_forward_toward_x() {
        // +90° about Y takes +Z to +X
        let q = Quat::from_euler(Euler::new(0.0, FRAC_PI_2, 0.0));
        let v = q.rotate(Vec3::Z);
        assert!(vec_approx_eq(v, Vec3::X), "got {:?}", v);
    }

    #[test]
    fn test_pitch_turns_up_toward_z() {
        let q = Quat::from_euler(Euler::new(FRAC_PI_2, 0.0, 0.0));
        let v = q.rotate(Vec3::Y);
        assert!(vec_approx_eq(v, Vec3::Z), "got {:?}", v);
    }

    #[test]
    fn test_axis_angle_matches_euler() {
        let a = Quat::from_axis_angle(Vec3::Y, 0.8);
        let b = Quat::from_euler(Euler::new(0.0, 0.8, 0.0));
        let v = Vec3::new(0.3, -1.0, 2.0);
        assert!(vec_approx_eq(a.rotate(v), b.rotate(v)));
    }

    #[test]
    fn test_euler_order_is_xyz() {
        // XYZ order: matrix Rx * Ry * Rz, so Z applies first
        let e = Euler::new(0.4, 0.5, 0.6);
        let composed = Quat::from_axis_angle(Vec3::X, 0.4)
            .mul(Quat::from_axis_angle(Vec3::Y, 0.5))
            .mul(Quat::from_axis_angle(Vec3::Z, 0.6));
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert!(vec_approx_eq(Quat::from_euler(e).rotate(v), composed.rotate(v)));
    }

    #[test]
    fn test_conjugate_undoes_rotation() {
        let q = Quat::from_axis_angle(Vec3::new(1.0, 1.0, 0.0), PI / 3.0);
        let v = Vec3::new(0.5, 0.25, -2.0);
        assert!(vec_approx_eq(q.conjugate().rotate(q.rotate(v)), v));
    }

    #[test]
    fn test_normalize_degenerate() {
        assert_eq!(Quat::new(0.0, 0.0, 0.0, 0.0).normalize(), Quat::IDENTITY);
    }
}
