//! Euler angles
//!
//! Rotations are authored as three angles plus the order they are applied in.
//! For [`EulerOrder::XYZ`] the rotation matrix is `Rx * Ry * Rz`; for
//! [`EulerOrder::YXZ`] it is `Ry * Rx * Rz`. In both orders Z is applied
//! first, so `z` always spins an object about its own forward axis.
//!
//! `YXZ` is the heading/pitch order: `y` turns the object around world up
//! and `x` then tilts it relative to its heading. Cameras and vehicles use it.

use serde::{Serialize, Deserialize};

use crate::{Quat, Vec3, mat4::{self, Mat4}};

/// Order in which the three axis rotations are composed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EulerOrder {
    #[default]
    XYZ,
    YXZ,
}

/// Euler rotation in radians
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Euler {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    #[serde(default)]
    pub order: EulerOrder,
}

impl Euler {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0, order: EulerOrder::XYZ };

    /// XYZ-order angles
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z, order: EulerOrder::XYZ }
    }

    /// Heading/pitch/roll angles (YXZ order)
    #[inline]
    pub const fn yxz(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z, order: EulerOrder::YXZ }
    }

    /// Same angles, different composition order
    #[inline]
    pub const fn with_order(self, order: EulerOrder) -> Self {
        Self { x: self.x, y: self.y, z: self.z, order }
    }

    /// Convert to a unit quaternion
    pub fn to_quat(self) -> Quat {
        Quat::from_euler(self)
    }

    /// Rotation matrix for these angles
    pub fn to_matrix(self) -> Mat4 {
        mat4::from_quat(self.to_quat())
    }

    /// Extract Euler angles in the given order from a unit quaternion
    ///
    /// Near gimbal lock the Z angle is folded into the outer angle.
    pub fn from_quat(q: Quat, order: EulerOrder) -> Self {
        let m = mat4::from_quat(q);
        // Column-major: m[col][row], so m_rc = m[c-1][r-1]
        let m11 = m[0][0];
        let m12 = m[1][0];
        let m13 = m[2][0];
        let m21 = m[0][1];
        let m22 = m[1][1];
        let m23 = m[2][1];
        let m31 = m[0][2];
        let m32 = m[1][2];
        let m33 = m[2][2];

        match order {
            EulerOrder::XYZ => {
                let y = m13.clamp(-1.0, 1.0).asin();
                if m13.abs() < 0.999_999_9 {
                    Self::new((-m23).atan2(m33), y, (-m12).atan2(m11))
                } else {
                    Self::new(m32.atan2(m22), y, 0.0)
                }
            }
            EulerOrder::YXZ => {
                let x = (-m23.clamp(-1.0, 1.0)).asin();
                if m23.abs() < 0.999_999_9 {
                    Self::yxz(x, m13.atan2(m33), m21.atan2(m22))
                } else {
                    Self::yxz(x, (-m31).atan2(m11), 0.0)
                }
            }
        }
    }

    /// Heading/pitch angles that point the local -Z axis along `direction`
    ///
    /// Returns a YXZ rotation with no roll. A zero direction yields no rotation.
    pub fn facing(direction: Vec3) -> Self {
        let d = direction.normalized();
        if d == Vec3::ZERO {
            return Self::yxz(0.0, 0.0, 0.0);
        }
        let yaw = (-d.x).atan2(-d.z);
        let pitch = d.y.clamp(-1.0, 1.0).asin();
        Self::yxz(pitch, yaw, 0.0)
    }
}

impl From<[f32; 3]> for Euler {
    fn from(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }
}
