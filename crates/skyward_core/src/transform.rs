//! 3D Transform (position, rotation, scale)
//!
//! A Transform3D places a scene node relative to its parent.

use skyward_input::ControlTarget;
use skyward_math::{Euler, Mat4, Quat, Vec3, mat4};
use serde::{Serialize, Deserialize};

/// A 3D transform with position, Euler rotation, and per-axis scale
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform3D {
    /// Position relative to the parent
    #[serde(default)]
    pub position: Vec3,
    /// Rotation as Euler angles (radians)
    #[serde(default)]
    pub rotation: Euler,
    /// Per-axis scale
    #[serde(default = "unit_scale")]
    pub scale: Vec3,
}

fn unit_scale() -> Vec3 {
    Vec3::ONE
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform3D {
    /// Create an identity transform (no translation, rotation, or scale change)
    pub fn identity() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Euler::default(),
            scale: Vec3::ONE,
        }
    }

    /// Create a transform with just a position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::identity()
        }
    }

    /// Create a transform with position and rotation
    pub fn from_position_rotation(position: Vec3, rotation: Euler) -> Self {
        Self {
            position,
            rotation,
            scale: Vec3::ONE,
        }
    }

    /// Builder: set uniform scale
    pub fn with_uniform_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::splat(scale);
        self
    }

    /// Rotation as a quaternion
    #[inline]
    pub fn quaternion(&self) -> Quat {
        self.rotation.to_quat()
    }

    /// Local-to-parent matrix (scale, then rotate, then translate)
    pub fn matrix(&self) -> Mat4 {
        mat4::from_trs(self.position, self.quaternion(), self.scale)
    }

    /// Transform a point from local space to parent space
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        self.quaternion().rotate(p.component_mul(self.scale)) + self.position
    }

    /// Transform a direction from local space to parent space (no translation)
    pub fn transform_direction(&self, d: Vec3) -> Vec3 {
        self.quaternion().rotate(d.component_mul(self.scale))
    }

    /// Translate the transform by an offset in parent space
    pub fn translate(&mut self, offset: Vec3) {
        self.position += offset;
    }

    /// Translate the transform by an offset in its own rotated frame
    pub fn translate_local(&mut self, offset: Vec3) {
        self.position += self.quaternion().rotate(offset);
    }
}

impl ControlTarget for Transform3D {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn rotation(&self) -> Euler {
        self.rotation
    }

    fn set_rotation(&mut self, rotation: Euler) {
        self.rotation = rotation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    const EPSILON: f32 = 0.0001;

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPSILON
    }

    #[test]
    fn test_identity_transform() {
        let t = Transform3D::identity();
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert!(vec_approx_eq(t.transform_point(p), p));
        assert_eq!(t.matrix(), mat4::IDENTITY);
    }

    #[test]
    fn test_transform_order() {
        // X * 2 = (2, 0, 0), rotated 90° about Y = (0, 0, -2), + (10, 0, 0) = (10, 0, -2)
        let mut t = Transform3D::from_position_rotation(
            Vec3::new(10.0, 0.0, 0.0),
            Euler::new(0.0, PI / 2.0, 0.0),
        );
        t.scale = Vec3::splat(2.0);
        let p = t.transform_point(Vec3::X);
        assert!(vec_approx_eq(p, Vec3::new(10.0, 0.0, -2.0)), "got {:?}", p);
    }

    #[test]
    fn test_matrix_matches_transform_point() {
        let mut t = Transform3D::from_position_rotation(
            Vec3::new(1.0, -2.0, 3.0),
            Euler::yxz(0.3, 1.2, -0.4),
        );
        t.scale = Vec3::new(0.5, 2.0, 1.5);
        let p = Vec3::new(0.7, -1.1, 2.0);
        let via_matrix = mat4::transform_point(&t.matrix(), p);
        assert!(vec_approx_eq(via_matrix, t.transform_point(p)));
    }

    #[test]
    fn test_transform_direction_ignores_position() {
        let t = Transform3D::from_position(Vec3::splat(100.0));
        assert!(vec_approx_eq(t.transform_direction(Vec3::X), Vec3::X));
    }

    #[test]
    fn test_translate_local() {
        let mut t = Transform3D::from_position_rotation(Vec3::ZERO, Euler::yxz(0.0, PI, 0.0));
        t.translate_local(Vec3::Z);
        assert!(vec_approx_eq(t.position, Vec3::new(0.0, 0.0, -1.0)));
    }

    #[test]
    fn test_control_target() {
        let mut t = Transform3D::default();
        t.set_position(Vec3::new(0.0, 1.0, 0.0));
        t.set_rotation(Euler::yxz(0.1, 0.2, 0.0));
        assert_eq!(ControlTarget::position(&t), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(ControlTarget::rotation(&t).y, 0.2);
    }

    #[test]
    fn test_ron_defaults() {
        let t: Transform3D = ron::from_str("(position: (x: 1.0, y: 2.0, z: 3.0))").unwrap();
        assert_eq!(t.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(t.scale, Vec3::ONE);
    }
}
