//! Perspective camera
//!
//! The camera looks down its local -Z axis with +Y up. Its pose is a
//! [`Transform3D`] so the same controllers that move scene nodes can drive it.

use skyward_core::{CameraTemplate, Transform3D};
use skyward_input::ControlTarget;
use skyward_math::{mat4, Euler, Mat4, Vec3};

/// Perspective camera with a controllable pose
#[derive(Clone, Debug, PartialEq)]
pub struct PerspectiveCamera {
    /// Pose in world space (scale is ignored)
    pub transform: Transform3D,
    /// Vertical field of view in radians
    pub fov: f32,
    /// Width / height of the viewport
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self::from_template(&CameraTemplate::default(), 1.0)
    }
}

impl PerspectiveCamera {
    /// Create a camera at the origin
    pub fn new(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            transform: Transform3D::identity(),
            fov: fov_degrees.to_radians(),
            aspect,
            near,
            far,
        }
    }

    /// Create a camera from a scene template's start pose
    pub fn from_template(template: &CameraTemplate, aspect: f32) -> Self {
        let mut camera = Self::new(template.fov_degrees, aspect, template.near, template.far);
        camera.transform.position = template.position;
        camera.transform.rotation = template.rotation;
        camera
    }

    /// Place the camera
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.transform.position = position;
        self
    }

    /// Update the aspect ratio after a resize
    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    /// Turn the camera to face a world-space point
    pub fn look_at(&mut self, target: Vec3) {
        let direction = target - self.transform.position;
        if direction.length_squared() > 1e-12 {
            self.transform.rotation = Euler::facing(direction);
        }
    }

    /// Camera-to-world matrix (rotation and translation only)
    pub fn world_matrix(&self) -> Mat4 {
        mat4::from_trs(self.transform.position, self.transform.quaternion(), Vec3::ONE)
    }

    /// World-to-camera matrix
    pub fn view_matrix(&self) -> Mat4 {
        mat4::rigid_inverse(&self.world_matrix())
    }

    /// Projection matrix (depth mapped to 0..1)
    pub fn projection_matrix(&self) -> Mat4 {
        mat4::perspective(self.fov, self.aspect, self.near, self.far)
    }

    /// Projection × view
    pub fn view_projection(&self) -> Mat4 {
        mat4::mul(self.projection_matrix(), self.view_matrix())
    }

    /// Direction the camera looks along
    pub fn forward(&self) -> Vec3 {
        self.transform.quaternion().rotate(Vec3::new(0.0, 0.0, -1.0))
    }
}

impl ControlTarget for PerspectiveCamera {
    fn position(&self) -> Vec3 {
        self.transform.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.transform.position = position;
    }

    fn rotation(&self) -> Euler {
        self.transform.rotation
    }

    fn set_rotation(&mut self, rotation: Euler) {
        self.transform.rotation = rotation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 1e-4;

    fn clip(camera: &PerspectiveCamera, p: Vec3) -> [f32; 4] {
        let m = camera.view_projection();
        let mut out = [0.0; 4];
        for (row, value) in out.iter_mut().enumerate() {
            *value = m[0][row] * p.x + m[1][row] * p.y + m[2][row] * p.z + m[3][row];
        }
        out
    }

    #[test]
    fn test_from_template_defaults() {
        let camera = PerspectiveCamera::from_template(&CameraTemplate::default(), 1.5);
        assert_eq!(camera.transform.position, Vec3::new(0.0, 0.0, 10.0));
        assert!((camera.fov - 75f32.to_radians()).abs() < EPSILON);
        assert_eq!(camera.aspect, 1.5);
        assert_eq!(camera.near, 0.1);
        assert_eq!(camera.far, 1000.0);
    }

    #[test]
    fn test_view_matrix_moves_world_opposite() {
        let camera = PerspectiveCamera::default();
        let p = mat4::transform_point(&camera.view_matrix(), Vec3::ZERO);
        // Origin is 10 units in front of a camera at z = 10
        assert!((p - Vec3::new(0.0, 0.0, -10.0)).length() < EPSILON);
    }

    #[test]
    fn test_point_ahead_projects_to_center() {
        let camera = PerspectiveCamera::default();
        let c = clip(&camera, Vec3::ZERO);
        assert!(c[3] > 0.0);
        assert!((c[0] / c[3]).abs() < EPSILON);
        assert!((c[1] / c[3]).abs() < EPSILON);
        let depth = c[2] / c[3];
        assert!(depth > 0.0 && depth < 1.0);
    }

    #[test]
    fn test_look_at_faces_target() {
        let mut camera = PerspectiveCamera::default().with_position(Vec3::new(0.0, 2.0, 5.0));
        let target = Vec3::new(0.0, 1.0, 0.0);
        camera.look_at(target);
        let expected = (target - camera.transform.position).normalized();
        assert!((camera.forward() - expected).length() < EPSILON);
    }

    #[test]
    fn test_yaw_turns_forward() {
        let mut camera = PerspectiveCamera::default();
        camera.set_rotation(Euler::yxz(0.0, FRAC_PI_2, 0.0));
        // Yawing left by 90° looks down -X
        assert!((camera.forward() - Vec3::new(-1.0, 0.0, 0.0)).length() < EPSILON);
    }

    #[test]
    fn test_set_aspect_rejects_degenerate() {
        let mut camera = PerspectiveCamera::default();
        camera.set_aspect(2.0);
        assert_eq!(camera.aspect, 2.0);
        camera.set_aspect(0.0);
        camera.set_aspect(f32::NAN);
        assert_eq!(camera.aspect, 2.0);
    }
}
