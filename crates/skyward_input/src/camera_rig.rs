//! Camera rigs that follow or circle a model
//!
//! - [`ChaseCamera`] sits behind and above a model, trailing its heading
//! - [`OrbitCamera`] circles a fixed point (right-drag to orbit, wheel to zoom)

use std::f32::consts::PI;

use skyward_math::{Euler, Quat, Vec3, interp::{self, REFERENCE_FPS}};

use crate::ControlTarget;

/// Camera that trails a model
#[derive(Clone, Debug)]
pub struct ChaseCamera {
    /// Model-space offset of the camera (models face +Z, so behind is -Z)
    pub offset: Vec3,
    /// Model-space point the camera looks at
    pub look_offset: Vec3,
    /// Fraction of the remaining distance covered per frame
    pub follow_smoothness: f32,
}

impl Default for ChaseCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl ChaseCamera {
    pub fn new() -> Self {
        Self {
            offset: Vec3::new(0.0, 3.0, -10.0),
            look_offset: Vec3::new(0.0, 1.0, 0.0),
            follow_smoothness: 0.1,
        }
    }

    /// Where the camera wants to be for a model at `position` with heading `yaw`
    pub fn desired_position(&self, position: Vec3, yaw: f32) -> Vec3 {
        position + Quat::from_axis_angle(Vec3::Y, yaw).rotate(self.offset)
    }

    /// Move `camera` toward its chase position and aim it at the model
    pub fn update<M: ControlTarget, C: ControlTarget>(&self, model: &M, camera: &mut C, dt: f32) {
        let model_position = model.position();
        let yaw = model.rotation().y;
        let desired = self.desired_position(model_position, yaw);
        let factor = interp::frame_factor(self.follow_smoothness, dt, REFERENCE_FPS);
        self.place(model_position, yaw, camera.position().lerp(desired, factor), camera);
    }

    /// Put `camera` exactly at its chase position
    pub fn snap<M: ControlTarget, C: ControlTarget>(&self, model: &M, camera: &mut C) {
        let model_position = model.position();
        let yaw = model.rotation().y;
        let desired = self.desired_position(model_position, yaw);
        self.place(model_position, yaw, desired, camera);
    }

    fn place<C: ControlTarget>(&self, model_position: Vec3, yaw: f32, eye: Vec3, camera: &mut C) {
        let look_at = model_position + Quat::from_axis_angle(Vec3::Y, yaw).rotate(self.look_offset);
        camera.set_position(eye);
        camera.set_rotation(Euler::facing(look_at - eye));
    }

    /// Builder: set the model-space camera offset
    pub fn with_offset(mut self, offset: Vec3) -> Self {
        self.offset = offset;
        self
    }

    /// Builder: set the model-space look point
    pub fn with_look_offset(mut self, offset: Vec3) -> Self {
        self.look_offset = offset;
        self
    }

    /// Builder: set per-frame follow smoothness
    pub fn with_follow_smoothness(mut self, smoothness: f32) -> Self {
        self.follow_smoothness = smoothness;
        self
    }
}

/// Camera orbiting a target point
///
/// Spherical coordinates: `azimuth` turns about +Y (0 = on the +Z side),
/// `polar` is measured down from +Y.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    target: Vec3,
    distance: f32,
    azimuth: f32,
    polar: f32,
    dragging: bool,

    /// Radians per pixel of drag
    pub rotate_speed: f32,
    /// Distance multiplier per wheel line
    pub zoom_step: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_polar: f32,
    pub max_polar: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, 10.0)
    }
}

impl OrbitCamera {
    pub fn new(target: Vec3, distance: f32) -> Self {
        let mut orbit = Self {
            target,
            distance,
            azimuth: 0.0,
            polar: PI / 2.0,
            dragging: false,

            rotate_speed: 0.005,
            zoom_step: 0.95,
            min_distance: 1.0,
            max_distance: 500.0,
            min_polar: 0.01,
            max_polar: PI - 0.01,
        };
        orbit.distance = orbit.clamp_distance(distance);
        orbit
    }

    /// Orbit that reproduces a camera placed at `eye` looking at `target`
    pub fn from_eye(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let mut orbit = Self::new(target, offset.length());
        if orbit.distance > 0.0 {
            orbit.azimuth = offset.x.atan2(offset.z);
            orbit.polar = (offset.y / offset.length())
                .clamp(-1.0, 1.0)
                .acos()
                .clamp(orbit.min_polar, orbit.max_polar);
        }
        orbit
    }

    /// Begin or end a drag (right mouse button)
    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Process raw mouse movement; only orbits while dragging
    pub fn process_mouse_motion(&mut self, delta_x: f64, delta_y: f64) {
        if !self.dragging {
            return;
        }
        self.azimuth -= delta_x as f32 * self.rotate_speed;
        self.polar = (self.polar - delta_y as f32 * self.rotate_speed)
            .clamp(self.min_polar, self.max_polar);
    }

    /// Process wheel input in lines (positive = zoom in)
    pub fn process_scroll(&mut self, lines: f32) {
        self.distance = self.clamp_distance(self.distance * self.zoom_step.powf(lines));
    }

    /// Place `camera` on the orbit, looking at the target
    pub fn update<C: ControlTarget>(&self, camera: &mut C) {
        let eye = self.eye();
        camera.set_position(eye);
        camera.set_rotation(Euler::facing(self.target - eye));
    }

    /// Current camera position
    pub fn eye(&self) -> Vec3 {
        let (sin_polar, cos_polar) = self.polar.sin_cos();
        let (sin_az, cos_az) = self.azimuth.sin_cos();
        self.target + Vec3::new(sin_polar * sin_az, cos_polar, sin_polar * cos_az) * self.distance
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn polar(&self) -> f32 {
        self.polar
    }

    fn clamp_distance(&self, distance: f32) -> f32 {
        distance.clamp(self.min_distance, self.max_distance.max(self.min_distance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Pose {
        position: Vec3,
        rotation: Euler,
    }

    impl ControlTarget for Pose {
        fn position(&self) -> Vec3 { self.position }
        fn set_position(&mut self, position: Vec3) { self.position = position; }
        fn rotation(&self) -> Euler { self.rotation }
        fn set_rotation(&mut self, rotation: Euler) { self.rotation = rotation; }
    }

    const EPSILON: f32 = 1e-4;

    /// Direction a camera pose looks along (cameras face -Z)
    fn view_direction(pose: &Pose) -> Vec3 {
        pose.rotation.to_quat().rotate(Vec3::new(0.0, 0.0, -1.0))
    }

    #[test]
    fn test_chase_sits_behind_model() {
        let chase = ChaseCamera::new();
        let model = Pose::default();
        let mut camera = Pose::default();
        chase.snap(&model, &mut camera);
        assert!((camera.position - Vec3::new(0.0, 3.0, -10.0)).length() < EPSILON);
    }

    #[test]
    fn test_chase_follows_heading() {
        let chase = ChaseCamera::new().with_offset(Vec3::new(0.0, 0.0, -5.0));
        let model = Pose {
            rotation: Euler::yxz(0.0, std::f32::consts::FRAC_PI_2, 0.0),
            ..Default::default()
        };
        // Turned to face +X, so behind is -X
        let desired = chase.desired_position(model.position, model.rotation.y);
        assert!((desired - Vec3::new(-5.0, 0.0, 0.0)).length() < EPSILON, "got {:?}", desired);
    }

    #[test]
    fn test_chase_looks_at_model() {
        let chase = ChaseCamera::new().with_look_offset(Vec3::ZERO);
        let model = Pose { position: Vec3::new(2.0, 1.0, 4.0), ..Default::default() };
        let mut camera = Pose::default();
        chase.snap(&model, &mut camera);
        let expected = (model.position - camera.position).normalized();
        assert!((view_direction(&camera) - expected).length() < EPSILON);
    }

    #[test]
    fn test_chase_converges_without_overshoot() {
        let chase = ChaseCamera::new();
        let model = Pose { position: Vec3::new(0.0, 0.0, 50.0), ..Default::default() };
        let mut camera = Pose::default();
        let desired = chase.desired_position(model.position, 0.0);
        let mut last = (camera.position - desired).length();
        for _ in 0..300 {
            chase.update(&model, &mut camera, 1.0 / 60.0);
            let remaining = (camera.position - desired).length();
            assert!(remaining <= last + EPSILON);
            last = remaining;
        }
        assert!(last < 0.01);
    }

    #[test]
    fn test_orbit_eye_and_aim() {
        let orbit = OrbitCamera::new(Vec3::new(0.0, 1.0, 0.0), 10.0);
        let mut camera = Pose::default();
        orbit.update(&mut camera);
        assert!((camera.position - Vec3::new(0.0, 1.0, 10.0)).length() < EPSILON);
        assert!((view_direction(&camera) - Vec3::new(0.0, 0.0, -1.0)).length() < EPSILON);
    }

    #[test]
    fn test_orbit_from_eye_round_trip() {
        let eye = Vec3::new(3.0, 4.0, 5.0);
        let orbit = OrbitCamera::from_eye(eye, Vec3::ZERO);
        assert!((orbit.eye() - eye).length() < 1e-3, "got {:?}", orbit.eye());
    }

    #[test]
    fn test_orbit_only_while_dragging() {
        let mut orbit = OrbitCamera::default();
        let before = orbit.eye();
        orbit.process_mouse_motion(100.0, 0.0);
        assert_eq!(orbit.eye(), before);
        orbit.set_dragging(true);
        orbit.process_mouse_motion(100.0, 0.0);
        assert!((orbit.eye() - before).length() > 0.1);
    }

    #[test]
    fn test_orbit_polar_clamped() {
        let mut orbit = OrbitCamera::default();
        orbit.set_dragging(true);
        orbit.process_mouse_motion(0.0, 1.0e6);
        assert_eq!(orbit.polar(), orbit.min_polar);
        orbit.process_mouse_motion(0.0, -1.0e6);
        assert_eq!(orbit.polar(), orbit.max_polar);
    }

    #[test]
    fn test_zoom_clamped() {
        let mut orbit = OrbitCamera::default();
        orbit.process_scroll(1.0);
        assert!(orbit.distance() < 10.0);
        orbit.process_scroll(10_000.0);
        assert_eq!(orbit.distance(), orbit.min_distance);
        orbit.process_scroll(-10_000.0);
        assert_eq!(orbit.distance(), orbit.max_distance);
    }
}
