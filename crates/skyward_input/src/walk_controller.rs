//! Free-look walking controller
//!
//! Controls:
//! - W/S: Forward/backward along the current heading
//! - A/D: Strafe left/right
//! - Mouse: Look around (yaw unbounded, pitch clamped)
//!
//! Movement stays on the ground plane: looking up or down never lifts the
//! walker, and the eye height is pinned after every update.

use std::f32::consts::FRAC_PI_2;

use skyward_math::{Euler, Vec3, interp};
use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::{ControlTarget, MovementKeys};

/// First-person walking controller
pub struct WalkController {
    keys: MovementKeys,

    // Mouse state
    pending_yaw: f32,
    pending_pitch: f32,

    // Input smoothing state
    smooth_yaw: f32,
    smooth_pitch: f32,

    // Configuration
    /// Walking speed (units per second)
    pub move_speed: f32,
    /// Radians of rotation per pixel of mouse motion
    pub mouse_sensitivity: f32,
    /// Pitch is confined to `[-pitch_limit, pitch_limit]`
    pub pitch_limit: f32,
    /// Eye height the camera is pinned to
    pub ground_height: f32,
    pub smoothing_half_life: f32,
    pub smoothing_enabled: bool,
}

impl Default for WalkController {
    fn default() -> Self {
        Self::new()
    }
}

impl WalkController {
    pub fn new() -> Self {
        Self {
            keys: MovementKeys::empty(),

            pending_yaw: 0.0,
            pending_pitch: 0.0,

            smooth_yaw: 0.0,
            smooth_pitch: 0.0,

            move_speed: 6.0,
            mouse_sensitivity: 0.002,
            pitch_limit: FRAC_PI_2,
            ground_height: 0.0,
            smoothing_half_life: 0.05,
            smoothing_enabled: false,
        }
    }

    /// Process keyboard input; returns true if the key was consumed
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        self.keys.apply(key, state)
    }

    /// Process raw mouse movement (pixels)
    pub fn process_mouse_motion(&mut self, delta_x: f64, delta_y: f64) {
        self.pending_yaw += delta_x as f32;
        self.pending_pitch += delta_y as f32;
    }

    /// Apply accumulated input to `target`
    ///
    /// Mouse look only applies while `look_enabled` (cursor captured); pending
    /// mouse motion is discarded either way.
    pub fn update<C: ControlTarget>(&mut self, target: &mut C, dt: f32, look_enabled: bool) {
        let (yaw_input, pitch_input) = if self.smoothing_enabled && dt > 0.0 {
            let keep = interp::smoothing_factor(dt, self.smoothing_half_life);
            self.smooth_yaw = self.smooth_yaw * keep + self.pending_yaw * (1.0 - keep);
            self.smooth_pitch = self.smooth_pitch * keep + self.pending_pitch * (1.0 - keep);
            (self.smooth_yaw, self.smooth_pitch)
        } else {
            (self.pending_yaw, self.pending_pitch)
        };
        self.pending_yaw = 0.0;
        self.pending_pitch = 0.0;

        let mut rotation = target.rotation();
        if look_enabled {
            // Mouse right turns right (negative yaw), mouse down looks down
            rotation.y -= yaw_input * self.mouse_sensitivity;
            rotation.x = (rotation.x - pitch_input * self.mouse_sensitivity)
                .clamp(-self.pitch_limit, self.pitch_limit);
        }
        let rotation = Euler::yxz(rotation.x, rotation.y, 0.0);
        target.set_rotation(rotation);

        let mut position = target.position();
        let direction = self.move_direction(rotation.y);
        position = position.add_scaled(direction, self.move_speed * dt);
        position.y = self.ground_height;
        target.set_position(position);
    }

    /// Normalized ground-plane direction for the held keys at heading `yaw`
    ///
    /// Diagonal movement is as fast as straight movement.
    pub fn move_direction(&self, yaw: f32) -> Vec3 {
        let (sin, cos) = yaw.sin_cos();
        let forward = Vec3::new(-sin, 0.0, -cos);
        let right = Vec3::new(cos, 0.0, -sin);
        (forward * self.keys.forward_axis() + right * self.keys.right_axis()).normalized()
    }

    /// Check if any movement keys are pressed
    pub fn is_moving(&self) -> bool {
        !self.keys.is_empty()
    }

    /// Forget held keys and pending mouse motion
    pub fn reset(&mut self) {
        self.keys = MovementKeys::empty();
        self.pending_yaw = 0.0;
        self.pending_pitch = 0.0;
        self.smooth_yaw = 0.0;
        self.smooth_pitch = 0.0;
    }

    /// Toggle input smoothing on/off
    pub fn toggle_smoothing(&mut self) -> bool {
        self.smoothing_enabled = !self.smoothing_enabled;
        self.smooth_yaw = 0.0;
        self.smooth_pitch = 0.0;
        self.smoothing_enabled
    }

    /// Builder: set walking speed
    pub fn with_move_speed(mut self, speed: f32) -> Self {
        self.move_speed = speed;
        self
    }

    /// Builder: set mouse sensitivity
    pub fn with_mouse_sensitivity(mut self, sensitivity: f32) -> Self {
        self.mouse_sensitivity = sensitivity;
        self
    }

    /// Builder: set pitch limit (radians)
    pub fn with_pitch_limit(mut self, limit: f32) -> Self {
        self.pitch_limit = limit.abs();
        self
    }

    /// Builder: set the eye height
    pub fn with_ground_height(mut self, height: f32) -> Self {
        self.ground_height = height;
        self
    }

    /// Builder: set smoothing half-life (lower = more responsive)
    pub fn with_smoothing_half_life(mut self, half_life: f32) -> Self {
        self.smoothing_half_life = half_life;
        self
    }

    /// Builder: enable or disable smoothing
    pub fn with_smoothing(mut self, enabled: bool) -> Self {
        self.smoothing_enabled = enabled;
        self
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

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_forward_moves_along_negative_z() {
        let mut controller = WalkController::new();
        let mut pose = Pose::default();
        controller.process_keyboard(KeyCode::KeyW, ElementState::Pressed);
        controller.update(&mut pose, 1.0, true);
        assert!((pose.position.z + 6.0).abs() < 0.0001);
        assert_eq!(pose.position.x, 0.0);
    }

    #[test]
    fn test_diagonal_not_faster() {
        let mut controller = WalkController::new();
        let mut pose = Pose::default();
        controller.process_keyboard(KeyCode::KeyW, ElementState::Pressed);
        controller.process_keyboard(KeyCode::KeyD, ElementState::Pressed);
        controller.update(&mut pose, 1.0, true);
        assert!((pose.position.length() - 6.0).abs() < 0.0001);
    }

    #[test]
    fn test_strafe_follows_heading() {
        let mut controller = WalkController::new();
        let mut pose = Pose {
            rotation: Euler::yxz(0.0, FRAC_PI_2, 0.0),
            ..Default::default()
        };
        // Facing -X after a quarter turn left; right is -Z
        controller.process_keyboard(KeyCode::KeyD, ElementState::Pressed);
        controller.update(&mut pose, 1.0, true);
        assert!((pose.position.z + 6.0).abs() < 0.0001, "got {:?}", pose.position);
    }

    #[test]
    fn test_height_pinned_while_looking_up() {
        let mut controller = WalkController::new().with_ground_height(1.6);
        let mut pose = Pose { position: Vec3::new(0.0, 5.0, 0.0), ..Default::default() };
        controller.process_mouse_motion(0.0, -10_000.0);
        controller.process_keyboard(KeyCode::KeyW, ElementState::Pressed);
        for _ in 0..10 {
            controller.update(&mut pose, DT, true);
        }
        assert_eq!(pose.position.y, 1.6);
    }

    #[test]
    fn test_pitch_clamped() {
        let mut controller = WalkController::new();
        let mut pose = Pose::default();
        controller.process_mouse_motion(0.0, 1.0e6);
        controller.update(&mut pose, DT, true);
        assert_eq!(pose.rotation.x, -FRAC_PI_2);
        controller.process_mouse_motion(0.0, -1.0e7);
        controller.update(&mut pose, DT, true);
        assert_eq!(pose.rotation.x, FRAC_PI_2);
    }

    #[test]
    fn test_look_disabled_discards_motion() {
        let mut controller = WalkController::new();
        let mut pose = Pose::default();
        controller.process_mouse_motion(100.0, 100.0);
        controller.update(&mut pose, DT, false);
        controller.update(&mut pose, DT, true);
        assert_eq!(pose.rotation.y, 0.0);
        assert_eq!(pose.rotation.x, 0.0);
    }

    #[test]
    fn test_mouse_right_turns_right() {
        let mut controller = WalkController::new();
        let mut pose = Pose::default();
        controller.process_mouse_motion(100.0, 0.0);
        controller.update(&mut pose, DT, true);
        assert!(pose.rotation.y < 0.0);
    }

    #[test]
    fn test_reset_releases_keys() {
        let mut controller = WalkController::new();
        controller.process_keyboard(KeyCode::KeyA, ElementState::Pressed);
        assert!(controller.is_moving());
        controller.reset();
        assert!(!controller.is_moving());
    }
}
