//! Glide controller for a loaded airplane model
//!
//! Controls:
//! - W: Set the target one step ahead of the nose
//! - S: Set the target one step behind the tail
//! - Mouse: Steer (horizontal = heading, vertical = pitch)
//!
//! Every press (including key repeat) re-targets relative to where the
//! model is at that moment; the model then glides toward the target, easing
//! its heading and pitch toward the mouse-driven targets. A child part (the
//! propeller) spins continuously.
//!
//! All smoothing factors are "per frame at 60 Hz" and are rescaled with
//! [`interp::frame_factor`] for the actual frame time.

use std::f32::consts::FRAC_PI_4;

use skyward_math::{Euler, Vec3, interp::{self, REFERENCE_FPS}};
use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::ControlTarget;

/// A single forward/backward nudge requested by a key press
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Thrust {
    Forward,
    Backward,
}

impl Thrust {
    /// Model-space direction of the nudge (models face +Z)
    pub fn basis(self) -> Vec3 {
        match self {
            Thrust::Forward => Vec3::Z,
            Thrust::Backward => Vec3::new(0.0, 0.0, -1.0),
        }
    }
}

/// Airplane controller driven by key presses and mouse steering
pub struct GlideController {
    target_yaw: f32,
    target_pitch: f32,
    target_position: Vec3,
    pending_thrust: Option<Thrust>,
    attached: bool,

    /// Distance of one nudge
    pub flight_speed: f32,
    /// Radians of target rotation per pixel of mouse motion
    pub rotation_speed: f32,
    /// Pitch (target and actual) is confined to `[-pitch_limit, pitch_limit]`
    pub pitch_limit: f32,
    /// Fraction of the remaining heading/pitch covered per frame
    pub rotation_easing: f32,
    /// Fraction of the remaining distance covered per frame
    pub translation_smoothness: f32,
    /// Spinner rotation per frame (radians)
    pub spin_rate: f32,
}

impl Default for GlideController {
    fn default() -> Self {
        Self::new()
    }
}

impl GlideController {
    pub fn new() -> Self {
        Self {
            target_yaw: 0.0,
            target_pitch: 0.0,
            target_position: Vec3::ZERO,
            pending_thrust: None,
            attached: false,

            flight_speed: 0.5,
            rotation_speed: 0.01,
            pitch_limit: FRAC_PI_4,
            rotation_easing: 0.05,
            translation_smoothness: 0.1,
            spin_rate: 0.1,
        }
    }

    /// Start steering a model: targets begin at its current pose
    pub fn attach<C: ControlTarget>(&mut self, model: &C) {
        let rotation = model.rotation();
        self.target_yaw = rotation.y;
        self.target_pitch = rotation.x.clamp(-self.pitch_limit, self.pitch_limit);
        self.target_position = model.position();
        self.pending_thrust = None;
        self.attached = true;
    }

    /// Whether a model has been attached
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Process keyboard input; returns true if the key was consumed
    ///
    /// Presses made before a model is attached are ignored.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        let thrust = match key {
            KeyCode::KeyW => Thrust::Forward,
            KeyCode::KeyS => Thrust::Backward,
            _ => return false,
        };
        if state == ElementState::Pressed && self.attached {
            self.pending_thrust = Some(thrust);
        }
        true
    }

    /// Process raw mouse movement (pixels)
    pub fn process_mouse_motion(&mut self, delta_x: f64, delta_y: f64) {
        self.target_yaw += delta_x as f32 * self.rotation_speed;
        self.target_pitch = (self.target_pitch + delta_y as f32 * self.rotation_speed)
            .clamp(-self.pitch_limit, self.pitch_limit);
    }

    /// Advance the model one frame toward its targets
    pub fn update<C: ControlTarget>(&mut self, model: &mut C, dt: f32) {
        if !self.attached {
            self.attach(model);
        }

        if let Some(thrust) = self.pending_thrust.take() {
            let direction = model.orientation().rotate(thrust.basis());
            self.target_position = model.position().add_scaled(direction, self.flight_speed);
        }

        let ease = interp::frame_factor(self.rotation_easing, dt, REFERENCE_FPS);
        let rotation = model.rotation();
        let yaw = interp::ease_toward(rotation.y, self.target_yaw, ease);
        let pitch = interp::ease_toward(rotation.x, self.target_pitch, ease)
            .clamp(-self.pitch_limit, self.pitch_limit);
        model.set_rotation(Euler::yxz(pitch, yaw, rotation.z));

        let glide = interp::frame_factor(self.translation_smoothness, dt, REFERENCE_FPS);
        model.set_position(model.position().lerp(self.target_position, glide));
    }

    /// Spin a child part about its own Z axis
    pub fn spin<C: ControlTarget>(&self, part: &mut C, dt: f32) {
        let mut rotation = part.rotation();
        rotation.z += interp::per_frame_rate(self.spin_rate, dt, REFERENCE_FPS);
        part.set_rotation(rotation);
    }

    pub fn target_position(&self) -> Vec3 {
        self.target_position
    }

    /// Current (heading, pitch) targets
    pub fn target_angles(&self) -> (f32, f32) {
        (self.target_yaw, self.target_pitch)
    }

    /// Detach from the model and clear all targets
    pub fn reset(&mut self) {
        *self = Self {
            flight_speed: self.flight_speed,
            rotation_speed: self.rotation_speed,
            pitch_limit: self.pitch_limit,
            rotation_easing: self.rotation_easing,
            translation_smoothness: self.translation_smoothness,
            spin_rate: self.spin_rate,
            ..Self::new()
        };
    }

    /// Builder: set nudge distance
    pub fn with_flight_speed(mut self, speed: f32) -> Self {
        self.flight_speed = speed;
        self
    }

    /// Builder: set mouse steering rate
    pub fn with_rotation_speed(mut self, speed: f32) -> Self {
        self.rotation_speed = speed;
        self
    }

    /// Builder: set pitch limit (radians)
    pub fn with_pitch_limit(mut self, limit: f32) -> Self {
        self.pitch_limit = limit.abs();
        self
    }

    /// Builder: set per-frame rotation easing
    pub fn with_rotation_easing(mut self, easing: f32) -> Self {
        self.rotation_easing = easing;
        self
    }

    /// Builder: set per-frame translation smoothness
    pub fn with_translation_smoothness(mut self, smoothness: f32) -> Self {
        self.translation_smoothness = smoothness;
        self
    }

    /// Builder: set per-frame spin
    pub fn with_spin_rate(mut self, rate: f32) -> Self {
        self.spin_rate = rate;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

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

    fn airplane() -> Pose {
        Pose {
            position: Vec3::new(0.0, 1.0, 0.0),
            rotation: Euler::yxz(0.0, PI, 0.0),
        }
    }

    #[test]
    fn test_presses_ignored_before_attach() {
        let mut controller = GlideController::new();
        assert!(controller.process_keyboard(KeyCode::KeyW, ElementState::Pressed));
        let mut model = airplane();
        controller.update(&mut model, DT);
        // Attached on first update but the early press was dropped
        assert_eq!(controller.target_position(), Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_attach_keeps_model_in_place() {
        let mut controller = GlideController::new();
        let mut model = airplane();
        controller.attach(&model);
        for _ in 0..120 {
            controller.update(&mut model, DT);
        }
        assert!((model.position - Vec3::new(0.0, 1.0, 0.0)).length() < 1e-5);
        assert!((model.rotation.y - PI).abs() < 1e-5);
    }

    #[test]
    fn test_forward_press_targets_nose_direction() {
        let mut controller = GlideController::new();
        let mut model = airplane();
        controller.attach(&model);
        controller.process_keyboard(KeyCode::KeyW, ElementState::Pressed);
        controller.update(&mut model, DT);
        // Turned around (yaw = PI), so the nose points down -Z
        let target = controller.target_position();
        assert!((target - Vec3::new(0.0, 1.0, -0.5)).length() < 1e-5, "got {:?}", target);
        assert!(model.position.z < 0.0 && model.position.z > -0.5);
    }

    #[test]
    fn test_glide_never_overshoots_target() {
        for dt in [0.0, 1e-4, 1.0 / 144.0, 1.0 / 60.0, 0.1, 0.25, 5.0] {
            let mut controller = GlideController::new();
            let mut model = airplane();
            controller.attach(&model);
            controller.process_keyboard(KeyCode::KeyW, ElementState::Pressed);
            controller.update(&mut model, dt);

            let start = Vec3::new(0.0, 1.0, 0.0);
            let target = controller.target_position();
            let heading = (target - start).normalized();
            let mut distance = (target - model.position).length();
            for frame in 0..240 {
                controller.update(&mut model, dt);
                let remaining = target - model.position;
                assert!(
                    remaining.length() <= distance + 1e-6,
                    "dt {} frame {}: distance grew from {} to {}",
                    dt, frame, distance, remaining.length()
                );
                assert!(
                    remaining.dot(heading) >= -1e-5,
                    "dt {} frame {}: passed the target at {:?}",
                    dt, frame, model.position
                );
                distance = remaining.length();
            }
            assert_eq!(controller.target_position(), target);
            if dt > 0.0 {
                assert!(distance < 0.5, "dt {}: no progress", dt);
            } else {
                assert!((distance - 0.5).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn test_backward_press() {
        let mut controller = GlideController::new();
        let mut model = Pose::default();
        controller.attach(&model);
        controller.process_keyboard(KeyCode::KeyS, ElementState::Pressed);
        controller.update(&mut model, DT);
        assert!((controller.target_position() - Vec3::new(0.0, 0.0, -0.5)).length() < 1e-5);
    }

    #[test]
    fn test_release_does_not_move() {
        let mut controller = GlideController::new();
        let mut model = Pose::default();
        controller.attach(&model);
        controller.process_keyboard(KeyCode::KeyW, ElementState::Released);
        controller.update(&mut model, DT);
        assert_eq!(controller.target_position(), Vec3::ZERO);
    }

    #[test]
    fn test_target_pitch_clamped() {
        let mut controller = GlideController::new();
        controller.process_mouse_motion(0.0, 10_000.0);
        assert_eq!(controller.target_angles().1, FRAC_PI_4);
        controller.process_mouse_motion(0.0, -100_000.0);
        assert_eq!(controller.target_angles().1, -FRAC_PI_4);
    }

    #[test]
    fn test_rotation_eases_toward_target() {
        let mut controller = GlideController::new();
        let mut model = Pose::default();
        controller.attach(&model);
        controller.process_mouse_motion(100.0, 0.0);
        controller.update(&mut model, DT);
        // One 60 Hz frame covers 5% of the way
        assert!((model.rotation.y - 0.05).abs() < 1e-4, "got {}", model.rotation.y);
    }

    #[test]
    fn test_spin() {
        let controller = GlideController::new();
        let mut propeller = Pose::default();
        controller.spin(&mut propeller, DT);
        controller.spin(&mut propeller, DT);
        assert!((propeller.rotation.z - 0.2).abs() < 1e-5);
    }

    #[test]
    fn test_reset_keeps_tuning() {
        let mut controller = GlideController::new().with_flight_speed(2.0);
        controller.attach(&Pose::default());
        controller.reset();
        assert!(!controller.is_attached());
        assert_eq!(controller.flight_speed, 2.0);
    }
}
