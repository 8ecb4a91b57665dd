//! Throttle flight controller
//!
//! Controls:
//! - W (held): Accelerate
//! - S (held): Decelerate
//! - Mouse: Steer (horizontal = pan/heading, vertical = pitch)
//!
//! The airplane always flies: its speed is kept within
//! `[min_speed, max_speed]` and it advances along its nose direction every
//! frame. Position chases a target point that runs ahead at the current
//! speed, which smooths out sudden heading changes.

use std::f32::consts::{FRAC_PI_4, PI};

use skyward_math::{Euler, Vec3, interp::{self, REFERENCE_FPS}};
use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::{ControlTarget, MovementKeys};

/// Airplane controller with held-key throttle
pub struct ThrottleController {
    keys: MovementKeys,
    speed: f32,
    target_yaw: f32,
    target_pitch: f32,
    target_position: Vec3,
    attached: bool,

    /// Slowest cruising speed (units per second)
    pub min_speed: f32,
    /// Fastest speed (units per second)
    pub max_speed: f32,
    /// Speed gained per second while accelerating
    pub acceleration: f32,
    /// Speed lost per second while decelerating
    pub deceleration: f32,
    /// Radians of target rotation per pixel of mouse motion
    pub rotation_speed: f32,
    /// Largest rotation a single mouse event may request (radians)
    pub max_turn_per_event: f32,
    /// Pitch is confined to `[-pitch_limit, pitch_limit]`
    pub pitch_limit: f32,
    /// Heading (pan) is confined to `[-pan_limit, pan_limit]`
    pub pan_limit: f32,
    /// Fraction of the remaining heading/pitch covered per frame
    pub rotation_easing: f32,
    /// Fraction of the remaining distance covered per frame
    pub translation_smoothness: f32,
    /// Spinner rotation per frame (radians)
    pub spin_rate: f32,
}

impl Default for ThrottleController {
    fn default() -> Self {
        Self::new()
    }
}

impl ThrottleController {
    pub fn new() -> Self {
        Self {
            keys: MovementKeys::empty(),
            speed: 2.0,
            target_yaw: 0.0,
            target_pitch: 0.0,
            target_position: Vec3::ZERO,
            attached: false,

            min_speed: 2.0,
            max_speed: 30.0,
            acceleration: 10.0,
            deceleration: 15.0,
            rotation_speed: 0.005,
            max_turn_per_event: 0.1,
            pitch_limit: FRAC_PI_4,
            pan_limit: PI,
            rotation_easing: 0.05,
            translation_smoothness: 0.1,
            spin_rate: 0.1,
        }
    }

    /// Start flying a model from its current pose at minimum speed
    pub fn attach<C: ControlTarget>(&mut self, model: &C) {
        let rotation = model.rotation();
        self.target_yaw = rotation.y.clamp(-self.pan_limit, self.pan_limit);
        self.target_pitch = rotation.x.clamp(-self.pitch_limit, self.pitch_limit);
        self.target_position = model.position();
        self.speed = self.min_speed;
        self.attached = true;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Process keyboard input; returns true if the key was consumed
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        match key {
            KeyCode::KeyW | KeyCode::KeyS => self.keys.apply(key, state),
            _ => false,
        }
    }

    /// Process raw mouse movement (pixels)
    pub fn process_mouse_motion(&mut self, delta_x: f64, delta_y: f64) {
        let turn = self.max_turn_per_event;
        let d_yaw = (-(delta_x as f32) * self.rotation_speed).clamp(-turn, turn);
        let d_pitch = (delta_y as f32 * self.rotation_speed).clamp(-turn, turn);
        self.target_yaw = (self.target_yaw + d_yaw).clamp(-self.pan_limit, self.pan_limit);
        self.target_pitch = (self.target_pitch + d_pitch).clamp(-self.pitch_limit, self.pitch_limit);
    }

    /// Apply held throttle keys for `dt` seconds
    pub fn update_speed(&mut self, dt: f32) {
        if self.keys.contains(MovementKeys::FORWARD) {
            self.speed += self.acceleration * dt;
        }
        if self.keys.contains(MovementKeys::BACKWARD) {
            self.speed -= self.deceleration * dt;
        }
        self.speed = self.speed.clamp(self.min_speed, self.max_speed);
    }

    /// Advance the model one frame
    pub fn update<C: ControlTarget>(&mut self, model: &mut C, dt: f32) {
        if !self.attached {
            self.attach(model);
        }
        self.update_speed(dt);

        let ease = interp::frame_factor(self.rotation_easing, dt, REFERENCE_FPS);
        let rotation = model.rotation();
        let yaw = interp::ease_toward(rotation.y, self.target_yaw, ease)
            .clamp(-self.pan_limit, self.pan_limit);
        let pitch = interp::ease_toward(rotation.x, self.target_pitch, ease)
            .clamp(-self.pitch_limit, self.pitch_limit);
        let rotation = Euler::yxz(pitch, yaw, rotation.z);
        model.set_rotation(rotation);

        let forward = rotation.to_quat().rotate(Vec3::Z);
        self.target_position = self.target_position.add_scaled(forward, self.speed * dt);

        let glide = interp::frame_factor(self.translation_smoothness, dt, REFERENCE_FPS);
        model.set_position(model.position().lerp(self.target_position, glide));
    }

    /// Spin a child part about its own Z axis, faster at higher speed
    pub fn spin<C: ControlTarget>(&self, part: &mut C, dt: f32) {
        let throttle = if self.max_speed > 0.0 { self.speed / self.max_speed } else { 0.0 };
        let mut rotation = part.rotation();
        rotation.z += interp::per_frame_rate(self.spin_rate * (1.0 + throttle), dt, REFERENCE_FPS);
        part.set_rotation(rotation);
    }

    /// Current airspeed (units per second)
    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn target_position(&self) -> Vec3 {
        self.target_position
    }

    /// Current (heading, pitch) targets
    pub fn target_angles(&self) -> (f32, f32) {
        (self.target_yaw, self.target_pitch)
    }

    /// Detach from the model and release held keys
    pub fn reset(&mut self) {
        self.keys = MovementKeys::empty();
        self.target_yaw = 0.0;
        self.target_pitch = 0.0;
        self.target_position = Vec3::ZERO;
        self.speed = self.min_speed;
        self.attached = false;
    }

    /// Builder: set speed bounds; the bounds are swapped if given reversed
    pub fn with_speed_range(mut self, min_speed: f32, max_speed: f32) -> Self {
        self.min_speed = min_speed.min(max_speed);
        self.max_speed = max_speed.max(min_speed);
        self.speed = self.speed.clamp(self.min_speed, self.max_speed);
        self
    }

    /// Builder: set acceleration and deceleration (units per second squared)
    pub fn with_acceleration(mut self, acceleration: f32, deceleration: f32) -> Self {
        self.acceleration = acceleration.abs();
        self.deceleration = deceleration.abs();
        self
    }

    /// Builder: set mouse steering rate
    pub fn with_rotation_speed(mut self, speed: f32) -> Self {
        self.rotation_speed = speed;
        self
    }

    /// Builder: set the largest turn a single mouse event may request
    pub fn with_max_turn_per_event(mut self, turn: f32) -> Self {
        self.max_turn_per_event = turn.abs();
        self
    }

    /// Builder: set pitch and pan limits (radians)
    pub fn with_limits(mut self, pitch_limit: f32, pan_limit: f32) -> Self {
        self.pitch_limit = pitch_limit.abs();
        self.pan_limit = pan_limit.abs();
        self
    }

    /// Builder: set per-frame rotation easing and translation smoothness
    pub fn with_smoothing(mut self, rotation_easing: f32, translation_smoothness: f32) -> Self {
        self.rotation_easing = rotation_easing;
        self.translation_smoothness = translation_smoothness;
        self
    }

    /// Builder: set per-frame spin
    pub fn with_spin_rate(mut self, rate: f32) -> Self {
        self.spin_rate = rate;
        self
    }
}
