//! Input Handling
//!
//! Controllers translate keyboard and mouse input into camera and model
//! motion. Each controller accumulates input from events and applies it to a
//! [`ControlTarget`] once per frame.
//!
//! - [`WalkController`] - free-look walking (WASD + mouse look)
//! - [`GlideController`] - airplane nudged forward/back per key press, steered by mouse
//! - [`ThrottleController`] - airplane with held-key throttle between speed bounds
//! - [`ChaseCamera`] / [`OrbitCamera`] - camera rigs around a model

mod control_target;
mod keys;
mod walk_controller;
mod glide_controller;
mod throttle_controller;
mod camera_rig;

pub use control_target::ControlTarget;
pub use keys::MovementKeys;
pub use walk_controller::WalkController;
pub use glide_controller::{GlideController, Thrust};
pub use throttle_controller::ThrottleController;
pub use camera_rig::{ChaseCamera, OrbitCamera};
