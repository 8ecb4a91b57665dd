//! Throttle
//!
//! An airplane flying at a speed set by held keys, chased by the camera,
//! under a skybox.
//!
//! This example demonstrates:
//! - A cube-mapped skybox decoded from six images
//! - Speed kept within bounds while accelerating or decelerating
//! - Pitch and pan limits on mouse steering
//! - A chase camera following the model
//!
//! Controls: hold W to speed up, S to slow down, mouse steers while the
//! cursor is captured, R resets, Escape releases / exits.
//!
//! Run with: `cargo run --example throttle`

use std::process::ExitCode;

use skyward::{app, demos::DemoKind};

fn main() -> ExitCode {
    app::launch(Some(DemoKind::Throttle))
}
