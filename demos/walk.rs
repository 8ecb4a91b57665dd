//! Walk
//!
//! Free-look walking around a cube, a sphere, and a ground plane.
//!
//! This example demonstrates:
//! - Primitive meshes (`Cuboid`, `Sphere`, `Plane`) with unlit materials
//! - Mouse look with a clamped pitch
//! - WASD movement in the yaw plane at a fixed eye height
//!
//! Controls: click to capture the cursor, WASD to walk, G toggles look
//! smoothing, R resets, F toggles fullscreen, Escape releases / exits.
//!
//! Run with: `cargo run --example walk`

use std::process::ExitCode;

use skyward::{app, demos::DemoKind};

fn main() -> ExitCode {
    app::launch(Some(DemoKind::Walk))
}
