//! Glide
//!
//! An airplane model nudged forward or back one step per key press.
//!
//! This example demonstrates:
//! - Loading a glTF model on a background thread
//! - Finding a named child part (the propeller) and spinning it
//! - Easing rotation and position toward targets at any frame rate
//! - An orbit camera (right drag, wheel to zoom)
//!
//! Controls: W/S nudge the airplane, mouse steers while the cursor is
//! captured, R resets, Escape releases / exits.
//!
//! Run with: `cargo run --example glide`

use std::process::ExitCode;

use skyward::{app, demos::DemoKind};

fn main() -> ExitCode {
    app::launch(Some(DemoKind::Glide))
}
