//! Skyward - small interactive 3D demos on a retained scene graph
//!
//! The binary picks one of the demos (walk, glide, throttle) and runs it in a
//! window. Each demo owns its scene, camera, and controller; the [`app`]
//! module feeds it input and draws it every frame.

pub mod app;
pub mod config;
pub mod demos;
pub mod input;
pub mod systems;
