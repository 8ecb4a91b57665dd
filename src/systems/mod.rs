//! Application systems
//!
//! Window, GPU, and per-frame simulation concerns, kept apart from the event loop.

mod render;
mod simulation;
mod window;

pub use render::{RenderError, RenderSystem};
pub use simulation::SimulationSystem;
pub use window::{format_title, WindowError, WindowSystem};
