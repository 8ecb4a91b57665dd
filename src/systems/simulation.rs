//! Frame simulation system
//!
//! Measures delta time between redraws and advances the active demo.

use std::time::Instant;

use crate::demos::Demo;

/// Longest frame simulated by default (seconds)
pub const DEFAULT_MAX_FRAME_TIME: f32 = 0.25;

/// Manages the per-frame update
pub struct SimulationSystem {
    last_frame: Instant,
    max_frame_time: f32,
}

impl SimulationSystem {
    /// Create a new simulation system
    pub fn new() -> Self {
        Self::with_max_frame_time(DEFAULT_MAX_FRAME_TIME)
    }

    /// Create a simulation system with a custom frame time cap
    pub fn with_max_frame_time(max_frame_time: f32) -> Self {
        Self {
            last_frame: Instant::now(),
            max_frame_time: max_frame_time.max(0.0),
        }
    }

    /// Seconds since the previous call, capped
    ///
    /// The cap prevents a huge step on the first frame or after the window
    /// regains focus.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let raw_dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;
        cap_frame_time(raw_dt, self.max_frame_time)
    }

    /// Run one simulation frame; returns the delta time used
    pub fn update(&mut self, demo: &mut dyn Demo) -> f32 {
        let dt = self.tick();
        demo.update(dt);
        dt
    }

    /// Restart timing (after a reset or a long pause)
    pub fn restart(&mut self) {
        self.last_frame = Instant::now();
    }
}

impl Default for SimulationSystem {
    fn default() -> Self {
        Self::new()
    }
}

fn cap_frame_time(raw_dt: f32, max_frame_time: f32) -> f32 {
    raw_dt.clamp(0.0, max_frame_time)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_time_capped() {
        let mut sim = SimulationSystem::with_max_frame_time(0.05);
        std::thread::sleep(std::time::Duration::from_millis(100));
        assert_eq!(sim.tick(), 0.05);
    }

    #[test]
    fn test_cap_frame_time() {
        assert_eq!(cap_frame_time(0.016, 0.25), 0.016);
        assert_eq!(cap_frame_time(3.0, 0.25), 0.25);
        assert_eq!(cap_frame_time(-1.0, 0.25), 0.0);
    }

    #[test]
    fn test_default_construction() {
        let sim = SimulationSystem::default();
        assert_eq!(sim.max_frame_time, DEFAULT_MAX_FRAME_TIME);
        assert!(sim.last_frame.elapsed().as_millis() < 100);
    }
}
