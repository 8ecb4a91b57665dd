//! Interpolation helpers for per-frame smoothing
//!
//! The demos describe their smoothing as "move this fraction of the remaining
//! distance every frame". [`frame_factor`] rescales such a per-frame fraction
//! for the actual frame time so the motion looks the same at any frame rate.

/// Frame rate the per-frame factors are tuned for
pub const REFERENCE_FPS: f32 = 60.0;

/// One easing step: move `factor` of the way from `current` to `target`
#[inline]
pub fn ease_toward(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

/// Rescale a per-frame interpolation factor for a frame of `dt` seconds
///
/// `per_frame` is the fraction covered in one frame at `reference_fps`.
/// The result is `1 - (1 - per_frame)^(dt * reference_fps)`, clamped to
/// `[0, 1]` so an easing step can never overshoot its target.
pub fn frame_factor(per_frame: f32, dt: f32, reference_fps: f32) -> f32 {
    if dt <= 0.0 {
        return 0.0;
    }
    let per_frame = per_frame.clamp(0.0, 1.0);
    let frames = dt * reference_fps;
    (1.0 - (1.0 - per_frame).powf(frames)).clamp(0.0, 1.0)
}

/// Exponential smoothing retention factor for a given half-life
///
/// `factor = 2^(-dt / half_life)`: the fraction of the old value kept after
/// `dt` seconds. A non-positive half-life disables smoothing (returns 0).
pub fn smoothing_factor(dt: f32, half_life: f32) -> f32 {
    if half_life <= 0.0 {
        return 0.0;
    }
    2.0f32.powf(-dt / half_life)
}

/// Per-frame increment rescaled for a frame of `dt` seconds
#[inline]
pub fn per_frame_rate(per_frame: f32, dt: f32, reference_fps: f32) -> f32 {
    per_frame * dt * reference_fps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_toward() {
        assert_eq!(ease_toward(0.0, 10.0, 0.1), 1.0);
        assert_eq!(ease_toward(10.0, 10.0, 0.5), 10.0);
    }

    #[test]
    fn test_frame_factor_at_reference_rate() {
        let f = frame_factor(0.05, 1.0 / 60.0, REFERENCE_FPS);
        assert!((f - 0.05).abs() < 1e-5);
    }

    #[test]
    fn test_frame_factor_compounds() {
        // Two half-length frames cover the same distance as one full frame
        let dt = 1.0 / 60.0;
        let half = frame_factor(0.1, dt / 2.0, REFERENCE_FPS);
        let remaining = (1.0 - half) * (1.0 - half);
        let full = frame_factor(0.1, dt, REFERENCE_FPS);
        assert!((1.0 - remaining - full).abs() < 1e-5);
    }

    #[test]
    fn test_frame_factor_bounds() {
        assert_eq!(frame_factor(0.1, 0.0, REFERENCE_FPS), 0.0);
        assert_eq!(frame_factor(0.1, -1.0, REFERENCE_FPS), 0.0);
        let huge = frame_factor(0.1, 1000.0, REFERENCE_FPS);
        assert!(huge <= 1.0 && huge > 0.99);
        assert_eq!(frame_factor(2.0, 0.016, REFERENCE_FPS), 1.0);
    }

    #[test]
    fn test_smoothing_factor_half_life() {
        assert!((smoothing_factor(0.05, 0.05) - 0.5).abs() < 1e-6);
        assert_eq!(smoothing_factor(0.1, 0.0), 0.0);
    }

    #[test]
    fn test_per_frame_rate() {
        assert!((per_frame_rate(0.1, 1.0 / 60.0, REFERENCE_FPS) - 0.1).abs() < 1e-6);
    }
}
