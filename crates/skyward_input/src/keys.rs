//! Held-key state

use bitflags::bitflags;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

bitflags! {
    /// Movement keys currently held down
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct MovementKeys: u8 {
        /// W
        const FORWARD = 1 << 0;
        /// S
        const BACKWARD = 1 << 1;
        /// A
        const LEFT = 1 << 2;
        /// D
        const RIGHT = 1 << 3;
    }
}

impl MovementKeys {
    /// Flag for a physical key, if it is a movement key
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::KeyW => Some(Self::FORWARD),
            KeyCode::KeyS => Some(Self::BACKWARD),
            KeyCode::KeyA => Some(Self::LEFT),
            KeyCode::KeyD => Some(Self::RIGHT),
            _ => None,
        }
    }

    /// Record a press or release; returns true if `key` is a movement key
    pub fn apply(&mut self, key: KeyCode, state: ElementState) -> bool {
        match Self::from_key(key) {
            Some(flag) => {
                self.set(flag, state == ElementState::Pressed);
                true
            }
            None => false,
        }
    }

    /// Forward axis in `-1.0..=1.0` (W positive, S negative)
    pub fn forward_axis(self) -> f32 {
        self.contains(Self::FORWARD) as i32 as f32 - self.contains(Self::BACKWARD) as i32 as f32
    }

    /// Right axis in `-1.0..=1.0` (D positive, A negative)
    pub fn right_axis(self) -> f32 {
        self.contains(Self::RIGHT) as i32 as f32 - self.contains(Self::LEFT) as i32 as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut keys = MovementKeys::empty();
        assert!(keys.apply(KeyCode::KeyW, ElementState::Pressed));
        assert!(keys.contains(MovementKeys::FORWARD));
        keys.apply(KeyCode::KeyW, ElementState::Released);
        assert!(keys.is_empty());
    }

    #[test]
    fn test_non_movement_key() {
        let mut keys = MovementKeys::empty();
        assert!(!keys.apply(KeyCode::KeyQ, ElementState::Pressed));
        assert!(keys.is_empty());
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let keys = MovementKeys::FORWARD | MovementKeys::BACKWARD | MovementKeys::RIGHT;
        assert_eq!(keys.forward_axis(), 0.0);
        assert_eq!(keys.right_axis(), 1.0);
    }
}
