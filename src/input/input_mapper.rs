//! Input mapping from raw events to application actions
//!
//! Maps keyboard and mouse input to high-level actions like ToggleCursor, Exit, etc.
//! Demo keys (WASD) are NOT mapped here - they go directly to the active demo.

use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

/// Actions triggered by application-level input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Toggle cursor capture (Escape when captured, click when released)
    ToggleCursor,
    /// Exit application (Escape when not captured)
    Exit,
    /// Put the demo back in its starting state (R key)
    ResetDemo,
    /// Toggle fullscreen mode (F key)
    ToggleFullscreen,
}

/// Maps raw input events to application actions
///
/// Demo keys are NOT mapped here - they go directly to the active demo.
/// This mapper handles the global keys only.
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `Some(action)` for global keys, `None` for everything else
    pub fn map_keyboard(
        key: KeyCode,
        state: ElementState,
        cursor_captured: bool,
    ) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => {
                if cursor_captured {
                    Some(InputAction::ToggleCursor)
                } else {
                    Some(InputAction::Exit)
                }
            }
            KeyCode::KeyR => Some(InputAction::ResetDemo),
            KeyCode::KeyF => Some(InputAction::ToggleFullscreen),
            _ => None,
        }
    }

    /// Map mouse button to an action
    ///
    /// Returns `Some(ToggleCursor)` for left click when cursor not captured
    /// and click-to-capture is enabled
    pub fn map_mouse_button(
        button: MouseButton,
        state: ElementState,
        cursor_captured: bool,
        capture_on_click: bool,
    ) -> Option<InputAction> {
        if capture_on_click
            && button == MouseButton::Left
            && state == ElementState::Pressed
            && !cursor_captured
        {
            Some(InputAction::ToggleCursor)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_when_captured_releases() {
        let action = InputMapper::map_keyboard(KeyCode::Escape, ElementState::Pressed, true);
        assert_eq!(action, Some(InputAction::ToggleCursor));
    }

    #[test]
    fn test_escape_when_released_exits() {
        let action = InputMapper::map_keyboard(KeyCode::Escape, ElementState::Pressed, false);
        assert_eq!(action, Some(InputAction::Exit));
    }

    #[test]
    fn test_demo_keys_not_mapped() {
        for key in [KeyCode::KeyW, KeyCode::KeyA, KeyCode::KeyS, KeyCode::KeyD] {
            let action = InputMapper::map_keyboard(key, ElementState::Pressed, true);
            assert_eq!(action, None, "Key {:?} should not be mapped", key);
        }
    }

    #[test]
    fn test_key_release_ignored() {
        let action = InputMapper::map_keyboard(KeyCode::Escape, ElementState::Released, true);
        assert_eq!(action, None);
    }

    #[test]
    fn test_click_to_capture() {
        let action = InputMapper::map_mouse_button(MouseButton::Left, ElementState::Pressed, false, true);
        assert_eq!(action, Some(InputAction::ToggleCursor));
    }

    #[test]
    fn test_click_when_captured_no_action() {
        let action = InputMapper::map_mouse_button(MouseButton::Left, ElementState::Pressed, true, true);
        assert_eq!(action, None);
    }

    #[test]
    fn test_click_capture_disabled() {
        let action = InputMapper::map_mouse_button(MouseButton::Left, ElementState::Pressed, false, false);
        assert_eq!(action, None);
    }

    #[test]
    fn test_global_keys() {
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::KeyR, ElementState::Pressed, true),
            Some(InputAction::ResetDemo)
        );
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::KeyF, ElementState::Pressed, false),
            Some(InputAction::ToggleFullscreen)
        );
    }
}
