//! Demo window
//!
//! Wraps the winit window together with the cursor grab used for mouse look
//! and a title bar that shows the running demo's status.

use std::sync::Arc;
use winit::{
    event_loop::ActiveEventLoop,
    window::{CursorGrabMode, Fullscreen, Window, WindowAttributes},
};
use crate::config::WindowConfig;

/// Grab modes tried in order when capturing the cursor
const GRAB_MODES: [CursorGrabMode; 2] = [CursorGrabMode::Locked, CursorGrabMode::Confined];

/// The application window and its cursor/title state
pub struct WindowSystem {
    window: Arc<Window>,
    cursor_captured: bool,
    title: TitleBar,
}

impl WindowSystem {
    /// Open a window described by `config`
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
    ) -> Result<Self, WindowError> {
        let window = event_loop
            .create_window(window_attributes(config))
            .map_err(|e| WindowError::CreationFailed(e.to_string()))?;
        log::debug!("Opened {}x{} window '{}'", config.width, config.height, config.title);

        Ok(Self {
            window: Arc::new(window),
            cursor_captured: false,
            title: TitleBar::new(&config.title),
        })
    }

    /// Shared handle for surface creation
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    pub fn is_cursor_captured(&self) -> bool {
        self.cursor_captured
    }

    /// Grab (`true`) or free (`false`) the cursor
    ///
    /// Returns whether the cursor ends up captured. A failed grab leaves the
    /// cursor free.
    pub fn set_cursor_captured(&mut self, capture: bool) -> bool {
        if capture == self.cursor_captured {
            return capture;
        }

        if capture {
            let grabbed = GRAB_MODES
                .iter()
                .any(|&mode| self.window.set_cursor_grab(mode).is_ok());
            if !grabbed {
                log::warn!("Cursor grab refused by the platform");
                return false;
            }
            log::info!("Mouse look on (Escape releases the cursor)");
        } else {
            if let Err(e) = self.window.set_cursor_grab(CursorGrabMode::None) {
                log::debug!("Cursor ungrab failed: {}", e);
            }
            log::info!("Mouse look off (click to capture the cursor)");
        }

        self.window.set_cursor_visible(!capture);
        self.cursor_captured = capture;
        capture
    }

    /// Flip the cursor between captured and free
    pub fn toggle_cursor(&mut self) -> bool {
        self.set_cursor_captured(!self.cursor_captured)
    }

    /// Switch between windowed and borderless fullscreen
    pub fn toggle_fullscreen(&self) {
        let next = next_fullscreen(self.window.fullscreen().is_some());
        log::debug!("Fullscreen {}", if next.is_some() { "on" } else { "off" });
        self.window.set_fullscreen(next);
    }

    /// Show the demo status in the title bar
    ///
    /// The platform title is only touched when the text changes.
    pub fn update_title(&mut self, status: &str) {
        if let Some(text) = self.title.compose(status, self.cursor_captured) {
            self.window.set_title(text);
        }
    }

    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

/// Initial window attributes for `config`
pub fn window_attributes(config: &WindowConfig) -> WindowAttributes {
    let attrs = Window::default_attributes()
        .with_title(&config.title)
        .with_inner_size(winit::dpi::LogicalSize::new(config.width, config.height));
    if config.fullscreen {
        attrs.with_fullscreen(Some(Fullscreen::Borderless(None)))
    } else {
        attrs
    }
}

/// Fullscreen mode to switch to from the current one
pub fn next_fullscreen(is_fullscreen: bool) -> Option<Fullscreen> {
    if is_fullscreen {
        None
    } else {
        Some(Fullscreen::Borderless(None))
    }
}

/// Title text with change detection
#[derive(Debug)]
pub struct TitleBar {
    base: String,
    shown: Option<String>,
}

impl TitleBar {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            shown: None,
        }
    }

    /// New title text, or `None` when it matches what is already shown
    pub fn compose(&mut self, status: &str, cursor_captured: bool) -> Option<&str> {
        let text = format_title(&self.base, status, cursor_captured);
        if self.shown.as_deref() == Some(text.as_str()) {
            return None;
        }
        self.shown = Some(text);
        self.shown.as_deref()
    }
}

/// Title text: base title, demo status, and the cursor hint
pub fn format_title(base_title: &str, status: &str, cursor_captured: bool) -> String {
    let hint = if cursor_captured {
        "[Esc to release]"
    } else {
        "[Click to capture]"
    };
    if status.is_empty() {
        format!("{} {}", base_title, hint)
    } else {
        format!("{} - {} {}", base_title, status, hint)
    }
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_formatting_captured() {
        let title = format_title("Skyward", "Walk (0.0, 1.6, 10.0)", true);
        assert_eq!(title, "Skyward - Walk (0.0, 1.6, 10.0) [Esc to release]");
    }

    #[test]
    fn test_title_formatting_released() {
        let title = format_title("Skyward", "Glide - loading model", false);
        assert!(title.ends_with("[Click to capture]"));
    }

    #[test]
    fn test_title_without_status() {
        assert_eq!(format_title("Skyward", "", false), "Skyward [Click to capture]");
    }

    #[test]
    fn test_title_bar_skips_unchanged_text() {
        let mut bar = TitleBar::new("Skyward");
        assert_eq!(bar.compose("Throttle 10.0 m/s", false), Some("Skyward - Throttle 10.0 m/s [Click to capture]"));
        assert_eq!(bar.compose("Throttle 10.0 m/s", false), None);
        // Capturing the cursor changes the hint
        assert!(bar.compose("Throttle 10.0 m/s", true).is_some());
        assert!(bar.compose("Throttle 12.5 m/s", true).is_some());
        assert_eq!(bar.compose("Throttle 12.5 m/s", true), None);
    }

    #[test]
    fn test_next_fullscreen() {
        assert!(next_fullscreen(false).is_some());
        assert!(next_fullscreen(true).is_none());
    }

    #[test]
    fn test_window_attributes_follow_config() {
        let config = WindowConfig {
            title: "Glide".to_string(),
            fullscreen: true,
            ..WindowConfig::default()
        };
        let attrs = window_attributes(&config);
        assert_eq!(attrs.title, "Glide");
        assert!(attrs.fullscreen.is_some());
        assert!(attrs.inner_size.is_some());

        let windowed = window_attributes(&WindowConfig::default());
        assert!(windowed.fullscreen.is_none());
    }

    #[test]
    fn test_window_error_display() {
        let err = WindowError::CreationFailed("no display".to_string());
        assert_eq!(err.to_string(), "Window creation failed: no display");
    }
}
