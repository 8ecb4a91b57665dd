//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`SKY_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::{Path, PathBuf};

use crate::demos::DemoKind;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Input configuration
    #[serde(default)]
    pub input: InputConfig,
    /// Walk demo tuning
    #[serde(default)]
    pub walk: WalkConfig,
    /// Glide demo tuning
    #[serde(default)]
    pub glide: GlideConfig,
    /// Throttle demo tuning
    #[serde(default)]
    pub throttle: ThrottleConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
    /// Demo selection and asset locations
    #[serde(default)]
    pub demo: DemoConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`SKY_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // SKY_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("SKY_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Skyward".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Camera configuration
///
/// The projection applies to built-in scenes; scene files carry their own.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Chase camera offset in model space [x, y, z]
    pub chase_offset: [f32; 3],
    /// Point the chase camera looks at, in model space [x, y, z]
    pub chase_look_offset: [f32; 3],
    /// Fraction of the remaining chase distance covered per frame
    pub chase_smoothness: f32,
    /// Orbit camera radians per pixel of drag
    pub orbit_rotate_speed: f32,
    /// Orbit camera distance multiplier per wheel line
    pub orbit_zoom_step: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: 75.0,
            near: 0.1,
            far: 1000.0,
            chase_offset: [0.0, 3.0, -10.0],
            chase_look_offset: [0.0, 1.0, 0.0],
            chase_smoothness: 0.1,
            orbit_rotate_speed: 0.005,
            orbit_zoom_step: 0.95,
        }
    }
}

/// Input configuration shared by all demos
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Multiplier applied to raw mouse motion
    pub mouse_scale: f32,
    /// Flip vertical mouse motion
    pub invert_y: bool,
    /// Capture the cursor on left click
    pub capture_on_click: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            mouse_scale: 1.0,
            invert_y: false,
            capture_on_click: true,
        }
    }
}

/// Walk demo tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    /// Movement speed (units per second)
    pub move_speed: f32,
    /// Radians of rotation per pixel of mouse motion
    pub mouse_sensitivity: f32,
    /// Maximum pitch angle in degrees
    pub pitch_limit: f32,
    /// Height the camera is pinned to
    pub eye_height: f32,
    /// Input smoothing half-life in seconds (lower = more responsive)
    pub smoothing_half_life: f32,
    /// Enable input smoothing by default
    pub smoothing_enabled: bool,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            move_speed: 6.0,
            mouse_sensitivity: 0.002,
            pitch_limit: 90.0,
            eye_height: 1.6,
            smoothing_half_life: 0.05,
            smoothing_enabled: false,
        }
    }
}

/// Glide demo tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlideConfig {
    /// Distance of one W/S nudge
    pub flight_speed: f32,
    /// Radians of target rotation per pixel of mouse motion
    pub rotation_speed: f32,
    /// Maximum pitch angle in degrees
    pub pitch_limit: f32,
    /// Fraction of the remaining rotation covered per frame
    pub rotation_easing: f32,
    /// Fraction of the remaining distance covered per frame
    pub translation_smoothness: f32,
    /// Propeller rotation per frame (radians)
    pub spin_rate: f32,
}

impl Default for GlideConfig {
    fn default() -> Self {
        Self {
            flight_speed: 0.5,
            rotation_speed: 0.01,
            pitch_limit: 45.0,
            rotation_easing: 0.05,
            translation_smoothness: 0.1,
            spin_rate: 0.1,
        }
    }
}

/// Throttle demo tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThrottleConfig {
    /// Slowest cruising speed (units per second)
    pub min_speed: f32,
    /// Fastest speed (units per second)
    pub max_speed: f32,
    /// Speed gained per second while W is held
    pub acceleration: f32,
    /// Speed lost per second while S is held
    pub deceleration: f32,
    /// Radians of target rotation per pixel of mouse motion
    pub rotation_speed: f32,
    /// Largest rotation one mouse event may request (radians)
    pub max_turn_per_event: f32,
    /// Maximum pitch angle in degrees
    pub pitch_limit: f32,
    /// Maximum pan (yaw) angle in degrees
    pub pan_limit: f32,
    /// Fraction of the remaining rotation covered per frame
    pub rotation_easing: f32,
    /// Fraction of the remaining distance covered per frame
    pub translation_smoothness: f32,
    /// Propeller rotation per frame at rest (radians)
    pub spin_rate: f32,
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            min_speed: 2.0,
            max_speed: 30.0,
            acceleration: 10.0,
            deceleration: 15.0,
            rotation_speed: 0.005,
            max_turn_per_event: 0.1,
            pitch_limit: 45.0,
            pan_limit: 180.0,
            rotation_easing: 0.05,
            translation_smoothness: 0.1,
            spin_rate: 0.1,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Load and draw skyboxes named by scene files
    pub skybox_enabled: bool,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            skybox_enabled: true,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level used when RUST_LOG is unset (error, warn, info, debug, trace)
    pub log_level: String,
    /// Append the demo status to the window title
    pub status_in_title: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            status_in_title: true,
        }
    }
}

/// Demo selection and asset locations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Demo started when none is given on the command line
    pub kind: DemoKind,
    /// Directory holding `walk.ron`, `glide.ron`, `throttle.ron`
    pub scene_dir: PathBuf,
    /// Directory model and skybox paths in scene files are relative to
    pub asset_dir: PathBuf,
    /// Substitute a built-in airplane when the model fails to load
    pub procedural_fallback: bool,
    /// Longest simulated frame in seconds
    pub max_frame_time: f32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            kind: DemoKind::Walk,
            scene_dir: PathBuf::from("scenes"),
            asset_dir: PathBuf::from("."),
            procedural_fallback: true,
            max_frame_time: 0.25,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
