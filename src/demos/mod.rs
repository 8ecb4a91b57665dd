//! Demo scenes
//!
//! Each demo owns its scene graph, camera, and controller. The application
//! feeds it input events and calls [`Demo::update`] once per frame.
//!
//! - [`WalkDemo`] - free-look walk around a few primitives
//! - [`GlideDemo`] - airplane nudged by key presses, orbit camera
//! - [`ThrottleDemo`] - airplane with a held-key throttle, chase camera, skybox

mod assets;
mod walk;
mod glide;
mod throttle;

use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Deserialize};
use skyward_core::{
    AmbientLight, CameraTemplate, DirectionalLight, Material, ModelTemplate, ObjectTemplate, SceneGraph,
    SceneTemplate, ShapeTemplate, SkyboxFaces, Transform3D,
};
use skyward_math::{Euler, Vec3};
use skyward_render::PerspectiveCamera;
use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

use crate::config::AppConfig;

pub use assets::{AssetEvents, SceneAssets};
pub use walk::WalkDemo;
pub use glide::GlideDemo;
pub use throttle::ThrottleDemo;

/// An interactive scene driven by the application loop
pub trait Demo {
    /// Display name
    fn name(&self) -> &'static str;

    /// Scene to draw
    fn scene(&self) -> &SceneGraph;

    fn camera(&self) -> &PerspectiveCamera;

    fn camera_mut(&mut self) -> &mut PerspectiveCamera;

    /// Keyboard input; returns true if the key was consumed
    fn handle_key(&mut self, key: KeyCode, state: ElementState) -> bool;

    /// Raw mouse motion; `captured` tells whether the cursor is locked
    fn handle_mouse_motion(&mut self, delta_x: f64, delta_y: f64, captured: bool);

    fn handle_mouse_button(&mut self, _button: MouseButton, _state: ElementState) {}

    /// Wheel motion in lines (positive = away from the user)
    fn handle_scroll(&mut self, _lines: f32) {}

    /// Advance one frame of `dt` seconds
    fn update(&mut self, dt: f32);

    /// Return to the starting state
    fn reset(&mut self);

    /// One-line description of the current state (for the window title)
    fn status(&self) -> String;
}

/// The available demos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemoKind {
    Walk,
    Glide,
    Throttle,
}

impl DemoKind {
    pub const ALL: [DemoKind; 3] = [DemoKind::Walk, DemoKind::Glide, DemoKind::Throttle];

    /// Lowercase name, also the scene file stem
    pub fn as_str(self) -> &'static str {
        match self {
            DemoKind::Walk => "walk",
            DemoKind::Glide => "glide",
            DemoKind::Throttle => "throttle",
        }
    }

    /// Scene used when the scene file is missing or invalid
    pub fn builtin_scene(self) -> SceneTemplate {
        match self {
            DemoKind::Walk => builtin_walk_scene(),
            DemoKind::Glide => builtin_glide_scene(),
            DemoKind::Throttle => builtin_throttle_scene(),
        }
    }
}

impl fmt::Display for DemoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a demo name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDemo(pub String);

impl fmt::Display for UnknownDemo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown demo '{}' (expected walk, glide, or throttle)", self.0)
    }
}

impl std::error::Error for UnknownDemo {}

impl FromStr for DemoKind {
    type Err = UnknownDemo;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DemoKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownDemo(s.to_string()))
    }
}

/// Load the demo's scene file, falling back to the built-in scene
pub fn load_scene(kind: DemoKind, config: &AppConfig) -> SceneTemplate {
    let path = config.demo.scene_dir.join(format!("{}.ron", kind.as_str()));
    match SceneTemplate::load(&path) {
        Ok(template) => {
            log::info!("Loaded scene '{}' from {}", template.name, path.display());
            template
        }
        Err(e) => {
            log::warn!("Failed to load scene {}: {}. Using built-in scene.", path.display(), e);
            kind.builtin_scene()
        }
    }
}

/// Create the demo of the given kind
pub fn build_demo(kind: DemoKind, config: &AppConfig, aspect: f32) -> Box<dyn Demo> {
    let template = load_scene(kind, config);
    match kind {
        DemoKind::Walk => Box::new(WalkDemo::new(&template, config, aspect)),
        DemoKind::Glide => Box::new(GlideDemo::new(&template, config, aspect)),
        DemoKind::Throttle => Box::new(ThrottleDemo::new(&template, config, aspect)),
    }
}

/// Green ground with a red cube and a blue sphere, unlit
fn builtin_walk_scene() -> SceneTemplate {
    let mut scene = SceneTemplate::new("Walk");
    scene.camera = CameraTemplate {
        position: Vec3::new(0.0, 1.6, 10.0),
        ..CameraTemplate::default()
    };
    scene.add_object(
        ObjectTemplate::new(
            ShapeTemplate::plane(20.0, 20.0),
            Transform3D::from_position_rotation(Vec3::ZERO, Euler::new(-PI / 2.0, 0.0, 0.0)),
            Material::from_hex(0x00ff00).unlit().double_sided(),
        )
        .with_name("Ground"),
    );
    scene.add_object(
        ObjectTemplate::new(
            ShapeTemplate::cube(1.0),
            Transform3D::from_position(Vec3::new(2.0, 1.0, 0.0)),
            Material::from_hex(0xff0000).unlit(),
        )
        .with_name("Cube"),
    );
    scene.add_object(
        ObjectTemplate::new(
            ShapeTemplate::sphere(1.0),
            Transform3D::from_position(Vec3::new(-2.0, 1.0, 0.0)),
            Material::from_hex(0x0000ff).unlit(),
        )
        .with_name("Sphere"),
    );
    scene
}

/// Airplane model at (0, 1, 0) facing -Z, lit by ambient + one directional light
fn airplane_model() -> ModelTemplate {
    ModelTemplate {
        path: "models/airplane/scene.gltf".into(),
        transform: Transform3D::from_position_rotation(Vec3::new(0.0, 1.0, 0.0), Euler::yxz(0.0, PI, 0.0))
            .with_uniform_scale(0.7),
        spinner: Some("Propeller_1".to_string()),
    }
}

fn airplane_lights(scene: &mut SceneTemplate) {
    scene.ambient = Some(AmbientLight { color: [1.0, 1.0, 1.0], intensity: 0.5 });
    scene.directional_lights.push(DirectionalLight {
        color: [1.0, 1.0, 1.0],
        intensity: 1.0,
        position: Vec3::new(5.0, 10.0, 5.0),
    });
}

fn builtin_glide_scene() -> SceneTemplate {
    let mut scene = SceneTemplate::new("Glide").with_model(airplane_model());
    scene.camera = CameraTemplate {
        position: Vec3::new(0.0, 2.0, 5.0),
        ..CameraTemplate::default()
    };
    airplane_lights(&mut scene);
    scene
}

fn builtin_throttle_scene() -> SceneTemplate {
    let mut scene = SceneTemplate::new("Throttle")
        .with_model(airplane_model())
        .with_background([0.53, 0.81, 0.92, 1.0]);
    scene.skybox = Some(SkyboxFaces::in_dir("textures/skybox", "jpg"));
    scene.camera = CameraTemplate {
        position: Vec3::new(0.0, 4.0, 11.0),
        ..CameraTemplate::default()
    };
    airplane_lights(&mut scene);
    scene
}
