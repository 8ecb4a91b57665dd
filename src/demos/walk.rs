//! Walk demo: free-look walking around a few primitives
//!
//! Controls:
//! - W/A/S/D: Walk
//! - Mouse (cursor captured): Look around
//! - G: Toggle look smoothing

use skyward_core::{SceneGraph, SceneTemplate};
use skyward_input::WalkController;
use skyward_render::PerspectiveCamera;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

use super::{Demo, SceneAssets};
use crate::config::AppConfig;

pub struct WalkDemo {
    scene: SceneGraph,
    camera: PerspectiveCamera,
    start_camera: PerspectiveCamera,
    controller: WalkController,
    assets: SceneAssets,
}

impl WalkDemo {
    pub fn new(template: &SceneTemplate, config: &AppConfig, aspect: f32) -> Self {
        let walk = &config.walk;
        let controller = WalkController::new()
            .with_move_speed(walk.move_speed)
            .with_mouse_sensitivity(walk.mouse_sensitivity)
            .with_pitch_limit(walk.pitch_limit.to_radians())
            .with_ground_height(walk.eye_height)
            .with_smoothing_half_life(walk.smoothing_half_life)
            .with_smoothing(walk.smoothing_enabled);

        let mut camera = PerspectiveCamera::from_template(&template.camera, aspect);
        camera.transform.position.y = walk.eye_height;

        let assets = SceneAssets::start(
            template,
            &config.demo.asset_dir,
            config.rendering.skybox_enabled,
            config.demo.procedural_fallback,
        );

        log::info!("Walk demo: {} objects", template.objects.len());

        Self {
            scene: template.instantiate(),
            start_camera: camera.clone(),
            camera,
            controller,
            assets,
        }
    }

    pub fn controller(&self) -> &WalkController {
        &self.controller
    }
}

impl Demo for WalkDemo {
    fn name(&self) -> &'static str {
        "Walk"
    }

    fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    fn camera_mut(&mut self) -> &mut PerspectiveCamera {
        &mut self.camera
    }

    fn handle_key(&mut self, key: KeyCode, state: ElementState) -> bool {
        if key == KeyCode::KeyG && state == ElementState::Pressed {
            let enabled = self.controller.toggle_smoothing();
            log::info!("Look smoothing: {}", if enabled { "ON" } else { "OFF" });
            return true;
        }
        self.controller.process_keyboard(key, state)
    }

    fn handle_mouse_motion(&mut self, delta_x: f64, delta_y: f64, captured: bool) {
        if captured {
            self.controller.process_mouse_motion(delta_x, delta_y);
        }
    }

    fn update(&mut self, dt: f32) {
        self.assets.poll(&mut self.scene);
        self.controller.update(&mut self.camera, dt, true);
    }

    fn reset(&mut self) {
        let aspect = self.camera.aspect;
        self.camera = self.start_camera.clone();
        self.camera.set_aspect(aspect);
        self.controller.reset();
        log::info!("Walk demo reset");
    }

    fn status(&self) -> String {
        let p = self.camera.transform.position;
        format!("Walk ({:.1}, {:.1}, {:.1})", p.x, p.y, p.z)
    }
}
