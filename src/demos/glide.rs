//! Glide demo: an airplane nudged forward or back per key press
//!
//! Controls:
//! - W/S: Nudge the airplane along its nose / tail
//! - Mouse (cursor captured): Steer
//! - Right drag: Orbit the camera, wheel: zoom

use skyward_core::{SceneGraph, SceneTemplate};
use skyward_input::{GlideController, OrbitCamera};
use skyward_render::PerspectiveCamera;
use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

use super::{Demo, SceneAssets};
use crate::config::AppConfig;

pub struct GlideDemo {
    scene: SceneGraph,
    camera: PerspectiveCamera,
    orbit: OrbitCamera,
    start_orbit: OrbitCamera,
    controller: GlideController,
    assets: SceneAssets,
}

impl GlideDemo {
    pub fn new(template: &SceneTemplate, config: &AppConfig, aspect: f32) -> Self {
        let glide = &config.glide;
        let controller = GlideController::new()
            .with_flight_speed(glide.flight_speed)
            .with_rotation_speed(glide.rotation_speed)
            .with_pitch_limit(glide.pitch_limit.to_radians())
            .with_rotation_easing(glide.rotation_easing)
            .with_translation_smoothness(glide.translation_smoothness)
            .with_spin_rate(glide.spin_rate);

        let assets = SceneAssets::start(
            template,
            &config.demo.asset_dir,
            config.rendering.skybox_enabled,
            config.demo.procedural_fallback,
        );

        let mut camera = PerspectiveCamera::from_template(&template.camera, aspect);
        let mut orbit = OrbitCamera::from_eye(camera.transform.position, assets.start_transform().position);
        orbit.rotate_speed = config.camera.orbit_rotate_speed;
        orbit.zoom_step = config.camera.orbit_zoom_step;
        orbit.update(&mut camera);

        Self {
            scene: template.instantiate(),
            camera,
            start_orbit: orbit.clone(),
            orbit,
            controller,
            assets,
        }
    }

    pub fn controller(&self) -> &GlideController {
        &self.controller
    }

    pub fn assets(&self) -> &SceneAssets {
        &self.assets
    }
}

impl Demo for GlideDemo {
    fn name(&self) -> &'static str {
        "Glide"
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
        self.controller.process_keyboard(key, state)
    }

    fn handle_mouse_motion(&mut self, delta_x: f64, delta_y: f64, captured: bool) {
        if captured {
            self.controller.process_mouse_motion(delta_x, delta_y);
        } else {
            self.orbit.process_mouse_motion(delta_x, delta_y);
        }
    }

    fn handle_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Right {
            self.orbit.set_dragging(state == ElementState::Pressed);
        }
    }

    fn handle_scroll(&mut self, lines: f32) {
        self.orbit.process_scroll(lines);
    }

    fn update(&mut self, dt: f32) {
        self.assets.poll(&mut self.scene);

        if let Some(node) = self.assets.model_root().and_then(|root| self.scene.get_mut(root)) {
            self.controller.update(node.transform_mut(), dt);
        }
        if let Some(node) = self.assets.spinner().and_then(|spinner| self.scene.get_mut(spinner)) {
            self.controller.spin(node.transform_mut(), dt);
        }

        self.orbit.update(&mut self.camera);
    }

    fn reset(&mut self) {
        if let Some(node) = self.assets.model_root().and_then(|root| self.scene.get_mut(root)) {
            node.set_transform(self.assets.start_transform());
        }
        self.controller.reset();
        self.orbit = self.start_orbit.clone();
        self.orbit.update(&mut self.camera);
        log::info!("Glide demo reset");
    }

    fn status(&self) -> String {
        let Some(node) = self.assets.model_root().and_then(|root| self.scene.get(root)) else {
            return "Glide - loading model".to_string();
        };
        let t = node.transform();
        format!(
            "Glide ({:.1}, {:.1}, {:.1}) heading {:.0}° pitch {:.0}°",
            t.position.x,
            t.position.y,
            t.position.z,
            t.rotation.y.to_degrees(),
            t.rotation.x.to_degrees()
        )
    }
}
