//! Throttle demo: an airplane flying at a speed set by held keys, under a skybox
//!
//! Controls:
//! - W (hold): Accelerate
//! - S (hold): Decelerate
//! - Mouse (cursor captured): Pan and pitch, both limited
//!
//! The camera chases the airplane.

use skyward_core::{SceneGraph, SceneTemplate};
use skyward_input::{ChaseCamera, ThrottleController};
use skyward_math::Vec3;
use skyward_render::PerspectiveCamera;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

use super::{Demo, SceneAssets};
use crate::config::AppConfig;

pub struct ThrottleDemo {
    scene: SceneGraph,
    camera: PerspectiveCamera,
    start_camera: PerspectiveCamera,
    chase: ChaseCamera,
    controller: ThrottleController,
    assets: SceneAssets,
}

impl ThrottleDemo {
    pub fn new(template: &SceneTemplate, config: &AppConfig, aspect: f32) -> Self {
        let throttle = &config.throttle;
        let controller = ThrottleController::new()
            .with_speed_range(throttle.min_speed, throttle.max_speed)
            .with_acceleration(throttle.acceleration, throttle.deceleration)
            .with_rotation_speed(throttle.rotation_speed)
            .with_max_turn_per_event(throttle.max_turn_per_event)
            .with_limits(throttle.pitch_limit.to_radians(), throttle.pan_limit.to_radians())
            .with_smoothing(throttle.rotation_easing, throttle.translation_smoothness)
            .with_spin_rate(throttle.spin_rate);

        let camera_config = &config.camera;
        let chase = ChaseCamera::new()
            .with_offset(Vec3::from_array(camera_config.chase_offset))
            .with_look_offset(Vec3::from_array(camera_config.chase_look_offset))
            .with_follow_smoothness(camera_config.chase_smoothness);

        let assets = SceneAssets::start(
            template,
            &config.demo.asset_dir,
            config.rendering.skybox_enabled,
            config.demo.procedural_fallback,
        );

        let mut camera = PerspectiveCamera::from_template(&template.camera, aspect);
        camera.look_at(assets.start_transform().position);

        Self {
            scene: template.instantiate(),
            start_camera: camera.clone(),
            camera,
            chase,
            controller,
            assets,
        }
    }

    pub fn controller(&self) -> &ThrottleController {
        &self.controller
    }

    pub fn assets(&self) -> &SceneAssets {
        &self.assets
    }
}

impl Demo for ThrottleDemo {
    fn name(&self) -> &'static str {
        "Throttle"
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
        }
    }

    fn update(&mut self, dt: f32) {
        let events = self.assets.poll(&mut self.scene);

        let Some(root) = self.assets.model_root() else {
            return;
        };
        let Some(node) = self.scene.get_mut(root) else {
            return;
        };
        self.controller.update(node.transform_mut(), dt);
        let model = *node.transform();

        if let Some(node) = self.assets.spinner().and_then(|spinner| self.scene.get_mut(spinner)) {
            self.controller.spin(node.transform_mut(), dt);
        }

        if events.model_placed {
            self.chase.snap(&model, &mut self.camera);
        } else {
            self.chase.update(&model, &mut self.camera, dt);
        }
    }

    fn reset(&mut self) {
        let start = self.assets.start_transform();
        if let Some(node) = self.assets.model_root().and_then(|root| self.scene.get_mut(root)) {
            node.set_transform(start);
        }
        self.controller.reset();

        let aspect = self.camera.aspect;
        self.camera = self.start_camera.clone();
        self.camera.set_aspect(aspect);
        if self.assets.model_root().is_some() {
            self.chase.snap(&start, &mut self.camera);
        }
        log::info!("Throttle demo reset");
    }

    fn status(&self) -> String {
        let Some(node) = self.assets.model_root().and_then(|root| self.scene.get(root)) else {
            return "Throttle - loading model".to_string();
        };
        let p = node.transform().position;
        format!(
            "Throttle speed {:.1} ({:.1}, {:.1}, {:.1})",
            self.controller.speed(),
            p.x,
            p.y,
            p.z
        )
    }
}
