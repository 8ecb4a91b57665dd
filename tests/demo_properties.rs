//! Demo behavior driven through the `Demo` trait, without a window

use std::f32::consts::FRAC_PI_4;
use std::time::{Duration, Instant};

use skyward::config::AppConfig;
use skyward::demos::{build_demo, Demo, DemoKind, GlideDemo, ThrottleDemo};
use skyward_core::SceneTemplate;
use skyward_math::Vec3;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

const DT: f32 = 1.0 / 60.0;
const EPSILON: f32 = 1e-4;

/// Config whose model paths never resolve, so demos use the built-in airplane
fn offline_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.demo.asset_dir = "/nonexistent/skyward-assets".into();
    config
}

fn wait_for_model(demo: &mut dyn Demo) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while demo.status().contains("loading") && Instant::now() < deadline {
        demo.update(0.0);
        std::thread::sleep(Duration::from_millis(10));
    }
    assert!(!demo.status().contains("loading"), "model never arrived");
}

fn run_frames(demo: &mut dyn Demo, frames: usize) {
    for _ in 0..frames {
        demo.update(DT);
    }
}

#[test]
fn test_scene_files_parse() {
    for kind in DemoKind::ALL {
        let path = format!("scenes/{}.ron", kind.as_str());
        let scene = SceneTemplate::load(&path).unwrap();
        let builtin = kind.builtin_scene();
        assert_eq!(scene.name, builtin.name);
        assert_eq!(scene.objects.len(), builtin.objects.len());
        assert_eq!(scene.model, builtin.model);
        assert_eq!(scene.skybox.is_some(), builtin.skybox.is_some());
    }
}

#[test]
fn test_walk_stays_at_eye_height() {
    let config = offline_config();
    let mut demo = build_demo(DemoKind::Walk, &config, 16.0 / 9.0);

    demo.handle_key(KeyCode::KeyW, ElementState::Pressed);
    demo.handle_key(KeyCode::KeyD, ElementState::Pressed);
    for i in 0..120 {
        demo.handle_mouse_motion(5.0, if i % 2 == 0 { 40.0 } else { -40.0 }, true);
        demo.update(DT);
        let y = demo.camera().transform.position.y;
        assert!((y - config.walk.eye_height).abs() < EPSILON);
    }
}

#[test]
fn test_walk_moves_forward_and_resets() {
    let mut demo = build_demo(DemoKind::Walk, &offline_config(), 1.0);
    let start = demo.camera().transform.position;

    demo.handle_key(KeyCode::KeyW, ElementState::Pressed);
    run_frames(demo.as_mut(), 60);
    let moved = demo.camera().transform.position;
    assert!(moved.z < start.z - 5.0);
    assert!((moved.x - start.x).abs() < EPSILON);

    demo.handle_key(KeyCode::KeyW, ElementState::Released);
    demo.reset();
    assert!(demo.camera().transform.position.distance(start) < EPSILON);
}

#[test]
fn test_walk_ignores_mouse_when_released() {
    let mut demo = build_demo(DemoKind::Walk, &offline_config(), 1.0);
    let rotation = demo.camera().transform.rotation;
    demo.handle_mouse_motion(300.0, 300.0, false);
    demo.update(DT);
    assert_eq!(demo.camera().transform.rotation.y, rotation.y);
    assert_eq!(demo.camera().transform.rotation.x, rotation.x);
}

fn glide_model_position(demo: &GlideDemo) -> Vec3 {
    let root = demo.assets().model_root().unwrap();
    demo.scene().get(root).unwrap().transform().position
}

#[test]
fn test_glide_ignores_presses_before_model() {
    let template = DemoKind::Glide.builtin_scene();
    let mut demo = GlideDemo::new(&template, &offline_config(), 1.0);
    assert!(demo.status().contains("loading"));

    // Pressed while the model is still absent
    demo.handle_key(KeyCode::KeyW, ElementState::Pressed);
    wait_for_model(&mut demo);
    run_frames(&mut demo, 120);

    assert_eq!(glide_model_position(&demo), Vec3::new(0.0, 1.0, 0.0));
}

#[test]
fn test_glide_nudges_along_nose() {
    let template = DemoKind::Glide.builtin_scene();
    let mut demo = GlideDemo::new(&template, &offline_config(), 1.0);
    wait_for_model(&mut demo);

    demo.handle_key(KeyCode::KeyW, ElementState::Pressed);
    run_frames(&mut demo, 240);

    // The airplane starts turned around, so its nose points down -Z
    let position = glide_model_position(&demo);
    assert!(position.distance(Vec3::new(0.0, 1.0, -0.5)) < 1e-3);
}

fn throttle_demo(config: &AppConfig) -> ThrottleDemo {
    let template = DemoKind::Throttle.builtin_scene();
    let mut demo = ThrottleDemo::new(&template, config, 1.0);
    wait_for_model(&mut demo);
    demo
}

#[test]
fn test_throttle_speed_stays_in_bounds() {
    let config = offline_config();
    let mut demo = throttle_demo(&config);
    let (min, max) = (config.throttle.min_speed, config.throttle.max_speed);

    demo.handle_key(KeyCode::KeyW, ElementState::Pressed);
    for _ in 0..600 {
        demo.update(DT);
        let speed = demo.controller().speed();
        assert!(speed >= min && speed <= max);
    }
    assert_eq!(demo.controller().speed(), max);

    demo.handle_key(KeyCode::KeyW, ElementState::Released);
    demo.handle_key(KeyCode::KeyS, ElementState::Pressed);
    for _ in 0..600 {
        demo.update(DT);
        let speed = demo.controller().speed();
        assert!(speed >= min && speed <= max);
    }
    assert_eq!(demo.controller().speed(), min);
}

#[test]
fn test_throttle_pitch_stays_in_bounds() {
    let mut demo = throttle_demo(&offline_config());
    let root = demo.assets().model_root().unwrap();

    for i in 0..300 {
        let dy = if i < 150 { 10_000.0 } else { -10_000.0 };
        demo.handle_mouse_motion(0.0, dy, true);
        demo.update(DT);
        let pitch = demo.scene().get(root).unwrap().transform().rotation.x;
        assert!(pitch.abs() <= FRAC_PI_4 + EPSILON);
    }
}

#[test]
fn test_throttle_chase_camera_follows() {
    let mut demo = throttle_demo(&offline_config());
    let root = demo.assets().model_root().unwrap();

    demo.handle_key(KeyCode::KeyW, ElementState::Pressed);
    run_frames(&mut demo, 300);

    let model = demo.scene().get(root).unwrap().transform().position;
    let camera = demo.camera().transform.position;
    assert!(model.distance(Vec3::new(0.0, 1.0, 0.0)) > 10.0);
    assert!(camera.distance(model) < 20.0);
}

#[test]
fn test_throttle_reset_returns_to_start() {
    let mut demo = throttle_demo(&offline_config());
    let root = demo.assets().model_root().unwrap();

    demo.handle_key(KeyCode::KeyW, ElementState::Pressed);
    run_frames(&mut demo, 120);
    demo.reset();

    let position = demo.scene().get(root).unwrap().transform().position;
    assert!(position.distance(Vec3::new(0.0, 1.0, 0.0)) < EPSILON);
    assert_eq!(demo.controller().speed(), offline_config().throttle.min_speed);
}
