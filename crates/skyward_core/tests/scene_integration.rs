//! Integration tests: scene templates, model insertion, and controllers driving
//! scene graph nodes.

use skyward_core::{
    procedural_airplane, Material, ObjectTemplate, SceneGraph, SceneTemplate, ShapeTemplate, Transform3D,
};
use skyward_input::{GlideController, ThrottleController};
use skyward_math::{mat4, Euler, Vec3};
use std::f32::consts::PI;

const DT: f32 = 1.0 / 60.0;

fn airplane_scene() -> (SceneGraph, skyward_core::NodeKey, skyward_core::NodeKey) {
    let mut template = SceneTemplate::new("Airplane");
    template.add_object(ObjectTemplate::new(
        ShapeTemplate::plane(20.0, 20.0),
        Transform3D::from_position_rotation(Vec3::ZERO, Euler::new(-PI / 2.0, 0.0, 0.0)),
        Material::GREEN.unlit().double_sided(),
    ));
    let mut graph = template.instantiate();

    let root = graph.insert_model(None, &procedural_airplane("Propeller_1")).unwrap();
    {
        let transform = graph.get_mut(root).unwrap().transform_mut();
        transform.position = Vec3::new(0.0, 1.0, 0.0);
        transform.rotation = Euler::yxz(0.0, PI, 0.0);
        transform.scale = Vec3::splat(0.7);
    }
    let propeller = graph.find_by_name(root, "Propeller_1").unwrap();
    (graph, root, propeller)
}

#[test]
fn test_glide_drives_model_node() {
    let (mut graph, root, propeller) = airplane_scene();
    let mut controller = GlideController::new();

    for frame in 0..120 {
        if frame % 10 == 0 {
            controller.process_keyboard(winit::keyboard::KeyCode::KeyW, winit::event::ElementState::Pressed);
        }
        let node = graph.get_mut(root).unwrap();
        controller.update(node.transform_mut(), DT);
        controller.spin(graph.get_mut(propeller).unwrap().transform_mut(), DT);
    }

    // Facing -Z (yaw = PI) the airplane flew toward -Z
    let position = graph.get(root).unwrap().transform().position;
    assert!(position.z < -1.0, "got {:?}", position);
    assert!((position.y - 1.0).abs() < 1e-4);
    assert!(graph.get(propeller).unwrap().transform().rotation.z > 10.0);
}

#[test]
fn test_propeller_world_position_follows_model() {
    let (mut graph, root, propeller) = airplane_scene();
    let before = mat4::translation(&graph.world_matrix(propeller).unwrap());

    graph.get_mut(root).unwrap().transform_mut().translate(Vec3::new(5.0, 0.0, 0.0));
    let after = mat4::translation(&graph.world_matrix(propeller).unwrap());

    assert!(((after - before) - Vec3::new(5.0, 0.0, 0.0)).length() < 1e-4);
    // Nose is at +Z in model space, turned to -Z by the model's yaw
    assert!(before.z < 0.0);
}

#[test]
fn test_throttle_speed_bounds_while_flying() {
    let (mut graph, root, _) = airplane_scene();
    let mut controller = ThrottleController::new().with_speed_range(1.0, 8.0);

    for frame in 0..600 {
        let key = if (frame / 100) % 2 == 0 {
            winit::keyboard::KeyCode::KeyW
        } else {
            winit::keyboard::KeyCode::KeyS
        };
        controller.process_keyboard(key, winit::event::ElementState::Pressed);
        controller.process_mouse_motion(37.0, -23.0);
        controller.update(graph.get_mut(root).unwrap().transform_mut(), DT);
        controller.process_keyboard(key, winit::event::ElementState::Released);

        assert!(controller.speed() >= 1.0 && controller.speed() <= 8.0);
        let rotation = graph.get(root).unwrap().transform().rotation;
        assert!(rotation.x.abs() <= controller.pitch_limit + 1e-6);
        assert!(rotation.y.abs() <= controller.pan_limit + 1e-6);
    }
}

#[test]
fn test_visible_meshes_include_model_and_ground() {
    let (graph, _, _) = airplane_scene();
    // Ground + airframe + propeller
    assert_eq!(graph.visible_meshes().len(), 3);
}
