//! Core types for the Skyward demos
//!
//! This crate provides the retained scene the demos build and the renderer draws:
//!
//! - [`Transform3D`] - Position, Euler rotation, and scale
//! - [`Material`] - Base color plus lit/unlit and double-sided switches
//! - [`Node`] / [`NodeKind`] - Scene graph node (group or mesh)
//! - [`SceneGraph`] - Nodes, meshes, lights, and background
//! - [`SceneTemplate`] - Loadable/saveable RON scene description
//! - [`ShapeTemplate`] - Serializable primitive shape
//! - [`AssetLoader`] - Background glTF model and skybox loading
//! - [`LoadedModel`] - Model hierarchy ready to insert into a scene graph

mod transform;
mod material;
mod node;
mod light;
mod scene_graph;
mod shapes;
mod scene;
mod model;
mod skybox;
mod gltf_import;
mod asset_error;
mod asset_loader;

pub use transform::Transform3D;
pub use material::Material;
pub use node::{Node, NodeKind, NodeKey, MeshKey};
pub use light::{AmbientLight, DirectionalLight, Background};
pub use scene_graph::{SceneGraph, VisibleMesh};
pub use shapes::ShapeTemplate;
pub use scene::{SceneTemplate, ObjectTemplate, ModelTemplate, CameraTemplate, SceneLoadError, SceneSaveError};
pub use model::{LoadedModel, ModelNode, ModelPrimitive, procedural_airplane};
pub use skybox::{SkyboxFaces, SkyboxImages, FACE_NAMES};
pub use gltf_import::import_gltf;
pub use asset_error::AssetError;
pub use asset_loader::{AssetLoader, LoadedAsset, LoadResult};

// Re-export commonly used types from skyward_math for convenience
pub use skyward_math::{Vec3, Euler, EulerOrder, Quat, Mat4, MeshData};
