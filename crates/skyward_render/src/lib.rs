//! Skyward Rendering Library
//!
//! This crate provides the wgpu-based renderer for the retained scene graph.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`camera::PerspectiveCamera`] - Perspective camera with a controllable pose
//! - [`pipeline::MeshPipeline`] - Lit and unlit mesh rendering with a depth buffer
//! - [`pipeline::SkyboxPipeline`] - Cube-mapped background
//! - [`gpu_mesh::GpuMeshCache`] - Uploads scene meshes to GPU buffers on demand

pub mod context;
pub mod camera;
pub mod pipeline;
pub mod gpu_mesh;

pub use context::RenderContext;
pub use camera::PerspectiveCamera;
pub use gpu_mesh::{GpuMesh, GpuMeshCache};

// Re-export core types for convenience
pub use skyward_core::{SceneGraph, Material, Transform3D, Background, VisibleMesh, MeshKey};
