//! Rendering pipeline components
//!
//! This module contains the mesh and skybox render pipelines and the
//! uniform/vertex types they share with the shaders.

pub mod types;
pub mod mesh_pipeline;
pub mod skybox_pipeline;

// Re-export types
pub use types::{
    MeshVertex, FrameUniforms, ObjectUniforms, SkyboxUniforms,
    GpuDirectionalLight, MAX_DIRECTIONAL_LIGHTS,
};

// Re-export pipelines
pub use mesh_pipeline::{MeshPipeline, DEPTH_FORMAT};
pub use skybox_pipeline::SkyboxPipeline;
