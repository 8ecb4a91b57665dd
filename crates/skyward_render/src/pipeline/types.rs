//! GPU-compatible data types for the mesh and skybox pipelines
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};
use skyward_core::{AmbientLight, DirectionalLight, Material};
use skyward_math::{mat4, Mat4, MeshData, Vec3};

/// Maximum number of directional lights the mesh shader evaluates
pub const MAX_DIRECTIONAL_LIGHTS: usize = 4;

/// A mesh vertex as uploaded to the GPU
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl MeshVertex {
    /// Interleave a mesh's positions and normals
    ///
    /// Vertices without a normal get +Y.
    pub fn from_mesh(mesh: &MeshData) -> Vec<MeshVertex> {
        mesh.positions
            .iter()
            .enumerate()
            .map(|(i, p)| MeshVertex {
                position: p.to_array(),
                normal: mesh.normals.get(i).copied().unwrap_or(Vec3::Y).to_array(),
            })
            .collect()
    }
}

/// One directional light as seen by the shader
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct GpuDirectionalLight {
    /// Unit direction the light travels (w unused)
    pub direction: [f32; 4],
    /// Color × intensity (w unused)
    pub color: [f32; 4],
}

/// Per-frame uniforms for the mesh pass
/// Layout: 224 bytes total (must match mesh.wgsl FrameUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct FrameUniforms {
    /// Projection × view (64 bytes)
    pub view_projection: Mat4,
    /// Ambient color × intensity, w unused (16 bytes)
    pub ambient: [f32; 4],
    /// x = number of active lights (16 bytes)
    pub light_count: [u32; 4],
    /// Directional lights (128 bytes)
    pub lights: [GpuDirectionalLight; MAX_DIRECTIONAL_LIGHTS],
}

impl Default for FrameUniforms {
    fn default() -> Self {
        Self {
            view_projection: mat4::IDENTITY,
            ambient: [0.0; 4],
            light_count: [0; 4],
            lights: [GpuDirectionalLight::default(); MAX_DIRECTIONAL_LIGHTS],
        }
    }
}

impl FrameUniforms {
    /// Gather the camera and scene lighting
    ///
    /// Lights beyond [`MAX_DIRECTIONAL_LIGHTS`] are ignored.
    pub fn new(view_projection: Mat4, ambient: &AmbientLight, lights: &[DirectionalLight]) -> Self {
        let mut uniforms = Self {
            view_projection,
            ..Self::default()
        };
        let [r, g, b] = ambient.radiance();
        uniforms.ambient = [r, g, b, 0.0];

        let count = lights.len().min(MAX_DIRECTIONAL_LIGHTS);
        if lights.len() > MAX_DIRECTIONAL_LIGHTS {
            log::debug!("Ignoring {} directional lights over the limit", lights.len() - count);
        }
        for (slot, light) in uniforms.lights.iter_mut().zip(lights) {
            let d = light.direction();
            let [r, g, b] = light.radiance();
            *slot = GpuDirectionalLight {
                direction: [d.x, d.y, d.z, 0.0],
                color: [r, g, b, 0.0],
            };
        }
        uniforms.light_count[0] = count as u32;
        uniforms
    }
}

/// Per-draw uniforms for the mesh pass
/// Layout: 160 bytes total (must match mesh.wgsl ObjectUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ObjectUniforms {
    /// Local-to-world (64 bytes)
    pub model: Mat4,
    /// Inverse-transpose of the model's 3x3 (64 bytes)
    pub normal_matrix: Mat4,
    /// Base color (16 bytes)
    pub color: [f32; 4],
    /// x = 1 for unlit materials (16 bytes)
    pub flags: [u32; 4],
}

impl ObjectUniforms {
    pub fn new(world: &Mat4, material: &Material) -> Self {
        Self {
            model: *world,
            normal_matrix: mat4::normal_matrix(world),
            color: material.base_color,
            flags: [material.unlit as u32, 0, 0, 0],
        }
    }
}

/// Uniforms for the skybox pass
/// Layout: 80 bytes total (must match skybox.wgsl SkyboxUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct SkyboxUniforms {
    /// Camera-to-world rotation (64 bytes)
    pub camera_rotation: Mat4,
    /// tan(fov_x / 2), tan(fov_y / 2), unused, unused (16 bytes)
    pub frustum: [f32; 4],
}

impl SkyboxUniforms {
    /// Build from the camera's orientation matrix and projection parameters
    pub fn new(camera_rotation: Mat4, fov_y: f32, aspect: f32) -> Self {
        let tan_y = (fov_y / 2.0).tan();
        Self {
            camera_rotation,
            frustum: [tan_y * aspect, tan_y, 0.0, 0.0],
        }
    }
}
