//! GPU mesh cache
//!
//! Meshes live in the scene graph as [`MeshData`]. The cache uploads each one
//! to a vertex/index buffer pair the first time it is needed and drops the
//! buffers once the mesh is gone from the scene.

use std::collections::HashMap;

use skyward_core::{MeshKey, SceneGraph};
use skyward_math::MeshData;
use wgpu::util::DeviceExt;

use crate::pipeline::MeshVertex;

/// Vertex and index buffers for one mesh
pub struct GpuMesh {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub index_count: u32,
}

impl GpuMesh {
    /// Upload a mesh
    pub fn upload(device: &wgpu::Device, mesh: &MeshData) -> Self {
        let vertices = MeshVertex::from_mesh(mesh);
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Mesh Vertex Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Mesh Index Buffer"),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
        }
    }
}

/// Uploaded meshes keyed by their scene graph handle
#[derive(Default)]
pub struct GpuMeshCache {
    meshes: HashMap<MeshKey, GpuMesh>,
}

impl GpuMeshCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bring the cache in line with the scene's meshes
    ///
    /// Uploads meshes that are new and releases meshes the scene no longer
    /// has. Empty meshes are never uploaded.
    pub fn sync(&mut self, device: &wgpu::Device, scene: &SceneGraph) {
        self.meshes.retain(|key, _| scene.mesh(*key).is_some());

        let pending = pending_uploads(scene, |key| self.meshes.contains_key(&key));
        for &key in &pending {
            if let Some(mesh) = scene.mesh(key) {
                self.meshes.insert(key, GpuMesh::upload(device, mesh));
            }
        }
        if !pending.is_empty() {
            log::debug!("Uploaded {} meshes ({} cached)", pending.len(), self.meshes.len());
        }
    }

    pub fn get(&self, key: MeshKey) -> Option<&GpuMesh> {
        self.meshes.get(&key)
    }
}

/// Scene meshes that still need buffers: non-empty and not yet `resident`
pub fn pending_uploads(scene: &SceneGraph, resident: impl Fn(MeshKey) -> bool) -> Vec<MeshKey> {
    scene
        .meshes()
        .filter(|(key, mesh)| !mesh.is_empty() && !resident(*key))
        .map(|(key, _)| key)
        .collect()
}
