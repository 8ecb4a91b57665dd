//! glTF model import
//!
//! Reads a .gltf/.glb file into a [`LoadedModel`], keeping:
//! - the node hierarchy of the default scene, with names
//! - each node's decomposed translation/rotation/scale
//! - triangle primitives (positions, normals, indices) and their base color
//!
//! Normals are computed from the triangles when the file has none.
//! Non-triangle primitives (points, lines, strips) are skipped.

use std::collections::HashMap;
use std::path::Path;

use log::{debug, warn};
use skyward_math::{Euler, EulerOrder, MeshData, Quat, Vec3};

use crate::model::{LoadedModel, ModelNode, ModelPrimitive};
use crate::{AssetError, Material, Transform3D};

/// Load a glTF/GLB file
pub fn import_gltf(path: impl AsRef<Path>) -> Result<LoadedModel, AssetError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(AssetError::NotFound(path.display().to_string()));
    }
    let (document, buffers, _images) = gltf::import(path)?;

    let scene = document
        .default_scene()
        .or_else(|| document.scenes().next())
        .ok_or_else(|| AssetError::Parse(format!("{} contains no scenes", path.display())))?;

    let name = path
        .parent()
        .and_then(Path::file_name)
        .or_else(|| path.file_stem())
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "model".to_string());

    let mut importer = Importer {
        buffers: &buffers,
        model: LoadedModel { name, ..Default::default() },
        mesh_slots: HashMap::new(),
    };
    for node in scene.nodes() {
        let index = importer.import_node(&node)?;
        importer.model.roots.push(index);
    }

    debug!(
        "Imported {}: {} nodes, {} meshes, {} triangles",
        path.display(),
        importer.model.nodes.len(),
        importer.model.meshes.len(),
        importer.model.triangle_count()
    );
    Ok(importer.model)
}

struct Importer<'a> {
    buffers: &'a [gltf::buffer::Data],
    model: LoadedModel,
    /// (mesh index, primitive index) -> index into `model.meshes`
    mesh_slots: HashMap<(usize, usize), usize>,
}

impl Importer<'_> {
    /// Import a node and its subtree, returning the node's index
    fn import_node(&mut self, node: &gltf::Node) -> Result<usize, AssetError> {
        let (translation, rotation, scale) = node.transform().decomposed();
        let transform = Transform3D {
            position: Vec3::from_array(translation),
            rotation: Euler::from_quat(Quat::from_array(rotation).normalize(), EulerOrder::XYZ),
            scale: Vec3::from_array(scale),
        };

        let mut primitives = Vec::new();
        if let Some(mesh) = node.mesh() {
            for primitive in mesh.primitives() {
                if primitive.mode() != gltf::mesh::Mode::Triangles {
                    warn!(
                        "Skipping {:?} primitive in mesh {}",
                        primitive.mode(),
                        mesh.name().unwrap_or("unnamed")
                    );
                    continue;
                }
                let slot = self.mesh_slot(&mesh, &primitive)?;
                primitives.push(ModelPrimitive { mesh: slot, material: material_of(&primitive) });
            }
        }

        let index = self.model.nodes.len();
        self.model.nodes.push(ModelNode {
            name: node.name().map(str::to_string),
            transform,
            primitives,
            children: Vec::new(),
        });

        for child in node.children() {
            let child_index = self.import_node(&child)?;
            self.model.nodes[index].children.push(child_index);
        }
        Ok(index)
    }

    /// Index of the mesh data for a primitive, reading it on first use
    fn mesh_slot(&mut self, mesh: &gltf::Mesh, primitive: &gltf::Primitive) -> Result<usize, AssetError> {
        let key = (mesh.index(), primitive.index());
        if let Some(&slot) = self.mesh_slots.get(&key) {
            return Ok(slot);
        }
        let data = read_primitive(primitive, self.buffers)?;
        let slot = self.model.meshes.len();
        self.model.meshes.push(data);
        self.mesh_slots.insert(key, slot);
        Ok(slot)
    }
}

/// Extract vertex positions, normals, and indices from a primitive
fn read_primitive(primitive: &gltf::Primitive, buffers: &[gltf::buffer::Data]) -> Result<MeshData, AssetError> {
    let reader = primitive.reader(|buffer| buffers.get(buffer.index()).map(|data| data.0.as_slice()));

    let positions: Vec<Vec3> = reader
        .read_positions()
        .ok_or_else(|| AssetError::Parse("primitive has no positions".to_string()))?
        .map(Vec3::from_array)
        .collect();

    let indices: Vec<u32> = match reader.read_indices() {
        Some(indices) => indices.into_u32().collect(),
        None => (0..positions.len() as u32).collect(),
    };
    if let Some(&bad) = indices.iter().find(|&&i| i as usize >= positions.len()) {
        return Err(AssetError::Parse(format!(
            "index {} out of range for {} vertices",
            bad,
            positions.len()
        )));
    }

    let mut mesh = MeshData { positions, normals: Vec::new(), indices };
    match reader.read_normals() {
        Some(normals) => mesh.normals = normals.map(Vec3::from_array).collect(),
        None => mesh.compute_normals(),
    }
    if mesh.normals.len() != mesh.positions.len() {
        mesh.compute_normals();
    }
    Ok(mesh)
}

fn material_of(primitive: &gltf::Primitive) -> Material {
    let material = primitive.material();
    Material {
        base_color: material.pbr_metallic_roughness().base_color_factor(),
        unlit: false,
        double_sided: material.double_sided(),
    }
}
