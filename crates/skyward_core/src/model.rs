//! Loaded model data
//!
//! A LoadedModel is a self-contained node hierarchy (as read from a glTF file
//! or built procedurally) that can be inserted into a scene graph. Nodes refer
//! to each other and to meshes by index.

use skyward_math::{Cuboid, MeshData, Quat, Shape3D, Sphere, Vec3, mat4};

use crate::{Material, Transform3D};

/// One drawable piece of a model node
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelPrimitive {
    /// Index into [`LoadedModel::meshes`]
    pub mesh: usize,
    pub material: Material,
}

/// A node of a loaded model
#[derive(Clone, Debug, Default)]
pub struct ModelNode {
    pub name: Option<String>,
    pub transform: Transform3D,
    pub primitives: Vec<ModelPrimitive>,
    /// Indices into [`LoadedModel::nodes`]
    pub children: Vec<usize>,
}

/// A model ready to be inserted into a scene graph
#[derive(Clone, Debug, Default)]
pub struct LoadedModel {
    /// Name given to the model's root group
    pub name: String,
    pub meshes: Vec<MeshData>,
    pub nodes: Vec<ModelNode>,
    /// Indices of the top-level nodes
    pub roots: Vec<usize>,
}

impl LoadedModel {
    /// Index of the first node named `name`, depth-first from the roots
    pub fn find_node(&self, name: &str) -> Option<usize> {
        let mut stack: Vec<usize> = self.roots.iter().rev().copied().collect();
        while let Some(index) = stack.pop() {
            let node = self.nodes.get(index)?;
            if node.name.as_deref() == Some(name) {
                return Some(index);
            }
            stack.extend(node.children.iter().rev());
        }
        None
    }

    /// Total number of triangles across all meshes
    pub fn triangle_count(&self) -> usize {
        self.meshes.iter().map(MeshData::triangle_count).sum()
    }
}

/// A small blocky airplane facing +Z, with a spinner child named `spinner_name`
///
/// Stands in for a model file that could not be loaded.
pub fn procedural_airplane(spinner_name: &str) -> LoadedModel {
    let mut airframe = MeshData::new();
    let pieces = [
        // Fuselage
        (Cuboid::new(0.8, 0.8, 4.0), Vec3::ZERO),
        // Wings
        (Cuboid::new(6.0, 0.15, 1.2), Vec3::new(0.0, 0.1, 0.4)),
        // Tailplane
        (Cuboid::new(2.2, 0.1, 0.6), Vec3::new(0.0, 0.2, -1.7)),
        // Fin
        (Cuboid::new(0.1, 0.9, 0.7), Vec3::new(0.0, 0.8, -1.7)),
    ];
    for (shape, offset) in pieces {
        let placement = mat4::from_trs(offset, Quat::IDENTITY, Vec3::ONE);
        airframe.append(&shape.mesh(), &placement);
    }

    let mut spinner = MeshData::new();
    spinner.append(&Cuboid::new(2.0, 0.2, 0.05).mesh(), &mat4::IDENTITY);
    spinner.append(&Sphere::with_segments(0.2, 12, 8).mesh(), &mat4::IDENTITY);

    LoadedModel {
        name: "procedural_airplane".to_string(),
        meshes: vec![airframe, spinner],
        nodes: vec![
            ModelNode {
                name: Some("Airframe".to_string()),
                transform: Transform3D::identity(),
                primitives: vec![ModelPrimitive { mesh: 0, material: Material::from_hex(0xd0d4dc) }],
                children: vec![1],
            },
            ModelNode {
                name: Some(spinner_name.to_string()),
                transform: Transform3D::from_position(Vec3::new(0.0, 0.0, 2.1)),
                primitives: vec![ModelPrimitive { mesh: 1, material: Material::from_hex(0x303030) }],
                children: vec![],
            },
        ],
        roots: vec![0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_procedural_airplane_has_spinner() {
        let model = procedural_airplane("Propeller_1");
        let spinner = model.find_node("Propeller_1").unwrap();
        assert_eq!(spinner, 1);
        assert!(model.nodes[spinner].transform.position.z > 0.0);
    }

    #[test]
    fn test_procedural_airplane_meshes_valid() {
        let model = procedural_airplane("spinner");
        assert!(model.triangle_count() > 0);
        for mesh in &model.meshes {
            assert_eq!(mesh.positions.len(), mesh.normals.len());
            assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.positions.len()));
        }
    }

    #[test]
    fn test_airplane_faces_positive_z() {
        let model = procedural_airplane("spinner");
        let (min, max) = model.meshes[0].bounds().unwrap();
        // Wingspan along X, nose at +Z
        assert!(max.x - min.x > max.y - min.y);
        assert!(max.z > 1.9 && min.z < -1.9);
    }

    #[test]
    fn test_find_node_missing() {
        assert_eq!(LoadedModel::default().find_node("anything"), None);
    }
}
