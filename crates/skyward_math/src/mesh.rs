//! Triangle mesh data and the shape trait
//!
//! Shapes are pure geometry - no colors, materials, or rendering info.
//! That information lives in the scene graph's materials.

use crate::{Vec3, mat4::{self, Mat4}};

/// Indexed triangle mesh with per-vertex normals
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    /// Counter-clockwise triangles (front faces)
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Create an empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Append another mesh transformed by `transform`
    pub fn append(&mut self, other: &MeshData, transform: &Mat4) {
        let base = self.positions.len() as u32;
        let normal_matrix = mat4::normal_matrix(transform);
        self.positions.extend(other.positions.iter().map(|p| mat4::transform_point(transform, *p)));
        self.normals.extend(
            other.normals.iter().map(|n| mat4::transform_vector(&normal_matrix, *n).normalized()),
        );
        self.indices.extend(other.indices.iter().map(|i| i + base));
    }

    /// Recompute smooth vertex normals from the triangles
    ///
    /// Each vertex normal is the normalized sum of the (area-weighted) face
    /// normals of the triangles that use it.
    pub fn compute_normals(&mut self) {
        let mut normals = vec![Vec3::ZERO; self.positions.len()];
        for tri in self.indices.chunks_exact(3) {
            let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            if a >= normals.len() || b >= normals.len() || c >= normals.len() {
                continue;
            }
            let face = (self.positions[b] - self.positions[a])
                .cross(self.positions[c] - self.positions[a]);
            normals[a] += face;
            normals[b] += face;
            normals[c] += face;
        }
        self.normals = normals.into_iter().map(Vec3::normalized).collect();
    }

    /// Axis-aligned bounds `(min, max)`, or `None` for an empty mesh
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.positions.first()?;
        Some(self.positions.iter().fold((first, first), |(lo, hi), p| {
            (
                Vec3::new(lo.x.min(p.x), lo.y.min(p.y), lo.z.min(p.z)),
                Vec3::new(hi.x.max(p.x), hi.y.max(p.y), hi.z.max(p.z)),
            )
        }))
    }
}

/// Trait for shapes that can be turned into a triangle mesh
///
/// Shapes are created in local space, centered at the origin.
pub trait Shape3D: Send + Sync {
    /// Build the triangle mesh for this shape
    fn mesh(&self) -> MeshData;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Quat;

    fn triangle() -> MeshData {
        MeshData {
            positions: vec![Vec3::ZERO, Vec3::X, Vec3::Y],
            normals: vec![Vec3::Z; 3],
            indices: vec![0, 1, 2],
        }
    }

    #[test]
    fn test_compute_normals() {
        let mut mesh = triangle();
        mesh.normals.clear();
        mesh.compute_normals();
        assert_eq!(mesh.normals, vec![Vec3::Z; 3]);
    }

    #[test]
    fn test_append_offsets_indices() {
        let mut mesh = triangle();
        let shifted = mat4::from_trs(Vec3::new(0.0, 0.0, 2.0), Quat::IDENTITY, Vec3::ONE);
        mesh.append(&triangle(), &shifted);
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(&mesh.indices[3..], &[3, 4, 5]);
        assert_eq!(mesh.positions[3], Vec3::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn test_bounds() {
        let mesh = triangle();
        assert_eq!(mesh.bounds(), Some((Vec3::ZERO, Vec3::new(1.0, 1.0, 0.0))));
        assert_eq!(MeshData::new().bounds(), None);
    }
}
