//! Primitive shapes: box, sphere and plane
//!
//! All primitives are centered at the origin. Triangles wind counter-clockwise
//! when seen from outside.

use std::f32::consts::PI;

use crate::{MeshData, Shape3D, Vec3};

/// An axis-aligned box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cuboid {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl Cuboid {
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        Self { width, height, depth }
    }

    /// A cube with the given edge length
    pub fn cube(size: f32) -> Self {
        Self::new(size, size, size)
    }

    fn half_extent(&self, axis: Vec3) -> f32 {
        (axis.x.abs() * self.width + axis.y.abs() * self.height + axis.z.abs() * self.depth) * 0.5
    }
}

impl Default for Cuboid {
    fn default() -> Self {
        Self::cube(1.0)
    }
}

impl Shape3D for Cuboid {
    fn mesh(&self) -> MeshData {
        // (normal, u, v) with u x v = normal
        const FACES: [(Vec3, Vec3, Vec3); 6] = [
            (Vec3::X, Vec3::new(0.0, 0.0, -1.0), Vec3::Y),
            (Vec3::new(-1.0, 0.0, 0.0), Vec3::Z, Vec3::Y),
            (Vec3::Y, Vec3::X, Vec3::new(0.0, 0.0, -1.0)),
            (Vec3::new(0.0, -1.0, 0.0), Vec3::X, Vec3::Z),
            (Vec3::Z, Vec3::X, Vec3::Y),
            (Vec3::new(0.0, 0.0, -1.0), Vec3::new(-1.0, 0.0, 0.0), Vec3::Y),
        ];

        let mut mesh = MeshData::new();
        for (normal, u, v) in FACES {
            let center = normal * self.half_extent(normal);
            let du = u * self.half_extent(u);
            let dv = v * self.half_extent(v);
            let base = mesh.positions.len() as u32;

            mesh.positions.extend([
                center - du - dv,
                center + du - dv,
                center + du + dv,
                center - du + dv,
            ]);
            mesh.normals.extend([normal; 4]);
            mesh.indices.extend([base, base + 1, base + 2, base, base + 2, base + 3]);
        }
        mesh
    }
}

/// A UV sphere
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub radius: f32,
    pub width_segments: u32,
    pub height_segments: u32,
}

impl Sphere {
    pub fn new(radius: f32) -> Self {
        Self::with_segments(radius, 32, 16)
    }

    /// Segment counts are raised to the minimum that still closes the sphere (3 x 2)
    pub fn with_segments(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        Self {
            radius,
            width_segments: width_segments.max(3),
            height_segments: height_segments.max(2),
        }
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Shape3D for Sphere {
    fn mesh(&self) -> MeshData {
        let ws = self.width_segments;
        let hs = self.height_segments;
        let mut mesh = MeshData::new();

        for iy in 0..=hs {
            let phi = iy as f32 / hs as f32 * PI;
            for ix in 0..=ws {
                let theta = ix as f32 / ws as f32 * 2.0 * PI;
                let normal = Vec3::new(
                    -theta.cos() * phi.sin(),
                    phi.cos(),
                    theta.sin() * phi.sin(),
                );
                mesh.positions.push(normal * self.radius);
                mesh.normals.push(normal);
            }
        }

        let row = ws + 1;
        for iy in 0..hs {
            for ix in 0..ws {
                let a = iy * row + ix + 1;
                let b = iy * row + ix;
                let c = (iy + 1) * row + ix;
                let d = (iy + 1) * row + ix + 1;

                // Pole rows collapse to a single triangle per segment
                if iy != 0 {
                    mesh.indices.extend([a, b, d]);
                }
                if iy != hs - 1 {
                    mesh.indices.extend([b, c, d]);
                }
            }
        }
        mesh
    }
}

/// A flat rectangle in the XY plane facing +Z
///
/// Rotate it by -90° about X to lay it on the ground.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub width: f32,
    pub height: f32,
}

impl Plane {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Shape3D for Plane {
    fn mesh(&self) -> MeshData {
        let hw = self.width * 0.5;
        let hh = self.height * 0.5;
        MeshData {
            positions: vec![
                Vec3::new(-hw, hh, 0.0),
                Vec3::new(hw, hh, 0.0),
                Vec3::new(-hw, -hh, 0.0),
                Vec3::new(hw, -hh, 0.0),
            ],
            normals: vec![Vec3::Z; 4],
            indices: vec![0, 2, 1, 2, 3, 1],
        }
    }
}
