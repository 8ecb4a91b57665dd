//! Serializable shape templates
//!
//! ShapeTemplate provides a serializable representation of the primitive
//! shapes. Each variant stores its construction parameters.
//!
//! All shapes are created in **local space** (centered at origin). The node
//! transform is used to position them in the scene.

use serde::{Serialize, Deserialize};
use skyward_math::{Cuboid, MeshData, Plane, Shape3D, Sphere};

fn default_width_segments() -> u32 {
    32
}

fn default_height_segments() -> u32 {
    16
}

/// Serializable shape template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShapeTemplate {
    /// An axis-aligned box
    Cuboid {
        width: f32,
        height: f32,
        depth: f32,
    },
    /// A UV sphere
    Sphere {
        radius: f32,
        #[serde(default = "default_width_segments")]
        width_segments: u32,
        #[serde(default = "default_height_segments")]
        height_segments: u32,
    },
    /// A flat rectangle in the XY plane facing +Z
    ///
    /// Rotate it by -90° about X to lay it on the ground.
    Plane {
        width: f32,
        height: f32,
    },
}

impl ShapeTemplate {
    /// Build the mesh for this template
    pub fn create_mesh(&self) -> MeshData {
        match *self {
            ShapeTemplate::Cuboid { width, height, depth } => Cuboid::new(width, height, depth).mesh(),
            ShapeTemplate::Sphere { radius, width_segments, height_segments } => {
                Sphere::with_segments(radius, width_segments, height_segments).mesh()
            }
            ShapeTemplate::Plane { width, height } => Plane::new(width, height).mesh(),
        }
    }

    /// Create a cube template
    pub fn cube(size: f32) -> Self {
        ShapeTemplate::Cuboid { width: size, height: size, depth: size }
    }

    /// Create a sphere template with the default segment counts
    pub fn sphere(radius: f32) -> Self {
        ShapeTemplate::Sphere {
            radius,
            width_segments: default_width_segments(),
            height_segments: default_height_segments(),
        }
    }

    /// Create a plane template
    pub fn plane(width: f32, height: f32) -> Self {
        ShapeTemplate::Plane { width, height }
    }
}
