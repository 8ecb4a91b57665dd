//! 3D Mathematics Library
//!
//! This crate provides the vector, rotation, and mesh types used by the Skyward demos.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector with x, y, z components
//! - [`Euler`] - Euler angles in XYZ order (the way object rotations are authored)
//! - [`Quat`] - Unit quaternion for composing and applying rotations
//! - [`mat4::Mat4`] - Column-major 4x4 matrix helpers
//!
//! ## Shape Types
//!
//! - [`Shape3D`] - Trait for shapes that can produce a triangle mesh
//! - [`Cuboid`], [`Sphere`], [`Plane`] - Primitive shapes
//!
//! ## Interpolation
//!
//! - [`interp`] - Easing and frame-rate independent interpolation factors

mod vec3;
mod euler;
mod quat;
pub mod mat4;
pub mod interp;
pub mod mesh;
pub mod primitives;

pub use vec3::Vec3;
pub use euler::{Euler, EulerOrder};
pub use quat::Quat;
pub use mat4::Mat4;
pub use mesh::{MeshData, Shape3D};
pub use primitives::{Cuboid, Sphere, Plane};
