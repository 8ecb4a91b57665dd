//! Scene lighting and background

use std::sync::Arc;

use serde::{Serialize, Deserialize};
use skyward_math::Vec3;

use crate::SkyboxImages;

/// Uniform light reaching every surface
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AmbientLight {
    /// RGB color (each component 0.0-1.0)
    pub color: [f32; 3],
    pub intensity: f32,
}

impl Default for AmbientLight {
    fn default() -> Self {
        Self { color: [1.0, 1.0, 1.0], intensity: 0.5 }
    }
}

impl AmbientLight {
    /// Color premultiplied by intensity
    pub fn radiance(&self) -> [f32; 3] {
        self.color.map(|c| c * self.intensity)
    }
}

/// Light from a distant source, shining from `position` toward the origin
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DirectionalLight {
    /// RGB color (each component 0.0-1.0)
    pub color: [f32; 3],
    pub intensity: f32,
    pub position: Vec3,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            color: [1.0, 1.0, 1.0],
            intensity: 1.0,
            position: Vec3::new(5.0, 10.0, 5.0),
        }
    }
}

impl DirectionalLight {
    /// Unit direction the light travels (from its position toward the origin)
    ///
    /// A light placed at the origin shines straight down.
    pub fn direction(&self) -> Vec3 {
        let d = (-self.position).normalized();
        if d == Vec3::ZERO {
            Vec3::new(0.0, -1.0, 0.0)
        } else {
            d
        }
    }

    /// Color premultiplied by intensity
    pub fn radiance(&self) -> [f32; 3] {
        self.color.map(|c| c * self.intensity)
    }
}

/// What is drawn behind the scene
#[derive(Clone, Debug)]
pub enum Background {
    /// Clear to a solid RGBA color
    Color([f32; 4]),
    /// Cube-mapped sky, with the color used to clear underneath it
    Skybox {
        images: Arc<SkyboxImages>,
        fallback: [f32; 4],
    },
}

impl Default for Background {
    fn default() -> Self {
        Background::Color([0.0, 0.0, 0.0, 1.0])
    }
}

impl Background {
    /// Color the frame is cleared to
    pub fn clear_color(&self) -> [f32; 4] {
        match self {
            Background::Color(color) => *color,
            Background::Skybox { fallback, .. } => *fallback,
        }
    }

    /// Decoded sky faces, if a skybox is installed
    pub fn skybox(&self) -> Option<&Arc<SkyboxImages>> {
        match self {
            Background::Color(_) => None,
            Background::Skybox { images, .. } => Some(images),
        }
    }
}
