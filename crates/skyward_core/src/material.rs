//! Surface materials
//!
//! Two shading models: lit (Lambert, responds to ambient + directional light)
//! and unlit (flat base color).

use serde::{Serialize, Deserialize};

/// A simple material with a base color and shading switches
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Base color as RGBA (each component 0.0-1.0)
    pub base_color: [f32; 4],
    /// Ignore scene lighting
    #[serde(default)]
    pub unlit: bool,
    /// Render back faces too (culling disabled)
    #[serde(default)]
    pub double_sided: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Material {
    /// Create a new lit material with the given RGBA color
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            base_color: [r, g, b, a],
            unlit: false,
            double_sided: false,
        }
    }

    /// Create a new opaque lit material with the given RGB color
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Create an opaque lit material from a `0xRRGGBB` color
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
        Self::from_rgb(channel(16), channel(8), channel(0))
    }

    /// Builder: ignore lighting
    pub const fn unlit(mut self) -> Self {
        self.unlit = true;
        self
    }

    /// Builder: render both faces
    pub const fn double_sided(mut self) -> Self {
        self.double_sided = true;
        self
    }

    /// White material
    pub const WHITE: Self = Self::from_rgb(1.0, 1.0, 1.0);

    /// Gray material
    pub const GRAY: Self = Self::from_rgb(0.5, 0.5, 0.5);

    /// Red material
    pub const RED: Self = Self::from_rgb(1.0, 0.0, 0.0);

    /// Green material
    pub const GREEN: Self = Self::from_rgb(0.0, 1.0, 0.0);

    /// Blue material
    pub const BLUE: Self = Self::from_rgb(0.0, 0.0, 1.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_default() {
        let m = Material::default();
        assert_eq!(m.base_color, [1.0, 1.0, 1.0, 1.0]);
        assert!(!m.unlit);
        assert!(!m.double_sided);
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(Material::from_hex(0x00ff00).base_color, [0.0, 1.0, 0.0, 1.0]);
        assert_eq!(Material::from_hex(0xff0000), Material::RED);
    }

    #[test]
    fn test_builders() {
        let m = Material::GREEN.unlit().double_sided();
        assert!(m.unlit && m.double_sided);
        assert_eq!(m.base_color, Material::GREEN.base_color);
    }

    #[test]
    fn test_ron_flags_default_off() {
        let m: Material = ron::from_str("(base_color: (0.0, 0.0, 1.0, 1.0))").unwrap();
        assert_eq!(m, Material::BLUE);
    }
}
