//! Skybox faces
//!
//! A skybox is six square RGBA8 images of equal size in cube-map order:
//! +X, -X, +Y, -Y, +Z, -Z.

use std::path::{Path, PathBuf};

use log::debug;
use serde::{Serialize, Deserialize};

use crate::AssetError;

/// Face names in cube-map order
pub const FACE_NAMES: [&str; 6] = ["px", "nx", "py", "ny", "pz", "nz"];

/// File paths of the six skybox faces
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkyboxFaces {
    pub px: PathBuf,
    pub nx: PathBuf,
    pub py: PathBuf,
    pub ny: PathBuf,
    pub pz: PathBuf,
    pub nz: PathBuf,
}

impl SkyboxFaces {
    /// Faces named `px.<ext>`, `nx.<ext>`, ... inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>, extension: &str) -> Self {
        let dir = dir.as_ref();
        let face = |name: &str| dir.join(format!("{}.{}", name, extension));
        Self {
            px: face("px"),
            nx: face("nx"),
            py: face("py"),
            ny: face("ny"),
            pz: face("pz"),
            nz: face("nz"),
        }
    }

    /// Paths in cube-map order
    pub fn paths(&self) -> [&Path; 6] {
        [&self.px, &self.nx, &self.py, &self.ny, &self.pz, &self.nz].map(PathBuf::as_path)
    }

    /// Resolve relative face paths against `base`
    pub fn resolved(&self, base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        let resolve = |path: &PathBuf| if path.is_relative() { base.join(path) } else { path.clone() };
        Self {
            px: resolve(&self.px),
            nx: resolve(&self.nx),
            py: resolve(&self.py),
            ny: resolve(&self.ny),
            pz: resolve(&self.pz),
            nz: resolve(&self.nz),
        }
    }
}

/// Decoded skybox: six square RGBA8 faces of `size` x `size` pixels
#[derive(Debug, Clone, PartialEq)]
pub struct SkyboxImages {
    size: u32,
    faces: [Vec<u8>; 6],
}

impl SkyboxImages {
    /// Build from raw RGBA8 face data, checking every face holds `size * size` pixels
    pub fn from_rgba(size: u32, faces: [Vec<u8>; 6]) -> Result<Self, AssetError> {
        if size == 0 {
            return Err(AssetError::InvalidSkybox("faces are empty".to_string()));
        }
        let expected = (size as usize) * (size as usize) * 4;
        for (name, face) in FACE_NAMES.iter().zip(&faces) {
            if face.len() != expected {
                return Err(AssetError::InvalidSkybox(format!(
                    "face {} has {} bytes, expected {}",
                    name,
                    face.len(),
                    expected
                )));
            }
        }
        Ok(Self { size, faces })
    }

    /// A single-color skybox
    pub fn solid(size: u32, rgba: [u8; 4]) -> Self {
        let size = size.max(1);
        let face: Vec<u8> = rgba.repeat((size * size) as usize);
        Self {
            size,
            faces: std::array::from_fn(|_| face.clone()),
        }
    }

    /// Decode the six face images
    pub fn load(faces: &SkyboxFaces) -> Result<Self, AssetError> {
        let mut size = None;
        let mut decoded: [Vec<u8>; 6] = Default::default();

        for ((name, path), slot) in FACE_NAMES.iter().zip(faces.paths()).zip(decoded.iter_mut()) {
            if !path.exists() {
                return Err(AssetError::NotFound(path.display().to_string()));
            }
            let image = image::open(path)?.to_rgba8();
            let (width, height) = image.dimensions();
            if width != height {
                return Err(AssetError::InvalidSkybox(format!(
                    "face {} is {}x{}, faces must be square",
                    name, width, height
                )));
            }
            match size {
                None => size = Some(width),
                Some(first) if first != width => {
                    return Err(AssetError::InvalidSkybox(format!(
                        "face {} is {}px but face px is {}px",
                        name, width, first
                    )));
                }
                Some(_) => {}
            }
            debug!("Decoded skybox face {} ({}px) from {}", name, width, path.display());
            *slot = image.into_raw();
        }

        Self::from_rgba(size.unwrap_or(0), decoded)
    }

    /// Edge length of each face in pixels
    pub fn size(&self) -> u32 {
        self.size
    }

    /// RGBA8 face data in cube-map order
    pub fn faces(&self) -> &[Vec<u8>; 6] {
        &self.faces
    }
}
