//! Asset error types
//!
//! Provides error handling for model and skybox loading.

use std::io;
use std::fmt;

/// Error type for asset operations
#[derive(Debug)]
pub enum AssetError {
    /// IO error (permission denied, truncated file, etc.)
    Io(io::Error),
    /// Parse error (invalid glTF, undecodable image)
    Parse(String),
    /// Asset file does not exist
    NotFound(String),
    /// Skybox faces are not square or not all the same size
    InvalidSkybox(String),
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Io(err) => write!(f, "Asset IO error: {}", err),
            AssetError::Parse(msg) => write!(f, "Asset parse error: {}", msg),
            AssetError::NotFound(path) => write!(f, "Asset not found: {}", path),
            AssetError::InvalidSkybox(msg) => write!(f, "Invalid skybox: {}", msg),
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::Io(err) => Some(err),
            AssetError::Parse(_) | AssetError::NotFound(_) | AssetError::InvalidSkybox(_) => None,
        }
    }
}

impl From<io::Error> for AssetError {
    fn from(err: io::Error) -> Self {
        AssetError::Io(err)
    }
}

impl From<gltf::Error> for AssetError {
    fn from(err: gltf::Error) -> Self {
        match err {
            gltf::Error::Io(io_err) => AssetError::Io(io_err),
            other => AssetError::Parse(other.to_string()),
        }
    }
}

impl From<image::ImageError> for AssetError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(io_err) => AssetError::Io(io_err),
            other => AssetError::Parse(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let asset_err = AssetError::Io(io::Error::new(io::ErrorKind::NotFound, "file missing"));
        let msg = format!("{}", asset_err);
        assert!(msg.contains("IO error"));
        assert!(msg.contains("file missing"));
    }

    #[test]
    fn test_not_found_error_display() {
        let err = AssetError::NotFound("models/airplane/scene.gltf".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("not found"));
        assert!(msg.contains("models/airplane/scene.gltf"));
    }

    #[test]
    fn test_invalid_skybox_display() {
        let err = AssetError::InvalidSkybox("face px is 4x8".to_string());
        assert!(format!("{}", err).contains("face px is 4x8"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        match AssetError::from(io_err) {
            AssetError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::PermissionDenied),
            other => panic!("Expected Io variant, got {:?}", other),
        }
    }

    #[test]
    fn test_error_source() {
        use std::error::Error;

        let io_err = AssetError::Io(io::Error::new(io::ErrorKind::NotFound, "missing"));
        assert!(io_err.source().is_some());
        assert!(AssetError::Parse("bad".to_string()).source().is_none());
        assert!(AssetError::InvalidSkybox("bad".to_string()).source().is_none());
    }
}
