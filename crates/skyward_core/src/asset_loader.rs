//! Background asset loading
//!
//! The [`AssetLoader`] spawns a worker thread that decodes models and skybox
//! images and returns the results via a channel, so a large glTF file or six
//! JPEG faces never stall the render loop.

use std::path::PathBuf;
use std::sync::mpsc::{channel, Sender, Receiver, TryRecvError};
use std::thread;

use log::debug;

use crate::gltf_import::import_gltf;
use crate::model::LoadedModel;
use crate::{AssetError, SkyboxFaces, SkyboxImages};

/// Work submitted to the loader thread
enum LoadRequest {
    Model(PathBuf),
    Skybox(SkyboxFaces),
}

impl LoadRequest {
    fn source(&self) -> String {
        match self {
            LoadRequest::Model(path) => path.display().to_string(),
            LoadRequest::Skybox(faces) => faces.px.parent().unwrap_or(&faces.px).display().to_string(),
        }
    }
}

/// A decoded asset
#[derive(Debug)]
pub enum LoadedAsset {
    Model(LoadedModel),
    Skybox(SkyboxImages),
}

/// Result of a background load
#[derive(Debug)]
pub struct LoadResult {
    /// Path (or skybox directory) the asset was requested from
    pub source: String,
    /// The decoded asset or error
    pub result: Result<LoadedAsset, AssetError>,
}

/// Background asset loader using a dedicated worker thread
///
/// Use [`load_model`](AssetLoader::load_model) and
/// [`load_skybox`](AssetLoader::load_skybox) to submit requests and
/// [`poll`](AssetLoader::poll) or [`poll_all`](AssetLoader::poll_all) once
/// per frame to collect finished loads.
///
/// # Example
/// ```ignore
/// let loader = AssetLoader::new();
/// loader.load_model("models/airplane/scene.gltf");
///
/// // Later, every frame:
/// for loaded in loader.poll_all() {
///     match loaded.result {
///         Ok(LoadedAsset::Model(model)) => { /* insert into the scene */ }
///         Ok(LoadedAsset::Skybox(images)) => { /* install background */ }
///         Err(e) => log::warn!("{}: {}", loaded.source, e),
///     }
/// }
/// ```
pub struct AssetLoader {
    /// Channel to send load requests to the worker thread
    sender: Sender<LoadRequest>,
    /// Channel to receive load results from the worker thread
    receiver: Receiver<LoadResult>,
}

impl AssetLoader {
    /// Create a new asset loader with a background worker thread
    ///
    /// The worker thread runs until the AssetLoader is dropped.
    pub fn new() -> Self {
        let (request_tx, request_rx) = channel::<LoadRequest>();
        let (result_tx, result_rx) = channel::<LoadResult>();

        thread::spawn(move || {
            while let Ok(request) = request_rx.recv() {
                let source = request.source();
                debug!("Loading asset {}", source);
                let result = match request {
                    LoadRequest::Model(path) => import_gltf(&path).map(LoadedAsset::Model),
                    LoadRequest::Skybox(faces) => SkyboxImages::load(&faces).map(LoadedAsset::Skybox),
                };
                // Receiver dropped: nobody is waiting any more
                if result_tx.send(LoadResult { source, result }).is_err() {
                    break;
                }
            }
        });

        Self {
            sender: request_tx,
            receiver: result_rx,
        }
    }

    /// Request a glTF model to be loaded in the background
    pub fn load_model(&self, path: impl Into<PathBuf>) {
        // If send fails, the worker thread has exited
        let _ = self.sender.send(LoadRequest::Model(path.into()));
    }

    /// Request skybox faces to be decoded in the background
    pub fn load_skybox(&self, faces: SkyboxFaces) {
        let _ = self.sender.send(LoadRequest::Skybox(faces));
    }

    /// Check if any asset has finished loading (non-blocking)
    pub fn poll(&self) -> Option<LoadResult> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Collect all completed loads (non-blocking)
    pub fn poll_all(&self) -> Vec<LoadResult> {
        self.receiver.try_iter().collect()
    }
}

impl Default for AssetLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    /// Poll until `count` results arrive or a generous deadline passes
    fn wait_for(loader: &AssetLoader, count: usize) -> Vec<LoadResult> {
        let deadline = Instant::now() + Duration::from_secs(5);
        let mut results = Vec::new();
        while results.len() < count && Instant::now() < deadline {
            results.extend(loader.poll_all());
            std::thread::sleep(Duration::from_millis(10));
        }
        results
    }

    #[test]
    fn test_poll_returns_none_when_empty() {
        let loader = AssetLoader::new();
        assert!(loader.poll().is_none());
        assert!(loader.poll_all().is_empty());
    }

    #[test]
    fn test_missing_model_reports_not_found() {
        let loader = AssetLoader::new();
        loader.load_model("/nonexistent/models/airplane/scene.gltf");

        let results = wait_for(&loader, 1);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].source, "/nonexistent/models/airplane/scene.gltf");
        assert!(matches!(results[0].result, Err(AssetError::NotFound(_))));
    }

    #[test]
    fn test_skybox_source_is_directory() {
        let loader = AssetLoader::new();
        loader.load_skybox(SkyboxFaces::in_dir("/nonexistent/skybox", "jpg"));

        let results = wait_for(&loader, 1);
        assert_eq!(results[0].source, "/nonexistent/skybox");
        assert!(results[0].result.is_err());
    }

    #[test]
    fn test_multiple_requests_all_answered() {
        let loader = AssetLoader::new();
        loader.load_model("/nonexistent/a.gltf");
        loader.load_skybox(SkyboxFaces::in_dir("/nonexistent/b", "png"));
        loader.load_model("/nonexistent/c.glb");

        let results = wait_for(&loader, 3);
        let sources: Vec<&str> = results.iter().map(|r| r.source.as_str()).collect();
        assert_eq!(sources, vec!["/nonexistent/a.gltf", "/nonexistent/b", "/nonexistent/c.glb"]);
    }
}
