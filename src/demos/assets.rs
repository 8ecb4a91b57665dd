//! Background assets of a demo scene
//!
//! A scene template may name a model and a skybox. Both are requested from an
//! [`AssetLoader`] when the demo starts and installed into the scene graph
//! when they arrive. Until then the model is absent and the template's
//! background color is shown.

use std::path::Path;
use std::sync::Arc;

use skyward_core::{
    procedural_airplane, AssetLoader, Background, LoadedAsset, LoadedModel, ModelTemplate, NodeKey,
    SceneGraph, SceneTemplate, Transform3D,
};

/// Name given to the spinner of the built-in airplane when none is configured
const DEFAULT_SPINNER: &str = "Propeller_1";

/// What changed during a [`SceneAssets::poll`]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AssetEvents {
    /// The model (loaded or substituted) was placed in the scene
    pub model_placed: bool,
    /// The skybox replaced the background color
    pub skybox_installed: bool,
}

/// Tracks a scene's model and skybox loads
pub struct SceneAssets {
    loader: AssetLoader,
    model: Option<ModelTemplate>,
    model_root: Option<NodeKey>,
    spinner: Option<NodeKey>,
    model_pending: bool,
    skybox_pending: bool,
    procedural_fallback: bool,
}

impl SceneAssets {
    /// Request the template's model and (optionally) skybox
    ///
    /// Relative paths are resolved against `asset_dir`.
    pub fn start(
        template: &SceneTemplate,
        asset_dir: &Path,
        skybox_enabled: bool,
        procedural_fallback: bool,
    ) -> Self {
        let loader = AssetLoader::new();

        let model_pending = match &template.model {
            Some(model) => {
                let path = asset_dir.join(&model.path);
                log::info!("Loading model {}", path.display());
                loader.load_model(path);
                true
            }
            None => false,
        };

        let skybox_pending = match (&template.skybox, skybox_enabled) {
            (Some(faces), true) => {
                loader.load_skybox(faces.resolved(asset_dir));
                true
            }
            _ => false,
        };

        Self {
            loader,
            model: template.model.clone(),
            model_root: None,
            spinner: None,
            model_pending,
            skybox_pending,
            procedural_fallback,
        }
    }

    /// Install any finished loads into `scene` (non-blocking)
    pub fn poll(&mut self, scene: &mut SceneGraph) -> AssetEvents {
        let mut events = AssetEvents::default();

        for loaded in self.loader.poll_all() {
            match loaded.result {
                Ok(LoadedAsset::Model(model)) => {
                    self.model_pending = false;
                    log::info!(
                        "Loaded model '{}' ({} triangles)",
                        model.name,
                        model.triangle_count()
                    );
                    events.model_placed |= self.place_model(scene, &model);
                }
                Ok(LoadedAsset::Skybox(images)) => {
                    self.skybox_pending = false;
                    log::info!("Loaded skybox from {}", loaded.source);
                    let fallback = scene.background.clear_color();
                    scene.background = Background::Skybox {
                        images: Arc::new(images),
                        fallback,
                    };
                    events.skybox_installed = true;
                }
                Err(e) if self.model_pending && self.is_model_source(&loaded.source) => {
                    self.model_pending = false;
                    log::warn!("Failed to load model {}: {}", loaded.source, e);
                    if self.procedural_fallback {
                        log::info!("Using built-in airplane");
                        let spinner = self.spinner_name().to_string();
                        events.model_placed |= self.place_model(scene, &procedural_airplane(&spinner));
                    }
                }
                Err(e) => {
                    self.skybox_pending = false;
                    log::warn!("Failed to load skybox {}: {}. Keeping background color.", loaded.source, e);
                }
            }
        }

        events
    }

    fn is_model_source(&self, source: &str) -> bool {
        self.model
            .as_ref()
            .is_some_and(|model| source.ends_with(&*model.path.to_string_lossy()))
    }

    fn spinner_name(&self) -> &str {
        self.model
            .as_ref()
            .and_then(|model| model.spinner.as_deref())
            .unwrap_or(DEFAULT_SPINNER)
    }

    /// Insert `model` as a root with the template's transform
    fn place_model(&mut self, scene: &mut SceneGraph, model: &LoadedModel) -> bool {
        let Some(root) = scene.insert_model(None, model) else {
            return false;
        };
        if let Some(node) = scene.get_mut(root) {
            node.set_transform(self.start_transform());
        }

        self.spinner = match self.model.as_ref().and_then(|m| m.spinner.as_deref()) {
            Some(name) => {
                let found = scene.find_by_name(root, name);
                if found.is_none() {
                    log::warn!("Model '{}' has no part named '{}'", model.name, name);
                }
                found
            }
            None => None,
        };
        self.model_root = Some(root);
        true
    }

    /// Transform the model is placed with (and reset to)
    pub fn start_transform(&self) -> Transform3D {
        self.model.as_ref().map(|m| m.transform).unwrap_or_default()
    }

    /// Root node of the placed model
    pub fn model_root(&self) -> Option<NodeKey> {
        self.model_root
    }

    /// The model's spinning part
    pub fn spinner(&self) -> Option<NodeKey> {
        self.spinner
    }

    /// Whether any requested asset has not arrived yet
    pub fn is_loading(&self) -> bool {
        self.model_pending || self.skybox_pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::{Duration, Instant};
    use skyward_math::Vec3;

    fn airplane_template() -> SceneTemplate {
        SceneTemplate::new("Test").with_model(ModelTemplate {
            path: PathBuf::from("models/missing/scene.gltf"),
            transform: Transform3D::from_position(Vec3::new(0.0, 1.0, 0.0)),
            spinner: Some("Propeller_1".to_string()),
        })
    }

    fn poll_until_loaded(assets: &mut SceneAssets, scene: &mut SceneGraph) -> AssetEvents {
        let deadline = Instant::now() + Duration::from_secs(5);
        let mut events = AssetEvents::default();
        while assets.is_loading() && Instant::now() < deadline {
            let e = assets.poll(scene);
            events.model_placed |= e.model_placed;
            events.skybox_installed |= e.skybox_installed;
            std::thread::sleep(Duration::from_millis(10));
        }
        events
    }

    #[test]
    fn test_no_assets_requested() {
        let template = SceneTemplate::new("Empty");
        let assets = SceneAssets::start(&template, Path::new("."), true, true);
        assert!(!assets.is_loading());
        assert!(assets.model_root().is_none());
    }

    #[test]
    fn test_missing_model_uses_fallback() {
        let template = airplane_template();
        let mut scene = template.instantiate();
        let mut assets = SceneAssets::start(&template, Path::new("/nonexistent"), true, true);

        let events = poll_until_loaded(&mut assets, &mut scene);
        assert!(events.model_placed);

        let root = assets.model_root().unwrap();
        assert_eq!(scene.get(root).unwrap().transform().position, Vec3::new(0.0, 1.0, 0.0));
        let spinner = assets.spinner().unwrap();
        assert!(scene.get(spinner).unwrap().is_named("Propeller_1"));
    }

    #[test]
    fn test_missing_model_without_fallback_stays_absent() {
        let template = airplane_template();
        let mut scene = template.instantiate();
        let mut assets = SceneAssets::start(&template, Path::new("/nonexistent"), true, false);

        let events = poll_until_loaded(&mut assets, &mut scene);
        assert!(!events.model_placed);
        assert!(assets.model_root().is_none());
        assert!(!assets.is_loading());
    }

    #[test]
    fn test_missing_skybox_keeps_color() {
        let mut template = SceneTemplate::new("Sky").with_background([0.5, 0.7, 1.0, 1.0]);
        template.skybox = Some(skyward_core::SkyboxFaces::in_dir("textures/skybox", "jpg"));
        let mut scene = template.instantiate();
        let mut assets = SceneAssets::start(&template, Path::new("/nonexistent"), true, true);

        let events = poll_until_loaded(&mut assets, &mut scene);
        assert!(!events.skybox_installed);
        assert!(scene.background.skybox().is_none());
        assert_eq!(scene.background.clear_color(), [0.5, 0.7, 1.0, 1.0]);
    }

    #[test]
    fn test_skybox_disabled_is_not_requested() {
        let mut template = SceneTemplate::new("Sky");
        template.skybox = Some(skyward_core::SkyboxFaces::in_dir("textures/skybox", "jpg"));
        let assets = SceneAssets::start(&template, Path::new("."), false, true);
        assert!(!assets.is_loading());
    }
}
