//! Scene templates
//!
//! A SceneTemplate is the serializable description of a demo scene: background,
//! optional skybox, lights, camera start, primitive objects, and an optional
//! model file with the name of its spinning part. Templates are loaded from
//! RON files and instantiated into a [`SceneGraph`].

use serde::{Serialize, Deserialize};
use std::path::{Path, PathBuf};
use std::fs;
use std::io;

use skyward_math::{Euler, Vec3};

use crate::shapes::ShapeTemplate;
use crate::{AmbientLight, Background, DirectionalLight, Material, Node, SceneGraph, SkyboxFaces, Transform3D};

fn default_background() -> [f32; 4] {
    [0.0, 0.0, 0.0, 1.0]
}

/// Camera start pose and projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraTemplate {
    #[serde(default)]
    pub position: Vec3,
    #[serde(default)]
    pub rotation: Euler,
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraTemplate {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 10.0),
            rotation: Euler::default(),
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

/// A primitive object placed in the scene
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectTemplate {
    /// Optional name (for lookup)
    #[serde(default)]
    pub name: Option<String>,
    pub shape: ShapeTemplate,
    #[serde(default)]
    pub material: Material,
    #[serde(default)]
    pub transform: Transform3D,
}

impl ObjectTemplate {
    pub fn new(shape: ShapeTemplate, transform: Transform3D, material: Material) -> Self {
        Self { name: None, shape, material, transform }
    }

    /// Set the name of this template
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// A model file loaded in the background and placed once it arrives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelTemplate {
    /// Path of the .gltf/.glb file, relative to the asset root
    pub path: PathBuf,
    #[serde(default)]
    pub transform: Transform3D,
    /// Name of the child node to spin every frame
    #[serde(default)]
    pub spinner: Option<String>,
}

/// A serializable demo scene
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneTemplate {
    /// Scene name (for display/debugging)
    pub name: String,
    /// Clear color, also used when the skybox is missing
    #[serde(default = "default_background")]
    pub background: [f32; 4],
    #[serde(default)]
    pub skybox: Option<SkyboxFaces>,
    #[serde(default)]
    pub ambient: Option<AmbientLight>,
    #[serde(default)]
    pub directional_lights: Vec<DirectionalLight>,
    #[serde(default)]
    pub camera: CameraTemplate,
    #[serde(default)]
    pub objects: Vec<ObjectTemplate>,
    #[serde(default)]
    pub model: Option<ModelTemplate>,
}

impl SceneTemplate {
    /// Create a new empty scene
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            background: default_background(),
            skybox: None,
            ambient: None,
            directional_lights: Vec::new(),
            camera: CameraTemplate::default(),
            objects: Vec::new(),
            model: None,
        }
    }

    /// Load a scene from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SceneLoadError> {
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    /// Parse a scene from RON text
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(contents: &str) -> Result<Self, SceneLoadError> {
        Ok(ron::from_str(contents)?)
    }

    /// Save a scene to a RON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SceneSaveError> {
        let pretty = ron::ser::PrettyConfig::new()
            .struct_names(true)
            .enumerate_arrays(false);
        let contents = ron::ser::to_string_pretty(self, pretty)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Add an object template to this scene
    pub fn add_object(&mut self, object: ObjectTemplate) {
        self.objects.push(object);
    }

    /// Set the clear color
    pub fn with_background(mut self, background: [f32; 4]) -> Self {
        self.background = background;
        self
    }

    /// Set the model to load
    pub fn with_model(mut self, model: ModelTemplate) -> Self {
        self.model = Some(model);
        self
    }

    /// Build a scene graph with this template's objects, lights, and background
    ///
    /// The model and skybox are not part of the result: they are loaded in the
    /// background and added when they arrive.
    pub fn instantiate(&self) -> SceneGraph {
        let mut graph = SceneGraph::new();
        graph.background = Background::Color(self.background);
        if let Some(ambient) = self.ambient {
            graph.ambient = ambient;
        }
        for light in &self.directional_lights {
            graph.add_directional_light(*light);
        }

        for object in &self.objects {
            let mesh = graph.add_mesh(object.shape.create_mesh());
            let mut node = Node::mesh(mesh, object.material).with_transform(object.transform);
            node.name = object.name.clone();
            graph.add(node);
        }
        graph
    }
}

/// Error loading a scene
#[derive(Debug)]
pub enum SceneLoadError {
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// Parse error (invalid RON syntax)
    Parse(ron::error::SpannedError),
}

impl From<io::Error> for SceneLoadError {
    fn from(e: io::Error) -> Self {
        SceneLoadError::Io(e)
    }
}

impl From<ron::error::SpannedError> for SceneLoadError {
    fn from(e: ron::error::SpannedError) -> Self {
        SceneLoadError::Parse(e)
    }
}

impl std::fmt::Display for SceneLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneLoadError::Io(e) => write!(f, "IO error: {}", e),
            SceneLoadError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SceneLoadError {}

/// Error saving a scene
#[derive(Debug)]
pub enum SceneSaveError {
    /// IO error (permission denied, disk full, etc.)
    Io(io::Error),
    /// Serialization error
    Serialize(ron::Error),
}

impl From<io::Error> for SceneSaveError {
    fn from(e: io::Error) -> Self {
        SceneSaveError::Io(e)
    }
}

impl From<ron::Error> for SceneSaveError {
    fn from(e: ron::Error) -> Self {
        SceneSaveError::Serialize(e)
    }
}

impl std::fmt::Display for SceneSaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneSaveError::Io(e) => write!(f, "IO error: {}", e),
            SceneSaveError::Serialize(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for SceneSaveError {}
