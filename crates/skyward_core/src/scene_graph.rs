//! Retained scene graph
//!
//! The SceneGraph owns every node, the mesh data the nodes reference, the
//! lights, and the background. Nodes form a forest: a node without a parent is
//! a root. World matrices are computed on demand by walking up the parents.

use log::debug;
use slotmap::SlotMap;
use skyward_math::{Mat4, MeshData, mat4};

use crate::model::LoadedModel;
use crate::{AmbientLight, Background, DirectionalLight, Material, MeshKey, Node, NodeKey, NodeKind};

/// A mesh node ready to draw
#[derive(Clone, Copy, Debug)]
pub struct VisibleMesh {
    pub node: NodeKey,
    /// Local-to-world matrix
    pub world: Mat4,
    pub mesh: MeshKey,
    pub material: Material,
}

/// Container for all nodes, meshes, and lights of a scene
pub struct SceneGraph {
    nodes: SlotMap<NodeKey, Node>,
    meshes: SlotMap<MeshKey, MeshData>,
    roots: Vec<NodeKey>,
    /// Uniform light
    pub ambient: AmbientLight,
    directional_lights: Vec<DirectionalLight>,
    /// What is drawn behind the scene
    pub background: Background,
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneGraph {
    /// Create an empty scene graph
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            meshes: SlotMap::with_key(),
            roots: Vec::new(),
            ambient: AmbientLight { color: [1.0, 1.0, 1.0], intensity: 0.0 },
            directional_lights: Vec::new(),
            background: Background::default(),
        }
    }

    // --- Meshes ---

    /// Store mesh data, returning its key
    pub fn add_mesh(&mut self, mesh: MeshData) -> MeshKey {
        self.meshes.insert(mesh)
    }

    pub fn mesh(&self, key: MeshKey) -> Option<&MeshData> {
        self.meshes.get(key)
    }

    /// Iterate over stored meshes
    pub fn meshes(&self) -> impl Iterator<Item = (MeshKey, &MeshData)> {
        self.meshes.iter()
    }

    #[inline]
    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    // --- Nodes ---

    /// Add a root node
    pub fn add(&mut self, mut node: Node) -> NodeKey {
        node.parent = None;
        node.children.clear();
        let key = self.nodes.insert(node);
        self.roots.push(key);
        key
    }

    /// Add a node under `parent`; returns `None` if the parent does not exist
    pub fn add_child(&mut self, parent: NodeKey, mut node: Node) -> Option<NodeKey> {
        if !self.nodes.contains_key(parent) {
            return None;
        }
        node.parent = Some(parent);
        node.children.clear();
        let key = self.nodes.insert(node);
        if let Some(parent_node) = self.nodes.get_mut(parent) {
            parent_node.children.push(key);
        }
        Some(key)
    }

    /// Remove a node and its whole subtree, returning the removed node
    pub fn remove(&mut self, key: NodeKey) -> Option<Node> {
        let node = self.nodes.remove(key)?;
        match node.parent {
            Some(parent) => {
                if let Some(parent_node) = self.nodes.get_mut(parent) {
                    parent_node.children.retain(|&child| child != key);
                }
            }
            None => self.roots.retain(|&root| root != key),
        }

        let mut stack = node.children.clone();
        while let Some(child) = stack.pop() {
            if let Some(removed) = self.nodes.remove(child) {
                stack.extend(removed.children);
            }
        }
        Some(node)
    }

    pub fn get(&self, key: NodeKey) -> Option<&Node> {
        self.nodes.get(key)
    }

    pub fn get_mut(&mut self, key: NodeKey) -> Option<&mut Node> {
        self.nodes.get_mut(key)
    }

    pub fn contains(&self, key: NodeKey) -> bool {
        self.nodes.contains_key(key)
    }

    /// Root nodes in insertion order
    pub fn roots(&self) -> &[NodeKey] {
        &self.roots
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Depth-first, pre-order list of `key` and everything below it
    pub fn descendants(&self, key: NodeKey) -> Vec<NodeKey> {
        let mut order = Vec::new();
        let mut stack = vec![key];
        while let Some(current) = stack.pop() {
            let Some(node) = self.nodes.get(current) else { continue };
            order.push(current);
            // Reverse so the first child is visited first
            stack.extend(node.children.iter().rev());
        }
        order
    }

    /// First node named `name` in a depth-first traversal from `root`
    pub fn find_by_name(&self, root: NodeKey, name: &str) -> Option<NodeKey> {
        self.descendants(root)
            .into_iter()
            .find(|&key| self.nodes.get(key).is_some_and(|node| node.is_named(name)))
    }

    /// First node named `name` anywhere in the graph (roots in order)
    pub fn find_by_name_anywhere(&self, name: &str) -> Option<NodeKey> {
        self.roots.iter().find_map(|&root| self.find_by_name(root, name))
    }

    /// Local-to-world matrix of a node
    pub fn world_matrix(&self, key: NodeKey) -> Option<Mat4> {
        let mut node = self.nodes.get(key)?;
        let mut world = node.transform().matrix();
        while let Some(parent) = node.parent {
            node = self.nodes.get(parent)?;
            world = mat4::mul(node.transform().matrix(), world);
        }
        Some(world)
    }

    /// Every visible mesh node with its world matrix
    ///
    /// Hidden nodes hide their whole subtree.
    pub fn visible_meshes(&self) -> Vec<VisibleMesh> {
        let mut out = Vec::new();
        let mut stack: Vec<(NodeKey, Mat4)> =
            self.roots.iter().rev().map(|&root| (root, mat4::IDENTITY)).collect();

        while let Some((key, parent_world)) = stack.pop() {
            let Some(node) = self.nodes.get(key) else { continue };
            if !node.visible {
                continue;
            }
            let world = mat4::mul(parent_world, node.transform().matrix());
            if let NodeKind::Mesh { mesh, material } = node.kind {
                if self.meshes.contains_key(mesh) {
                    out.push(VisibleMesh { node: key, world, mesh, material });
                }
            }
            stack.extend(node.children.iter().rev().map(|&child| (child, world)));
        }
        out
    }

    /// Instantiate a loaded model under `parent` (or as a root)
    ///
    /// Returns the key of the model's root group, which carries the model's
    /// name. Node names inside the model are preserved for lookup.
    pub fn insert_model(&mut self, parent: Option<NodeKey>, model: &LoadedModel) -> Option<NodeKey> {
        let mesh_keys: Vec<MeshKey> = model.meshes.iter().cloned().map(|mesh| self.add_mesh(mesh)).collect();

        let root = Node::group().with_name(model.name.clone());
        let root_key = match parent {
            Some(parent) => self.add_child(parent, root)?,
            None => self.add(root),
        };

        let mut stack: Vec<(usize, NodeKey)> = model.roots.iter().rev().map(|&index| (index, root_key)).collect();
        while let Some((index, parent_key)) = stack.pop() {
            let Some(model_node) = model.nodes.get(index) else { continue };
            let mut node = Node::group().with_transform(model_node.transform);
            node.name = model_node.name.clone();
            let Some(node_key) = self.add_child(parent_key, node) else { continue };

            for primitive in &model_node.primitives {
                if let Some(&mesh) = mesh_keys.get(primitive.mesh) {
                    self.add_child(node_key, Node::mesh(mesh, primitive.material));
                }
            }
            stack.extend(model_node.children.iter().rev().map(|&child| (child, node_key)));
        }

        debug!(
            "Inserted model '{}': {} nodes, {} meshes",
            model.name,
            model.nodes.len(),
            model.meshes.len()
        );
        Some(root_key)
    }

    // --- Lights ---

    pub fn add_directional_light(&mut self, light: DirectionalLight) {
        self.directional_lights.push(light);
    }

    pub fn directional_lights(&self) -> &[DirectionalLight] {
        &self.directional_lights
    }
}
