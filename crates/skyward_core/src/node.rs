//! Scene nodes
//!
//! A Node is one element of the scene graph: a transform, an optional name,
//! and either nothing to draw (a group) or a mesh with a material.

use slotmap::new_key_type;

use crate::{Material, Transform3D};

new_key_type! {
    /// Generational key to a node in a [`SceneGraph`](crate::SceneGraph)
    pub struct NodeKey;
    /// Generational key to mesh data stored in a [`SceneGraph`](crate::SceneGraph)
    pub struct MeshKey;
}

/// What a node draws
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NodeKind {
    /// Transform-only node (model roots, pivots)
    Group,
    /// Renderable mesh
    Mesh { mesh: MeshKey, material: Material },
}

/// A node in the scene graph
#[derive(Clone, Debug)]
pub struct Node {
    /// Optional name (for lookup)
    pub name: Option<String>,
    /// Hidden nodes hide their whole subtree
    pub visible: bool,
    pub kind: NodeKind,
    transform: Transform3D,
    pub(crate) parent: Option<NodeKey>,
    pub(crate) children: Vec<NodeKey>,
}

impl Node {
    /// Create an empty group node
    pub fn group() -> Self {
        Self::with_kind(NodeKind::Group)
    }

    /// Create a mesh node
    pub fn mesh(mesh: MeshKey, material: Material) -> Self {
        Self::with_kind(NodeKind::Mesh { mesh, material })
    }

    fn with_kind(kind: NodeKind) -> Self {
        Self {
            name: None,
            visible: true,
            kind,
            transform: Transform3D::identity(),
            parent: None,
            children: Vec::new(),
        }
    }

    /// Set the name of this node (for lookup)
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the initial transform of this node
    pub fn with_transform(mut self, transform: Transform3D) -> Self {
        self.transform = transform;
        self
    }

    /// Check whether this node has the given name
    pub fn is_named(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name)
    }

    pub fn parent(&self) -> Option<NodeKey> {
        self.parent
    }

    pub fn children(&self) -> &[NodeKey] {
        &self.children
    }

    #[inline]
    pub fn transform(&self) -> &Transform3D {
        &self.transform
    }

    #[inline]
    pub fn transform_mut(&mut self) -> &mut Transform3D {
        &mut self.transform
    }

    pub fn set_transform(&mut self, transform: Transform3D) {
        self.transform = transform;
    }

    /// Material of a mesh node
    pub fn material(&self) -> Option<&Material> {
        match &self.kind {
            NodeKind::Mesh { material, .. } => Some(material),
            NodeKind::Group => None,
        }
    }

    /// Set the material of a mesh node; returns false for groups
    pub fn set_material(&mut self, new_material: Material) -> bool {
        match &mut self.kind {
            NodeKind::Mesh { material, .. } => {
                *material = new_material;
                true
            }
            NodeKind::Group => false,
        }
    }
}
