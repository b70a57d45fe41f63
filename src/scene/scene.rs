use cgmath::{Matrix4, SquareMatrix};

use super::{
    graph::SceneGraph,
    mesh::{Mesh, MeshGeometryMut},
};
use crate::error::{Result, SceneError};

/// Handle to a node stored in a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A scene-graph node: a named local transform with children and mesh references.
#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    pub transform: Matrix4<f32>, // local, relative to the parent
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    meshes: Vec<usize>,
}

impl Node {
    fn new(name: String, transform: Matrix4<f32>, parent: Option<NodeId>) -> Self {
        Self {
            name,
            transform,
            parent,
            children: Vec::new(),
            meshes: Vec::new(),
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Indices into the owning scene's mesh array
    pub fn meshes(&self) -> &[usize] {
        &self.meshes
    }
}

/// In-memory scene: a node tree stored in an arena plus the mesh array it references.
///
/// Nodes can only be added under an existing parent, so the tree is acyclic by
/// construction, and mesh references are checked when attached.
#[derive(Debug, Clone)]
pub struct Scene {
    nodes: Vec<Node>,
    meshes: Vec<Mesh>,
}

impl Scene {
    /// Creates a scene holding only a root node with an identity transform
    pub fn new(root_name: impl Into<String>) -> Self {
        Self {
            nodes: vec![Node::new(root_name.into(), Matrix4::identity(), None)],
            meshes: Vec::new(),
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Appends a mesh to the mesh array and returns its index.
    pub fn add_mesh(&mut self, mesh: Mesh) -> usize {
        self.meshes.push(mesh);
        self.meshes.len() - 1
    }

    /// Adds a child node under `parent`.
    ///
    /// # Errors
    ///
    /// [`SceneError::UnknownNode`] if `parent` does not belong to this scene.
    pub fn add_node(
        &mut self,
        parent: NodeId,
        name: impl Into<String>,
        transform: Matrix4<f32>,
    ) -> Result<NodeId> {
        self.check_node(parent)?;

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(name.into(), transform, Some(parent)));
        self.nodes[parent.0].children.push(id);

        Ok(id)
    }

    /// Makes `node` reference the mesh at `mesh_index`.
    ///
    /// # Errors
    ///
    /// - [`SceneError::UnknownNode`] if `node` does not belong to this scene
    /// - [`SceneError::InvalidMeshIndex`] if no mesh exists at `mesh_index`
    pub fn attach_mesh(&mut self, node: NodeId, mesh_index: usize) -> Result<()> {
        self.check_node(node)?;

        if mesh_index >= self.meshes.len() {
            return Err(SceneError::InvalidMeshIndex {
                index: mesh_index,
                mesh_count: self.meshes.len(),
            });
        }

        self.nodes[node.0].meshes.push(mesh_index);
        Ok(())
    }

    /// Adds `mesh` and a node of the same name under `parent` that references it.
    ///
    /// This is the layout importers produce for one object per node.
    pub fn add_mesh_node(
        &mut self,
        parent: NodeId,
        transform: Matrix4<f32>,
        mesh: Mesh,
    ) -> Result<NodeId> {
        let name = mesh.name().to_string();
        let node = self.add_node(parent, name, transform)?;
        let mesh_index = self.add_mesh(mesh);
        self.attach_mesh(node, mesh_index)?;
        Ok(node)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    pub fn mesh(&self, index: usize) -> Option<&Mesh> {
        self.meshes.get(index)
    }

    pub fn mesh_mut(&mut self, index: usize) -> Option<&mut Mesh> {
        self.meshes.get_mut(index)
    }

    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    /// All nodes in insertion order, root first
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId(index), node))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Gets statistics about the scene
    pub fn get_statistics(&self) -> SceneStatistics {
        SceneStatistics {
            node_count: self.nodes.len(),
            mesh_count: self.meshes.len(),
            total_faces: self.meshes.iter().map(Mesh::face_count).sum(),
            total_vertices: self.meshes.iter().map(Mesh::vertex_count).sum(),
        }
    }

    fn check_node(&self, node: NodeId) -> Result<()> {
        if node.index() < self.nodes.len() {
            Ok(())
        } else {
            Err(SceneError::UnknownNode {
                index: node.index(),
            })
        }
    }
}

impl SceneGraph for Scene {
    type NodeRef = NodeId;

    fn root(&self) -> NodeId {
        Scene::root(self)
    }

    fn node_name(&self, node: NodeId) -> &str {
        &self.nodes[node.0].name
    }

    fn node_transform(&self, node: NodeId) -> Matrix4<f32> {
        self.nodes[node.0].transform
    }

    fn set_node_transform(&mut self, node: NodeId, transform: Matrix4<f32>) {
        self.nodes[node.0].transform = transform;
    }

    fn node_children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    fn node_meshes(&self, node: NodeId) -> &[usize] {
        &self.nodes[node.0].meshes
    }

    fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    fn mesh_name(&self, mesh: usize) -> &str {
        self.meshes[mesh].name()
    }

    fn mesh_face_count(&self, mesh: usize) -> usize {
        self.meshes[mesh].face_count()
    }

    fn mesh_vertex_count(&self, mesh: usize) -> usize {
        self.meshes[mesh].vertex_count()
    }

    fn mesh_geometry_mut(&mut self, mesh: usize) -> MeshGeometryMut<'_> {
        self.meshes[mesh].geometry_mut()
    }
}

/// Scene totals, logged by the OBJ provider on load and save
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneStatistics {
    pub node_count: usize,
    pub mesh_count: usize,
    pub total_faces: usize,
    pub total_vertices: usize,
}
