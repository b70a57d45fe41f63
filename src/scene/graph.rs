//! # Scene-Graph Capability Trait
//!
//! The baking and query routines only talk to a scene through [`SceneGraph`].
//! Any provider that can hand out node names, local transforms, children and
//! mesh references can be baked or queried, whether it owns its data like
//! [`Scene`](super::Scene) or wraps storage managed elsewhere.

use std::fmt::Debug;

use cgmath::Matrix4;

use super::mesh::MeshGeometryMut;

/// Accessors the core needs on a node tree plus its mesh array.
///
/// Implementations guarantee that the tree is acyclic and that every mesh
/// index returned by [`node_meshes`](SceneGraph::node_meshes) is below
/// [`mesh_count`](SceneGraph::mesh_count). Callers never re-check this.
pub trait SceneGraph {
    /// Handle identifying a node inside this scene.
    type NodeRef: Copy + Debug;

    fn root(&self) -> Self::NodeRef;

    fn node_name(&self, node: Self::NodeRef) -> &str;

    /// Local transform of the node relative to its parent.
    fn node_transform(&self, node: Self::NodeRef) -> Matrix4<f32>;

    fn set_node_transform(&mut self, node: Self::NodeRef, transform: Matrix4<f32>);

    fn node_children(&self, node: Self::NodeRef) -> &[Self::NodeRef];

    /// Indices into the scene mesh array referenced by the node.
    fn node_meshes(&self, node: Self::NodeRef) -> &[usize];

    fn mesh_count(&self) -> usize;

    fn mesh_name(&self, mesh: usize) -> &str;

    fn mesh_face_count(&self, mesh: usize) -> usize;

    fn mesh_vertex_count(&self, mesh: usize) -> usize;

    fn mesh_geometry_mut(&mut self, mesh: usize) -> MeshGeometryMut<'_>;

    /// Finds the first node named `name`, searching the whole tree from the
    /// root in pre-order (a node before its children, children in order).
    fn find_node(&self, name: &str) -> Option<Self::NodeRef> {
        let mut stack = vec![self.root()];

        while let Some(node) = stack.pop() {
            if self.node_name(node) == name {
                return Some(node);
            }
            // Reversed so the first child is popped first
            stack.extend(self.node_children(node).iter().rev().copied());
        }

        None
    }
}
