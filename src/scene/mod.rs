//! # Scene Management Module
//!
//! The scene data the baker and the queries operate on.
//!
//! ## Key Components
//!
//! - [`SceneGraph`] - Capability trait every scene provider implements
//! - [`Scene`] - In-memory node arena plus mesh array
//! - [`Node`] / [`NodeId`] - Named local transforms with children and mesh references
//! - [`Mesh`] - Positions, optional normals and triangle faces
//!
//! ## Usage
//!
//! ```rust
//! use cgmath::{Matrix4, SquareMatrix, Vector3};
//! use scenebake::scene::{Mesh, Scene, SceneGraph};
//!
//! let mut scene = Scene::new("root");
//! let mesh = Mesh::new("tri", vec![Vector3::new(0.0, 0.0, 0.0); 3], None, vec![[0, 1, 2]]).unwrap();
//! let node = scene
//!     .add_mesh_node(scene.root(), Matrix4::from_scale(2.0), mesh)
//!     .unwrap();
//!
//! assert_eq!(scene.find_node("tri"), Some(node));
//! ```

pub mod graph;
pub mod mesh;
pub mod scene;

// Re-export main types
pub use graph::SceneGraph;
pub use mesh::{Mesh, MeshGeometryMut};
pub use scene::{Node, NodeId, Scene, SceneStatistics};
