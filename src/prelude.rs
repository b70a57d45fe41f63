//! # Scenebake Prelude
//!
//! Commonly used types and functions in one import.
//!
//! ```rust
//! use scenebake::prelude::*;
//! ```

// Core scene types
pub use crate::scene::{Mesh, Node, NodeId, Scene, SceneGraph};

// Baking
pub use crate::bake::{bake, bake_scene, bake_with_options, BakeOptions, NormalTransform};

// Queries and reports
pub use crate::query::{
    query_all_meshes_with_positions, query_exact_mesh, query_meshes, query_nodes, render_meshes,
    render_nodes, require_match, MeshData, MeshInfo, MeshQuery, NodeInfo,
};

// Transforms
pub use crate::transform::{decompose, TransformData};

// Providers
pub use crate::io::{load_obj, load_obj_from_reader, save_obj, ImportOptions};

// Errors
pub use crate::error::{Result, SceneError};

// Math types from cgmath
pub use cgmath::{Matrix4, Quaternion, Vector3};
