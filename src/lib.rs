// src/lib.rs
//! Scenebake
//!
//! Inspects and flattens 3D scene graphs. Queries report each node's
//! decomposed transform and attached mesh statistics; baking pushes every node
//! transform into its meshes' vertex data and leaves the hierarchy with
//! identity transforms.
//!
//! ```rust
//! use scenebake::prelude::*;
//!
//! let mut reader = "o tri\nv 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n".as_bytes();
//! let mut scene = load_obj_from_reader(&mut reader, &ImportOptions::default()).unwrap();
//!
//! print!("{}", render_nodes(&query_nodes(&scene, "")));
//! bake_scene(&mut scene);
//! ```

pub mod bake;
pub mod error;
pub mod geometry;
pub mod io;
pub mod prelude;
pub mod query;
pub mod scene;
pub mod transform;

#[cfg(test)]
pub(crate) mod fixtures;

// Re-export main types for convenience
pub use error::{Result, SceneError};
pub use scene::{Scene, SceneGraph};
