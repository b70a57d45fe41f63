//! # Error Types
//!
//! Errors raised by scene providers and by the validating [`Scene`] constructors.
//! The baking and query routines themselves never fail.
//!
//! [`Scene`]: crate::scene::Scene

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SceneError>;

#[derive(Debug, Error)]
pub enum SceneError {
    /// The importer rejected the file.
    #[error("failed to load file: {}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: tobj::LoadError,
    },

    /// The file parsed but produced nothing a scene can be built from.
    #[error("file contains no objects: {}", .path.display())]
    EmptyScene { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("node {index} does not exist in this scene")]
    UnknownNode { index: usize },

    #[error("mesh index {index} is out of range (scene has {mesh_count} meshes)")]
    InvalidMeshIndex { index: usize, mesh_count: usize },

    #[error("mesh \"{mesh}\" has {normals} normals for {vertices} vertices")]
    NormalCountMismatch {
        mesh: String,
        vertices: usize,
        normals: usize,
    },

    #[error("mesh \"{mesh}\" references vertex {index} but has {vertices} vertices")]
    FaceIndexOutOfRange {
        mesh: String,
        index: u32,
        vertices: usize,
    },

    #[error("index {index} is out of range for {vertices} vertices")]
    IndexOutOfRange { index: u32, vertices: usize },

    #[error("mesh \"{mesh}\" has {indices} indices, not a whole number of triangles")]
    IncompleteFace { mesh: String, indices: usize },

    /// A name filter matched nothing. Only produced by [`require_match`].
    ///
    /// [`require_match`]: crate::query::require_match
    #[error("no entries with name \"{filter}\" found")]
    NoMatch { filter: String },
}
