//! # Mesh Data
//!
//! Triangle meshes as held by a [`Scene`](super::Scene): positions, an optional
//! parallel normal array and triangle faces indexing into the positions.

use cgmath::Vector3;

use crate::error::{Result, SceneError};

/// A named triangle mesh.
///
/// Positions and normals live in the mesh's local space until the owning scene
/// is baked, after which they are in world space.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    name: String,
    vertices: Vec<Vector3<f32>>,
    normals: Option<Vec<Vector3<f32>>>,
    faces: Vec<[u32; 3]>,
}

impl Mesh {
    /// Creates a mesh after checking that normals and faces fit the vertex array.
    ///
    /// # Errors
    ///
    /// - [`SceneError::NormalCountMismatch`] if `normals` is present and its
    ///   length differs from `vertices`
    /// - [`SceneError::FaceIndexOutOfRange`] if a face references a missing vertex
    pub fn new(
        name: impl Into<String>,
        vertices: Vec<Vector3<f32>>,
        normals: Option<Vec<Vector3<f32>>>,
        faces: Vec<[u32; 3]>,
    ) -> Result<Self> {
        let name = name.into();

        if let Some(normals) = &normals {
            if normals.len() != vertices.len() {
                return Err(SceneError::NormalCountMismatch {
                    mesh: name,
                    vertices: vertices.len(),
                    normals: normals.len(),
                });
            }
        }

        if let Some(&index) = faces
            .iter()
            .flatten()
            .find(|&&index| index as usize >= vertices.len())
        {
            return Err(SceneError::FaceIndexOutOfRange {
                mesh: name,
                index,
                vertices: vertices.len(),
            });
        }

        Ok(Self {
            name,
            vertices,
            normals,
            faces,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertices(&self) -> &[Vector3<f32>] {
        &self.vertices
    }

    /// Normals, present iff the mesh was created with them
    pub fn normals(&self) -> Option<&[Vector3<f32>]> {
        self.normals.as_deref()
    }

    pub fn has_normals(&self) -> bool {
        self.normals.is_some()
    }

    pub fn faces(&self) -> &[[u32; 3]] {
        &self.faces
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Splits the mesh into mutable vertex and normal slices.
    ///
    /// Lengths stay fixed, which keeps the normal/vertex invariant intact.
    pub fn geometry_mut(&mut self) -> MeshGeometryMut<'_> {
        MeshGeometryMut {
            vertices: &mut self.vertices,
            normals: self.normals.as_deref_mut(),
        }
    }
}

/// Mutable view of a mesh's per-vertex data, handed out to the baker.
#[derive(Debug)]
pub struct MeshGeometryMut<'a> {
    pub vertices: &'a mut [Vector3<f32>],
    pub normals: Option<&'a mut [Vector3<f32>]>,
}
