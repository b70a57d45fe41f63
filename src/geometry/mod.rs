//! # Procedural Geometry
//!
//! Small generators for building scenes without model files, used for fixtures
//! and for sanity-checking importers.
//!
//! ## Usage
//!
//! ```rust
//! use cgmath::Vector3;
//! use scenebake::geometry::generate_box;
//!
//! // The 8 corners of the box triangulated into 12 faces, one vertex per corner
//! // of every face
//! let mesh = generate_box(Vector3::new(-1.0, -1.0, -1.0), Vector3::new(1.0, 1.0, 1.0))
//!     .unindexed()
//!     .and_then(|soup| soup.into_mesh("cube", false))
//!     .unwrap();
//!
//! assert_eq!(mesh.face_count(), 12);
//! assert_eq!(mesh.vertex_count(), 36);
//! ```

pub mod primitives;

pub use primitives::*;

use cgmath::{InnerSpace, Vector3, Zero};

use crate::{
    error::{Result, SceneError},
    scene::Mesh,
};

/// Indexed triangle geometry before it becomes a [`Mesh`]
#[derive(Debug, Clone, Default)]
pub struct GeometryData {
    /// Vertex positions (x, y, z)
    pub vertices: Vec<Vector3<f32>>,
    /// Triangle indices, three per face
    pub indices: Vec<u32>,
}

impl GeometryData {
    /// Get the number of vertices in this geometry
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles in this geometry
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Expands shared vertices so every triangle corner owns its own vertex.
    ///
    /// This is the layout importers produce when they triangulate without
    /// joining identical vertices.
    ///
    /// # Errors
    ///
    /// [`SceneError::IndexOutOfRange`] if an index has no vertex.
    pub fn unindexed(&self) -> Result<Self> {
        let vertices = self
            .indices
            .iter()
            .map(|&index| {
                self.vertices
                    .get(index as usize)
                    .copied()
                    .ok_or(SceneError::IndexOutOfRange {
                        index,
                        vertices: self.vertices.len(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        let indices = (0..vertices.len() as u32).collect();

        Ok(Self { vertices, indices })
    }

    /// Converts into a named [`Mesh`], optionally with averaged face normals.
    ///
    /// # Errors
    ///
    /// - [`SceneError::IncompleteFace`] if the index count is not a multiple of three
    /// - [`SceneError::FaceIndexOutOfRange`] if an index has no vertex
    pub fn into_mesh(self, name: impl Into<String>, with_normals: bool) -> Result<Mesh> {
        let name = name.into();

        if self.indices.len() % 3 != 0 {
            return Err(SceneError::IncompleteFace {
                mesh: name,
                indices: self.indices.len(),
            });
        }
        // Normals are computed before Mesh::new sees the faces
        if let Some(&index) = self
            .indices
            .iter()
            .find(|&&index| index as usize >= self.vertices.len())
        {
            return Err(SceneError::FaceIndexOutOfRange {
                mesh: name,
                index,
                vertices: self.vertices.len(),
            });
        }

        let normals = with_normals.then(|| face_normals(&self.vertices, &self.indices));
        let faces = self
            .indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
            .collect();

        Mesh::new(name, self.vertices, normals, faces)
    }
}

/// Per-vertex normals averaged from the faces that use each vertex.
///
/// Vertices no triangle references keep a zero normal. Every index must be
/// below `vertices.len()`; trailing indices that do not form a triangle are
/// ignored.
pub fn face_normals(vertices: &[Vector3<f32>], indices: &[u32]) -> Vec<Vector3<f32>> {
    let mut normals = vec![Vector3::zero(); vertices.len()];

    // For each triangle, calculate face normal and add to vertices
    for triangle in indices.chunks_exact(3) {
        let i0 = triangle[0] as usize;
        let i1 = triangle[1] as usize;
        let i2 = triangle[2] as usize;

        let edge1 = vertices[i1] - vertices[i0];
        let edge2 = vertices[i2] - vertices[i0];
        let face_normal = edge1.cross(edge2);

        for &vertex_idx in &[i0, i1, i2] {
            normals[vertex_idx] += face_normal;
        }
    }

    for normal in normals.iter_mut() {
        if normal.magnitude2() > 0.0 {
            *normal = normal.normalize();
        }
    }

    normals
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn quad() -> GeometryData {
        GeometryData {
            vertices: vec![
                Vector3::new(0.0, 0.0, 0.0),
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(1.0, 1.0, 0.0),
                Vector3::new(0.0, 1.0, 0.0),
            ],
            indices: vec![0, 1, 2, 2, 3, 0],
        }
    }

    #[test]
    fn test_unindexed_duplicates_shared_corners() {
        let soup = quad().unindexed().unwrap();
        assert_eq!(soup.vertex_count(), 6);
        assert_eq!(soup.triangle_count(), 2);
        assert_eq!(soup.vertices[3], Vector3::new(1.0, 1.0, 0.0));
        assert_eq!(soup.indices, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_face_normals_of_flat_quad() {
        let data = quad();
        let normals = face_normals(&data.vertices, &data.indices);
        for normal in normals {
            assert_abs_diff_eq!(normal, Vector3::unit_z(), epsilon = 1e-6);
        }
    }

    #[test]
    fn test_into_mesh_with_and_without_normals() {
        let plain = quad().into_mesh("quad", false).unwrap();
        assert!(!plain.has_normals());
        assert_eq!(plain.faces(), &[[0, 1, 2], [2, 3, 0]]);

        let lit = quad().into_mesh("quad", true).unwrap();
        assert_eq!(lit.normals().map(|n| n.len()), Some(4));
    }

    #[test]
    fn test_into_mesh_rejects_bad_index_before_normals() {
        let data = GeometryData {
            indices: vec![0, 1, 5],
            ..quad()
        };

        for with_normals in [false, true] {
            let err = data.clone().into_mesh("bad", with_normals).unwrap_err();
            assert!(matches!(
                err,
                SceneError::FaceIndexOutOfRange {
                    index: 5,
                    vertices: 4,
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_into_mesh_rejects_trailing_indices() {
        let data = GeometryData {
            indices: vec![0, 1, 2, 0],
            ..quad()
        };
        let err = data.into_mesh("partial", true).unwrap_err();
        assert!(matches!(err, SceneError::IncompleteFace { indices: 4, .. }));
    }

    #[test]
    fn test_unindexed_rejects_bad_index() {
        let data = GeometryData {
            indices: vec![0, 9, 1],
            ..quad()
        };
        let err = data.unindexed().unwrap_err();
        assert!(matches!(
            err,
            SceneError::IndexOutOfRange {
                index: 9,
                vertices: 4
            }
        ));
    }
}
