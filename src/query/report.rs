//! # Text Reports
//!
//! Plain-text rendering of query results. Each entry prints its name followed
//! by tab-indented transform lines; the rotation is written as `(x, y, z, w)`.

use std::fmt;

use super::{MeshData, MeshInfo, NodeInfo};
use crate::transform::TransformData;

/// Writes the three transform lines shared by node and mesh entries.
fn write_transform(f: &mut fmt::Formatter<'_>, transform: &TransformData) -> fmt::Result {
    let t = transform.translation;
    let r = transform.rotation;
    let s = transform.scaling;

    writeln!(f, "\tTranslation: ({}, {}, {})", t.x, t.y, t.z)?;
    writeln!(f, "\tRotation: ({}, {}, {}, {})", r.v.x, r.v.y, r.v.z, r.s)?;
    writeln!(f, "\tScaling: ({}, {}, {})", s.x, s.y, s.z)
}

impl fmt::Display for MeshData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (faces: {}, vertices: {})",
            self.name, self.face_count, self.vertex_count
        )
    }
}

impl fmt::Display for NodeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Node: {}", self.name)?;
        write_transform(f, &self.transform)?;
        for mesh in &self.meshes {
            writeln!(f, "\tMesh: {}", mesh)?;
        }
        Ok(())
    }
}

impl fmt::Display for MeshInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mesh: {}", self.name)?;
        write_transform(f, &self.transform)
    }
}

/// Concatenated report of all node entries
pub fn render_nodes(nodes: &[NodeInfo]) -> String {
    nodes.iter().map(ToString::to_string).collect()
}

/// Concatenated report of all mesh entries
pub fn render_meshes(meshes: &[MeshInfo]) -> String {
    meshes.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        fixtures::two_cube_scene,
        query::{query_meshes, query_nodes},
    };

    #[test]
    fn test_node_report_layout() {
        let scene = two_cube_scene();
        let report = render_nodes(&query_nodes(&scene, ""));

        assert_eq!(
            report,
            "Node: parent-cube\n\
             \tTranslation: (2, 2, 2)\n\
             \tRotation: (0, 0, 0, 1)\n\
             \tScaling: (2, 2, 2)\n\
             \tMesh: parent-cube (faces: 12, vertices: 36)\n"
        );
    }

    #[test]
    fn test_mesh_report_layout() {
        let scene = two_cube_scene();
        let report = render_meshes(&query_meshes(&scene, "child-cube"));

        assert_eq!(
            report,
            "Mesh: child-cube\n\
             \tTranslation: (0, 0, 0)\n\
             \tRotation: (0, 0, 0, 1)\n\
             \tScaling: (1, 1, 1)\n"
        );
    }

    #[test]
    fn test_empty_report() {
        assert_eq!(render_nodes(&[]), "");
        assert_eq!(render_meshes(&[]), "");
    }
}
