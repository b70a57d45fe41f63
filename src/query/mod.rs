//! # Node and Mesh Queries
//!
//! Read-only reports over a scene: decomposed transforms of nodes, and mesh
//! statistics, optionally narrowed down by name.
//!
//! ## Key Components
//!
//! - [`query_nodes`] - Direct children of the root with their attached meshes
//! - [`query_meshes`] - Dispatches on the filter to one of the two mesh modes:
//!   - [`query_all_meshes_with_positions`] - Every mesh, placed by its same-named node
//!   - [`query_exact_mesh`] - A single named node, looked up anywhere in the tree
//! - [`require_match`] - Turns an empty filtered result into an error
//!
//! An empty name filter matches everything. A filter that matches nothing
//! yields an empty result rather than an error.

pub mod report;

use log::trace;

use crate::{
    error::{Result, SceneError},
    scene::SceneGraph,
    transform::{decompose, TransformData},
};

pub use report::{render_meshes, render_nodes};

/// Statistics of one mesh attached to a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeshData {
    pub name: String,
    pub face_count: usize,
    pub vertex_count: usize,
}

/// Report entry for a node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeInfo {
    pub name: String,
    pub transform: TransformData,
    pub meshes: Vec<MeshData>,
}

/// Report entry of the mesh-oriented queries.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshInfo {
    pub name: String,
    pub transform: TransformData,
}

/// Which mesh-oriented report to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshQuery<'a> {
    /// Every mesh of the scene, see [`query_all_meshes_with_positions`]
    AllWithPositions,
    /// One named node, see [`query_exact_mesh`]
    Exact(&'a str),
}

impl<'a> MeshQuery<'a> {
    /// An empty filter selects every mesh, anything else an exact lookup.
    pub fn from_filter(filter: &'a str) -> Self {
        if filter.is_empty() {
            MeshQuery::AllWithPositions
        } else {
            MeshQuery::Exact(filter)
        }
    }
}

/// Reports the direct children of the scene root whose name equals `name_filter`,
/// or all of them when the filter is empty.
///
/// Grandchildren are never visited; a nested node cannot be selected by name here.
pub fn query_nodes<S>(scene: &S, name_filter: &str) -> Vec<NodeInfo>
where
    S: SceneGraph + ?Sized,
{
    let root = scene.root();

    scene
        .node_children(root)
        .iter()
        .copied()
        .filter(|&node| name_filter.is_empty() || scene.node_name(node) == name_filter)
        .map(|node| {
            trace!("reporting node \"{}\"", scene.node_name(node));
            NodeInfo {
                name: scene.node_name(node).to_string(),
                transform: decompose(&scene.node_transform(node)),
                meshes: scene
                    .node_meshes(node)
                    .iter()
                    .map(|&mesh| MeshData {
                        name: scene.mesh_name(mesh).to_string(),
                        face_count: scene.mesh_face_count(mesh),
                        vertex_count: scene.mesh_vertex_count(mesh),
                    })
                    .collect(),
            }
        })
        .collect()
}

/// Mesh-oriented report, choosing the mode from the filter.
///
/// See [`MeshQuery::from_filter`].
pub fn query_meshes<S>(scene: &S, name_filter: &str) -> Vec<MeshInfo>
where
    S: SceneGraph + ?Sized,
{
    match MeshQuery::from_filter(name_filter) {
        MeshQuery::AllWithPositions => query_all_meshes_with_positions(scene),
        MeshQuery::Exact(name) => query_exact_mesh(scene, name),
    }
}

/// One entry per mesh of the scene mesh array, in array order.
///
/// Each mesh is placed by the first node carrying the same name (pre-order
/// search over the whole tree, root included). Meshes without such a node get
/// [`TransformData::default`].
pub fn query_all_meshes_with_positions<S>(scene: &S) -> Vec<MeshInfo>
where
    S: SceneGraph + ?Sized,
{
    (0..scene.mesh_count())
        .map(|mesh| {
            let name = scene.mesh_name(mesh);
            let transform = match scene.find_node(name) {
                Some(node) => decompose(&scene.node_transform(node)),
                None => {
                    trace!("no node named \"{}\", using default transform", name);
                    TransformData::default()
                }
            };

            MeshInfo {
                name: name.to_string(),
                transform,
            }
        })
        .collect()
}

/// Looks up the node called `name` anywhere in the tree and reports it.
///
/// The entry carries the node's own name and local transform; the mesh array
/// is not consulted, so a node without meshes is still reported. Returns an
/// empty vector when no node has that name, and at most one entry otherwise.
pub fn query_exact_mesh<S>(scene: &S, name: &str) -> Vec<MeshInfo>
where
    S: SceneGraph + ?Sized,
{
    scene
        .find_node(name)
        .map(|node| MeshInfo {
            name: scene.node_name(node).to_string(),
            transform: decompose(&scene.node_transform(node)),
        })
        .into_iter()
        .collect()
}

/// Fails with [`SceneError::NoMatch`] when a non-empty `filter` selected nothing.
///
/// An empty result for an empty filter (a scene with nothing in it) passes.
pub fn require_match<T>(entries: Vec<T>, filter: &str) -> Result<Vec<T>> {
    if entries.is_empty() && !filter.is_empty() {
        return Err(SceneError::NoMatch {
            filter: filter.to_string(),
        });
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        fixtures::two_cube_scene,
        scene::{Mesh, Scene},
    };
    use approx::assert_abs_diff_eq;
    use cgmath::{Matrix4, One, Quaternion, SquareMatrix, Vector3};
    use test_case::test_case;

    #[test]
    fn test_query_nodes_is_shallow() {
        let scene = two_cube_scene();

        let all = query_nodes(&scene, "");
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "parent-cube");

        assert!(query_nodes(&scene, "child-cube").is_empty());
    }

    #[test]
    fn test_query_nodes_reports_transform_and_meshes() {
        let scene = two_cube_scene();
        let info = &query_nodes(&scene, "parent-cube")[0];

        assert_abs_diff_eq!(info.transform.translation, Vector3::new(2.0, 2.0, 2.0), epsilon = 1e-5);
        assert_abs_diff_eq!(info.transform.rotation, Quaternion::one(), epsilon = 1e-5);
        assert_abs_diff_eq!(info.transform.scaling, Vector3::new(2.0, 2.0, 2.0), epsilon = 1e-5);
        assert_eq!(
            info.meshes,
            vec![MeshData {
                name: "parent-cube".to_string(),
                face_count: 12,
                vertex_count: 36,
            }]
        );
    }

    #[test]
    fn test_query_nodes_unknown_name_is_empty() {
        let scene = two_cube_scene();
        assert!(query_nodes(&scene, "no-such-node").is_empty());
    }

    #[test]
    fn test_all_meshes_covers_mesh_array() {
        let mut scene = two_cube_scene();
        // a mesh no node is named after
        scene.add_mesh(Mesh::new("orphan", Vec::new(), None, Vec::new()).unwrap());

        let infos = query_meshes(&scene, "");
        assert_eq!(infos.len(), scene.meshes().len());

        let names: Vec<&str> = infos.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["parent-cube", "child-cube", "orphan"]);

        assert_abs_diff_eq!(infos[0].transform.scaling, Vector3::new(2.0, 2.0, 2.0), epsilon = 1e-5);
        // nested nodes are found too
        assert_abs_diff_eq!(infos[1].transform.scaling, Vector3::new(1.0, 1.0, 1.0), epsilon = 1e-5);
        assert_eq!(infos[2].transform, TransformData::default());
    }

    #[test_case("child-cube", Vector3::new(1.0, 1.0, 1.0) ; "nested node")]
    #[test_case("parent-cube", Vector3::new(2.0, 2.0, 2.0) ; "top level node")]
    fn test_exact_mesh_reports_node(name: &str, scaling: Vector3<f32>) {
        let scene = two_cube_scene();
        let infos = query_meshes(&scene, name);

        assert_eq!(infos.len(), 1);
        assert_eq!(infos[0].name, name);
        assert_abs_diff_eq!(infos[0].transform.scaling, scaling, epsilon = 1e-5);
    }

    #[test]
    fn test_exact_mesh_matches_node_without_meshes() {
        let mut scene = Scene::new("root");
        scene
            .add_node(scene.root(), "empty", Matrix4::from_scale(4.0))
            .unwrap();

        let infos = query_exact_mesh(&scene, "empty");
        assert_eq!(infos.len(), 1);
        assert_abs_diff_eq!(infos[0].transform.scaling, Vector3::new(4.0, 4.0, 4.0), epsilon = 1e-5);
    }

    #[test]
    fn test_exact_mesh_ignores_mesh_names() {
        let mut scene = Scene::new("root");
        let node = scene
            .add_node(scene.root(), "holder", Matrix4::identity())
            .unwrap();
        let index = scene.add_mesh(Mesh::new("inner", Vec::new(), None, Vec::new()).unwrap());
        scene.attach_mesh(node, index).unwrap();

        assert!(query_exact_mesh(&scene, "inner").is_empty());
        assert_eq!(query_exact_mesh(&scene, "holder").len(), 1);
    }

    #[test]
    fn test_mesh_query_mode_from_filter() {
        assert_eq!(MeshQuery::from_filter(""), MeshQuery::AllWithPositions);
        assert_eq!(MeshQuery::from_filter("cube"), MeshQuery::Exact("cube"));
    }

    #[test]
    fn test_require_match() {
        assert!(require_match(Vec::<NodeInfo>::new(), "").is_ok());
        assert_eq!(require_match(vec![1, 2], "x").unwrap(), vec![1, 2]);

        let err = require_match(Vec::<MeshInfo>::new(), "ghost").unwrap_err();
        assert!(matches!(err, SceneError::NoMatch { ref filter } if filter == "ghost"));
    }

    #[test]
    fn test_queries_after_bake_report_identity() {
        let mut scene = two_cube_scene();
        crate::bake::bake_scene(&mut scene);

        let info = &query_nodes(&scene, "")[0];
        assert_abs_diff_eq!(info.transform.translation, Vector3::new(0.0, 0.0, 0.0), epsilon = 1e-6);
        assert_abs_diff_eq!(info.transform.scaling, Vector3::new(1.0, 1.0, 1.0), epsilon = 1e-6);
    }
}
