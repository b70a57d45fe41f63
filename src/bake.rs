//! # Transform Baking
//!
//! Flattens a node hierarchy into world space: every mesh is rewritten with the
//! accumulated transform of the node that references it, and every node is left
//! with an identity local transform. The scene renders the same before and
//! after, but all spatial information now lives in the vertex data.
//!
//! ## Usage
//!
//! ```rust
//! use cgmath::{Matrix4, SquareMatrix, Vector3};
//! use scenebake::{bake::bake_scene, geometry::generate_box, scene::Scene};
//!
//! let mut scene = Scene::new("root");
//! let cube = generate_box(Vector3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 1.0, 1.0))
//!     .into_mesh("cube", false)
//!     .unwrap();
//! let node = scene
//!     .add_mesh_node(scene.root(), Matrix4::from_translation(Vector3::new(5.0, 0.0, 0.0)), cube)
//!     .unwrap();
//!
//! bake_scene(&mut scene);
//!
//! assert_eq!(scene.node(node).unwrap().transform, Matrix4::identity());
//! assert_eq!(scene.meshes()[0].vertices()[0], Vector3::new(5.0, 0.0, 0.0));
//! ```

use cgmath::{InnerSpace, Matrix, Matrix3, Matrix4, SquareMatrix, Vector3};
use log::{debug, trace};

use crate::{scene::SceneGraph, transform::transform_point};

/// How normals are carried into world space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalTransform {
    /// Normals go through the same full affine matrix as positions, translation
    /// included, and are not renormalised. Under non-uniform scale or shear the
    /// result is no longer perpendicular to the surface, and any translation
    /// shifts it. Files written by earlier versions of this tool look like this.
    #[default]
    FullAffine,
    /// Normals go through the inverse transpose of the linear part and are
    /// renormalised, which keeps them perpendicular to the baked surface.
    InverseTranspose,
}

/// Options for [`bake_with_options`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BakeOptions {
    /// Transform the root node inherits
    pub initial_transform: Matrix4<f32>,
    pub normals: NormalTransform,
}

impl Default for BakeOptions {
    fn default() -> Self {
        Self {
            initial_transform: Matrix4::identity(),
            normals: NormalTransform::default(),
        }
    }
}

/// Bakes the subtree under `root`, which inherits `initial_transform`.
///
/// Normals use [`NormalTransform::FullAffine`].
pub fn bake<S>(scene: &mut S, root: S::NodeRef, initial_transform: Matrix4<f32>)
where
    S: SceneGraph + ?Sized,
{
    bake_with_options(
        scene,
        root,
        &BakeOptions {
            initial_transform,
            ..BakeOptions::default()
        },
    );
}

/// Bakes the whole scene from its root with an identity initial transform.
pub fn bake_scene<S>(scene: &mut S)
where
    S: SceneGraph + ?Sized,
{
    let root = scene.root();
    bake(scene, root, Matrix4::identity());
}

/// Bakes the subtree under `root` into world space.
///
/// Walks the tree with an explicit stack of `(node, inherited transform)`
/// pairs. For each node the world transform is `inherited * local`; every mesh
/// the node references has its vertices (and normals, if present) rewritten
/// with it, the children are queued with it, and the node's local transform is
/// reset to identity.
///
/// A mesh referenced by several nodes is transformed once per reference.
/// Nothing is rolled back if a later save fails.
pub fn bake_with_options<S>(scene: &mut S, root: S::NodeRef, options: &BakeOptions)
where
    S: SceneGraph + ?Sized,
{
    let mut stack = vec![(root, options.initial_transform)];
    let mut baked_nodes = 0usize;

    while let Some((node, parent_transform)) = stack.pop() {
        let world = parent_transform * scene.node_transform(node);
        let normal_matrix = match options.normals {
            NormalTransform::FullAffine => None,
            NormalTransform::InverseTranspose => Some(inverse_transpose(&world)),
        };

        let mesh_slots = scene.node_meshes(node).len();
        trace!(
            "baking node \"{}\" ({} meshes)",
            scene.node_name(node),
            mesh_slots
        );

        for slot in 0..mesh_slots {
            let mesh_index = scene.node_meshes(node)[slot];
            let geometry = scene.mesh_geometry_mut(mesh_index);

            for vertex in geometry.vertices.iter_mut() {
                *vertex = transform_point(&world, *vertex);
            }

            if let Some(normals) = geometry.normals {
                match normal_matrix {
                    None => {
                        for normal in normals.iter_mut() {
                            *normal = transform_point(&world, *normal);
                        }
                    }
                    Some(matrix) => {
                        for normal in normals.iter_mut() {
                            *normal = normalize_or_keep(matrix * *normal);
                        }
                    }
                }
            }
        }

        stack.extend(
            scene
                .node_children(node)
                .iter()
                .map(|&child| (child, world)),
        );

        scene.set_node_transform(node, Matrix4::identity());
        baked_nodes += 1;
    }

    debug!("baked {} nodes into world space", baked_nodes);
}

/// Inverse transpose of the upper 3x3 of `matrix`.
///
/// Singular matrices fall back to the plain linear part.
fn inverse_transpose(matrix: &Matrix4<f32>) -> Matrix3<f32> {
    let linear = Matrix3::from_cols(
        matrix.x.truncate(),
        matrix.y.truncate(),
        matrix.z.truncate(),
    );

    linear
        .invert()
        .map(|inverse| inverse.transpose())
        .unwrap_or(linear)
}

fn normalize_or_keep(v: Vector3<f32>) -> Vector3<f32> {
    if v.magnitude2() > 0.0 {
        v.normalize()
    } else {
        v
    }
}
