//! Shared test scenes.

use cgmath::{Matrix4, SquareMatrix, Vector3};

use crate::{geometry::generate_box, scene::Scene};

pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Two non-indexed cubes: "parent-cube" directly under the root with
/// translation (2,2,2), no rotation and scale 2, and "child-cube" nested under
/// it with an identity transform. Each node carries the mesh of the same name.
pub(crate) fn two_cube_scene() -> Scene {
    let mut scene = Scene::new("the-scene");

    let parent_mesh = generate_box(
        Vector3::new(-10.0, -10.0, -10.0),
        Vector3::new(10.0, 10.0, 10.0),
    )
    .unindexed()
    .and_then(|soup| soup.into_mesh("parent-cube", false))
    .unwrap();
    let child_mesh = generate_box(Vector3::new(10.0, -5.0, -5.0), Vector3::new(20.0, 5.0, 5.0))
        .unindexed()
        .and_then(|soup| soup.into_mesh("child-cube", true))
        .unwrap();

    let parent_transform =
        Matrix4::from_translation(Vector3::new(2.0, 2.0, 2.0)) * Matrix4::from_scale(2.0);
    let parent = scene
        .add_mesh_node(scene.root(), parent_transform, parent_mesh)
        .unwrap();
    scene
        .add_mesh_node(parent, Matrix4::identity(), child_mesh)
        .unwrap();

    scene
}
