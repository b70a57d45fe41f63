//! # Wavefront OBJ Provider
//!
//! Loads OBJ files into a [`Scene`] through `tobj` and writes scenes back out.
//!
//! Imported scenes have a root node with one child per OBJ object; each child
//! has an identity transform and references one mesh of the same name. OBJ has
//! no node hierarchy, so [`write_obj`] writes mesh data as stored: bake the
//! scene first if node transforms should survive the round trip.

use std::{
    fs::File,
    io::{BufRead, BufWriter, Write},
    path::{Path, PathBuf},
};

use cgmath::{Matrix4, SquareMatrix, Vector3};
use log::{debug, info, warn};

use crate::{
    error::{Result, SceneError},
    scene::{Mesh, Scene},
};

/// Options for OBJ import.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportOptions {
    /// Keep one vertex per distinct position/normal pair instead of one per
    /// face corner. Off by default, which matches what general-purpose
    /// importers report for triangulated files (a cube has 36 vertices).
    pub join_identical_vertices: bool,
    /// Name of the root node. Defaults to the file stem, or "root" when
    /// reading from memory.
    pub root_name: Option<String>,
}

impl ImportOptions {
    fn tobj_options() -> tobj::LoadOptions {
        tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        }
    }
}

/// Loads an OBJ file from disk.
///
/// # Errors
///
/// - [`SceneError::Load`] if `tobj` cannot read or parse the file
/// - [`SceneError::EmptyScene`] if the file contains no objects
pub fn load_obj(path: impl AsRef<Path>, options: &ImportOptions) -> Result<Scene> {
    let path = path.as_ref();

    let (models, materials) =
        tobj::load_obj(path, &ImportOptions::tobj_options()).map_err(|source| {
            SceneError::Load {
                path: path.to_path_buf(),
                source,
            }
        })?;

    if let Err(err) = materials {
        warn!("No material library loaded for {}: {}", path.display(), err);
    }

    let root_name = options.root_name.clone().unwrap_or_else(|| {
        path.file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "root".to_string())
    });

    let scene = build_scene(path, root_name, models, options)?;
    let stats = scene.get_statistics();
    info!(
        "Loaded {} ({} nodes, {} meshes, {} faces, {} vertices)",
        path.display(),
        stats.node_count,
        stats.mesh_count,
        stats.total_faces,
        stats.total_vertices
    );
    Ok(scene)
}

/// Loads OBJ data from a reader. Material libraries are not resolved.
pub fn load_obj_from_reader<R: BufRead>(reader: &mut R, options: &ImportOptions) -> Result<Scene> {
    let source_path = PathBuf::from("<memory>");

    let (models, _materials) = tobj::load_obj_buf(reader, &ImportOptions::tobj_options(), |_| {
        Err(tobj::LoadError::OpenFileFailed)
    })
    .map_err(|source| SceneError::Load {
        path: source_path.clone(),
        source,
    })?;

    let root_name = options
        .root_name
        .clone()
        .unwrap_or_else(|| "root".to_string());

    build_scene(&source_path, root_name, models, options)
}

fn build_scene(
    path: &Path,
    root_name: String,
    models: Vec<tobj::Model>,
    options: &ImportOptions,
) -> Result<Scene> {
    let mut scene = Scene::new(root_name);

    // tobj reports an empty "unnamed_object" for input without geometry
    for model in models {
        if model.mesh.positions.is_empty() || model.mesh.indices.is_empty() {
            debug!("Skipping \"{}\": no faces", model.name);
            continue;
        }

        let mesh = convert_mesh(model.name, &model.mesh, options.join_identical_vertices)?;
        debug!(
            "Imported \"{}\": {} faces, {} vertices",
            mesh.name(),
            mesh.face_count(),
            mesh.vertex_count()
        );

        scene.add_mesh_node(scene.root(), Matrix4::identity(), mesh)?;
    }

    if scene.meshes().is_empty() {
        return Err(SceneError::EmptyScene {
            path: path.to_path_buf(),
        });
    }

    Ok(scene)
}

fn convert_mesh(name: String, mesh: &tobj::Mesh, indexed: bool) -> Result<Mesh> {
    let positions: Vec<Vector3<f32>> = mesh
        .positions
        .chunks_exact(3)
        .map(|p| Vector3::new(p[0], p[1], p[2]))
        .collect();

    // Use normals from OBJ only when they pair up with the positions
    let normals: Option<Vec<Vector3<f32>>> =
        if !mesh.normals.is_empty() && mesh.normals.len() == mesh.positions.len() {
            Some(
                mesh.normals
                    .chunks_exact(3)
                    .map(|n| Vector3::new(n[0], n[1], n[2]))
                    .collect(),
            )
        } else {
            if !mesh.normals.is_empty() {
                warn!(
                    "Dropping {} normals of \"{}\": count does not match positions",
                    mesh.normals.len() / 3,
                    name
                );
            }
            None
        };

    if indexed {
        let faces = mesh
            .indices
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
            .collect();
        return Mesh::new(name, positions, normals, faces);
    }

    let corner = |values: &[Vector3<f32>], index: u32| {
        values
            .get(index as usize)
            .copied()
            .ok_or_else(|| SceneError::FaceIndexOutOfRange {
                mesh: name.clone(),
                index,
                vertices: values.len(),
            })
    };

    let vertices = mesh
        .indices
        .iter()
        .map(|&index| corner(positions.as_slice(), index))
        .collect::<Result<Vec<_>>>()?;
    let normals = normals
        .map(|normals| {
            mesh.indices
                .iter()
                .map(|&index| corner(normals.as_slice(), index))
                .collect::<Result<Vec<_>>>()
        })
        .transpose()?;
    let faces = (0..vertices.len() as u32 / 3)
        .map(|face| [face * 3, face * 3 + 1, face * 3 + 2])
        .collect();

    Mesh::new(name, vertices, normals, faces)
}

/// Writes every mesh of the scene to `path` as OBJ.
pub fn save_obj(scene: &Scene, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_obj(scene, &mut writer)?;
    writer.flush()?;

    let stats = scene.get_statistics();
    info!(
        "Wrote {} meshes ({} faces) to {}",
        stats.mesh_count,
        stats.total_faces,
        path.display()
    );
    Ok(())
}

/// Writes every mesh of the scene as an OBJ object (`o`, `v`, `vn`, `f` records).
pub fn write_obj<W: Write>(scene: &Scene, writer: &mut W) -> Result<()> {
    if scene
        .nodes()
        .any(|(_, node)| node.transform != Matrix4::identity())
    {
        warn!("Scene has unbaked node transforms; OBJ output keeps mesh-local coordinates");
    }

    writeln!(writer, "# {} meshes", scene.meshes().len())?;

    // OBJ indices are 1-based, global across objects, and counted separately
    // for `v` and `vn` records
    let mut offset = 1usize;
    let mut normal_offset = 1usize;
    for mesh in scene.meshes() {
        writeln!(writer, "o {}", mesh.name())?;

        for v in mesh.vertices() {
            writeln!(writer, "v {} {} {}", v.x, v.y, v.z)?;
        }
        if let Some(normals) = mesh.normals() {
            for n in normals {
                writeln!(writer, "vn {} {} {}", n.x, n.y, n.z)?;
            }
        }

        for face in mesh.faces() {
            let [a, b, c] = face.map(|index| index as usize + offset);
            if mesh.has_normals() {
                let [na, nb, nc] = face.map(|index| index as usize + normal_offset);
                writeln!(writer, "f {a}//{na} {b}//{nb} {c}//{nc}")?;
            } else {
                writeln!(writer, "f {a} {b} {c}")?;
            }
        }

        offset += mesh.vertex_count();
        if let Some(normals) = mesh.normals() {
            normal_offset += normals.len();
        }
    }

    Ok(())
}
