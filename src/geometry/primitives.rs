//! # Primitive Shape Generation

use cgmath::Vector3;

use super::GeometryData;

/// Triangles of an axis-aligned box over the corners produced by [`box_corners`].
pub const BOX_TRIANGLES: [[u32; 3]; 12] = [
    [3, 1, 0], [2, 3, 0], // -Z
    [3, 7, 1], [5, 1, 7], // +X
    [6, 5, 7], [5, 6, 4], // +Z
    [4, 6, 2], [4, 2, 0], // -X
    [6, 7, 3], [3, 2, 6], // +Y
    [1, 5, 0], [4, 0, 5], // -Y
];

/// The 8 corners of the box spanned by `min` and `max`.
///
/// Bit 0 of the corner index selects x, bit 1 y and bit 2 z.
pub fn box_corners(min: Vector3<f32>, max: Vector3<f32>) -> [Vector3<f32>; 8] {
    std::array::from_fn(|i| {
        Vector3::new(
            if i & 1 == 0 { min.x } else { max.x },
            if i & 2 == 0 { min.y } else { max.y },
            if i & 4 == 0 { min.z } else { max.z },
        )
    })
}

/// Generate an axis-aligned box with one shared vertex per corner
///
/// Call [`GeometryData::unindexed`] for the 36-vertex form importers produce.
pub fn generate_box(min: Vector3<f32>, max: Vector3<f32>) -> GeometryData {
    GeometryData {
        vertices: box_corners(min, max).to_vec(),
        indices: BOX_TRIANGLES.iter().flatten().copied().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_generation() {
        let cube = generate_box(Vector3::new(-10.0, -10.0, -10.0), Vector3::new(10.0, 10.0, 10.0));
        assert_eq!(cube.vertex_count(), 8);
        assert_eq!(cube.triangle_count(), 12);
        assert_eq!(cube.vertices[0], Vector3::new(-10.0, -10.0, -10.0));
        assert_eq!(cube.vertices[7], Vector3::new(10.0, 10.0, 10.0));
    }

    #[test]
    fn test_every_corner_is_used() {
        let mut used = [false; 8];
        for &index in BOX_TRIANGLES.iter().flatten() {
            used[index as usize] = true;
        }
        assert!(used.iter().all(|&u| u));
    }

    #[test]
    fn test_unindexed_box_counts() {
        let mesh = generate_box(Vector3::new(10.0, -5.0, -5.0), Vector3::new(20.0, 5.0, 5.0))
            .unindexed()
            .and_then(|soup| soup.into_mesh("child-cube", true))
            .unwrap();
        assert_eq!(mesh.face_count(), 12);
        assert_eq!(mesh.vertex_count(), 36);
        assert_eq!(mesh.normals().map(|n| n.len()), Some(36));
    }
}
