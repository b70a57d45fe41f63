//! # Transform Decomposition
//!
//! Factoring 4x4 affine matrices into translation, rotation and scale, plus the
//! point transform the baker applies to vertex data.

use cgmath::{
    InnerSpace, Matrix3, Matrix4, One, Quaternion, SquareMatrix, Vector3, Zero,
};

/// Decomposed form of an affine transform.
///
/// Composing the parts as `T * R * S` gives back the original matrix for any
/// transform without shear.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformData {
    pub translation: Vector3<f32>,
    /// Unit quaternion
    pub rotation: Quaternion<f32>,
    pub scaling: Vector3<f32>,
}

impl Default for TransformData {
    /// Zero translation and scaling with an identity rotation.
    ///
    /// Reported for meshes that no node carries, which keeps them apart from
    /// nodes with a genuine identity transform (scaling of one).
    fn default() -> Self {
        Self {
            translation: Vector3::zero(),
            rotation: Quaternion::one(),
            scaling: Vector3::zero(),
        }
    }
}

impl TransformData {
    pub fn new(translation: Vector3<f32>, rotation: Quaternion<f32>, scaling: Vector3<f32>) -> Self {
        Self {
            translation,
            rotation,
            scaling,
        }
    }

    /// The identity transform in decomposed form
    pub fn identity() -> Self {
        Self::new(Vector3::zero(), Quaternion::one(), Vector3::new(1.0, 1.0, 1.0))
    }

    /// Composes the parts back into a matrix: `T * R * S`
    pub fn to_matrix(&self) -> Matrix4<f32> {
        let t = Matrix4::from_translation(self.translation);
        let r = Matrix4::from(self.rotation);
        let s = Matrix4::from_nonuniform_scale(self.scaling.x, self.scaling.y, self.scaling.z);
        t * r * s // Order matters: T * R * S
    }
}

impl From<Matrix4<f32>> for TransformData {
    fn from(matrix: Matrix4<f32>) -> Self {
        decompose(&matrix)
    }
}

/// Decomposes an affine matrix into translation, rotation and scaling.
///
/// Translation comes from the last column and scaling from the lengths of the
/// three basis columns, negated when the basis flips handedness. The basis
/// divided by its scaling is converted to a quaternion.
///
/// Degenerate input does not panic: a zero-length column is left as is before
/// the quaternion conversion, so the rotation is meaningless but finite.
pub fn decompose(matrix: &Matrix4<f32>) -> TransformData {
    let translation = matrix.w.truncate();

    let mut columns = [matrix.x.truncate(), matrix.y.truncate(), matrix.z.truncate()];
    let mut scaling = Vector3::new(
        columns[0].magnitude(),
        columns[1].magnitude(),
        columns[2].magnitude(),
    );

    if Matrix3::from_cols(columns[0], columns[1], columns[2]).determinant() < 0.0 {
        scaling = -scaling;
    }

    for (column, scale) in columns.iter_mut().zip([scaling.x, scaling.y, scaling.z]) {
        if scale != 0.0 {
            *column /= scale;
        }
    }

    let rotation = Quaternion::from(Matrix3::from_cols(columns[0], columns[1], columns[2]));

    TransformData {
        translation,
        rotation,
        scaling,
    }
}

/// Applies the full affine matrix to `v` treated as a point (w = 1).
///
/// No perspective divide is performed.
pub fn transform_point(matrix: &Matrix4<f32>, v: Vector3<f32>) -> Vector3<f32> {
    (*matrix * v.extend(1.0)).truncate()
}
