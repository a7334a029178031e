use std::fmt;

use nalgebra::{Matrix3, Matrix4, Vector3};
use serde::{Deserialize, Serialize};

use crate::config::TWELFTHS;

/// A Seitz operation {R|t}: integer rotation plus a translation counted in twelfths of a cell edge.
///
/// Working in twelfths keeps composition exact; every crystallographic translation
/// (1/2, 1/3, 1/4, 1/6 and their multiples) is an integer here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeitzMatrix {
    /// Rotation part with entries in {-1, 0, 1} for table rotations, determinant ±1
    pub rotation: Matrix3<i8>,
    /// Translation part in twelfths
    pub translation: Vector3<i32>,
}

impl SeitzMatrix {
    /// Create a new Seitz operation
    pub fn new(rotation: Matrix3<i8>, translation: Vector3<i32>) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// Create identity operation
    pub fn identity() -> Self {
        Self {
            rotation: Matrix3::identity(),
            translation: Vector3::zeros(),
        }
    }

    /// Pure translation by `shift` twelfths.
    pub fn from_translation(shift: Vector3<i32>) -> Self {
        Self::new(Matrix3::identity(), shift)
    }

    /// Build from the 4x4 affine form. The bottom row is ignored.
    ///
    /// Returns `None` if a rotation entry does not fit in an `i8`.
    pub fn from_matrix4(matrix: &Matrix4<i32>) -> Option<Self> {
        let mut rotation = Matrix3::<i8>::zeros();
        for (entry, &value) in rotation
            .iter_mut()
            .zip(matrix.fixed_view::<3, 3>(0, 0).iter())
        {
            *entry = i8::try_from(value).ok()?;
        }
        let translation = matrix.fixed_view::<3, 1>(0, 3).into_owned();
        Some(Self::new(rotation, translation))
    }

    /// The 4x4 affine form, translation column in twelfths.
    pub fn to_matrix4(&self) -> Matrix4<i32> {
        let mut matrix = Matrix4::identity();
        matrix
            .fixed_view_mut::<3, 3>(0, 0)
            .copy_from(&self.rotation.map(i32::from));
        matrix
            .fixed_view_mut::<3, 1>(0, 3)
            .copy_from(&self.translation);
        matrix
    }

    /// Affine product `self · other` (apply `other` first). Translations are not reduced.
    pub fn compose(&self, other: &SeitzMatrix) -> SeitzMatrix {
        SeitzMatrix {
            rotation: self.rotation * other.rotation,
            translation: self.rotation.map(i32::from) * other.translation + self.translation,
        }
    }

    /// Copy with every translation component brought into [0, 12).
    pub fn reduced(&self) -> SeitzMatrix {
        SeitzMatrix {
            rotation: self.rotation,
            translation: self.translation.map(|t| t.rem_euclid(TWELFTHS)),
        }
    }

    /// `T(+v) · self · T(-v)`: moves the symmetry element so it passes through `v`.
    pub fn conjugated_by_origin(&self, origin: &Vector3<i32>) -> SeitzMatrix {
        SeitzMatrix::from_translation(*origin)
            .compose(self)
            .compose(&SeitzMatrix::from_translation(-*origin))
    }

    /// The rotation part with all signs flipped (rotoinversion of a proper rotation).
    pub fn inverted(&self) -> SeitzMatrix {
        SeitzMatrix::new(-self.rotation, self.translation)
    }

    /// Apply symmetry operation to a point in fractional coordinates
    pub fn apply(&self, point: Vector3<f64>) -> Vector3<f64> {
        let rotation_f64 = self.rotation.map(f64::from);
        let translation_f64 = self.translation.map(|t| f64::from(t) / f64::from(TWELFTHS));
        rotation_f64 * point + translation_f64
    }

    /// Determinant of the rotation part: 1 for proper, -1 for improper operations.
    pub fn determinant(&self) -> i32 {
        let r = self.rotation.map(i32::from);
        r[(0, 0)] * (r[(1, 1)] * r[(2, 2)] - r[(1, 2)] * r[(2, 1)])
            - r[(0, 1)] * (r[(1, 0)] * r[(2, 2)] - r[(1, 2)] * r[(2, 0)])
            + r[(0, 2)] * (r[(1, 0)] * r[(2, 1)] - r[(1, 1)] * r[(2, 0)])
    }

    pub fn is_improper(&self) -> bool {
        self.determinant() < 0
    }

    /// Order of the rotation part: the smallest n with R^n = I, or `None` if
    /// the matrix is not of crystallographic order.
    pub fn rotation_order(&self) -> Option<usize> {
        let identity = Matrix3::<i8>::identity();
        let mut power = self.rotation;
        for n in 1..=6 {
            if power == identity {
                return Some(n);
            }
            power = self.rotation * power;
        }
        None
    }

    /// Check if this is the identity operation (modulo lattice translations)
    pub fn is_identity(&self) -> bool {
        self.reduced() == SeitzMatrix::identity()
    }
}

impl fmt::Display for SeitzMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            writeln!(
                f,
                "[{:>3}{:>3}{:>3} |{:>4} ]",
                self.rotation[(row, 0)],
                self.rotation[(row, 1)],
                self.rotation[(row, 2)],
                self.translation[row]
            )?;
        }
        Ok(())
    }
}
