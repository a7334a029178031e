#[cfg(test)]
mod _tests_symmetry_operations {
    use super::super::symmetry_operations::SeitzMatrix;
    use nalgebra::{Matrix3, Matrix4, Vector3};

    fn two_fold_z() -> Matrix3<i8> {
        Matrix3::new(-1, 0, 0, 0, -1, 0, 0, 0, 1)
    }

    fn four_fold_z() -> Matrix3<i8> {
        Matrix3::new(0, -1, 0, 1, 0, 0, 0, 0, 1)
    }

    // ==================== Construction ====================

    #[test]
    fn test_identity() {
        let id = SeitzMatrix::identity();
        assert!(id.is_identity());
        assert_eq!(id.determinant(), 1);
        assert_eq!(id.rotation_order(), Some(1));
    }

    #[test]
    fn test_lattice_translation_is_identity() {
        let op = SeitzMatrix::from_translation(Vector3::new(12, -24, 0));
        assert!(op.is_identity());
        assert!(!SeitzMatrix::from_translation(Vector3::new(6, 0, 0)).is_identity());
    }

    #[test]
    fn test_matrix4_roundtrip_layout() {
        let op = SeitzMatrix::new(four_fold_z(), Vector3::new(3, 6, 9));
        let m = op.to_matrix4();
        assert_eq!(m[(0, 1)], -1);
        assert_eq!(m[(1, 0)], 1);
        assert_eq!(m[(0, 3)], 3);
        assert_eq!(m[(1, 3)], 6);
        assert_eq!(m[(2, 3)], 9);
        assert_eq!(m[(3, 3)], 1);
        assert_eq!(m[(3, 0)], 0);

        let m2 = Matrix4::new(
            0, 0, 1, 4, //
            1, 0, 0, 8, //
            0, 1, 0, 8, //
            0, 0, 0, 1,
        );
        let op2 = SeitzMatrix::from_matrix4(&m2).unwrap();
        assert_eq!(op2.translation, Vector3::new(4, 8, 8));
        assert_eq!(op2.rotation_order(), Some(3));
    }

    #[test]
    fn test_from_matrix4_rejects_out_of_range_rotation() {
        let mut m = SeitzMatrix::identity().to_matrix4();
        m[(1, 2)] = 300;
        assert_eq!(SeitzMatrix::from_matrix4(&m), None);

        m[(1, 2)] = -1;
        let op = SeitzMatrix::from_matrix4(&m).unwrap();
        assert_eq!(op.rotation[(1, 2)], -1);
        assert_eq!(op.to_matrix4(), m);
    }

    // ==================== Composition ====================

    #[test]
    fn test_compose_applies_right_operand_first() {
        // {2z|0,0,6} · {I|3,0,0}: the translation is rotated before the screw part is added
        let screw = SeitzMatrix::new(two_fold_z(), Vector3::new(0, 0, 6));
        let shift = SeitzMatrix::from_translation(Vector3::new(3, 0, 0));
        let product = screw.compose(&shift);
        assert_eq!(product.rotation, two_fold_z());
        assert_eq!(product.translation, Vector3::new(-3, 0, 6));
    }

    #[test]
    fn test_four_fold_powers() {
        let four = SeitzMatrix::new(four_fold_z(), Vector3::new(0, 0, 3));
        let mut power = SeitzMatrix::identity();
        for _ in 0..4 {
            power = four.compose(&power);
        }
        assert_eq!(power.rotation, Matrix3::identity());
        assert_eq!(power.translation, Vector3::new(0, 0, 12));
        assert!(power.is_identity());
        assert_eq!(four.rotation_order(), Some(4));
    }

    // ==================== Reduction ====================

    #[test]
    fn test_reduced_overflowing_translation() {
        let a = SeitzMatrix::from_translation(Vector3::new(9, 10, 11));
        let b = SeitzMatrix::from_translation(Vector3::new(9, 10, 11));
        let sum = a.compose(&b);
        assert_eq!(sum.translation, Vector3::new(18, 20, 22));
        assert_eq!(sum.reduced().translation, Vector3::new(6, 8, 10));
    }

    #[test]
    fn test_reduced_negative_translation() {
        let inversion = SeitzMatrix::new(-Matrix3::<i8>::identity(), Vector3::zeros());
        let shift = SeitzMatrix::from_translation(Vector3::new(3, 6, 13));
        let product = inversion.compose(&shift);
        assert_eq!(product.translation, Vector3::new(-3, -6, -13));

        let reduced = product.reduced();
        assert_eq!(reduced.translation, Vector3::new(9, 6, 11));
        for t in reduced.translation.iter() {
            assert!((0..12).contains(t));
        }
    }

    // ==================== Origin shift ====================

    #[test]
    fn test_conjugated_by_origin() {
        // t' = t + v - R v
        let screw = SeitzMatrix::new(two_fold_z(), Vector3::new(0, 0, 6));
        let shifted = screw.conjugated_by_origin(&Vector3::new(1, 2, 3));
        assert_eq!(shifted.rotation, two_fold_z());
        assert_eq!(shifted.translation, Vector3::new(2, 4, 6));

        // The shifted operation fixes the new origin (up to its own screw part)
        let origin = Vector3::new(1.0 / 12.0, 2.0 / 12.0, 0.0);
        let image = shifted.apply(origin);
        assert!((image - origin).xy().norm() < 1e-12);
    }

    #[test]
    fn test_conjugation_with_zero_vector_is_noop() {
        let op = SeitzMatrix::new(four_fold_z(), Vector3::new(0, 6, 3));
        assert_eq!(op.conjugated_by_origin(&Vector3::zeros()), op);
    }

    // ==================== Classification ====================

    #[test]
    fn test_inverted_is_improper() {
        let op = SeitzMatrix::new(two_fold_z(), Vector3::zeros()).inverted();
        assert!(op.is_improper());
        assert_eq!(op.determinant(), -1);
        assert_eq!(op.rotation, Matrix3::new(1, 0, 0, 0, 1, 0, 0, 0, -1));
        assert_eq!(op.rotation_order(), Some(2));
    }

    #[test]
    fn test_apply_fractional() {
        let op = SeitzMatrix::new(two_fold_z(), Vector3::new(6, 0, 3));
        let p = op.apply(Vector3::new(0.1, 0.2, 0.3));
        assert!((p - Vector3::new(0.4, -0.2, 0.55)).norm() < 1e-12);
    }
}
