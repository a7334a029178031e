#[cfg(test)]
mod _tests_rotation_term {
    use super::super::axis_resolution::AxisType;
    use super::super::hall_errors::HallError;
    use super::super::hall_tables::HallTables;
    use super::super::rotation_term::{RotationTerm, TermContext};
    use nalgebra::{Matrix3, Vector3};

    fn build(code: &str) -> Result<RotationTerm, HallError> {
        RotationTerm::build(code, &TermContext::first(), None, HallTables::shared())
    }

    fn context(index: usize, previous_order: u8, previous_axis: AxisType) -> TermContext {
        TermContext {
            index,
            previous_order,
            previous_axis: Some(previous_axis),
        }
    }

    // ==================== Matrices ====================

    #[test]
    fn test_plain_two_fold() {
        let term = build("2").unwrap();
        assert_eq!(term.order, 2);
        assert_eq!(term.axis, AxisType::Z);
        assert!(!term.improper);
        assert_eq!(term.seitz.rotation, Matrix3::new(-1, 0, 0, 0, -1, 0, 0, 0, 1));
        assert_eq!(term.seitz.translation, Vector3::zeros());
        assert_eq!(term.generator().order, 2);
    }

    #[test]
    fn test_screw_goes_along_axis() {
        assert_eq!(build("61").unwrap().seitz.translation, Vector3::new(0, 0, 2));
        assert_eq!(build("4x3").unwrap().seitz.translation, Vector3::new(9, 0, 0));
        assert_eq!(build("2y1").unwrap().seitz.translation, Vector3::new(0, 6, 0));
    }

    #[test]
    fn test_improper_with_vector_codes() {
        let term = build("-4bd").unwrap();
        assert!(term.improper);
        assert!(term.seitz.is_improper());
        assert_eq!(term.seitz.rotation, Matrix3::new(0, 1, 0, -1, 0, 0, 0, 0, -1));
        assert_eq!(term.translation_codes, vec!['b', 'd']);
        assert_eq!(term.seitz.translation, Vector3::new(3, 9, 3));
    }

    #[test]
    fn test_screw_on_diagonal_axis_is_dropped() {
        let term = RotationTerm::build("3*1", &context(2, 2, AxisType::X), None, HallTables::shared())
            .unwrap();
        assert_eq!(term.translation.rotation_shift, 4);
        assert_eq!(term.seitz.translation, Vector3::zeros());
    }

    #[test]
    fn test_unknown_translation_code_ignored() {
        let term = build("2q").unwrap();
        assert_eq!(term.seitz.translation, Vector3::zeros());
        assert_eq!(term.translation_codes, vec!['q']);
        assert_eq!(term.primitive_code, "2z");
    }

    #[test]
    fn test_origin_conjugation() {
        let origin = Vector3::new(1, 2, 3);
        let term = RotationTerm::build(
            "21",
            &TermContext::first(),
            Some(&origin),
            HallTables::shared(),
        )
        .unwrap();
        // t + v - R v with t = (0, 0, 6)
        assert_eq!(term.seitz.translation, Vector3::new(2, 4, 6));
    }

    // ==================== Context ====================

    #[test]
    fn test_bare_quote_takes_previous_axis() {
        let term = RotationTerm::build("2'", &context(1, 2, AxisType::X), None, HallTables::shared())
            .unwrap();
        assert_eq!(term.diagonal_reference, Some(AxisType::X));
        assert_eq!(term.lookup.to_string(), "2x'");
        assert_eq!(term.seitz.rotation, Matrix3::new(-1, 0, 0, 0, 0, -1, 0, -1, 0));
    }

    #[test]
    fn test_context_after() {
        let first = build("4").unwrap();
        let next = TermContext::first().after(&first);
        assert_eq!(next.index, 1);
        assert_eq!(next.previous_order, 4);
        assert_eq!(next.previous_axis, Some(AxisType::Z));

        let second = RotationTerm::build("2", &next, None, HallTables::shared()).unwrap();
        assert_eq!(second.axis, AxisType::X);
    }

    #[test]
    fn test_primitive_code_spells_out_axes() {
        assert_eq!(build("-4bd").unwrap().primitive_code, "-4zbd");
        assert_eq!(build("1").unwrap().primitive_code, "1");
        let diagonal =
            RotationTerm::build("2", &context(1, 3, AxisType::Z), None, HallTables::shared())
                .unwrap();
        assert_eq!(diagonal.primitive_code, "2z'");
    }

    // ==================== Errors ====================

    #[test]
    fn test_invalid_order() {
        assert_eq!(build("7"), Err(HallError::InvalidRotationOrder("7".into())));
        assert_eq!(build("x"), Err(HallError::InvalidRotationOrder("x".into())));
        assert_eq!(build("-"), Err(HallError::InvalidRotationOrder("-".into())));
        assert!(matches!(build("0"), Err(HallError::InvalidRotationOrder(_))));
    }

    #[test]
    fn test_rotation_not_found() {
        assert_eq!(
            build("5"),
            Err(HallError::RotationNotFound {
                term: "5".into(),
                lookup: "5z".into(),
            })
        );
        assert!(matches!(build("3'"), Err(HallError::RotationNotFound { .. })));
    }

    #[test]
    fn test_dump_info_mentions_codes() {
        let info = build("61").unwrap().dump_info();
        assert!(info.contains("61"));
        assert!(info.contains("6z1"));
        assert!(info.contains("screw 2/12"));
    }
}
