#[cfg(test)]
mod _tests_group_closure {
    use super::super::group_closure::{generate_operations, ClosureState, Generator, GroupClosure};
    use super::super::operation_set::OperationList;
    use super::super::symmetry_operations::SeitzMatrix;
    use crate::interfaces::OperationReceiver;
    use nalgebra::{Matrix3, Vector3};

    fn two_fold_z(screw: i32) -> Generator {
        Generator::new(
            2,
            SeitzMatrix::new(Matrix3::new(-1, 0, 0, 0, -1, 0, 0, 0, 1), Vector3::new(0, 0, screw)),
        )
    }

    fn two_fold_x() -> Generator {
        Generator::new(
            2,
            SeitzMatrix::new(Matrix3::new(1, 0, 0, 0, -1, 0, 0, 0, -1), Vector3::zeros()),
        )
    }

    fn three_fold_body_diagonal() -> Generator {
        Generator::new(
            3,
            SeitzMatrix::new(Matrix3::new(0, 0, 1, 1, 0, 0, 0, 1, 0), Vector3::zeros()),
        )
    }

    fn inversion() -> Generator {
        Generator::new(
            1,
            SeitzMatrix::new(-Matrix3::<i8>::identity(), Vector3::zeros()),
        )
    }

    /// Receiver that records every submission and accepts nothing.
    #[derive(Default)]
    struct RecordingReceiver {
        held: Vec<SeitzMatrix>,
        submitted: Vec<SeitzMatrix>,
    }

    impl OperationReceiver for RecordingReceiver {
        fn operation_count(&self) -> usize {
            self.held.len()
        }

        fn operation(&self, index: usize) -> SeitzMatrix {
            self.held[index]
        }

        fn add_operation(&mut self, candidate: SeitzMatrix) -> bool {
            self.submitted.push(candidate);
            false
        }
    }

    // ==================== OperationList ====================

    #[test]
    fn test_operation_list_rejects_duplicates() {
        let mut list = OperationList::with_identity();
        assert_eq!(list.len(), 1);
        assert!(!list.add_operation(SeitzMatrix::identity()));
        assert_eq!(list.operation_count(), 1);

        let op = two_fold_z(6).seitz;
        assert!(list.add_operation(op));
        assert!(!list.add_operation(op));
        assert_eq!(list.operation_count(), 2);
        assert!(list.contains(&op));
        assert_eq!(list.operation(1), op);
    }

    #[test]
    fn test_operation_list_from_operations() {
        let ops = vec![
            SeitzMatrix::identity(),
            two_fold_z(0).seitz,
            SeitzMatrix::identity(),
        ];
        let list = OperationList::from_operations(ops);
        assert_eq!(list.len(), 2);
        assert_eq!(list.into_vec()[1], two_fold_z(0).seitz);
    }

    // ==================== State machine ====================

    #[test]
    fn test_state_transitions() {
        let generators = [two_fold_z(0), three_fold_body_diagonal()];
        let mut list = OperationList::with_identity();
        let mut closure = GroupClosure::new(&generators);

        assert_eq!(
            closure.state(),
            ClosureState {
                generator_index: 0,
                power_index: 0
            }
        );

        assert_eq!(closure.step(&mut list), Some(1));
        assert_eq!(
            closure.state(),
            ClosureState {
                generator_index: 0,
                power_index: 1
            }
        );

        // Second power of a two-fold is the identity: nothing new
        assert_eq!(closure.step(&mut list), Some(0));
        assert_eq!(closure.state().generator_index, 1);
        assert_eq!(closure.state().power_index, 0);

        assert_eq!(closure.step(&mut list), Some(2));
        assert_eq!(closure.step(&mut list), Some(2));
        assert_eq!(closure.step(&mut list), Some(0));
        assert!(closure.is_finished());
        assert_eq!(closure.step(&mut list), None);
        assert_eq!(list.len(), 6);
    }

    #[test]
    fn test_snapshot_excludes_operations_added_during_step() {
        let generators = [two_fold_z(0)];
        let mut receiver = RecordingReceiver {
            held: vec![SeitzMatrix::identity(), SeitzMatrix::from_translation(Vector3::new(6, 6, 0))],
            submitted: Vec::new(),
        };
        let total = generate_operations(&generators, &mut receiver);
        assert_eq!(total, 0);
        // 2 powers x 2 held operations
        assert_eq!(receiver.submitted.len(), 4);
        assert_eq!(receiver.submitted[0], two_fold_z(0).seitz);
        assert_eq!(
            receiver.submitted[1].translation,
            Vector3::new(6, 6, 0),
            "-x+1/2 maps to 6/12 after reduction"
        );
        assert!(receiver.submitted[2].is_identity());
    }

    // ==================== Closure results ====================

    #[test]
    fn test_centrosymmetric_two_fold() {
        let generators = [two_fold_z(0), inversion()];
        let mut list = OperationList::with_identity();
        let added = generate_operations(&generators, &mut list);
        assert_eq!(added, 3);
        assert_eq!(list.len(), 4);
        assert!(list.iter().any(|op| op.rotation == Matrix3::new(1, 0, 0, 0, 1, 0, 0, 0, -1)));
    }

    #[test]
    fn test_screw_translations_stay_reduced() {
        let six_one = Generator::new(
            6,
            SeitzMatrix::new(Matrix3::new(1, -1, 0, 1, 0, 0, 0, 0, 1), Vector3::new(0, 0, 2)),
        );
        let mut list = OperationList::with_identity();
        generate_operations(&[six_one], &mut list);
        assert_eq!(list.len(), 6);
        for op in list.iter() {
            for t in op.translation.iter() {
                assert!((0..12).contains(t), "translation {} out of range", t);
            }
        }
        let z: Vec<i32> = list.iter().map(|op| op.translation.z).collect();
        assert_eq!(z, vec![0, 2, 4, 6, 8, 10]);
    }

    #[test]
    fn test_rerun_is_idempotent() {
        // m-3: 2z, 2x, 3* and the inversion
        let generators = [two_fold_z(0), two_fold_x(), three_fold_body_diagonal(), inversion()];
        let mut list = OperationList::with_identity();
        generate_operations(&generators, &mut list);
        let count = list.len();
        assert_eq!(count, 24);
        assert_eq!(generate_operations(&generators, &mut list), 0);
        assert_eq!(list.len(), count);
    }

    #[test]
    fn test_empty_generator_list() {
        let mut list = OperationList::with_identity();
        let mut closure = GroupClosure::new(&[]);
        assert!(closure.is_finished());
        assert_eq!(closure.run(&mut list), 0);
        assert_eq!(list.len(), 1);
    }
}
