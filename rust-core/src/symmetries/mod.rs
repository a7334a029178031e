// Symmetries module: Seitz operations, operation sets and group closure
// This module turns generator operations into full space-group operation lists

// ======================== MODULE DECLARATIONS ========================
pub mod group_closure;
pub mod operation_set;
pub mod symmetry_operations;

// Test modules
mod _tests_group_closure;
mod _tests_symmetry_operations;

// ======================== SEITZ OPERATIONS ========================
pub use symmetry_operations::SeitzMatrix; // struct - {R|t} with integer rotation and translation in twelfths
// SeitzMatrix impl methods:
//   new(rotation: Matrix3<i8>, translation: Vector3<i32>) -> Self  - creates operation from parts
//   identity() -> Self                                             - creates identity operation
//   from_translation(shift: Vector3<i32>) -> Self                  - pure translation in twelfths
//   from_matrix4(&Matrix4<i32>) -> Option<Self> / to_matrix4(&self) - 4x4 affine form, None if R overflows i8
//   compose(&self, other: &Self) -> Self                           - affine product self · other
//   reduced(&self) -> Self                                         - translations brought into [0, 12)
//   conjugated_by_origin(&self, origin: &Vector3<i32>) -> Self     - T(+v) · self · T(-v)
//   inverted(&self) -> Self                                        - negated rotation part
//   apply(&self, point: Vector3<f64>) -> Vector3<f64>              - applies to fractional coordinates
//   determinant / is_improper / rotation_order / is_identity       - classification helpers

// ======================== OPERATION SETS ========================
pub use operation_set::OperationList; // struct - ordered duplicate-free operation list, implements OperationReceiver
// OperationList impl methods:
//   new() -> Self / with_identity() -> Self                        - empty list or {identity}
//   from_operations(ops) -> Self                                   - collects, dropping duplicates
//   push(&mut self, op: SeitzMatrix) -> bool                       - appends if new
//   contains / len / is_empty / operations / iter / into_vec       - accessors

// ======================== GROUP CLOSURE ========================
pub use group_closure::{
    ClosureState,        // struct - (generator_index, power_index) of a running closure
    Generator,           // struct - generating operation plus its order
    GroupClosure,        // struct - step-wise closure over a receiver
    generate_operations, // fn(generators: &[Generator], receiver: &mut R) -> usize - runs the whole closure
};
