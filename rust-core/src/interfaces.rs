// Definitions that are used throughout all modules

use crate::symmetries::symmetry_operations::SeitzMatrix;

/// Receiver of generated symmetry operations.
///
/// The owner of the operation set (usually a space-group registry) implements this;
/// the closure generator only reads the current contents and asks for insertions.
/// Duplicate detection belongs to the implementor.
pub trait OperationReceiver {
    /// Number of operations currently held.
    fn operation_count(&self) -> usize;

    /// The `index`-th operation, translations in twelfths.
    fn operation(&self, index: usize) -> SeitzMatrix;

    /// Adds `candidate` unless an equal operation is already present.
    /// Returns `true` if the operation was new.
    fn add_operation(&mut self, candidate: SeitzMatrix) -> bool;
}

// Enumeration for the Cartesian-like crystal axes a, b, c
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrystalAxis {
    X,
    Y,
    Z,
}

impl CrystalAxis {
    /// Column of the translation vector that runs along this axis.
    pub fn component(&self) -> usize {
        match self {
            CrystalAxis::X => 0,
            CrystalAxis::Y => 1,
            CrystalAxis::Z => 2,
        }
    }
}
