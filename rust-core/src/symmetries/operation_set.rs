use std::collections::HashSet;

use log::debug;
use serde::Serialize;

use crate::interfaces::OperationReceiver;
use crate::symmetries::symmetry_operations::SeitzMatrix;

/// Ordered, duplicate-free list of Seitz operations.
///
/// Equality is exact on rotation and translation, so candidates must already be
/// reduced to [0, 12) for lattice-equivalent operations to collapse.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OperationList {
    operations: Vec<SeitzMatrix>,
    #[serde(skip)]
    seen: HashSet<SeitzMatrix>,
}

impl OperationList {
    /// Creates an empty list. Group generation needs at least the identity to start from.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the usual starting set {identity}.
    pub fn with_identity() -> Self {
        let mut list = Self::new();
        list.push(SeitzMatrix::identity());
        list
    }

    /// Collects `operations`, silently dropping duplicates.
    pub fn from_operations(operations: impl IntoIterator<Item = SeitzMatrix>) -> Self {
        let mut list = Self::new();
        for op in operations {
            list.push(op);
        }
        list
    }

    /// Appends `op` if not already present. Returns `true` if it was added.
    pub fn push(&mut self, op: SeitzMatrix) -> bool {
        if !self.seen.insert(op) {
            return false;
        }
        self.operations.push(op);
        true
    }

    pub fn contains(&self, op: &SeitzMatrix) -> bool {
        self.seen.contains(op)
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn operations(&self) -> &[SeitzMatrix] {
        &self.operations
    }

    pub fn iter(&self) -> impl Iterator<Item = &SeitzMatrix> {
        self.operations.iter()
    }

    pub fn into_vec(self) -> Vec<SeitzMatrix> {
        self.operations
    }
}

impl OperationReceiver for OperationList {
    fn operation_count(&self) -> usize {
        self.operations.len()
    }

    fn operation(&self, index: usize) -> SeitzMatrix {
        self.operations[index]
    }

    fn add_operation(&mut self, candidate: SeitzMatrix) -> bool {
        let added = self.push(candidate);
        if added {
            debug!("added operation #{}\n{}", self.operations.len(), candidate);
        }
        added
    }
}
