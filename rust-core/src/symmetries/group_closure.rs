use log::debug;
use serde::{Deserialize, Serialize};

use crate::interfaces::OperationReceiver;
use crate::symmetries::symmetry_operations::SeitzMatrix;

/// A generating operation together with its order (the number of powers to apply).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generator {
    pub order: usize,
    pub seitz: SeitzMatrix,
}

impl Generator {
    pub fn new(order: usize, seitz: SeitzMatrix) -> Self {
        Self { order, seitz }
    }
}

/// Position of the closure: which generator, and how many of its powers have been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosureState {
    pub generator_index: usize,
    pub power_index: usize,
}

/// Expands an ordered list of generators into a group, one power step at a time.
///
/// Each step forms the next power g^j of the current generator and multiplies it onto
/// every operation the receiver held when the step began; operations added during the
/// step are only picked up by later steps. Reaching the full group requires the
/// generators to form a valid Hall generating set, which is not checked here.
#[derive(Debug, Clone)]
pub struct GroupClosure<'a> {
    generators: &'a [Generator],
    state: ClosureState,
    power: SeitzMatrix,
}

impl<'a> GroupClosure<'a> {
    pub fn new(generators: &'a [Generator]) -> Self {
        Self {
            generators,
            state: ClosureState {
                generator_index: 0,
                power_index: 0,
            },
            power: SeitzMatrix::identity(),
        }
    }

    pub fn state(&self) -> ClosureState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.generator_index >= self.generators.len()
    }

    /// Applies the next generator power. Returns the number of operations the receiver
    /// accepted, or `None` once every generator is exhausted.
    pub fn step<R: OperationReceiver + ?Sized>(&mut self, receiver: &mut R) -> Option<usize> {
        let generator = *self.generators.get(self.state.generator_index)?;

        self.power = generator.seitz.compose(&self.power);
        self.state.power_index += 1;

        let snapshot = receiver.operation_count();
        let mut added = 0;
        for k in 0..snapshot {
            let candidate = self.power.compose(&receiver.operation(k)).reduced();
            if receiver.add_operation(candidate) {
                added += 1;
            }
        }

        debug!(
            "generator {} power {}/{}: {} new of {} checked",
            self.state.generator_index + 1,
            self.state.power_index,
            generator.order,
            added,
            snapshot
        );

        if self.state.power_index >= generator.order {
            self.state.generator_index += 1;
            self.state.power_index = 0;
            self.power = SeitzMatrix::identity();
        }
        Some(added)
    }

    /// Runs every remaining step. Returns the total number of operations added.
    pub fn run<R: OperationReceiver + ?Sized>(&mut self, receiver: &mut R) -> usize {
        let mut total = 0;
        while let Some(added) = self.step(receiver) {
            total += added;
        }
        total
    }
}

/// Closes `receiver` under `generators`. Returns the number of operations added.
pub fn generate_operations<R: OperationReceiver + ?Sized>(
    generators: &[Generator],
    receiver: &mut R,
) -> usize {
    GroupClosure::new(generators).run(receiver)
}
