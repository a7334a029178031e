use std::fmt;

use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

use crate::hall::axis_resolution::AxisType;
use crate::hall::axis_resolution::AxisType::{DoublePrime as Dq, None as Na, Prime as Pq, Star, X, Y, Z};

/// Lookup key into the rotation table: order, optional diagonal reference, axis.
/// Displays as the Hall code, e.g. `2z`, `2x'`, `3*`, `1_`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RotationCode {
    pub order: u8,
    pub diagonal_reference: Option<AxisType>,
    pub axis: AxisType,
}

impl RotationCode {
    pub fn new(order: u8, diagonal_reference: Option<AxisType>, axis: AxisType) -> Self {
        Self {
            order,
            diagonal_reference,
            axis,
        }
    }
}

impl fmt::Display for RotationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.order)?;
        if let Some(reference) = self.diagonal_reference {
            write!(f, "{}", reference)?;
        }
        write!(f, "{}", self.axis)
    }
}

/// A point-group rotation and its negation (for rotoinversions).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HallRotation {
    pub code: RotationCode,
    pub matrix: Matrix3<i8>,
    pub improper: Matrix3<i8>,
}

impl HallRotation {
    fn new(code: RotationCode, rows: [[i8; 3]; 3]) -> Self {
        let matrix = Matrix3::from_fn(|r, c| rows[r][c]);
        Self {
            code,
            matrix,
            improper: -matrix,
        }
    }

    pub fn order(&self) -> u8 {
        self.code.order
    }

    /// The rotation block for a proper or improper term.
    pub fn matrix_for(&self, improper: bool) -> Matrix3<i8> {
        if improper {
            self.improper
        } else {
            self.matrix
        }
    }
}

// Rows of each rotation in the conventional (hexagonal for 3- and 6-folds) basis
#[rustfmt::skip]
const ROTATION_DATA: [(u8, Option<AxisType>, AxisType, [[i8; 3]; 3]); 22] = [
    (1, None,    Na,   [[ 1, 0, 0], [ 0, 1, 0], [ 0, 0, 1]]),
    (2, None,    X,    [[ 1, 0, 0], [ 0,-1, 0], [ 0, 0,-1]]),
    (2, None,    Y,    [[-1, 0, 0], [ 0, 1, 0], [ 0, 0,-1]]),
    (2, None,    Z,    [[-1, 0, 0], [ 0,-1, 0], [ 0, 0, 1]]),
    (2, None,    Pq,   [[ 0,-1, 0], [-1, 0, 0], [ 0, 0,-1]]),
    (2, None,    Dq,   [[ 0, 1, 0], [ 1, 0, 0], [ 0, 0,-1]]),
    (2, Some(X), Pq,   [[-1, 0, 0], [ 0, 0,-1], [ 0,-1, 0]]),
    (2, Some(X), Dq,   [[-1, 0, 0], [ 0, 0, 1], [ 0, 1, 0]]),
    (2, Some(Y), Pq,   [[ 0, 0,-1], [ 0,-1, 0], [-1, 0, 0]]),
    (2, Some(Y), Dq,   [[ 0, 0, 1], [ 0,-1, 0], [ 1, 0, 0]]),
    (2, Some(Z), Pq,   [[ 0,-1, 0], [-1, 0, 0], [ 0, 0,-1]]),
    (2, Some(Z), Dq,   [[ 0, 1, 0], [ 1, 0, 0], [ 0, 0,-1]]),
    (3, None,    X,    [[ 1, 0, 0], [ 0, 0,-1], [ 0, 1,-1]]),
    (3, None,    Y,    [[-1, 0, 1], [ 0, 1, 0], [-1, 0, 0]]),
    (3, None,    Z,    [[ 0,-1, 0], [ 1,-1, 0], [ 0, 0, 1]]),
    (3, None,    Star, [[ 0, 0, 1], [ 1, 0, 0], [ 0, 1, 0]]),
    (4, None,    X,    [[ 1, 0, 0], [ 0, 0,-1], [ 0, 1, 0]]),
    (4, None,    Y,    [[ 0, 0, 1], [ 0, 1, 0], [-1, 0, 0]]),
    (4, None,    Z,    [[ 0,-1, 0], [ 1, 0, 0], [ 0, 0, 1]]),
    (6, None,    X,    [[ 1, 0, 0], [ 0, 1,-1], [ 0, 1, 0]]),
    (6, None,    Y,    [[ 0, 0, 1], [ 0, 1, 0], [-1, 0, 1]]),
    (6, None,    Z,    [[ 1,-1, 0], [ 1, 0, 0], [ 0, 0, 1]]),
];

/// The closed set of rotations a Hall term can name.
#[derive(Debug, Clone)]
pub struct RotationTable {
    entries: Vec<HallRotation>,
}

impl RotationTable {
    /// The standard table of Hall rotations.
    pub fn standard() -> Self {
        let entries = ROTATION_DATA
            .iter()
            .map(|&(order, reference, axis, rows)| {
                HallRotation::new(RotationCode::new(order, reference, axis), rows)
            })
            .collect();
        Self { entries }
    }

    pub fn lookup(&self, code: &RotationCode) -> Option<&HallRotation> {
        self.entries.iter().find(|entry| entry.code == *code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HallRotation> {
        self.entries.iter()
    }
}
