use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// One translation code of the Hall notation.
///
/// Screw codes (digits) carry a shift along the rotation axis and only apply to
/// rotations of `rotation_order`. Letter codes carry a fixed vector and apply to any
/// rotation (`rotation_order == 0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HallTranslation {
    pub code: char,
    pub rotation_order: u8,
    /// Shift along the rotation axis, in twelfths
    pub rotation_shift: i32,
    /// Shift vector, in twelfths
    pub vector_shift: Vector3<i32>,
}

impl HallTranslation {
    fn vector(code: char, x: i32, y: i32, z: i32) -> Self {
        Self {
            code,
            rotation_order: 0,
            rotation_shift: 0,
            vector_shift: Vector3::new(x, y, z),
        }
    }

    fn screw(code: char, rotation_order: u8, rotation_shift: i32) -> Self {
        Self {
            code,
            rotation_order,
            rotation_shift,
            vector_shift: Vector3::zeros(),
        }
    }

    pub fn is_screw(&self) -> bool {
        self.rotation_order != 0
    }

    pub fn applies_to(&self, order: u8) -> bool {
        self.rotation_order == 0 || self.rotation_order == order
    }
}

/// Sum of the translation codes on one term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TranslationSum {
    pub rotation_shift: i32,
    pub vector_shift: Vector3<i32>,
}

impl TranslationSum {
    pub fn add(&mut self, translation: &HallTranslation) {
        self.rotation_shift += translation.rotation_shift;
        self.vector_shift += translation.vector_shift;
    }
}

/// Table of Hall translation codes, in twelfths.
#[derive(Debug, Clone)]
pub struct TranslationTable {
    entries: Vec<HallTranslation>,
}

impl TranslationTable {
    pub fn standard() -> Self {
        let entries = vec![
            HallTranslation::vector('a', 6, 0, 0),
            HallTranslation::vector('b', 0, 6, 0),
            HallTranslation::vector('c', 0, 0, 6),
            HallTranslation::vector('n', 6, 6, 6),
            HallTranslation::vector('u', 3, 0, 0),
            HallTranslation::vector('v', 0, 3, 0),
            HallTranslation::vector('w', 0, 0, 3),
            HallTranslation::vector('d', 3, 3, 3),
            HallTranslation::screw('1', 2, 6),
            HallTranslation::screw('1', 3, 4),
            HallTranslation::screw('2', 3, 8),
            HallTranslation::screw('1', 4, 3),
            HallTranslation::screw('2', 4, 6),
            HallTranslation::screw('3', 4, 9),
            HallTranslation::screw('1', 6, 2),
            HallTranslation::screw('2', 6, 4),
            HallTranslation::screw('3', 6, 6),
            HallTranslation::screw('4', 6, 8),
            HallTranslation::screw('5', 6, 10),
            // rhombohedral centering in the obverse (r) and the two alternative settings
            HallTranslation::vector('r', 4, 8, 8),
            HallTranslation::vector('s', 8, 8, 4),
            HallTranslation::vector('t', 8, 4, 8),
        ];
        Self { entries }
    }

    /// The translation for `code` on a rotation of `order`, if any.
    ///
    /// A screw digit that does not fit the order finds nothing; callers skip it.
    pub fn lookup(&self, code: char, order: u8) -> Option<&HallTranslation> {
        self.entries
            .iter()
            .find(|entry| entry.code == code && entry.applies_to(order))
    }

    /// Sums every recognized code in `codes`. Unrecognized characters are ignored.
    pub fn accumulate(&self, codes: &[char], order: u8) -> TranslationSum {
        let mut sum = TranslationSum::default();
        for &code in codes {
            if let Some(translation) = self.lookup(code, order) {
                sum.add(translation);
            }
        }
        sum
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HallTranslation> {
        self.entries.iter()
    }
}
