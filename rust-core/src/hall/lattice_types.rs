use std::fmt;

use serde::{Deserialize, Serialize};

/// Lattice (centering) letters of the Hall notation.
///
/// The declaration order is the SHELX `LATT` numbering: P=1, I=2, R=3, F=4, A=5,
/// B=6, C=7, S=8, T=9.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum LatticeType {
    P,
    I,
    R,
    F,
    A,
    B,
    C,
    S,
    T,
}

const ALL_LATTICES: [LatticeType; 9] = [
    LatticeType::P,
    LatticeType::I,
    LatticeType::R,
    LatticeType::F,
    LatticeType::A,
    LatticeType::B,
    LatticeType::C,
    LatticeType::S,
    LatticeType::T,
];

impl LatticeType {
    /// Case-insensitive lookup of a lattice letter.
    pub fn from_code(code: char) -> Option<Self> {
        let upper = code.to_ascii_uppercase();
        ALL_LATTICES.iter().copied().find(|l| l.code() == upper)
    }

    pub fn code(&self) -> char {
        match self {
            LatticeType::P => 'P',
            LatticeType::I => 'I',
            LatticeType::R => 'R',
            LatticeType::F => 'F',
            LatticeType::A => 'A',
            LatticeType::B => 'B',
            LatticeType::C => 'C',
            LatticeType::S => 'S',
            LatticeType::T => 'T',
        }
    }

    pub fn designation(&self) -> &'static str {
        match self {
            LatticeType::P => "primitive",
            LatticeType::I => "body-centered",
            LatticeType::R => "rhombohedral",
            LatticeType::F => "face-centered",
            LatticeType::A => "A-centered",
            LatticeType::B => "B-centered",
            LatticeType::C => "C-centered",
            LatticeType::S => "rhombohedral(S)",
            LatticeType::T => "rhombohedral(T)",
        }
    }

    /// Implicit order-1 centering terms appended to the rotation terms.
    pub fn centering_terms(&self) -> &'static [&'static str] {
        match self {
            LatticeType::P => &[],
            LatticeType::I => &["1n"],
            LatticeType::R => &["1r", "1r"],
            LatticeType::F => &["1ab", "1bc", "1ac"],
            LatticeType::A => &["1bc"],
            LatticeType::B => &["1ac"],
            LatticeType::C => &["1ab"],
            LatticeType::S => &["1s", "1s"],
            LatticeType::T => &["1t", "1t"],
        }
    }

    /// The full lattice extension: centering terms, then `-1` for a centrosymmetric symbol.
    pub fn extension(&self, centrosymmetric: bool) -> Vec<&'static str> {
        let mut terms = self.centering_terms().to_vec();
        if centrosymmetric {
            terms.push("-1");
        }
        terms
    }

    /// Position in the SHELX `LATT` numbering, starting at 1.
    pub fn latt_index(&self) -> i32 {
        ALL_LATTICES
            .iter()
            .position(|l| l == self)
            .map_or(0, |i| i as i32 + 1)
    }

    /// Decodes a SHELX `LATT` value: the magnitude picks the lattice, a positive sign
    /// means centrosymmetric. Returns `None` for 0 or out-of-range values.
    pub fn from_shelx_latt(latt: i32) -> Option<(LatticeType, bool)> {
        let index = usize::try_from(latt.unsigned_abs()).ok()?;
        let lattice = ALL_LATTICES.get(index.checked_sub(1)?)?;
        Some((*lattice, latt > 0))
    }

    /// Hall symbol with only the lattice part of a SHELX `LATT` value, e.g. `-I 1` for 2.
    pub fn hall_equivalent(latt: i32) -> Option<String> {
        let (lattice, centrosymmetric) = Self::from_shelx_latt(latt)?;
        Some(format!(
            "{}{} 1",
            if centrosymmetric { "-" } else { "" },
            lattice.code()
        ))
    }
}

impl fmt::Display for LatticeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
