use std::fmt;

use serde::{Deserialize, Serialize};

use crate::interfaces::CrystalAxis;

/// Axis designator of a Hall rotation term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisType {
    /// `x`, along a
    X,
    /// `y`, along b
    Y,
    /// `z`, along c
    Z,
    /// `'`, face diagonal (a-b for a z reference)
    Prime,
    /// `"`, face diagonal (a+b for a z reference)
    DoublePrime,
    /// `*`, body diagonal a+b+c
    Star,
    /// `_`, no axis; only for order 1
    None,
}

impl AxisType {
    pub fn symbol(&self) -> char {
        match self {
            AxisType::X => 'x',
            AxisType::Y => 'y',
            AxisType::Z => 'z',
            AxisType::Prime => '\'',
            AxisType::DoublePrime => '"',
            AxisType::Star => '*',
            AxisType::None => '_',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'x' => Some(AxisType::X),
            'y' => Some(AxisType::Y),
            'z' => Some(AxisType::Z),
            '\'' => Some(AxisType::Prime),
            '"' => Some(AxisType::DoublePrime),
            '*' => Some(AxisType::Star),
            '_' => Some(AxisType::None),
            _ => None,
        }
    }

    /// The cell axis this designator runs along, if it is one of x, y, z.
    /// Screw shifts are only added for these.
    pub fn crystal_axis(&self) -> Option<CrystalAxis> {
        match self {
            AxisType::X => Some(CrystalAxis::X),
            AxisType::Y => Some(CrystalAxis::Y),
            AxisType::Z => Some(CrystalAxis::Z),
            _ => None,
        }
    }

    pub fn is_principal(&self) -> bool {
        self.crystal_axis().is_some()
    }

    pub fn is_face_diagonal(&self) -> bool {
        matches!(self, AxisType::Prime | AxisType::DoublePrime)
    }
}

impl fmt::Display for AxisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Axis of a term that gives none explicitly.
///
/// Rules, first match wins:
/// - order 1 has no axis (`_`)
/// - the first term is along `z`
/// - the third term is the body diagonal `*`
/// - after a 2- or 4-fold the axis is `x`
/// - otherwise the face diagonal `'`
pub fn resolve_default_axis(term_index: usize, order: u8, previous_order: u8) -> AxisType {
    match (order, term_index, previous_order) {
        (1, _, _) => AxisType::None,
        (_, 0, _) => AxisType::Z,
        (_, 2, _) => AxisType::Star,
        (_, _, 2 | 4) => AxisType::X,
        _ => AxisType::Prime,
    }
}

/// Axis designator as written in a term, after the order digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisDesignator {
    pub axis: AxisType,
    pub diagonal_reference: Option<AxisType>,
    /// Characters consumed from the text following the order digit
    pub consumed: usize,
    /// True if the axis was spelled out rather than defaulted
    pub explicit: bool,
}

/// Reads the axis designator from `rest` (the term text after its order digit).
///
/// `x`/`y`/`z` may be followed by a quote, in which case the letter becomes the
/// diagonal reference. A leading quote may be followed by its reference letter,
/// otherwise the reference is the previous term's axis. Anything else falls back
/// to [`resolve_default_axis`].
pub fn resolve_axis(
    rest: &[char],
    term_index: usize,
    order: u8,
    previous_order: u8,
    previous_axis: Option<AxisType>,
) -> AxisDesignator {
    let first = rest.first().copied();
    let second = rest.get(1).copied();

    match first {
        Some(c @ ('x' | 'y' | 'z')) => {
            let letter = AxisType::from_symbol(c);
            match second {
                Some(q @ ('\'' | '"')) => AxisDesignator {
                    axis: AxisType::from_symbol(q).unwrap_or(AxisType::Prime),
                    diagonal_reference: letter,
                    consumed: 2,
                    explicit: true,
                },
                _ => AxisDesignator {
                    axis: letter.unwrap_or(AxisType::Z),
                    diagonal_reference: None,
                    consumed: 1,
                    explicit: true,
                },
            }
        }
        Some('*') => AxisDesignator {
            axis: AxisType::Star,
            diagonal_reference: None,
            consumed: 1,
            explicit: true,
        },
        Some(q @ ('\'' | '"')) => {
            let axis = AxisType::from_symbol(q).unwrap_or(AxisType::Prime);
            match second {
                Some(c @ ('x' | 'y' | 'z')) => AxisDesignator {
                    axis,
                    diagonal_reference: AxisType::from_symbol(c),
                    consumed: 2,
                    explicit: true,
                },
                _ => AxisDesignator {
                    axis,
                    diagonal_reference: previous_axis,
                    consumed: 1,
                    explicit: true,
                },
            }
        }
        _ => AxisDesignator {
            axis: resolve_default_axis(term_index, order, previous_order),
            diagonal_reference: None,
            consumed: 0,
            explicit: false,
        },
    }
}
