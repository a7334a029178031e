use std::fmt::Write as _;

use nalgebra::Vector3;
use serde::Serialize;

use crate::hall::axis_resolution::{resolve_axis, AxisType};
use crate::hall::hall_errors::HallError;
use crate::hall::hall_tables::HallTables;
use crate::hall::rotation_table::RotationCode;
use crate::hall::translation_table::TranslationSum;
use crate::symmetries::group_closure::Generator;
use crate::symmetries::symmetry_operations::SeitzMatrix;

/// Where a term sits in the symbol; the implicit axis rules depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TermContext {
    /// Zero-based position among all terms, lattice extension included
    pub index: usize,
    /// Order of the previous term, 0 before the first term
    pub previous_order: u8,
    /// Axis of the previous term
    pub previous_axis: Option<AxisType>,
}

impl TermContext {
    pub fn first() -> Self {
        Self::default()
    }

    /// Context for the term that follows `term`.
    pub fn after(&self, term: &RotationTerm) -> Self {
        Self {
            index: self.index + 1,
            previous_order: term.order,
            previous_axis: Some(term.axis),
        }
    }
}

/// One decoded Hall generator term such as `-4bd` or `2x"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RotationTerm {
    /// The term as written
    pub input_code: String,
    pub order: u8,
    pub axis: AxisType,
    pub diagonal_reference: Option<AxisType>,
    pub improper: bool,
    /// Every character after the axis designator, recognized or not
    pub translation_codes: Vec<char>,
    /// Key used for the rotation table
    pub lookup: RotationCode,
    pub translation: TranslationSum,
    /// Term with its axis spelled out and unrecognized translation codes dropped
    pub primitive_code: String,
    /// The assembled operation, origin shift applied
    pub seitz: SeitzMatrix,
}

impl RotationTerm {
    /// Decodes `code` at position `context` and assembles its Seitz matrix.
    ///
    /// `origin` is the symbol's origin shift in twelfths, if it has one; the operation
    /// is then conjugated so its symmetry element passes through that point.
    pub fn build(
        code: &str,
        context: &TermContext,
        origin: Option<&Vector3<i32>>,
        tables: &HallTables,
    ) -> Result<Self, HallError> {
        let chars: Vec<char> = code.chars().collect();
        let (improper, body) = match chars.split_first() {
            Some(('-', rest)) => (true, rest),
            _ => (false, chars.as_slice()),
        };

        let order = body
            .first()
            .and_then(|c| c.to_digit(10))
            .filter(|d| (1..=6).contains(d))
            .map(|d| d as u8)
            .ok_or_else(|| HallError::InvalidRotationOrder(code.to_string()))?;

        let after_order = &body[1..];
        let designator = resolve_axis(
            after_order,
            context.index,
            order,
            context.previous_order,
            context.previous_axis,
        );

        let lookup = RotationCode::new(order, designator.diagonal_reference, designator.axis);
        let rotation =
            tables
                .rotations
                .lookup(&lookup)
                .ok_or_else(|| HallError::RotationNotFound {
                    term: code.to_string(),
                    lookup: lookup.to_string(),
                })?;

        let translation_codes = after_order[designator.consumed..].to_vec();
        let translation = tables.translations.accumulate(&translation_codes, order);

        let mut shift = translation.vector_shift;
        if let Some(axis) = designator.axis.crystal_axis() {
            shift[axis.component()] += translation.rotation_shift;
        }

        let mut seitz = SeitzMatrix::new(rotation.matrix_for(improper), shift);
        if let Some(origin) = origin {
            seitz = seitz.conjugated_by_origin(origin);
        }

        let primitive_code = primitive_code(improper, &lookup, &translation_codes, tables);

        Ok(Self {
            input_code: code.to_string(),
            order,
            axis: designator.axis,
            diagonal_reference: designator.diagonal_reference,
            improper,
            translation_codes,
            lookup,
            translation,
            primitive_code,
            seitz,
        })
    }

    /// The term as input to group closure.
    pub fn generator(&self) -> Generator {
        Generator::new(usize::from(self.order), self.seitz)
    }

    /// Human-readable description: codes, resolved axis, translations and matrix.
    pub fn dump_info(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{}\t{}\tlookup {}\taxis {}{}",
            self.input_code,
            self.primitive_code,
            self.lookup,
            self.axis,
            self.diagonal_reference
                .map(|r| format!(" (reference {})", r))
                .unwrap_or_default()
        );
        let v = self.translation.vector_shift;
        let _ = writeln!(
            out,
            "translation: screw {}/12, vector ({} {} {})/12",
            self.translation.rotation_shift, v.x, v.y, v.z
        );
        out.push_str(&self.seitz.to_string());
        out
    }
}

fn primitive_code(
    improper: bool,
    lookup: &RotationCode,
    translation_codes: &[char],
    tables: &HallTables,
) -> String {
    let mut code = String::new();
    if improper {
        code.push('-');
    }
    code.push_str(&lookup.order.to_string());
    match lookup.diagonal_reference {
        Some(reference) => code.push(reference.symbol()),
        // a bare quote would pick up the previous axis on re-parsing; 2z' is the same matrix as 2'
        None if lookup.axis.is_face_diagonal() => code.push('z'),
        None => {}
    }
    if lookup.axis != AxisType::None {
        code.push(lookup.axis.symbol());
    }
    for &c in translation_codes {
        if tables.translations.lookup(c, lookup.order).is_some() {
            code.push(c);
        }
    }
    code
}
