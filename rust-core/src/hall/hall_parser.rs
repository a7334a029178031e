use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;

use log::{debug, error, warn};
use nalgebra::Vector3;
use serde::Serialize;

use crate::config::{MAX_ROTATION_TERMS, TWELFTHS};
use crate::hall::hall_errors::HallError;
use crate::hall::hall_tables::HallTables;
use crate::hall::lattice_types::LatticeType;
use crate::hall::rotation_term::{RotationTerm, TermContext};
use crate::interfaces::OperationReceiver;
use crate::symmetries::group_closure::{generate_operations, Generator};
use crate::symmetries::operation_set::OperationList;

/// A parsed Hall symbol: lattice, optional origin shift and the generator terms.
///
/// `terms` holds the explicit terms followed by the lattice extension (centering
/// translations, then `-1` when centrosymmetric).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HallSymbol {
    symbol: String,
    lattice: LatticeType,
    centrosymmetric: bool,
    origin_offset: Option<Vector3<i32>>,
    extension: Vec<String>,
    terms: Vec<RotationTerm>,
}

impl HallSymbol {
    /// Parses `text` with the shared standard tables.
    pub fn parse(text: &str) -> Result<Self, HallError> {
        Self::parse_with_tables(text, HallTables::shared())
    }

    /// Parses `text`, failing on the first problem.
    ///
    /// Use [`HallInfo`] to keep the terms decoded before a failure.
    pub fn parse_with_tables(text: &str, tables: &HallTables) -> Result<Self, HallError> {
        match parse_symbol(text, tables)? {
            (symbol, None) => Ok(symbol),
            (_, Some(err)) => Err(err),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn lattice(&self) -> LatticeType {
        self.lattice
    }

    pub fn is_centrosymmetric(&self) -> bool {
        self.centrosymmetric
    }

    /// Origin shift in twelfths, if the symbol had a parenthesized suffix.
    pub fn origin_offset(&self) -> Option<&Vector3<i32>> {
        self.origin_offset.as_ref()
    }

    /// Implicit terms the lattice contributed.
    pub fn extension(&self) -> &[String] {
        &self.extension
    }

    pub fn terms(&self) -> &[RotationTerm] {
        &self.terms
    }

    pub fn rotation_count(&self) -> usize {
        self.terms.len()
    }

    pub fn generators(&self) -> Vec<Generator> {
        self.terms.iter().map(RotationTerm::generator).collect()
    }

    /// Same group written on a primitive lattice with every axis spelled out,
    /// e.g. `P 2z 1n` for `I 2`.
    pub fn primitive_symbol(&self) -> String {
        let mut out = String::from("P");
        for term in &self.terms {
            out.push(' ');
            out.push_str(&term.primitive_code);
        }
        if let Some(v) = &self.origin_offset {
            let _ = write!(out, " ({} {} {})", v.x, v.y, v.z);
        }
        out
    }

    /// Closes `receiver` under this symbol's generators. Returns the number of
    /// operations added.
    ///
    /// The receiver must already hold its starting set, normally just the identity.
    pub fn generate_into<R: OperationReceiver + ?Sized>(&self, receiver: &mut R) -> usize {
        let added = generate_operations(&self.generators(), receiver);
        debug!(
            "{}: {} operations from {} generators",
            self.symbol,
            receiver.operation_count(),
            self.terms.len()
        );
        added
    }

    /// All operations of the group, identity first.
    pub fn operations(&self) -> OperationList {
        let mut list = OperationList::with_identity();
        self.generate_into(&mut list);
        list
    }

    /// Generates the group into `receiver` and compares the final count to `expected`.
    pub fn generate_checked<R: OperationReceiver + ?Sized>(
        &self,
        receiver: &mut R,
        expected: usize,
    ) -> Result<usize, HallError> {
        self.generate_into(receiver);
        let generated = receiver.operation_count();
        if generated != expected {
            error!(
                "operator mismatch for {}: expected {} got {}",
                self.symbol, expected, generated
            );
            return Err(HallError::OperatorMismatch {
                symbol: self.symbol.clone(),
                expected,
                generated,
            });
        }
        Ok(generated)
    }

    /// Multi-line description of the lattice and every term.
    pub fn dump_info(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Hall symbol: {}", self.symbol);
        let _ = writeln!(
            out,
            "lattice: {} ({}){}",
            self.lattice,
            self.lattice.designation(),
            if self.centrosymmetric {
                ", centrosymmetric"
            } else {
                ""
            }
        );
        if let Some(v) = &self.origin_offset {
            let _ = writeln!(out, "origin offset: ({} {} {})/12", v.x, v.y, v.z);
        }
        let _ = writeln!(out, "lattice extension: {}", self.extension.join(" "));
        let _ = writeln!(out, "primitive symbol: {}", self.primitive_symbol());
        for (i, term) in self.terms.iter().enumerate() {
            let _ = writeln!(out, "\nterm {}: {}", i + 1, term.dump_info());
        }
        out
    }
}

impl FromStr for HallSymbol {
    type Err = HallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for HallSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// Outcome of decoding a Hall symbol, including the partial cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HallInfo {
    /// Every term decoded
    Complete(HallSymbol),
    /// Decoding stopped at a term; the terms before it are kept
    Partial { symbol: HallSymbol, error: HallError },
    /// Nothing usable: empty input, bad lattice or no terms
    Invalid { input: String, error: HallError },
}

impl HallInfo {
    pub fn new(text: &str) -> Self {
        Self::with_tables(text, HallTables::shared())
    }

    pub fn with_tables(text: &str, tables: &HallTables) -> Self {
        match parse_symbol(text, tables) {
            Ok((symbol, None)) => HallInfo::Complete(symbol),
            Ok((symbol, Some(error))) => {
                error!("Invalid Hall symbol {}: {}", text.trim(), error);
                HallInfo::Partial { symbol, error }
            }
            Err(error) => {
                error!("Invalid Hall symbol {}: {}", text.trim(), error);
                HallInfo::Invalid {
                    input: text.trim().to_string(),
                    error,
                }
            }
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, HallInfo::Complete(_))
    }

    /// The decoded symbol, partial or not.
    pub fn symbol(&self) -> Option<&HallSymbol> {
        match self {
            HallInfo::Complete(symbol) | HallInfo::Partial { symbol, .. } => Some(symbol),
            HallInfo::Invalid { .. } => None,
        }
    }

    pub fn rotation_count(&self) -> usize {
        self.symbol().map_or(0, HallSymbol::rotation_count)
    }

    pub fn error(&self) -> Option<&HallError> {
        match self {
            HallInfo::Complete(_) => None,
            HallInfo::Partial { error, .. } | HallInfo::Invalid { error, .. } => Some(error),
        }
    }

    /// Closes `receiver` under whatever terms were decoded.
    pub fn generate_operations<R: OperationReceiver + ?Sized>(&self, receiver: &mut R) -> usize {
        self.symbol()
            .map_or(0, |symbol| symbol.generate_into(receiver))
    }
}

/// Decodes lattice, origin shift and terms. A failure before any term is built is an
/// `Err`; a failure on a term returns the symbol so far together with the error.
fn parse_symbol(
    text: &str,
    tables: &HallTables,
) -> Result<(HallSymbol, Option<HallError>), HallError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(HallError::Empty);
    }

    let (lattice_code, rest) = trimmed
        .split_once(char::is_whitespace)
        .unwrap_or((trimmed, ""));
    let (lattice, centrosymmetric) = parse_lattice(lattice_code)?;

    let (term_text, origin_text) = split_origin_offset(rest);
    let origin_offset = origin_text.and_then(|inner| match parse_origin_offset(inner) {
        Ok(v) => Some(v),
        Err(err) => {
            warn!("{}; ignoring origin offset", err);
            None
        }
    });

    let explicit: Vec<String> = term_text
        .split_whitespace()
        .map(str::to_ascii_lowercase)
        .collect();
    if explicit.is_empty() {
        return Err(HallError::MissingTerms(trimmed.to_string()));
    }

    let extension: Vec<String> = lattice
        .extension(centrosymmetric)
        .into_iter()
        .map(String::from)
        .collect();
    debug!(
        "Hall symbol {}: lattice {} centrosymmetric {} extension [{}]",
        trimmed,
        lattice,
        centrosymmetric,
        extension.join(" ")
    );

    let mut codes: Vec<&String> = explicit.iter().chain(extension.iter()).collect();
    let mut failure = None;
    if codes.len() > MAX_ROTATION_TERMS {
        codes.truncate(MAX_ROTATION_TERMS);
        failure = Some(HallError::TooManyTerms(MAX_ROTATION_TERMS));
    }

    let origin = origin_offset.as_ref();
    let mut terms = Vec::with_capacity(codes.len());
    let mut context = TermContext::first();
    for code in codes {
        match RotationTerm::build(code, &context, origin, tables) {
            Ok(term) => {
                debug!("term {}: {} -> {}", context.index, code, term.primitive_code);
                context = context.after(&term);
                terms.push(term);
            }
            Err(err) => {
                failure = Some(err);
                break;
            }
        }
    }

    let symbol = HallSymbol {
        symbol: trimmed.to_string(),
        lattice,
        centrosymmetric,
        origin_offset,
        extension,
        terms,
    };
    Ok((symbol, failure))
}

/// `-?L`, where `L` is one lattice letter.
fn parse_lattice(code: &str) -> Result<(LatticeType, bool), HallError> {
    let (centrosymmetric, letter) = match code.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, code),
    };
    let mut chars = letter.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => LatticeType::from_code(c)
            .map(|lattice| (lattice, centrosymmetric))
            .ok_or_else(|| HallError::InvalidLattice(code.to_string())),
        _ => Err(HallError::InvalidLattice(code.to_string())),
    }
}

/// Splits `2 2 (0 0 1)` into the terms and the text inside the parentheses.
fn split_origin_offset(text: &str) -> (&str, Option<&str>) {
    match text.split_once('(') {
        Some((terms, vector)) => {
            let vector = vector.trim_end();
            let vector = vector.strip_suffix(')').unwrap_or(vector);
            (terms, Some(vector))
        }
        None => (text, None),
    }
}

/// One to three integers in twelfths, filling x, then y, then z.
///
/// Components are reduced into [0, 12); a whole-cell shift of the origin leaves the
/// generated group unchanged.
pub fn parse_origin_offset(inner: &str) -> Result<Vector3<i32>, HallError> {
    let malformed = || HallError::MalformedOriginVector(inner.trim().to_string());
    let values = inner
        .split_whitespace()
        .map(|s| s.parse::<i32>().map_err(|_| malformed()))
        .collect::<Result<Vec<_>, _>>()?;
    if values.is_empty() || values.len() > 3 {
        return Err(malformed());
    }
    let mut v = Vector3::zeros();
    for (i, value) in values.into_iter().enumerate() {
        v[i] = value.rem_euclid(TWELFTHS);
    }
    Ok(v)
}
