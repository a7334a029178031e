use thiserror::Error;

/// Why a Hall symbol could not be (fully) decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HallError {
    #[error("Hall symbol is empty")]
    Empty,

    #[error("Invalid lattice code '{0}'")]
    InvalidLattice(String),

    #[error("No rotation terms in Hall symbol '{0}'")]
    MissingTerms(String),

    #[error("Invalid rotation order in term '{0}' (expected 1 to 6)")]
    InvalidRotationOrder(String),

    #[error("Rotation lookup could not find {lookup} for term '{term}'")]
    RotationNotFound { term: String, lookup: String },

    #[error("Malformed origin vector '({0})'")]
    MalformedOriginVector(String),

    #[error("Too many rotation terms (at most {0})")]
    TooManyTerms(usize),

    #[error("Operator mismatch for '{symbol}': expected {expected}, generated {generated}")]
    OperatorMismatch {
        symbol: String,
        expected: usize,
        generated: usize,
    },
}
