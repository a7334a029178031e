// Hall module: decoding of Hall space-group symbols into generator operations
// Tables are immutable values built once and passed into the parser

// ======================== MODULE DECLARATIONS ========================
pub mod axis_resolution;
pub mod hall_errors;
pub mod hall_parser;
pub mod hall_tables;
pub mod lattice_types;
pub mod rotation_table;
pub mod rotation_term;
pub mod translation_table;

mod _tests_rotation_term;

// ======================== LOOKUP TABLES ========================
pub use hall_tables::HallTables; // struct - rotation and translation tables, shared() gives the process-wide copy
pub use rotation_table::{
    HallRotation,  // struct - proper rotation matrix and its negation for one axis code
    RotationCode,  // struct - lookup key: order, diagonal reference, axis
    RotationTable, // struct - lookup(&RotationCode) -> Option<&HallRotation>, strict
};
pub use translation_table::{
    HallTranslation,  // struct - screw shift or fixed vector for one translation code
    TranslationSum,   // struct - summed contributions of one term
    TranslationTable, // struct - lookup(code, order) / accumulate(codes, order), lenient
};

// ======================== LATTICES ========================
pub use lattice_types::LatticeType; // enum - P, I, R, F, A, B, C, S, T
// LatticeType impl methods:
//   from_code(char) -> Option<Self>                    - case-insensitive letter lookup
//   designation(&self) -> &'static str                 - "face-centered", ...
//   extension(&self, centrosymmetric: bool) -> Vec     - implicit centering terms (+ "-1")
//   latt_index / from_shelx_latt / hall_equivalent     - SHELX LATT numbering

// ======================== TERMS ========================
pub use axis_resolution::{
    AxisDesignator,       // struct - axis, diagonal reference and characters consumed
    AxisType,             // enum - x, y, z, ', ", *, _
    resolve_axis,         // fn(rest, term_index, order, previous_order, previous_axis) -> AxisDesignator
    resolve_default_axis, // fn(term_index, order, previous_order) -> AxisType
};
pub use rotation_term::{
    RotationTerm, // struct - decoded term with its Seitz matrix
    TermContext,  // struct - position and predecessor of a term
};

// ======================== PARSER ========================
pub use hall_errors::HallError; // enum - why a symbol could not be decoded
pub use hall_parser::{
    HallInfo,            // enum - Complete / Partial / Invalid outcome of decoding
    HallSymbol,          // struct - lattice, origin offset and terms of one symbol
    parse_origin_offset, // fn(&str) -> Result<Vector3<i32>, HallError> - "0 0 1" in twelfths
};
// HallSymbol impl methods:
//   parse(&str) / parse_with_tables(&str, &HallTables) - strict decoding
//   generators(&self) -> Vec<Generator>                - one generator per term
//   generate_into(&self, receiver) -> usize            - group closure into a receiver
//   operations(&self) -> OperationList                 - full group, identity first
//   generate_checked(&self, receiver, expected)        - closure plus operation count check
//   primitive_symbol(&self) -> String                  - explicit form on a P lattice
//   dump_info(&self) -> String                         - human-readable listing
