//! Hall symbol decoding and space-group operation generation
//!
//! This library turns Hall space-group symbols into generator Seitz operations and
//! closes them into the full list of symmetry operations, with translations held
//! exactly in twelfths of a cell edge.

pub mod config;
pub mod hall;
pub mod interfaces;
pub mod symmetries;

pub use hall::{HallError, HallInfo, HallSymbol, HallTables, LatticeType};
pub use interfaces::OperationReceiver;
pub use symmetries::{generate_operations, Generator, OperationList, SeitzMatrix};

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
