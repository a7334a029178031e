use std::sync::OnceLock;

use crate::hall::rotation_table::RotationTable;
use crate::hall::translation_table::TranslationTable;

/// The two lookup tables a Hall parser needs.
///
/// Both are plain immutable values; build one with [`HallTables::standard`] and pass
/// it to the parser, or use the process-wide instance from [`HallTables::shared`].
#[derive(Debug, Clone)]
pub struct HallTables {
    pub rotations: RotationTable,
    pub translations: TranslationTable,
}

impl HallTables {
    pub fn standard() -> Self {
        Self {
            rotations: RotationTable::standard(),
            translations: TranslationTable::standard(),
        }
    }

    /// Process-wide standard tables, built once on first use.
    pub fn shared() -> &'static HallTables {
        static TABLES: OnceLock<HallTables> = OnceLock::new();
        TABLES.get_or_init(HallTables::standard)
    }
}

impl Default for HallTables {
    fn default() -> Self {
        Self::standard()
    }
}
