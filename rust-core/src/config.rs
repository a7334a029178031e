// Constants

// Translations are exact multiples of 1/12 of a cell edge
pub const TWELFTHS: i32 = 12;

// Upper bound on rotation terms per Hall symbol, lattice extension included
pub const MAX_ROTATION_TERMS: usize = 16;
