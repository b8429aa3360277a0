//! Fixed values shared across the workspace.

/// Character substituted for every masked alphanumeric position.
pub const MASK_CHAR: char = 'X';

/// Card numbers carry between 13 and 19 digits once separators are stripped.
pub const CARD_MIN_DIGITS: usize = 13;
pub const CARD_MAX_DIGITS: usize = 19;

/// A 12-digit grouped national ID must strip to exactly this many digits.
pub const NATIONAL_ID_DIGITS: usize = 12;
