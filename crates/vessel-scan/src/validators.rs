//! Checksum validators that gate raw regex matches.
//!
//! Validators are total functions over the matched substring: they strip
//! separators themselves, so callers pass the raw match verbatim.

use vessel_core::constants::{CARD_MAX_DIGITS, CARD_MIN_DIGITS, NATIONAL_ID_DIGITS};

/// Digit-weighted modulo-10 checksum. Returns false for inputs with no
/// digits at all.
pub fn luhn(matched: &str) -> bool {
    let digits: Vec<u32> = matched.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.is_empty() {
        return false;
    }

    let mut sum = 0;
    let mut double = false;
    for &d in digits.iter().rev() {
        let mut d = d;
        if double {
            d *= 2;
            if d > 9 {
                d -= 9;
            }
        }
        sum += d;
        double = !double;
    }
    sum % 10 == 0
}

/// True when the match strips to exactly `digits` digits.
pub fn exact_digits(matched: &str, digits: usize) -> bool {
    matched.chars().filter(|c| c.is_ascii_digit()).count() == digits
}

/// Card-number gate: 13-19 digits once separators are stripped, and the
/// Luhn checksum passes.
pub fn card_checksum(matched: &str) -> bool {
    let count = matched.chars().filter(|c| c.is_ascii_digit()).count();
    if !(CARD_MIN_DIGITS..=CARD_MAX_DIGITS).contains(&count) {
        return false;
    }
    luhn(matched)
}

/// 12-digit national ID gate: exact digit count after stripping separators.
pub fn national_id_digits(matched: &str) -> bool {
    exact_digits(matched, NATIONAL_ID_DIGITS)
}
