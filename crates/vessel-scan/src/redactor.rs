//! Format-preserving redaction.

use vessel_core::constants::MASK_CHAR;
use vessel_core::traits::SensitiveMatch;

/// Produce a copy of `text` with every matched span masked.
///
/// Alphanumeric characters (and `_`) inside any span become [`MASK_CHAR`];
/// separators inside a span (dashes, `@`, dots, whitespace) pass through
/// verbatim so the shape of the redacted value stays recognizable
/// (`XXXX-XXXX-XXXX-XXXX` rather than a solid block). Characters outside
/// every span are untouched and the character count never changes.
///
/// Overlapping spans OR into the same mask, so the union redacts exactly
/// once. This function sits on a user-data path, so a span that falls
/// outside the text is clamped rather than rejected: a crash here would let
/// the sensitive value through unredacted.
pub fn redact(text: &str, matches: &[SensitiveMatch]) -> String {
    if matches.is_empty() {
        return text.to_string();
    }

    // Inclusion mask over byte positions.
    let mut mask = vec![false; text.len()];
    for m in matches {
        let start = m.start.min(text.len());
        let end = m.start.saturating_add(m.length).min(text.len());
        for slot in &mut mask[start..end] {
            *slot = true;
        }
    }

    let mut out = String::with_capacity(text.len());
    for (i, ch) in text.char_indices() {
        if mask[i] && (ch.is_alphanumeric() || ch == '_') {
            out.push(MASK_CHAR);
        } else {
            out.push(ch);
        }
    }
    out
}
