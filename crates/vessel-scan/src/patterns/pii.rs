//! Personally identifiable information detectors.

use super::BuiltinPattern;
use crate::validators;
use regex::Regex;
use std::sync::LazyLock;

macro_rules! pii_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Credit card (13-19 digits, optional space/dash grouping) ──────────────
// The regex only constrains shape; the Luhn gate rejects implausible runs.
pii_pattern!(RE_CREDIT_CARD, r"\b\d(?:[ -]?\d){12,18}\b");

// ── Email ─────────────────────────────────────────────────────────────────
pii_pattern!(
    RE_EMAIL,
    r"\b[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}\b"
);

// ── Phone (optional country code + 10 digits, flexible separators) ────────
pii_pattern!(
    RE_PHONE,
    r"\b(?:\+?\d{1,3}[- ]?)?\(?\d{3}\)?[- ]?\d{3}[- ]?\d{4}\b"
);

// ── Aadhaar (3 groups of 4 digits, optional separators) ───────────────────
pii_pattern!(RE_AADHAAR, r"\b\d{4}[ -]?\d{4}[ -]?\d{4}\b");

// ── PAN card (5 letters + 4 digits + 1 letter) ────────────────────────────
pii_pattern!(RE_PAN, r"\b[A-Z]{5}[0-9]{4}[A-Z]\b");

// ── IPv4 (each octet constrained to 0-255 by the expression itself) ──────
pii_pattern!(
    RE_IPV4,
    r"\b(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\b"
);

// ── SSN (3-2-4 dash-separated digit groups) ───────────────────────────────
pii_pattern!(RE_SSN, r"\b\d{3}-\d{2}-\d{4}\b");

/// PII detectors in registry order.
pub fn all_patterns() -> Vec<BuiltinPattern> {
    vec![
        BuiltinPattern {
            name: "Credit Card Number",
            regex: &RE_CREDIT_CARD,
            validator: Some(validators::card_checksum),
        },
        BuiltinPattern {
            name: "Email Address",
            regex: &RE_EMAIL,
            validator: None,
        },
        BuiltinPattern {
            name: "Phone Number",
            regex: &RE_PHONE,
            validator: None,
        },
        BuiltinPattern {
            name: "Aadhaar Number (India)",
            regex: &RE_AADHAAR,
            validator: Some(validators::national_id_digits),
        },
        BuiltinPattern {
            name: "PAN Card (India)",
            regex: &RE_PAN,
            validator: None,
        },
        BuiltinPattern {
            name: "IP Address (IPv4)",
            regex: &RE_IPV4,
            validator: None,
        },
        BuiltinPattern {
            name: "Social Security Number (US)",
            regex: &RE_SSN,
            validator: None,
        },
    ]
}
