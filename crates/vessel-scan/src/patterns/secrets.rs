//! Credential-shaped detectors.

use super::BuiltinPattern;
use regex::Regex;
use std::sync::LazyLock;

macro_rules! secret_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Cloud access key (AKIA/ASIA prefix + 16 uppercase-alnum) ──────────────
secret_pattern!(RE_CLOUD_ACCESS_KEY, r"\b(?:AKIA|ASIA)[0-9A-Z]{16}\b");

// ── Private key marker line (PEM) ─────────────────────────────────────────
secret_pattern!(RE_PRIVATE_KEY_HEADER, r"-----BEGIN (?:[A-Z]+ )*PRIVATE KEY-----");

// ── Generic credential assignment: key [:=] quoted-or-bare token of 8+ ────
secret_pattern!(
    RE_GENERIC_CREDENTIAL,
    r#"(?i)\b(?:password|passwd|pwd|api[ _-]?key|secret|token|credentials)\s*[:=]\s*["']?[^\s"']{8,}["']?"#
);

/// Credential detectors in registry order.
pub fn all_patterns() -> Vec<BuiltinPattern> {
    vec![
        BuiltinPattern {
            name: "AWS Access Key",
            regex: &RE_CLOUD_ACCESS_KEY,
            validator: None,
        },
        BuiltinPattern {
            name: "Private Key Header",
            regex: &RE_PRIVATE_KEY_HEADER,
            validator: None,
        },
        BuiltinPattern {
            name: "Generic Credential / Password",
            regex: &RE_GENERIC_CREDENTIAL,
            validator: None,
        },
    ]
}
