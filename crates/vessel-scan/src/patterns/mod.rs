//! The pattern registry and the scanner.
//!
//! Built-in detectors live in static tables; each expression compiles
//! lazily on first use. A built-in whose expression fails to compile simply
//! produces no matches (fail closed) and is surfaced through
//! [`crate::health::PatternHealth`] instead of aborting the scan.

pub mod custom;
pub mod pii;
pub mod secrets;

use regex::Regex;
use std::sync::LazyLock;
use vessel_core::traits::{IPattern, SensitiveMatch};

/// A built-in detector backed by a lazily compiled static expression.
pub struct BuiltinPattern {
    pub name: &'static str,
    pub regex: &'static LazyLock<Option<Regex>>,
    pub validator: Option<fn(&str) -> bool>,
}

impl IPattern for BuiltinPattern {
    fn name(&self) -> &str {
        self.name
    }

    fn regex(&self) -> Option<&Regex> {
        self.regex.as_ref()
    }

    fn validate(&self, matched: &str) -> bool {
        self.validator.map_or(true, |v| v(matched))
    }
}

/// The canonical registry: credential-shaped detectors first (most
/// specific), then the PII shapes. The order is fixed so scan output is
/// reproducible; it does not affect correctness since patterns are
/// evaluated independently.
pub fn builtin_patterns() -> Vec<BuiltinPattern> {
    let mut all = secrets::all_patterns();
    all.extend(pii::all_patterns());
    all
}

/// Run every supplied pattern against `text` independently.
///
/// Per pattern: leftmost, non-overlapping, global search; each raw match is
/// gated through the pattern's validator. Different patterns may produce
/// overlapping or identical spans; that is expected and preserved. Output
/// order is registry order, then left-to-right within each pattern.
pub fn scan_patterns(text: &str, patterns: &[&dyn IPattern]) -> Vec<SensitiveMatch> {
    let mut matches = Vec::new();
    for pat in patterns {
        collect_matches(text, *pat, &mut matches);
    }
    matches
}

fn collect_matches(text: &str, pattern: &dyn IPattern, out: &mut Vec<SensitiveMatch>) {
    let Some(re) = pattern.regex() else { return };
    for m in re.find_iter(text) {
        if !pattern.validate(m.as_str()) {
            continue;
        }
        out.push(SensitiveMatch {
            kind: pattern.name().to_string(),
            value: m.as_str().to_string(),
            start: m.start(),
            length: m.end() - m.start(),
        });
    }
}
