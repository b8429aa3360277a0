//! Policy-supplied custom detectors.

use crate::validators;
use regex::Regex;
use vessel_core::config::{ChecksumKind, CustomPatternConfig};
use vessel_core::errors::PatternError;
use vessel_core::traits::IPattern;

/// A detector compiled from policy configuration.
///
/// Compilation happens at policy load, so a malformed expression is rejected
/// before any text is scanned, never mid-scan.
#[derive(Debug)]
pub struct CustomPattern {
    name: String,
    regex: Regex,
    checksum: Option<ChecksumKind>,
}

impl CustomPattern {
    pub fn compile(config: &CustomPatternConfig) -> Result<Self, PatternError> {
        if config.expression.is_empty() {
            return Err(PatternError::EmptyExpression {
                name: config.name.clone(),
            });
        }
        let regex = Regex::new(&config.expression).map_err(|e| PatternError::InvalidExpression {
            name: config.name.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            name: config.name.clone(),
            regex,
            checksum: config.checksum,
        })
    }
}

impl IPattern for CustomPattern {
    fn name(&self) -> &str {
        &self.name
    }

    fn regex(&self) -> Option<&Regex> {
        Some(&self.regex)
    }

    fn validate(&self, matched: &str) -> bool {
        match self.checksum {
            None => true,
            Some(ChecksumKind::Luhn) => validators::luhn(matched),
            Some(ChecksumKind::DigitCount { digits }) => validators::exact_digits(matched, digits),
        }
    }
}
