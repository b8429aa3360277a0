//! Pattern-health tracking.
//!
//! A detector whose expression failed to compile produces no matches. The
//! host must be able to tell "no sensitive data found" apart from
//! "detector offline", so every offline detector is recorded here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A detector that could not run during this scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternFailure {
    pub pattern: String,
    pub reason: String,
    pub at: DateTime<Utc>,
}

/// Records detectors unavailable during a scan, for audit and host alerting.
#[derive(Debug, Clone, Default)]
pub struct PatternHealth {
    failures: Vec<PatternFailure>,
}

impl PatternHealth {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_failure(&mut self, pattern: &str, reason: &str) {
        tracing::warn!(pattern, reason, "sensitive-data detector offline");
        self.failures.push(PatternFailure {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
            at: Utc::now(),
        });
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn failures(&self) -> &[PatternFailure] {
        &self.failures
    }
}
