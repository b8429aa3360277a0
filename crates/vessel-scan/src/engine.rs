use std::path::Path;
use vessel_core::config::FirewallPolicy;
use vessel_core::errors::VesselResult;
use vessel_core::traits::{IPattern, IScanner, SensitiveMatch};

use crate::health::PatternHealth;
use crate::patterns::{self, custom::CustomPattern, BuiltinPattern};

/// Detection engine over the built-in registry plus any policy-supplied
/// custom patterns.
///
/// Implements `IScanner` from vessel-core. The engine is immutable after
/// construction and holds no per-scan state, so one instance can serve any
/// number of concurrent scans.
pub struct FirewallEngine {
    builtins: Vec<BuiltinPattern>,
    custom: Vec<CustomPattern>,
}

impl FirewallEngine {
    /// Engine over the built-in registry only.
    pub fn new() -> Self {
        Self {
            builtins: patterns::builtin_patterns(),
            custom: Vec::new(),
        }
    }

    /// Engine over the built-in registry plus the policy's custom patterns.
    ///
    /// Custom expressions compile here; a malformed expression aborts
    /// construction before any text is scanned.
    pub fn with_policy(policy: &FirewallPolicy) -> VesselResult<Self> {
        let custom = policy
            .custom_patterns
            .iter()
            .map(CustomPattern::compile)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            builtins: patterns::builtin_patterns(),
            custom,
        })
    }

    /// Engine built from a TOML policy file.
    ///
    /// Fails fast on an unreadable or malformed file and on any custom
    /// expression that does not compile, so a broken policy can never
    /// silently weaken the scan.
    pub fn from_policy_file(path: impl AsRef<Path>) -> VesselResult<Self> {
        let policy = FirewallPolicy::load_from(path)?;
        Self::with_policy(&policy)
    }

    /// Scan and report which detectors, if any, were offline.
    pub fn scan_with_health(&self, text: &str) -> (Vec<SensitiveMatch>, PatternHealth) {
        let mut health = PatternHealth::new();
        let pattern_refs = self.pattern_refs();

        for pat in &pattern_refs {
            if pat.regex().is_none() {
                health.record_failure(pat.name(), "regex compilation failed");
            }
        }

        let matches = patterns::scan_patterns(text, &pattern_refs);
        tracing::debug!(
            matches = matches.len(),
            bytes = text.len(),
            "sensitive-data scan complete"
        );
        (matches, health)
    }

    fn pattern_refs(&self) -> Vec<&dyn IPattern> {
        self.builtins
            .iter()
            .map(|p| p as &dyn IPattern)
            .chain(self.custom.iter().map(|p| p as &dyn IPattern))
            .collect()
    }
}

impl Default for FirewallEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl IScanner for FirewallEngine {
    fn scan(&self, text: &str) -> Vec<SensitiveMatch> {
        let (matches, _health) = self.scan_with_health(text);
        matches
    }
}
