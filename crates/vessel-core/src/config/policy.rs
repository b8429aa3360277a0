use crate::errors::PolicyError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Checksum validators a policy file can attach to a custom pattern.
///
/// A config file cannot carry a function, so validators are named here and
/// resolved to the built-in checksum implementations by the scanning crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ChecksumKind {
    /// Digit-weighted modulo-10 check (card numbers).
    Luhn,
    /// Exact digit count after stripping separators.
    DigitCount { digits: usize },
}

/// A custom detector supplied by organization policy, merged after the
/// built-in registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomPatternConfig {
    /// Display label, e.g. "Employee ID".
    pub name: String,
    /// Regular expression source, compiled at policy load.
    pub expression: String,
    /// Optional named checksum gating each raw match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum: Option<ChecksumKind>,
}

/// Firewall policy: the caller-supplied extension surface of the core.
///
/// Layering mirrors the host extension's managed/local split: an
/// organization-managed policy wins over locally configured values, which
/// win over the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FirewallPolicy {
    /// Extra detectors scanned alongside the built-in registry.
    #[serde(default)]
    pub custom_patterns: Vec<CustomPatternConfig>,
}

impl FirewallPolicy {
    /// Load a policy from a TOML file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, PolicyError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| PolicyError::Read {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|e| PolicyError::Parse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Layer a managed policy over this one. Managed values win wholesale
    /// when present, matching the host's overwrite merge strategy.
    pub fn merged_with(self, managed: FirewallPolicy) -> FirewallPolicy {
        FirewallPolicy {
            custom_patterns: if managed.custom_patterns.is_empty() {
                self.custom_patterns
            } else {
                managed.custom_patterns
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_has_no_custom_patterns() {
        let policy = FirewallPolicy::default();
        assert!(policy.custom_patterns.is_empty());
    }

    #[test]
    fn policy_parses_from_toml() {
        let policy: FirewallPolicy = toml::from_str(
            r#"
            [[custom_patterns]]
            name = "Employee ID"
            expression = "EMP-\\d{6}"

            [[custom_patterns]]
            name = "Badge Number"
            expression = "\\d{4} \\d{4} \\d{4}"
            checksum = { kind = "digit-count", digits = 12 }
            "#,
        )
        .unwrap();

        assert_eq!(policy.custom_patterns.len(), 2);
        assert_eq!(policy.custom_patterns[0].name, "Employee ID");
        assert_eq!(policy.custom_patterns[0].checksum, None);
        assert_eq!(
            policy.custom_patterns[1].checksum,
            Some(ChecksumKind::DigitCount { digits: 12 })
        );
    }

    #[test]
    fn luhn_checksum_round_trips_through_toml() {
        let policy = FirewallPolicy {
            custom_patterns: vec![CustomPatternConfig {
                name: "Loyalty Card".to_string(),
                expression: r"\d{16}".to_string(),
                checksum: Some(ChecksumKind::Luhn),
            }],
        };
        let rendered = toml::to_string(&policy).unwrap();
        let parsed: FirewallPolicy = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, policy);
    }

    #[test]
    fn load_from_reads_a_policy_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("policy.toml");
        std::fs::write(
            &path,
            r#"
            [[custom_patterns]]
            name = "Employee ID"
            expression = "\\bEMP-\\d{6}\\b"
            checksum = { kind = "digit-count", digits = 6 }
            "#,
        )
        .unwrap();

        let policy = FirewallPolicy::load_from(&path).unwrap();
        assert_eq!(policy.custom_patterns.len(), 1);
        assert_eq!(policy.custom_patterns[0].name, "Employee ID");
        assert_eq!(
            policy.custom_patterns[0].checksum,
            Some(ChecksumKind::DigitCount { digits: 6 })
        );
    }

    #[test]
    fn load_from_missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.toml");
        let err = FirewallPolicy::load_from(&path).unwrap_err();
        assert!(matches!(err, PolicyError::Read { .. }), "got {err:?}");
    }

    #[test]
    fn load_from_malformed_toml_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("policy.toml");
        std::fs::write(&path, "custom_patterns = 3\n").unwrap();
        let err = FirewallPolicy::load_from(&path).unwrap_err();
        assert!(matches!(err, PolicyError::Parse { .. }), "got {err:?}");
    }

    #[test]
    fn managed_custom_patterns_win_over_local() {
        let local = FirewallPolicy {
            custom_patterns: vec![CustomPatternConfig {
                name: "Local".to_string(),
                expression: "local".to_string(),
                checksum: None,
            }],
        };
        let managed = FirewallPolicy {
            custom_patterns: vec![CustomPatternConfig {
                name: "Managed".to_string(),
                expression: "managed".to_string(),
                checksum: None,
            }],
        };

        let effective = local.clone().merged_with(managed);
        assert_eq!(effective.custom_patterns[0].name, "Managed");

        let effective = local.clone().merged_with(FirewallPolicy::default());
        assert_eq!(effective.custom_patterns[0].name, "Local");
    }
}
