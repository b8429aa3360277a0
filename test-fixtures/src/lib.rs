//! Golden scan/redact datasets for the Vessel workspace.
//!
//! Fixture files under `golden/firewall/` hold named text samples together
//! with the detector kinds a scan must (or must not) report and, where the
//! masked form is pinned down, the exact redacted output. The structs here
//! are the schema; tests consume samples instead of poking at raw JSON.

use serde::Deserialize;
use std::path::PathBuf;

/// One scan/redact scenario.
#[derive(Debug, Deserialize)]
pub struct ScanSample {
    /// Stable identifier used in assertion messages, e.g. "pii-01".
    pub id: String,
    /// The text handed to the scanner.
    pub text: String,
    /// Detector kinds that must appear in the scan result.
    #[serde(default)]
    pub expected_kinds: Vec<String>,
    /// Detector kinds that must not appear, e.g. a Luhn-failing card.
    #[serde(default)]
    pub absent_kinds: Vec<String>,
    /// Exact masked output, when the sample pins it down.
    #[serde(default)]
    pub expected_output: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ScanSampleSet {
    pub samples: Vec<ScanSample>,
}

/// A golden fixture file: a description plus its sample set.
#[derive(Debug, Deserialize)]
pub struct ScanFixture {
    pub description: String,
    pub input: ScanSampleSet,
}

impl ScanFixture {
    pub fn samples(&self) -> &[ScanSample] {
        &self.input.samples
    }
}

/// Root directory of the test-fixtures folder, found by walking up from
/// the calling crate's manifest so any workspace member can load fixtures.
fn fixtures_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load a golden scan fixture by path relative to the fixtures root.
///
/// # Panics
/// Panics if the file doesn't exist or doesn't match the fixture schema.
pub fn load_scan_fixture(relative_path: &str) -> ScanFixture {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}
