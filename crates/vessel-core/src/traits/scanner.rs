use serde::{Deserialize, Serialize};

/// A located, validated occurrence of a pattern in scanned text.
///
/// Offsets are byte offsets into the scanned UTF-8 text, as produced by the
/// regex engine: `text[start..start + length] == value` always holds for
/// matches produced by the scanner. Matches are transient: consumed by the
/// redactor or a UI summary, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensitiveMatch {
    /// Name of the pattern that produced this match.
    pub kind: String,
    /// The exact matched substring.
    pub value: String,
    /// Byte offset of the match in the scanned text.
    pub start: usize,
    /// Byte length of the matched substring.
    pub length: usize,
}

impl SensitiveMatch {
    /// Exclusive end offset of the matched span.
    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

/// Per-kind tally within a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindCount {
    pub kind: String,
    pub count: usize,
}

/// Aggregate view of a match list for "N sensitive items found, types: …"
/// style rendering, so a UI never re-derives counts from raw regex state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    pub total: usize,
    pub kinds: Vec<KindCount>,
}

impl ScanSummary {
    /// Tally a match list. Kinds keep first-seen order so summaries of the
    /// same scan are reproducible.
    pub fn from_matches(matches: &[SensitiveMatch]) -> Self {
        let mut kinds: Vec<KindCount> = Vec::new();
        for m in matches {
            match kinds.iter_mut().find(|k| k.kind == m.kind) {
                Some(entry) => entry.count += 1,
                None => kinds.push(KindCount {
                    kind: m.kind.clone(),
                    count: 1,
                }),
            }
        }
        Self {
            total: matches.len(),
            kinds,
        }
    }
}

/// Sensitive-data scanning.
pub trait IScanner: Send + Sync {
    /// Scan text, returning every validated match in registry order, then
    /// left-to-right within each pattern.
    fn scan(&self, text: &str) -> Vec<SensitiveMatch>;
}
