use regex::Regex;

/// A named sensitive-data detector: a regular expression plus an optional
/// checksum check.
///
/// Built-in detectors and policy-supplied custom detectors both satisfy this
/// contract; the scanner accepts any implementation and never cares how a
/// pattern was authored. Implementations must not carry scan state, since
/// the same pattern may be used by many concurrent scans.
pub trait IPattern: Send + Sync {
    /// Display label, e.g. "Credit Card Number".
    fn name(&self) -> &str;

    /// The compiled expression, or `None` if it failed to compile.
    /// A pattern without a usable expression produces no matches.
    fn regex(&self) -> Option<&Regex>;

    /// Accept or reject a raw regex match. Patterns without a checksum
    /// accept every match.
    fn validate(&self, matched: &str) -> bool {
        let _ = matched;
        true
    }
}
