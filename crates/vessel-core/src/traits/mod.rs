//! Contract surfaces between the scanning engine and its hosts.

mod pattern;
mod scanner;

pub use pattern::IPattern;
pub use scanner::{IScanner, KindCount, ScanSummary, SensitiveMatch};
