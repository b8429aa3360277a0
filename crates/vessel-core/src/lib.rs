//! # vessel-core
//!
//! Foundation crate for the Vessel sensitive-data firewall.
//! Defines the types, traits, errors, config, and constants shared by the
//! scanning engine and by hosts embedding it.

pub mod config;
pub mod constants;
pub mod errors;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{ChecksumKind, CustomPatternConfig, FirewallPolicy};
pub use errors::{VesselError, VesselResult};
pub use traits::{IPattern, IScanner, ScanSummary, SensitiveMatch};
