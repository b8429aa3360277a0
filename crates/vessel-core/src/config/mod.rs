//! Policy configuration for the firewall core.

mod policy;

pub use policy::{ChecksumKind, CustomPatternConfig, FirewallPolicy};
