//! # vessel-scan
//!
//! The sensitive-data detection and redaction engine: a registry of
//! checksum-gated regex detectors, a scanner producing offset-accurate match
//! records, and a format-preserving redactor that masks matched spans while
//! keeping separators visible.
//!
//! The whole crate is synchronous and stateless across calls; scanning and
//! redaction are pure functions over their inputs and safe to call from any
//! thread without coordination.

pub mod engine;
pub mod health;
pub mod patterns;
pub mod redactor;
pub mod validators;

pub use engine::FirewallEngine;
pub use redactor::redact;
