//! Error types for the Vessel workspace.
//!
//! The scanning path itself never fails on well-formed input; errors here are
//! configuration-time errors surfaced while loading a policy or compiling a
//! pattern, before any text is scanned.

mod pattern_error;
mod policy_error;

pub use pattern_error::PatternError;
pub use policy_error::PolicyError;

/// Top-level error for the workspace.
#[derive(Debug, thiserror::Error)]
pub enum VesselError {
    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error(transparent)]
    Policy(#[from] PolicyError),
}

pub type VesselResult<T> = std::result::Result<T, VesselError>;
