/// Construction-time errors for sensitive-data patterns.
///
/// A malformed pattern is rejected when it is loaded, never mid-scan.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("pattern '{name}' has an empty expression")]
    EmptyExpression { name: String },

    #[error("invalid expression for pattern '{name}': {reason}")]
    InvalidExpression { name: String, reason: String },
}
