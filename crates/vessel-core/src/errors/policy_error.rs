/// Errors raised while loading or parsing a policy file.
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    #[error("failed to read policy file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse policy file '{path}': {reason}")]
    Parse { path: String, reason: String },
}
