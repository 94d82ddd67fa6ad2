use thiserror::Error;

/// Core error type shared across Modelforge crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The schema violates internal invariants.
    #[error("invalid schema: {0}")]
    InvalidSchema(String),
    /// Catch-all error for unexpected failures.
    #[error("other error: {0}")]
    Other(String),
}

/// Convenience alias for results returned by Modelforge crates.
pub type Result<T> = std::result::Result<T, Error>;
