//! Error types for the fallible surfaces of omit-core.

use thiserror::Error;

/// Errors that can occur outside the pure in-memory filter.
#[derive(Error, Debug)]
pub enum OmitError {
    /// The input string was not valid JSON (string convenience path).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A registry lookup asked for a capability that is not registered.
    #[error("unknown filter: {name}")]
    UnknownFilter { name: String },
}

/// Convenience alias used throughout omit-core.
pub type Result<T> = std::result::Result<T, OmitError>;
