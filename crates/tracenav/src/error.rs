//! Navigation error types.

use thiserror::Error;

/// Errors produced while building the navigation menu.
#[derive(Debug, Error)]
pub enum NavError {
    /// The router configuration has no entry for the requested route key.
    #[error("unknown route key: {key}")]
    UnknownRoute { key: String },

    /// The serialized router configuration could not be parsed.
    #[error("invalid router configuration")]
    InvalidConfig(#[from] serde_json::Error),
}

/// Result type alias using NavError.
pub type NavResult<T> = Result<T, NavError>;
