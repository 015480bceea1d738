//! Error types for the policy engine
//!
//! Policy classification itself never fails: a missing store degrades to
//! "disabled" and a missing value reads as the registered default. The
//! variants below cover the fallible edges only: store construction and
//! file persistence.

use thiserror::Error;

/// Result type alias for policy-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the policy engine
#[derive(Error, Debug)]
pub enum Error {
    /// Preference store errors
    #[error("Preference store error: {0}")]
    Store(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem errors from the file-backed store
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a preference store error
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Helper for converting anyhow::Error to our Error type
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err.to_string())
    }
}
