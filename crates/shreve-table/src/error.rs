//! Error types for table generation.

use thiserror::Error;

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating, writing or reading tables.
#[derive(Debug, Error)]
pub enum Error {
    /// The length engine reported an invariant violation
    #[error("Engine error: {0}")]
    Engine(#[from] shreve_core::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed line in a table file
    #[error("Parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),
}
