//! Error types for credgen
//!
//! Only boundary operations (parsing a configuration, looking up a preset)
//! return these. Rules that cannot be satisfied are reported inside
//! [`GenerationResult`](crate::GenerationResult), never as an error.

use thiserror::Error;

/// Main error type for generator operations
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Configuration value is malformed
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// No preset with the given name
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    /// Configuration could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for GeneratorError {
    fn from(err: serde_json::Error) -> Self {
        GeneratorError::Serialization(err.to_string())
    }
}

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;
