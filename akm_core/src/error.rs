//! Error types for the akm_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for akm_core operations.
///
/// All engine errors are local, synchronous and non-retryable: pure
/// computation has no transient failure mode. An evaluation either fully
/// succeeds or fails as a whole.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Caller input outside the accepted bounds (segment count,
    /// temperature, duration, unknown product type)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A registered kinetic profile with non-physical constants; fatal at
    /// startup rather than a source of silently wrong potency numbers
    #[error("Invalid kinetic profile: {0}")]
    InvalidProfile(String),

    /// Numerically degenerate result (division by zero, logarithm of a
    /// non-positive value, non-finite intermediate)
    #[error("Indeterminate result: {0}")]
    Indeterminate(String),
}
