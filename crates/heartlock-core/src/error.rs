//! Error types for Heartlock

use thiserror::Error;

/// The main error type for Heartlock operations
#[derive(Debug, Error)]
pub enum HeartlockError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Value out of range: {field} must be between {min} and {max}, got {value}")]
    ValueOutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("Invalid enum value: {value} is not one of {allowed:?}")]
    InvalidEnumValue {
        value: String,
        allowed: Vec<String>,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("Runtime error: {0}")]
    RuntimeError(String),
}

/// Result type alias for Heartlock operations
pub type Result<T> = std::result::Result<T, HeartlockError>;

impl From<toml::de::Error> for HeartlockError {
    fn from(err: toml::de::Error) -> Self {
        HeartlockError::TomlParseError(err.to_string())
    }
}
