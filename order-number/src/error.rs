//! Error types for order number configuration

use thiserror::Error;

/// Order number error types
///
/// Generation itself never fails. These errors come from building configs,
/// parsing formats and loading settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderNumberError {
    /// Sequence length outside the supported digit range
    #[error("Invalid sequence length: {0} (expected 1..=12)")]
    InvalidSequenceLength(u32),

    /// Prefix is empty or contains non-alphanumeric characters
    #[error("Invalid prefix: {0:?}")]
    InvalidPrefix(String),

    /// Unrecognised format name
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// Environment setting could not be parsed
    #[error("Invalid setting {key}={value}")]
    InvalidSetting { key: String, value: String },
}

/// Result type for order number operations
pub type OrderNumberResult<T> = Result<T, OrderNumberError>;
