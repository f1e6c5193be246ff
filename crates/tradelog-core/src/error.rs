//! Error types for tradelog-core.

use thiserror::Error;

use crate::field::{SettingsKey, ValueKind};

/// Core error types.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Unknown settings key: {0}")]
    UnknownKey(String),

    #[error("Invalid value for {key}: expected {expected}, got {actual}")]
    TypeMismatch {
        key: SettingsKey,
        expected: ValueKind,
        actual: ValueKind,
    },

    #[error("Unknown AI personality: {0}")]
    InvalidPersonality(String),

    #[error("Invalid toggle value: {0}")]
    InvalidToggle(String),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
