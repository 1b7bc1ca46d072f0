//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Section name outside the five known sections
    #[error("Invalid section: {0}")]
    InvalidSection(String),

    /// Empty or blank catalog key
    #[error("Invalid key: {0:?}")]
    InvalidKey(String),

    /// Catalog document is structurally inconsistent
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Storage layer error (catalog file unreadable)
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl CoreError {
    /// Whether it is expected behavior (user input, unknown names, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::InvalidSection(_) | Self::InvalidKey(_) => true,
            Self::InvalidCatalog(_) | Self::SerializationError(_) | Self::StorageError(_) => false,
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
