//! Signing error types.

use thiserror::Error;

/// Errors raised while preparing a document for signing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SigningError {
    /// The document root is not an object or has no members.
    #[error("Document cannot be flattened: root must be a non-empty object")]
    NotFlattenable,

    /// The value could not be serialized into a signable document.
    #[error("Document serialization failed: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for SigningError {
    fn from(err: serde_json::Error) -> Self {
        SigningError::Serialization(err.to_string())
    }
}
