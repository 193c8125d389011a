//! TokBox-specific errors.

use thiserror::Error;
use tokbridge_core::CredentialsError;

/// TokBox-specific errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokBoxError {
    /// A required setting is missing or out of range.
    #[error("Invalid TokBox configuration: {0}")]
    InvalidConfig(String),

    /// The OpenTok SDK reported a failure.
    #[error("OpenTok error: {0}")]
    Sdk(String),

    /// Session creation succeeded but produced no identifier.
    #[error("Got an empty sessionId from tokbox, check your credentials.")]
    EmptySession,
}

impl From<TokBoxError> for CredentialsError {
    fn from(err: TokBoxError) -> Self {
        match err {
            TokBoxError::InvalidConfig(msg) => CredentialsError::Configuration(msg),
            // An empty session id means the service did not accept our key.
            TokBoxError::EmptySession => CredentialsError::Configuration(err.to_string()),
            TokBoxError::Sdk(msg) => CredentialsError::Upstream(msg),
        }
    }
}
