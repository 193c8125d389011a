//! Errors shared by every provider.

use thiserror::Error;

/// Why a provider could not hand out credentials.
///
/// Each provider keeps its own detailed error type and converts into this one
/// at the [`SessionTokenProvider`](crate::SessionTokenProvider) boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CredentialsError {
    /// The provider is missing settings or was given invalid ones.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The upstream session service reported a failure.
    #[error("Upstream provider error: {0}")]
    Upstream(String),

    /// The network request failed before any response arrived.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Local failure unrelated to the network or the upstream service.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CredentialsError {
    /// True for failures caused by the network path.
    pub fn is_transport(&self) -> bool {
        matches!(self, CredentialsError::Transport(_))
    }
}
