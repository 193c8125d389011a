//! Fake provider errors.

use thiserror::Error;
use tokbridge_core::CredentialsError;

/// Fake provider errors.
#[derive(Debug, Error)]
pub enum FakeTokBoxError {
    /// No probe URL is configured.
    #[error("fake_tokbox_url is not configured")]
    MissingProbeUrl,

    /// The probe request failed at the transport level.
    #[error("HTTP error: {0}")]
    Transport(String),

    /// The HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    /// The system random source failed.
    #[error("Failed to read from the system random source")]
    Random,
}

impl From<reqwest::Error> for FakeTokBoxError {
    fn from(err: reqwest::Error) -> Self {
        FakeTokBoxError::Transport(err.to_string())
    }
}

impl From<FakeTokBoxError> for CredentialsError {
    fn from(err: FakeTokBoxError) -> Self {
        match err {
            FakeTokBoxError::MissingProbeUrl => CredentialsError::Configuration(err.to_string()),
            FakeTokBoxError::Transport(msg) => CredentialsError::Transport(msg),
            FakeTokBoxError::HttpClient(_) | FakeTokBoxError::Random => {
                CredentialsError::Internal(err.to_string())
            }
        }
    }
}
