//! Store errors.

use thiserror::Error;

/// Errors raised while loading, validating or saving settings.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failure.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The settings parsed but hold values that cannot be used.
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    /// No API secret in the settings file or the keychain.
    #[error("No TokBox API secret configured for key {0}")]
    MissingSecret(String),

    /// The system keychain rejected the operation.
    #[error("Keychain error: {0}")]
    Keychain(String),

    /// No platform config directory could be determined.
    #[error("Could not determine the configuration directory")]
    NoConfigDir,
}
