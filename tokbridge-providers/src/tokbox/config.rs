//! TokBox provider configuration.

use std::fmt;

use tokbridge_store::TokBoxSettings;

use super::error::TokBoxError;

/// Everything the TokBox provider needs at construction.
#[derive(Clone, PartialEq, Eq)]
pub struct TokBoxConfig {
    /// Location hint passed with every session request.
    pub server_ip: String,
    /// OpenTok project API key.
    pub api_key: String,
    /// OpenTok project API secret.
    pub api_secret: String,
    /// Token lifetime in seconds.
    pub token_duration: u64,
}

impl TokBoxConfig {
    /// Creates a configuration. Call [`validate`](Self::validate) before use.
    pub fn new(
        server_ip: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        token_duration: u64,
    ) -> Self {
        Self {
            server_ip: server_ip.into(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            token_duration,
        }
    }

    /// Builds a configuration from stored settings, pulling the secret from
    /// the keychain when the settings file does not carry it.
    pub fn from_settings(settings: &TokBoxSettings) -> Result<Self, TokBoxError> {
        let api_secret = settings
            .resolve_api_secret()
            .map_err(|e| TokBoxError::InvalidConfig(e.to_string()))?;

        let config = Self::new(
            settings.server_ip.clone(),
            settings.api_key.clone(),
            api_secret,
            settings.token_duration,
        );
        config.validate()?;
        Ok(config)
    }

    /// Rejects blank fields and durations that cannot be added to a Unix
    /// timestamp.
    pub fn validate(&self) -> Result<(), TokBoxError> {
        for (name, value) in [
            ("server_ip", &self.server_ip),
            ("api_key", &self.api_key),
            ("api_secret", &self.api_secret),
        ] {
            if value.trim().is_empty() {
                return Err(TokBoxError::InvalidConfig(format!("{name} is empty")));
            }
        }

        if self.token_duration == 0 {
            return Err(TokBoxError::InvalidConfig(
                "token_duration must be positive".to_string(),
            ));
        }
        if i64::try_from(self.token_duration).is_err() {
            return Err(TokBoxError::InvalidConfig(format!(
                "token_duration {} is too large",
                self.token_duration
            )));
        }

        Ok(())
    }
}

impl fmt::Debug for TokBoxConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokBoxConfig")
            .field("server_ip", &self.server_ip)
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("token_duration", &self.token_duration)
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
