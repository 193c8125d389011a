//! On-disk settings.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{StoreError, keychain};

/// Token lifetime used when the settings file does not specify one (24h).
pub const DEFAULT_TOKEN_DURATION_SECS: u64 = 24 * 60 * 60;

// ============================================================================
// Settings
// ============================================================================

/// Top-level Tokbridge settings.
///
/// Missing fields fall back to their defaults and unknown fields are ignored,
/// so older and newer files both load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Use the fake provider instead of TokBox.
    pub fake_tokbox: bool,
    /// URL the fake provider GETs on every call to mimic network latency.
    pub fake_tokbox_url: Option<String>,
    /// Credentials for the real TokBox service.
    pub tokbox: Option<TokBoxSettings>,
}

impl Settings {
    /// Checks values that serde cannot check on its own.
    pub fn validate(&self) -> Result<(), StoreError> {
        if let Some(raw) = &self.fake_tokbox_url {
            let url = Url::parse(raw).map_err(|e| {
                StoreError::InvalidSettings(format!("fake_tokbox_url {raw:?}: {e}"))
            })?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(StoreError::InvalidSettings(format!(
                    "fake_tokbox_url must be http(s), got {}",
                    url.scheme()
                )));
            }
        }

        if self.fake_tokbox && self.fake_tokbox_url.is_none() {
            return Err(StoreError::InvalidSettings(
                "fake_tokbox is enabled but fake_tokbox_url is not set".to_string(),
            ));
        }

        if let Some(tokbox) = &self.tokbox {
            tokbox.validate()?;
        }

        Ok(())
    }
}

// ============================================================================
// TokBox Settings
// ============================================================================

/// Settings for the real TokBox provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokBoxSettings {
    /// Location hint sent with every session request.
    pub server_ip: String,
    /// TokBox project API key.
    pub api_key: String,
    /// TokBox project API secret. When absent, the keychain is consulted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_secret: Option<String>,
    /// Token lifetime in seconds.
    #[serde(default = "default_token_duration")]
    pub token_duration: u64,
}

fn default_token_duration() -> u64 {
    DEFAULT_TOKEN_DURATION_SECS
}

impl TokBoxSettings {
    fn validate(&self) -> Result<(), StoreError> {
        if self.server_ip.trim().is_empty() {
            return Err(StoreError::InvalidSettings("tokbox.server_ip is empty".to_string()));
        }
        if self.api_key.trim().is_empty() {
            return Err(StoreError::InvalidSettings("tokbox.api_key is empty".to_string()));
        }
        if self.token_duration == 0 {
            return Err(StoreError::InvalidSettings(
                "tokbox.token_duration must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns the API secret from the settings file, or from the keychain
    /// entry stored under this API key.
    pub fn resolve_api_secret(&self) -> Result<String, StoreError> {
        match self.api_secret.as_deref() {
            Some(secret) if !secret.is_empty() => Ok(secret.to_string()),
            _ => keychain::get_api_secret(&self.api_key)
                .ok_or_else(|| StoreError::MissingSecret(self.api_key.clone())),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
