//! TokBox session provider.

use async_trait::async_trait;
use chrono::Utc;
use tokbridge_core::{CredentialsError, ProviderKind, SessionCredentials, SessionTokenProvider};
use tracing::{debug, instrument};

use super::config::TokBoxConfig;
use super::error::TokBoxError;
use super::sdk::{OpenTokSdk, P2pPreference, Role, SessionProperties, TokenOptions};

/// Provider backed by a real OpenTok client.
pub struct TokBoxProvider<S> {
    server_ip: String,
    token_duration: i64,
    sdk: S,
}

impl<S: OpenTokSdk> TokBoxProvider<S> {
    /// Validates `config` and connects the SDK client once, up front.
    pub fn new(config: TokBoxConfig) -> Result<Self, TokBoxError> {
        config.validate()?;
        let sdk = S::connect(&config.api_key, &config.api_secret)?;
        Self::with_sdk(config, sdk)
    }

    /// Uses an already connected SDK client.
    pub fn with_sdk(config: TokBoxConfig, sdk: S) -> Result<Self, TokBoxError> {
        config.validate()?;
        let token_duration = i64::try_from(config.token_duration)
            .map_err(|e| TokBoxError::InvalidConfig(e.to_string()))?;

        Ok(Self {
            server_ip: config.server_ip,
            token_duration,
            sdk,
        })
    }

    /// The wrapped SDK client.
    pub fn sdk(&self) -> &S {
        &self.sdk
    }

    /// Token lifetime in seconds.
    pub fn token_duration(&self) -> i64 {
        self.token_duration
    }

    fn session_properties(&self) -> SessionProperties {
        SessionProperties {
            location: self.server_ip.clone(),
            p2p_preference: P2pPreference::Enabled,
        }
    }

    /// Opens a session and mints a caller and a callee token for it.
    #[instrument(skip(self), fields(server_ip = %self.server_ip))]
    pub async fn get_session_tokens(&self) -> Result<SessionCredentials, TokBoxError> {
        let session_id = self
            .sdk
            .create_session(&self.session_properties())
            .await?
            .filter(|id| !id.is_empty())
            .ok_or(TokBoxError::EmptySession)?;

        let options = TokenOptions {
            role: Role::Publisher,
            expire_time: Utc::now().timestamp().saturating_add(self.token_duration),
        };

        let caller_token = self.sdk.generate_token(&session_id, &options)?;
        let callee_token = self.sdk.generate_token(&session_id, &options)?;

        debug!(
            session_id_len = session_id.len(),
            expire_time = options.expire_time,
            "TokBox session created"
        );

        Ok(SessionCredentials {
            session_id,
            caller_token,
            callee_token,
        })
    }
}

#[async_trait]
impl<S: OpenTokSdk> SessionTokenProvider for TokBoxProvider<S> {
    fn kind(&self) -> ProviderKind {
        ProviderKind::TokBox
    }

    async fn get_session_credentials(&self) -> Result<SessionCredentials, CredentialsError> {
        Ok(self.get_session_tokens().await?)
    }
}

// ============================================================================
// Tests
// ============================================================================
