//! The seam between the TokBox provider and an OpenTok client.

use async_trait::async_trait;

use super::error::TokBoxError;

// ============================================================================
// Request Types
// ============================================================================

/// Whether media should flow directly between peers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum P2pPreference {
    /// Route media through the OpenTok media servers.
    #[default]
    Disabled,
    /// Prefer direct peer-to-peer media.
    Enabled,
}

impl P2pPreference {
    /// Value of the `p2p.preference` request parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            P2pPreference::Disabled => "disabled",
            P2pPreference::Enabled => "enabled",
        }
    }
}

/// Parameters of a session creation request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionProperties {
    /// IP address used as a location hint.
    pub location: String,
    /// Media routing preference.
    pub p2p_preference: P2pPreference,
}

impl SessionProperties {
    /// Request parameters as OpenTok expects them.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("location", self.location.clone()),
            ("p2p.preference", self.p2p_preference.as_str().to_string()),
        ]
    }
}

/// Privileges carried by a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// May only receive streams.
    Subscriber,
    /// May publish and receive streams.
    Publisher,
    /// Publisher that may also moderate other clients.
    Moderator,
}

impl Role {
    /// Wire name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Subscriber => "subscriber",
            Role::Publisher => "publisher",
            Role::Moderator => "moderator",
        }
    }
}

/// Parameters of a token request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenOptions {
    /// Role granted to the holder.
    pub role: Role,
    /// Expiration as seconds since the Unix epoch.
    pub expire_time: i64,
}

// ============================================================================
// SDK Trait
// ============================================================================

/// Operations the TokBox provider needs from an OpenTok client.
///
/// Session creation is a network round trip; token generation is local
/// signing and therefore synchronous.
#[async_trait]
pub trait OpenTokSdk: Send + Sync {
    /// Builds a client for one OpenTok project.
    fn connect(api_key: &str, api_secret: &str) -> Result<Self, TokBoxError>
    where
        Self: Sized;

    /// Creates a session. `Ok(None)` means the service answered without an id.
    async fn create_session(
        &self,
        properties: &SessionProperties,
    ) -> Result<Option<String>, TokBoxError>;

    /// Mints a token for `session_id`.
    fn generate_token(&self, session_id: &str, options: &TokenOptions)
    -> Result<String, TokBoxError>;
}
