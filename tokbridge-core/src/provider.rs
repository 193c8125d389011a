//! The provider trait.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{CredentialsError, SessionCredentials};

// ============================================================================
// Provider Kind
// ============================================================================

/// Which backend produced a set of credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// The TokBox/OpenTok service.
    TokBox,
    /// Locally fabricated identifiers for tests and load tests.
    Fake,
}

impl ProviderKind {
    /// All provider kinds.
    pub fn all() -> &'static [ProviderKind] {
        &[ProviderKind::TokBox, ProviderKind::Fake]
    }

    /// Short identifier used in logs and settings.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::TokBox => "tokbox",
            ProviderKind::Fake => "fake",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Provider Trait
// ============================================================================

/// Something that can open a session and mint a token for each participant.
///
/// Each call produces fresh credentials; nothing is cached or retried.
#[async_trait]
pub trait SessionTokenProvider: Send + Sync {
    /// The backend behind this provider.
    fn kind(&self) -> ProviderKind;

    /// Creates a session and returns it along with a caller and a callee token.
    async fn get_session_credentials(&self) -> Result<SessionCredentials, CredentialsError>;
}

// ============================================================================
// Tests
// ============================================================================
