//! Credentials issued for a single call.

use serde::{Deserialize, Serialize};

/// A session identifier with one token per participant.
///
/// Serialized with the camelCase keys web clients expect
/// (`sessionId`, `callerToken`, `calleeToken`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionCredentials {
    /// Opaque identifier of the session (the "room").
    pub session_id: String,
    /// Token for the participant who placed the call.
    pub caller_token: String,
    /// Token for the participant being called.
    pub callee_token: String,
}

impl SessionCredentials {
    /// Bundles a session id and its two tokens.
    pub fn new(
        session_id: impl Into<String>,
        caller_token: impl Into<String>,
        callee_token: impl Into<String>,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            caller_token: caller_token.into(),
            callee_token: callee_token.into(),
        }
    }

    /// Returns true when all three fields carry a value.
    pub fn is_complete(&self) -> bool {
        !self.session_id.is_empty() && !self.caller_token.is_empty() && !self.callee_token.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
