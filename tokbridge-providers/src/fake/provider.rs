//! Fake session provider.

use std::sync::Arc;

use async_trait::async_trait;
use tokbridge_core::{CredentialsError, ProviderKind, SessionCredentials, SessionTokenProvider};
use tracing::{debug, instrument};

use super::error::FakeTokBoxError;
use super::ids::FakeIdGenerator;
use super::probe::ProbeUrlSource;

/// Stand-in for [`TokBoxProvider`](crate::tokbox::TokBoxProvider) that needs
/// no TokBox account.
pub struct FakeTokBoxProvider {
    client: reqwest::Client,
    probe: Arc<dyn ProbeUrlSource>,
    ids: FakeIdGenerator,
}

impl FakeTokBoxProvider {
    /// Creates a provider with a default HTTP client.
    pub fn new(probe: Arc<dyn ProbeUrlSource>) -> Result<Self, FakeTokBoxError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| FakeTokBoxError::HttpClient(e.to_string()))?;
        Ok(Self::with_client(client, probe))
    }

    /// Creates a provider that probes with `client`, e.g. one with a timeout.
    pub fn with_client(client: reqwest::Client, probe: Arc<dyn ProbeUrlSource>) -> Self {
        Self {
            client,
            probe,
            ids: FakeIdGenerator::new(),
        }
    }

    /// Identifier counters of this provider.
    pub fn ids(&self) -> &FakeIdGenerator {
        &self.ids
    }

    /// GETs the probe URL, then fabricates a session id and two tokens.
    ///
    /// The response status and body are ignored; only transport failures
    /// fail the call.
    #[instrument(skip(self))]
    pub async fn get_session_tokens(&self) -> Result<SessionCredentials, FakeTokBoxError> {
        let url = self
            .probe
            .probe_url()
            .ok_or(FakeTokBoxError::MissingProbeUrl)?;

        let response = self.client.get(&url).send().await?;
        debug!(url = %url, status = %response.status(), "Fake TokBox probe answered");

        Ok(SessionCredentials {
            session_id: self.ids.next_session_id()?,
            caller_token: self.ids.next_token()?,
            callee_token: self.ids.next_token()?,
        })
    }
}

#[async_trait]
impl SessionTokenProvider for FakeTokBoxProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Fake
    }

    async fn get_session_credentials(&self) -> Result<SessionCredentials, CredentialsError> {
        Ok(self.get_session_tokens().await?)
    }
}
