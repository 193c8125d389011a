//! Integration tests for the TokBox provider and provider selection.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use tokbridge_core::{CredentialsError, ProviderKind, SessionTokenProvider};
use tokbridge_providers::tokbox::{P2pPreference, SessionProperties, TokenOptions};
use tokbridge_providers::{OpenTokSdk, TokBoxConfig, TokBoxError, TokBoxProvider, provider_from_settings};
use tokbridge_store::{Settings, SettingsStore, TokBoxSettings};

/// OpenTok stand-in that opens "SESSXYZ" for valid keys.
struct MockOpenTok {
    api_key: String,
    tokens: AtomicU32,
}

#[async_trait]
impl OpenTokSdk for MockOpenTok {
    fn connect(api_key: &str, _api_secret: &str) -> Result<Self, TokBoxError> {
        Ok(Self {
            api_key: api_key.to_string(),
            tokens: AtomicU32::new(0),
        })
    }

    async fn create_session(
        &self,
        properties: &SessionProperties,
    ) -> Result<Option<String>, TokBoxError> {
        assert_eq!(properties.p2p_preference, P2pPreference::Enabled);
        if self.api_key == "bad-key" {
            return Ok(None);
        }
        Ok(Some("SESSXYZ".to_string()))
    }

    fn generate_token(
        &self,
        session_id: &str,
        options: &TokenOptions,
    ) -> Result<String, TokBoxError> {
        let n = self.tokens.fetch_add(1, Ordering::SeqCst);
        Ok(format!(
            "T1==partner_id={}&session_id={session_id}&expire_time={}&nonce={n}",
            self.api_key, options.expire_time
        ))
    }
}

fn tokbox_settings(api_key: &str) -> TokBoxSettings {
    TokBoxSettings {
        server_ip: "127.0.0.1".to_string(),
        api_key: api_key.to_string(),
        api_secret: Some("dummy-secret".to_string()),
        token_duration: 3600,
    }
}

#[tokio::test]
async fn test_real_provider_with_dummy_credentials() {
    let provider: Arc<dyn SessionTokenProvider> = Arc::new(
        TokBoxProvider::<MockOpenTok>::new(TokBoxConfig::new(
            "127.0.0.1",
            "dummy-key",
            "dummy-secret",
            3600,
        ))
        .unwrap(),
    );

    let creds = provider.get_session_credentials().await.unwrap();

    assert_eq!(creds.session_id, "SESSXYZ");
    assert!(!creds.caller_token.is_empty());
    assert!(!creds.callee_token.is_empty());
    assert_ne!(creds.caller_token, creds.callee_token);
}

#[tokio::test]
async fn test_bad_credentials_surface_as_configuration_error() {
    let provider =
        TokBoxProvider::<MockOpenTok>::new(TokBoxConfig::new("127.0.0.1", "bad-key", "s", 60))
            .unwrap();

    let err = provider.get_session_credentials().await.unwrap_err();
    match err {
        CredentialsError::Configuration(message) => {
            assert!(message.contains("check your credentials"));
        }
        other => panic!("Expected configuration error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_settings_select_tokbox_provider() {
    let store = SettingsStore::new(Settings {
        tokbox: Some(tokbox_settings("dummy-key")),
        ..Default::default()
    });

    let provider = provider_from_settings::<MockOpenTok>(&store).unwrap();
    assert_eq!(provider.kind(), ProviderKind::TokBox);

    let creds = provider.get_session_credentials().await.unwrap();
    assert_eq!(creds.session_id, "SESSXYZ");
}

#[test]
fn test_settings_select_fake_provider() {
    let store = SettingsStore::new(Settings {
        fake_tokbox: true,
        fake_tokbox_url: Some("http://127.0.0.1:5000/".to_string()),
        tokbox: Some(tokbox_settings("dummy-key")),
    });

    let provider = provider_from_settings::<MockOpenTok>(&store).unwrap();
    assert_eq!(provider.kind(), ProviderKind::Fake);
}

#[test]
fn test_missing_tokbox_settings_is_configuration_error() {
    let store = SettingsStore::new(Settings::default());

    let err = provider_from_settings::<MockOpenTok>(&store).err().unwrap();
    assert!(matches!(err, CredentialsError::Configuration(_)));
}

#[test]
fn test_invalid_tokbox_settings_are_rejected() {
    let mut settings = tokbox_settings("dummy-key");
    settings.server_ip = String::new();
    let store = SettingsStore::new(Settings {
        tokbox: Some(settings),
        ..Default::default()
    });

    let err = provider_from_settings::<MockOpenTok>(&store).err().unwrap();
    assert!(matches!(err, CredentialsError::Configuration(m) if m.contains("server_ip")));
}
