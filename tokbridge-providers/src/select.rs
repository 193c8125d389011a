//! Picks the provider an environment asks for.

use std::sync::Arc;

use tokbridge_core::{CredentialsError, SessionTokenProvider};
use tokbridge_store::SettingsStore;
use tracing::info;

use crate::fake::FakeTokBoxProvider;
use crate::tokbox::{OpenTokSdk, TokBoxConfig, TokBoxProvider};

/// Builds the provider selected by the current settings.
///
/// With `fake_tokbox` set, the fake provider reads its probe URL from `store`
/// on every call. Otherwise the `tokbox` section is turned into a
/// [`TokBoxProvider`] over the SDK client `S`.
pub fn provider_from_settings<S>(
    store: &SettingsStore,
) -> Result<Arc<dyn SessionTokenProvider>, CredentialsError>
where
    S: OpenTokSdk + 'static,
{
    let settings = store.get();

    if settings.fake_tokbox {
        info!("Using fake TokBox provider");
        let provider = FakeTokBoxProvider::new(Arc::new(store.clone()))?;
        return Ok(Arc::new(provider));
    }

    let tokbox = settings.tokbox.as_ref().ok_or_else(|| {
        CredentialsError::Configuration("no tokbox settings configured".to_string())
    })?;

    let config = TokBoxConfig::from_settings(tokbox)?;
    info!(server_ip = %config.server_ip, "Using TokBox provider");
    let provider = TokBoxProvider::<S>::new(config)?;
    Ok(Arc::new(provider))
}
