//! TokBox API secret storage in the system keychain.
//!
//! Secrets are stored per API key, so several TokBox projects can coexist:
//! - macOS: Keychain Services
//! - Linux: Secret Service (GNOME Keyring, KDE Wallet)
//!
//! ## Usage
//!
//! ```ignore
//! use tokbridge_store::keychain;
//!
//! keychain::store_api_secret("44669102", "b60d0b2568...")?;
//!
//! if let Some(secret) = keychain::get_api_secret("44669102") {
//!     // build the TokBox provider
//! }
//!
//! keychain::delete_api_secret("44669102")?;
//! ```

use keyring::Entry;
use tracing::{debug, warn};

use crate::StoreError;

/// Service name prefix for Tokbridge credentials.
const SERVICE_PREFIX: &str = "Tokbridge";

/// Keychain user name under which the secret is filed.
const SECRET_USER: &str = "api_secret";

fn service_name(api_key: &str) -> String {
    format!("{SERVICE_PREFIX}-{api_key}")
}

fn entry(api_key: &str) -> Result<Entry, StoreError> {
    Entry::new(&service_name(api_key), SECRET_USER)
        .map_err(|e| StoreError::Keychain(format!("Failed to create keychain entry: {e}")))
}

/// Store the API secret for `api_key`.
///
/// # Errors
/// Returns [`StoreError::Keychain`] if the keychain operation fails.
pub fn store_api_secret(api_key: &str, api_secret: &str) -> Result<(), StoreError> {
    entry(api_key)?
        .set_password(api_secret)
        .map_err(|e| StoreError::Keychain(format!("Failed to store API secret: {e}")))?;

    debug!(api_key = api_key, "API secret stored in keychain");
    Ok(())
}

/// Retrieve the API secret for `api_key`.
///
/// Returns `None` if nothing is stored, the stored value is empty, or the
/// keychain is unavailable.
pub fn get_api_secret(api_key: &str) -> Option<String> {
    let entry = entry(api_key).ok()?;

    match entry.get_password() {
        Ok(secret) if !secret.is_empty() => {
            debug!(api_key = api_key, "API secret retrieved from keychain");
            Some(secret)
        }
        Ok(_) | Err(keyring::Error::NoEntry) => None,
        Err(e) => {
            warn!(api_key = api_key, error = %e, "Failed to retrieve API secret");
            None
        }
    }
}

/// Delete the API secret for `api_key`. Deleting a missing entry succeeds.
pub fn delete_api_secret(api_key: &str) -> Result<(), StoreError> {
    match entry(api_key)?.delete_credential() {
        Ok(()) => {
            debug!(api_key = api_key, "API secret deleted from keychain");
            Ok(())
        }
        Err(keyring::Error::NoEntry) => Ok(()),
        Err(e) => Err(StoreError::Keychain(format!("Failed to delete API secret: {e}"))),
    }
}

/// Check whether a non-empty API secret is stored for `api_key`.
pub fn has_api_secret(api_key: &str) -> bool {
    get_api_secret(api_key).is_some()
}

// ============================================================================
// Tests
// ============================================================================
