//! Settings and secret storage for Tokbridge.
//!
//! - [`Settings`] is the on-disk configuration (JSON).
//! - [`SettingsStore`] holds the live copy that providers read at call time.
//! - [`keychain`] keeps the TokBox API secret out of the settings file.

pub mod keychain;
mod error;
mod persistence;
mod settings;
mod settings_store;

#[cfg(test)]
mod persistence_tests;

pub use error::StoreError;
pub use persistence::{ensure_dir, load_json, save_json};
pub use settings::{DEFAULT_TOKEN_DURATION_SECS, Settings, TokBoxSettings};
pub use settings_store::{SettingsStore, default_settings_path};
