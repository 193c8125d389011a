//! Live settings shared between the application and its providers.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock, RwLockReadGuard};

use tracing::{debug, info};

use crate::persistence::{load_json, save_json};
use crate::{Settings, StoreError};

/// Directory name under the platform config dir.
const APP_DIR: &str = "tokbridge";

/// Settings file name.
const SETTINGS_FILE: &str = "settings.json";

/// Returns `<config dir>/tokbridge/settings.json`.
pub fn default_settings_path() -> Result<PathBuf, StoreError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
        .ok_or(StoreError::NoConfigDir)
}

/// Shared, cheaply cloneable handle to the current settings.
///
/// Readers always see the latest committed value, so a provider that looks up
/// its configuration on every call picks up changes without being rebuilt.
#[derive(Debug, Clone, Default)]
pub struct SettingsStore {
    path: Option<PathBuf>,
    inner: Arc<RwLock<Settings>>,
}

impl SettingsStore {
    /// Wraps in-memory settings that are never written to disk.
    pub fn new(settings: Settings) -> Self {
        Self {
            path: None,
            inner: Arc::new(RwLock::new(settings)),
        }
    }

    /// Loads settings from `path`, falling back to defaults if the file does
    /// not exist yet.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let settings = if tokio::fs::try_exists(&path).await? {
            let settings: Settings = load_json(&path).await?;
            settings.validate()?;
            info!(path = %path.display(), fake = settings.fake_tokbox, "Loaded settings");
            settings
        } else {
            debug!(path = %path.display(), "No settings file, using defaults");
            Settings::default()
        };

        Ok(Self {
            path: Some(path),
            inner: Arc::new(RwLock::new(settings)),
        })
    }

    /// Loads settings from [`default_settings_path`].
    pub async fn load_default() -> Result<Self, StoreError> {
        Self::load(default_settings_path()?).await
    }

    /// File backing this store, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    // A poisoned lock still holds a consistent value: `update` only swaps
    // in settings that already passed validation.
    fn read(&self) -> RwLockReadGuard<'_, Settings> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    /// Snapshot of the current settings.
    pub fn get(&self) -> Settings {
        self.read().clone()
    }

    /// Current fake provider probe URL.
    pub fn fake_tokbox_url(&self) -> Option<String> {
        self.read().fake_tokbox_url.clone()
    }

    /// Applies `f` to a copy of the settings and commits it if it validates.
    pub fn update(&self, f: impl FnOnce(&mut Settings)) -> Result<(), StoreError> {
        let mut next = self.get();
        f(&mut next);
        next.validate()?;

        *self.inner.write().unwrap_or_else(|e| e.into_inner()) = next;
        Ok(())
    }

    /// Writes the current settings back to the backing file.
    ///
    /// In-memory stores have nowhere to write, so this is a no-op for them.
    pub async fn save(&self) -> Result<(), StoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let snapshot = self.get();
        save_json(path, &snapshot).await
    }
}

// ============================================================================
// Tests
// ============================================================================
