//! Where the fake provider finds the URL it probes.

use tokbridge_store::SettingsStore;

/// Supplies the probe URL. Consulted on every call, never cached.
pub trait ProbeUrlSource: Send + Sync {
    /// Current probe URL, if configured.
    fn probe_url(&self) -> Option<String>;
}

/// A fixed URL.
impl ProbeUrlSource for String {
    fn probe_url(&self) -> Option<String> {
        Some(self.clone())
    }
}

/// The `fake_tokbox_url` of the live settings.
impl ProbeUrlSource for SettingsStore {
    fn probe_url(&self) -> Option<String> {
        self.fake_tokbox_url()
    }
}
