//! Session providers for Tokbridge.
//!
//! - [`tokbox`]: the real provider, driving an OpenTok client.
//! - [`fake`]: a drop-in replacement for tests that needs no TokBox account.
//!
//! Both implement [`SessionTokenProvider`](tokbridge_core::SessionTokenProvider);
//! [`provider_from_settings`] picks one from the current settings.

pub mod fake;
pub mod tokbox;
mod select;

pub use fake::{FakeTokBoxError, FakeTokBoxProvider, ProbeUrlSource};
pub use select::provider_from_settings;
pub use tokbox::{OpenTokSdk, TokBoxConfig, TokBoxError, TokBoxProvider};
