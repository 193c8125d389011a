//! TokBox (OpenTok) provider implementation.
//!
//! Opens one peer-to-peer session per request and mints a publisher token for
//! each participant. The OpenTok client itself sits behind [`OpenTokSdk`];
//! this module only drives it.

mod config;
mod error;
mod provider;
mod sdk;

pub use config::TokBoxConfig;
pub use error::TokBoxError;
pub use provider::TokBoxProvider;
pub use sdk::{OpenTokSdk, P2pPreference, Role, SessionProperties, TokenOptions};
