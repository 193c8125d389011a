//! Core types for Tokbridge.
//!
//! Tokbridge hands out the credentials two peers need to join a video call:
//! one session identifier plus a caller token and a callee token. Every
//! backend implements [`SessionTokenProvider`], so callers can swap the real
//! TokBox adapter for the fake one without touching their own code.

mod credentials;
mod error;
mod provider;

pub use credentials::SessionCredentials;
pub use error::CredentialsError;
pub use provider::{ProviderKind, SessionTokenProvider};
