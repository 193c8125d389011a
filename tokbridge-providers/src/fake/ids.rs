//! Fake session id and token generation.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE;
use ring::rand::{SecureRandom, SystemRandom};

use super::error::FakeTokBoxError;

/// Random bytes in a fake session id (68 base64 characters).
pub const SESSION_ID_RANDOM_BYTES: usize = 51;

/// Random bytes in a fake token (392 base64 characters, one `=` of padding).
pub const TOKEN_RANDOM_BYTES: usize = 293;

/// Produces session ids `"<n>_<random>"` and tokens `"T<m>==<random>"`.
///
/// `n` and `m` come from two independent counters owned by this generator.
/// Both start at 1 and increase by one per id, also under concurrent use.
pub struct FakeIdGenerator {
    rng: SystemRandom,
    sessions: AtomicU64,
    tokens: AtomicU64,
}

impl FakeIdGenerator {
    /// Creates a generator with both counters at zero.
    pub fn new() -> Self {
        Self {
            rng: SystemRandom::new(),
            sessions: AtomicU64::new(0),
            tokens: AtomicU64::new(0),
        }
    }

    /// Number of session ids handed out so far.
    pub fn sessions_issued(&self) -> u64 {
        self.sessions.load(Ordering::SeqCst)
    }

    /// Number of tokens handed out so far.
    pub fn tokens_issued(&self) -> u64 {
        self.tokens.load(Ordering::SeqCst)
    }

    fn random_url_safe(&self, len: usize) -> Result<String, FakeTokBoxError> {
        let mut bytes = vec![0u8; len];
        self.rng
            .fill(&mut bytes)
            .map_err(|_| FakeTokBoxError::Random)?;
        Ok(URL_SAFE.encode(&bytes))
    }

    /// Next session id.
    pub fn next_session_id(&self) -> Result<String, FakeTokBoxError> {
        // Draw randomness first so a failure does not burn a counter value.
        let random = self.random_url_safe(SESSION_ID_RANDOM_BYTES)?;
        let n = self.sessions.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(format!("{n}_{random}"))
    }

    /// Next token.
    pub fn next_token(&self) -> Result<String, FakeTokBoxError> {
        let random = self.random_url_safe(TOKEN_RANDOM_BYTES)?;
        let m = self.tokens.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(format!("T{m}=={random}"))
    }
}

impl Default for FakeIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FakeIdGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FakeIdGenerator")
            .field("sessions", &self.sessions_issued())
            .field("tokens", &self.tokens_issued())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
