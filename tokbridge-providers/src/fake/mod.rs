//! Fake TokBox provider for tests and load tests.
//!
//! Makes one real HTTP request per call so latency and network failures look
//! like they would against TokBox, then fabricates identifiers shaped like
//! real ones.

mod error;
mod ids;
mod probe;
mod provider;

pub use error::FakeTokBoxError;
pub use ids::{FakeIdGenerator, SESSION_ID_RANDOM_BYTES, TOKEN_RANDOM_BYTES};
pub use probe::ProbeUrlSource;
pub use provider::FakeTokBoxProvider;
