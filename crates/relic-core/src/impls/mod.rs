//! Implementations of the ports for development, tests, and simple hosts.
//!
//! Production persistence (MongoDB, S3, ...) lives in adapter crates; the
//! core ships an in-memory store, a recording sink for assertions, and a
//! sink that forwards to `tracing`.

pub mod memory;
pub mod recording;
pub mod tracing_sink;

pub use self::memory::InMemoryArtifactStore;
pub use self::recording::RecordingSink;
pub use self::tracing_sink::TracingSink;
