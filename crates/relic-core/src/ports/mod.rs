//! Ports: the abstraction layer between the core and its collaborators.
//!
//! Each trait is a seam for swapping implementations — the persistent store,
//! the host's telemetry/log/output channels, and the wall clock. The core
//! never reaches for process-wide state; everything arrives through these
//! ports at construction time.

pub mod artifact_store;
pub mod clock;
pub mod sinks;

pub use self::artifact_store::{ArtifactStore, StoreError};
pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::sinks::{LogSink, OutputChannel, OutputSink, StatusSink};
