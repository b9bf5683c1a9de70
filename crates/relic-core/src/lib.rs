//! relic-core
//!
//! Core building blocks for the Relic artifact-retention plugin: after a
//! build produces an output file, Relic persists it as a versioned artifact
//! record and prunes the oldest surplus records beyond a per-project cap.
//!
//! # Module layout
//! - **domain**: value types (ids, artifact, status, config, job, events, errors)
//! - **ports**: abstraction layer (ArtifactStore, sinks, Clock)
//! - **app**: application logic (Action lifecycle, save, clean, deploy pipeline)
//! - **impls**: implementations (in-memory store, recording sinks, tracing sinks)

pub mod app;
pub mod domain;
pub mod impls;
pub mod ports;
