//! JobContext: everything the host supplies for one deploy invocation.

use std::path::PathBuf;
use std::sync::Arc;

use crate::ports::{Clock, LogSink, OutputSink, StatusSink, SystemClock};

/// Per-job dependency bundle.
///
/// Read-only from the core's perspective except for its sinks. Built once by
/// the host adapter and borrowed by every action of the deploy — no
/// process-wide wiring.
#[derive(Clone)]
pub struct JobContext {
    /// Filesystem root of the current job's workspace.
    pub data_dir: PathBuf,

    /// Host-provided plugin label, echoed in start telemetry.
    pub plugin: String,

    pub status: Arc<dyn StatusSink>,
    pub logger: Arc<dyn LogSink>,
    pub out: Arc<dyn OutputSink>,
    pub clock: Arc<dyn Clock>,
}

impl JobContext {
    pub fn new(
        data_dir: impl Into<PathBuf>,
        plugin: impl Into<String>,
        status: Arc<dyn StatusSink>,
        logger: Arc<dyn LogSink>,
        out: Arc<dyn OutputSink>,
    ) -> Self {
        Self {
            data_dir: data_dir.into(),
            plugin: plugin.into(),
            status,
            logger,
            out,
            clock: Arc::new(SystemClock),
        }
    }

    /// Swap the wall clock (tests use a fixed clock).
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
}
