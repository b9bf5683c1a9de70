//! Host-provided output seams: telemetry, severity-routed logs, and the
//! generic output channel.
//!
//! The host wires all three; the core only ever writes through them. Sinks
//! are infallible by contract — a host that can drop telemetry drops it
//! silently rather than failing a deploy.

use crate::domain::StatusEvent;

/// Telemetry sink for action lifecycle events.
pub trait StatusSink: Send + Sync {
    fn status(&self, event: &StatusEvent);
}

/// Severity-routed logging sink.
pub trait LogSink: Send + Sync {
    fn log(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Channel tag on the generic output sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputChannel {
    Log,
    Error,
}

impl OutputChannel {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputChannel::Log => "log",
            OutputChannel::Error => "error",
        }
    }
}

/// Secondary output sink: every reported message is mirrored here, tagged
/// `log` for success/warning and `error` for errors.
pub trait OutputSink: Send + Sync {
    fn out(&self, message: &str, channel: OutputChannel);
}
