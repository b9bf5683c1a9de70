//! Tracing sink: forwards all three sink ports to `tracing`.
//!
//! Hosts without their own telemetry channel get structured logs for free;
//! telemetry events land at debug level with the event name and payload as
//! fields.

use crate::domain::StatusEvent;
use crate::ports::{LogSink, OutputChannel, OutputSink, StatusSink};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl StatusSink for TracingSink {
    fn status(&self, event: &StatusEvent) {
        match event {
            StatusEvent::CommandStart {
                command,
                time,
                plugin,
            } => {
                tracing::debug!(event = event.name(), %command, %time, %plugin, "action started");
            }
            StatusEvent::CommandDone {
                exit_code,
                time,
                elapsed_ms,
            } => {
                tracing::debug!(
                    event = event.name(),
                    exit_code,
                    %time,
                    elapsed_ms,
                    "action finished"
                );
            }
        }
    }
}

impl LogSink for TracingSink {
    fn log(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}

impl OutputSink for TracingSink {
    fn out(&self, message: &str, channel: OutputChannel) {
        tracing::debug!(channel = channel.as_str(), "{message}");
    }
}
