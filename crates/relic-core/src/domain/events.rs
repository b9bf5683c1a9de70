//! Telemetry events emitted over the status sink.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One lifecycle event for a named command.
///
/// Exactly two events exist per action: a start event when the action is
/// armed and a done event carrying the exit code and elapsed time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum StatusEvent {
    /// `command.start`
    #[serde(rename = "command.start")]
    CommandStart {
        /// Human-readable action name.
        command: String,
        time: DateTime<Utc>,
        /// Host-provided plugin label.
        plugin: String,
    },

    /// `command.done`
    #[serde(rename = "command.done")]
    CommandDone {
        exit_code: i32,
        time: DateTime<Utc>,
        /// Wall-clock milliseconds between start and finish.
        elapsed_ms: i64,
    },
}

impl StatusEvent {
    /// The wire event name (`command.start` / `command.done`).
    pub fn name(&self) -> &'static str {
        match self {
            StatusEvent::CommandStart { .. } => "command.start",
            StatusEvent::CommandDone { .. } => "command.done",
        }
    }
}
