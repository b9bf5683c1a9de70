//! Action status codes.

use serde::{Deserialize, Serialize};

/// Terminal status of an action.
///
/// A closed three-value set; the numeric codes are the wire values carried in
/// `command.done` telemetry. Serialized as SCREAMING_SNAKE_CASE:
/// SUCCESS / ERROR / WARNING.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionStatus {
    Success,
    Error,
    Warning,
}

impl ActionStatus {
    /// Wire value: SUCCESS = 0, ERROR = 1, WARNING = 2.
    pub fn exit_code(self) -> i32 {
        match self {
            ActionStatus::Success => 0,
            ActionStatus::Error => 1,
            ActionStatus::Warning => 2,
        }
    }

    pub fn is_success(self) -> bool {
        self == ActionStatus::Success
    }
}
