//! Action lifecycle: a uniform start/report/finish protocol for one
//! long-running operation.
//!
//! Design intent:
//! - State is an explicit enum (`Idle` → `Running`), not a nullable
//!   timestamp. Reporting before `start()` is a contract violation and
//!   returns [`ActionError::NotStarted`].
//! - `finish` consumes the action, so an instance is single-use and the
//!   completion value is delivered exactly once by construction.
//! - Re-`start()` while running is allowed: it re-arms the start time and
//!   re-emits the start event.

use chrono::{DateTime, Utc};

use crate::domain::{ActionError, ActionStatus, StatusEvent};

use super::context::JobContext;

#[derive(Debug, Clone, Copy)]
enum ActionState {
    Idle,
    Running { started_at: DateTime<Utc> },
}

/// One tracked operation. Created idle; `start()` arms it; `finish()`
/// terminates it and yields the [`ActionReport`] for the caller.
pub struct Action<'a> {
    name: String,
    ctx: &'a JobContext,
    state: ActionState,
}

/// Terminal outcome of an action: the exact status and message passed to
/// `finish`. This is the pipeline-shaped replacement for a completion
/// callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionReport {
    pub status: ActionStatus,
    pub message: Option<String>,
}

impl<'a> Action<'a> {
    pub fn new(name: impl Into<String>, ctx: &'a JobContext) -> Result<Self, ActionError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ActionError::EmptyName);
        }
        Ok(Self {
            name,
            ctx,
            state: ActionState::Idle,
        })
    }

    /// Arm the start time and emit `command.start`. Returns `&mut Self` for
    /// chaining. Calling twice re-arms and re-emits.
    pub fn start(&mut self) -> &mut Self {
        let started_at = self.ctx.clock.now();
        self.state = ActionState::Running { started_at };
        self.ctx.status.status(&StatusEvent::CommandStart {
            command: self.name.clone(),
            time: started_at,
            plugin: self.ctx.plugin.clone(),
        });
        self
    }

    fn started_at(&self) -> Result<DateTime<Utc>, ActionError> {
        match self.state {
            ActionState::Running { started_at } => Ok(started_at),
            ActionState::Idle => Err(ActionError::NotStarted(self.name.clone())),
        }
    }

    /// Write `message` to the log sink and mirror it on the `log` channel.
    pub fn log(&self, message: &str) -> Result<&Self, ActionError> {
        self.started_at()?;
        self.ctx.logger.log(message);
        self.ctx
            .out
            .out(message, crate::ports::OutputChannel::Log);
        Ok(self)
    }

    /// Write `message` to the warn sink and mirror it on the `log` channel.
    pub fn warn(&self, message: &str) -> Result<&Self, ActionError> {
        self.started_at()?;
        self.ctx.logger.warn(message);
        self.ctx
            .out
            .out(message, crate::ports::OutputChannel::Log);
        Ok(self)
    }

    /// Write `message` to the error sink and mirror it on the `error`
    /// channel.
    pub fn error(&self, message: &str) -> Result<&Self, ActionError> {
        self.started_at()?;
        self.ctx.logger.error(message);
        self.ctx
            .out
            .out(message, crate::ports::OutputChannel::Error);
        Ok(self)
    }

    /// Terminate the action: route a non-empty message by status, emit
    /// `command.done` with the elapsed time, and yield the report.
    ///
    /// Consumes `self` — a finished action cannot be reused.
    pub fn finish(
        self,
        status: ActionStatus,
        message: Option<String>,
    ) -> Result<ActionReport, ActionError> {
        let started_at = self.started_at()?;

        if let Some(msg) = message.as_deref()
            && !msg.is_empty()
        {
            match status {
                ActionStatus::Success => self.log(msg)?,
                ActionStatus::Warning => self.warn(msg)?,
                ActionStatus::Error => self.error(msg)?,
            };
        }

        let ended_at = self.ctx.clock.now();
        self.ctx.status.status(&StatusEvent::CommandDone {
            exit_code: status.exit_code(),
            time: ended_at,
            elapsed_ms: (ended_at - started_at).num_milliseconds(),
        });

        Ok(ActionReport { status, message })
    }
}
