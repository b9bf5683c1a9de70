//! Lifecycle contract violations.
//!
//! Domain failures inside save/clean (missing file, store error, ...) are
//! never typed errors: they terminate the action with an ERROR status and a
//! message. `ActionError` is the other kind — a programmer error in how the
//! Action lifecycle was driven. Callers should treat it as fail-fast.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("action name must not be empty")]
    EmptyName,

    #[error("action `{0}` was used before start() was invoked")]
    NotStarted(String),
}
