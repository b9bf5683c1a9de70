//! App: the operations the deploy trigger drives.
//!
//! - **action**: start/report/finish lifecycle with elapsed-time telemetry
//! - **save**: persist the build output as an artifact record
//! - **clean**: prune the oldest surplus artifacts for the project
//! - **deploy**: the two-stage pipeline chaining save into clean
//! - **context**: the per-job dependency bundle the host supplies

pub mod action;
pub mod clean;
pub mod context;
pub mod deploy;
pub mod save;

#[cfg(test)]
pub(crate) mod support;

pub use self::action::{Action, ActionReport};
pub use self::clean::clean_artifacts;
pub use self::context::JobContext;
pub use self::deploy::{DeployCompletion, Deployer};
pub use self::save::save_artifact;
