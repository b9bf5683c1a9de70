//! Domain model: the value types the rest of the crate is built from.

pub mod artifact;
pub mod config;
pub mod errors;
pub mod events;
pub mod ids;
pub mod job;
pub mod status;

pub use self::artifact::{Artifact, ArtifactMeta, ArtifactPayload};
pub use self::config::RepositoryConfig;
pub use self::errors::ActionError;
pub use self::events::StatusEvent;
pub use self::ids::ArtifactId;
pub use self::job::DeployJob;
pub use self::status::ActionStatus;
