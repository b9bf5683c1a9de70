//! Artifact record: one persisted build output.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::ArtifactId;

/// The stored file: basename plus raw bytes.
///
/// The file is read fully into memory before persisting; streaming uploads
/// are out of scope for this core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactPayload {
    /// File name with any directory components stripped.
    pub name: String,

    /// Raw file bytes.
    pub data: Vec<u8>,
}

/// A persisted build artifact.
///
/// Records are immutable after creation: there is no update path. They are
/// removed only by the clean operation or by external administration.
/// `date` is the *job's* creation time, not the persistence time — it is the
/// retention ordering key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    /// Stable grouping key: one logical series per project.
    pub project: String,

    /// Opaque build identifier, traceability only.
    pub job: String,

    /// The source project's declared version at build time.
    pub version: String,

    /// Job creation time; the retention ordering key.
    pub date: DateTime<Utc>,

    pub payload: ArtifactPayload,
}

/// Payload-free projection of an [`Artifact`] for listing queries
/// (history / latest endpoints never ship file bytes).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactMeta {
    pub id: ArtifactId,
    pub project: String,
    pub job: String,
    pub version: String,
    pub date: DateTime<Utc>,
}

impl ArtifactMeta {
    pub fn of(id: ArtifactId, artifact: &Artifact) -> Self {
        Self {
            id,
            project: artifact.project.clone(),
            job: artifact.job.clone(),
            version: artifact.version.clone(),
            date: artifact.date,
        }
    }
}
