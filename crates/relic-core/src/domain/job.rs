//! Deploy job input: what the host hands us per build.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The build the deploy trigger is acting on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployJob {
    /// Project name, e.g. `"my-org/my-app"`. Grouping key for retention.
    pub project: String,

    /// Opaque build identifier from the host CI system.
    pub id: String,

    /// Job creation time. Becomes the artifact's retention ordering key.
    pub created: DateTime<Utc>,
}

impl DeployJob {
    pub fn new(
        project: impl Into<String>,
        id: impl Into<String>,
        created: DateTime<Utc>,
    ) -> Self {
        Self {
            project: project.into(),
            id: id.into(),
            created,
        }
    }
}
