//! Per-project plugin configuration.

use serde::{Deserialize, Serialize};

fn default_max_builds() -> u32 {
    20
}

/// Repository retention configuration, as stored alongside the project.
///
/// Mirrors the host's config schema: `file_to_save` is required for a deploy
/// to do anything, `max_builds` defaults to 20 and a value of 0 disables
/// cleaning entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryConfig {
    /// Relative path (under the job's data dir) of the build output to keep.
    #[serde(default)]
    pub file_to_save: Option<String>,

    /// Retention cap: keep at most this many artifacts per project.
    #[serde(default = "default_max_builds")]
    pub max_builds: u32,
}

impl RepositoryConfig {
    pub fn new(file_to_save: impl Into<String>) -> Self {
        Self {
            file_to_save: Some(file_to_save.into()),
            ..Self::default()
        }
    }

    pub fn with_max_builds(mut self, max_builds: u32) -> Self {
        self.max_builds = max_builds;
        self
    }
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            file_to_save: None,
            max_builds: default_max_builds(),
        }
    }
}
