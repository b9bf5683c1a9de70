//! Clean operation: enforce the per-project retention cap.

use crate::domain::{ActionError, ActionStatus, DeployJob, RepositoryConfig};
use crate::ports::ArtifactStore;

use super::action::{Action, ActionReport};
use super::context::JobContext;

/// Delete the oldest surplus artifacts so at most `max_builds` records
/// remain for the project.
///
/// Returns `Ok(None)` when `max_builds` is zero: cleaning is disabled, no
/// action is started and no telemetry or store call happens. That is the
/// deliberate no-op fast path, not a failure.
///
/// Deletion order is ascending by date with stable insertion-order
/// tie-break, so the retained set is always the `max_builds` most recently
/// created artifacts. The count→fetch→delete sequence is not atomic across
/// concurrent deploys of the same project; a single writer per project is
/// assumed.
pub async fn clean_artifacts(
    store: &dyn ArtifactStore,
    ctx: &JobContext,
    config: &RepositoryConfig,
    job: &DeployJob,
) -> Result<Option<ActionReport>, ActionError> {
    if config.max_builds == 0 {
        return Ok(None);
    }

    let mut action = Action::new("Clean old artifacts", ctx)?;
    action.start();

    let count = match store.count_by_project(&job.project).await {
        Ok(count) => count,
        Err(_) => {
            return action
                .finish(
                    ActionStatus::Error,
                    Some("Cannot determine number of artifact to clean -> Abort".to_string()),
                )
                .map(Some);
        }
    };

    let max_builds = config.max_builds as usize;
    if count <= max_builds {
        return action
            .finish(ActionStatus::Success, Some("Nothing to clean".to_string()))
            .map(Some);
    }

    let surplus = count - max_builds;
    let ids = match store.find_oldest(&job.project, surplus).await {
        Ok(ids) => ids,
        Err(_) => {
            return action
                .finish(
                    ActionStatus::Error,
                    Some("Cannot retrieve artifacts to clean -> Abort".to_string()),
                )
                .map(Some);
        }
    };

    match store.delete_by_ids(&ids).await {
        Ok(()) => action
            .finish(
                ActionStatus::Success,
                Some("Cleaning succesfully".to_string()),
            )
            .map(Some),
        Err(_) => action
            .finish(
                ActionStatus::Error,
                Some("Cannot remove artifacts to clean -> Abort".to_string()),
            )
            .map(Some),
    }
}
