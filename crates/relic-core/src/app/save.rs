//! Save operation: persist the build output as a versioned artifact record.

use serde::Deserialize;
use tokio::fs;

use crate::domain::{
    ActionError, ActionStatus, Artifact, ArtifactPayload, DeployJob, RepositoryConfig,
};
use crate::ports::ArtifactStore;

use super::action::{Action, ActionReport};
use super::context::JobContext;

/// The slice of the project descriptor the save operation cares about.
#[derive(Debug, Deserialize)]
struct PackageManifest {
    #[serde(default)]
    version: Option<String>,
}

/// Strictly sequential, short-circuiting on the first failure. Every failure
/// terminates the action with an ERROR status and a human-readable message;
/// nothing is retried at this layer.
///
/// On the happy path exactly one artifact record is constructed and exactly
/// one `insert` issued; the record's `date` is the job creation time and the
/// payload name is the basename of the configured file.
pub async fn save_artifact(
    store: &dyn ArtifactStore,
    ctx: &JobContext,
    config: &RepositoryConfig,
    job: &DeployJob,
) -> Result<ActionReport, ActionError> {
    let mut action = Action::new("Save artifact to repository", ctx)?;
    action.start();

    let Some(file_to_save) = config.file_to_save.as_deref().filter(|f| !f.is_empty()) else {
        return action.finish(
            ActionStatus::Error,
            Some("No file to save. Please verify your project configuration -> Abort".to_string()),
        );
    };

    let file_path = ctx.data_dir.join(file_to_save);
    let data = match fs::read(&file_path).await {
        Ok(data) => data,
        Err(_) => {
            return action.finish(
                ActionStatus::Error,
                Some(format!(
                    "The file to save: {} does not exist -> Abort",
                    file_path.display()
                )),
            );
        }
    };

    // The project's declared version comes from the sibling descriptor.
    // TODO: support descriptor formats other than package.json.
    let manifest_path = ctx.data_dir.join("package.json");
    let manifest_bytes = match fs::read(&manifest_path).await {
        Ok(bytes) => bytes,
        Err(_) => {
            return action.finish(
                ActionStatus::Error,
                Some(format!(
                    "The package.json file does not exist within the project {} -> Abort",
                    job.project
                )),
            );
        }
    };
    let version = match serde_json::from_slice::<PackageManifest>(&manifest_bytes) {
        Ok(PackageManifest { version: Some(v) }) if !v.is_empty() => v,
        // Unparseable JSON and a missing version field report the same way.
        _ => {
            return action.finish(
                ActionStatus::Error,
                Some("Cannot read project version from: package.json -> Abort".to_string()),
            );
        }
    };

    let artifact = Artifact {
        project: job.project.clone(),
        job: job.id.clone(),
        version,
        date: job.created,
        payload: ArtifactPayload {
            name: basename(file_to_save).to_string(),
            data,
        },
    };

    match store.insert(artifact).await {
        Ok(_) => action.finish(
            ActionStatus::Success,
            Some(format!("Artifact {file_to_save} save succesfully")),
        ),
        Err(_) => action.finish(
            ActionStatus::Error,
            Some(format!("Impossible to save artifact: {file_to_save}")),
        ),
    }
}

fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
