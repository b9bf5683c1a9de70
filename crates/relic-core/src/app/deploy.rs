//! Deploy pipeline: save, then clean, strictly in that order.

use std::sync::Arc;

use crate::domain::{ActionError, DeployJob, RepositoryConfig};
use crate::ports::ArtifactStore;

use super::clean::clean_artifacts;
use super::context::JobContext;
use super::save::save_artifact;

/// Outcome handed back to the host once the deploy step is over.
///
/// `handled` is always `true`: the plugin fully handles its deploy step
/// regardless of outcome. A non-`None` `error` signals failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployCompletion {
    pub error: Option<String>,
    pub handled: bool,
}

impl DeployCompletion {
    fn ok() -> Self {
        Self {
            error: None,
            handled: true,
        }
    }

    fn failed(message: Option<String>) -> Self {
        Self {
            error: message,
            handled: true,
        }
    }
}

/// The deploy entry point. Holds the store handle explicitly — construct one
/// per store, call [`Deployer::deploy`] per job.
pub struct Deployer {
    store: Arc<dyn ArtifactStore>,
}

impl Deployer {
    pub fn new(store: Arc<dyn ArtifactStore>) -> Self {
        Self { store }
    }

    /// Run save, and on success chain into clean. Clean never starts before
    /// the save outcome is known; a failed save short-circuits the pipeline
    /// and its message becomes the completion error.
    ///
    /// `ActionError` only surfaces on lifecycle misuse inside this crate, so
    /// callers may treat it as a bug rather than a runtime condition.
    pub async fn deploy(
        &self,
        ctx: &JobContext,
        config: &RepositoryConfig,
        job: &DeployJob,
    ) -> Result<DeployCompletion, ActionError> {
        let save = save_artifact(self.store.as_ref(), ctx, config, job).await?;
        if !save.status.is_success() {
            return Ok(DeployCompletion::failed(save.message));
        }

        match clean_artifacts(self.store.as_ref(), ctx, config, job).await? {
            // Cleaning disabled: the save alone completes the deploy.
            None => Ok(DeployCompletion::ok()),
            Some(report) if report.status.is_success() => Ok(DeployCompletion::ok()),
            Some(report) => Ok(DeployCompletion::failed(report.message)),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use tempfile::TempDir;

    use crate::app::support::{failing_store, seed_artifact, test_context, write_workspace};
    use crate::domain::StatusEvent;
    use crate::impls::memory::InMemoryArtifactStore;

    use super::*;

    const PROJECT: &str = "my-org/my-app";

    fn job() -> DeployJob {
        DeployJob::new(PROJECT, "job-42", Utc::now())
    }

    #[tokio::test]
    async fn scenario_a_save_then_clean_two_oldest() {
        let dir = TempDir::new().unwrap();
        write_workspace(dir.path(), "build.zip", b"zip bytes", "1.2.3");
        let (ctx, sink) = test_context(dir.path());

        let store = Arc::new(InMemoryArtifactStore::new());
        let now = Utc::now();
        for i in 0..6 {
            seed_artifact(
                store.as_ref(),
                PROJECT,
                &format!("old-{i}"),
                now - Duration::hours(6 - i),
            )
            .await;
        }
        let config = RepositoryConfig::new("build.zip").with_max_builds(5);

        let deployer = Deployer::new(store.clone());
        let completion = deployer.deploy(&ctx, &config, &job()).await.unwrap();

        // Save brought the count to 7; clean trims back to the cap.
        assert_eq!(completion, DeployCompletion { error: None, handled: true });
        assert_eq!(store.count_by_project(PROJECT).await.unwrap(), 5);

        // Both actions ran: two start/done telemetry pairs.
        let names: Vec<&str> = sink.events().iter().map(StatusEvent::name).collect();
        assert_eq!(
            names,
            vec![
                "command.start",
                "command.done",
                "command.start",
                "command.done",
            ]
        );

        // The final routed message is the clean success.
        assert_eq!(sink.logs().last().map(String::as_str), Some("Cleaning succesfully"));

        // The oldest two seeds are gone, the new artifact is retained.
        let remaining: Vec<String> = store
            .find_recent(PROJECT)
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.job)
            .collect();
        assert!(!remaining.contains(&"old-0".to_string()));
        assert!(!remaining.contains(&"old-1".to_string()));
        assert!(remaining.contains(&"job-42".to_string()));
    }

    #[tokio::test]
    async fn scenario_b_missing_version_never_reaches_clean() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("build.zip"), b"bytes").unwrap();
        std::fs::write(dir.path().join("package.json"), br#"{"name": "my-app"}"#).unwrap();
        let (ctx, sink) = test_context(dir.path());
        let store = Arc::new(InMemoryArtifactStore::new());
        let config = RepositoryConfig::new("build.zip").with_max_builds(5);

        let deployer = Deployer::new(store.clone());
        let completion = deployer.deploy(&ctx, &config, &job()).await.unwrap();

        assert_eq!(
            completion.error.as_deref(),
            Some("Cannot read project version from: package.json -> Abort")
        );
        assert!(completion.handled);

        // Only the save action emitted telemetry.
        let names: Vec<&str> = sink.events().iter().map(StatusEvent::name).collect();
        assert_eq!(names, vec!["command.start", "command.done"]);
    }

    #[tokio::test]
    async fn scenario_c_insert_failure_never_reaches_clean() {
        let dir = TempDir::new().unwrap();
        write_workspace(dir.path(), "build.zip", b"bytes", "1.2.3");
        let (ctx, sink) = test_context(dir.path());
        let store = Arc::new(failing_store().fail_insert());
        let config = RepositoryConfig::new("build.zip").with_max_builds(5);

        let deployer = Deployer::new(store);
        let completion = deployer.deploy(&ctx, &config, &job()).await.unwrap();

        assert_eq!(
            completion.error.as_deref(),
            Some("Impossible to save artifact: build.zip")
        );

        let names: Vec<&str> = sink.events().iter().map(StatusEvent::name).collect();
        assert_eq!(names, vec!["command.start", "command.done"]);
    }

    #[tokio::test]
    async fn clean_success_reports_no_error_despite_message() {
        let dir = TempDir::new().unwrap();
        write_workspace(dir.path(), "build.zip", b"bytes", "1.2.3");
        let (ctx, _sink) = test_context(dir.path());
        let store = Arc::new(InMemoryArtifactStore::new());
        let config = RepositoryConfig::new("build.zip").with_max_builds(5);

        let deployer = Deployer::new(store);
        let completion = deployer.deploy(&ctx, &config, &job()).await.unwrap();

        // Clean finished "Nothing to clean", which is not an error outward.
        assert_eq!(completion.error, None);
        assert!(completion.handled);
    }

    #[tokio::test]
    async fn disabled_cleaning_still_completes() {
        let dir = TempDir::new().unwrap();
        write_workspace(dir.path(), "build.zip", b"bytes", "1.2.3");
        let (ctx, sink) = test_context(dir.path());
        let store = Arc::new(InMemoryArtifactStore::new());
        let config = RepositoryConfig::new("build.zip").with_max_builds(0);

        let deployer = Deployer::new(store.clone());
        let completion = deployer.deploy(&ctx, &config, &job()).await.unwrap();

        assert_eq!(completion.error, None);
        assert_eq!(store.count_by_project(PROJECT).await.unwrap(), 1);

        // Only save telemetry: the clean fast path emits nothing.
        let names: Vec<&str> = sink.events().iter().map(StatusEvent::name).collect();
        assert_eq!(names, vec!["command.start", "command.done"]);
    }

    #[tokio::test]
    async fn clean_failure_surfaces_as_completion_error() {
        let dir = TempDir::new().unwrap();
        write_workspace(dir.path(), "build.zip", b"bytes", "1.2.3");
        let (ctx, _sink) = test_context(dir.path());
        let store = Arc::new(failing_store().fail_count());
        let config = RepositoryConfig::new("build.zip").with_max_builds(5);

        let deployer = Deployer::new(store);
        let completion = deployer.deploy(&ctx, &config, &job()).await.unwrap();

        assert_eq!(
            completion.error.as_deref(),
            Some("Cannot determine number of artifact to clean -> Abort")
        );
    }
}
