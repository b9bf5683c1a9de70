//! Shared fixtures for the operation tests: a recording context, a workspace
//! builder, and a fail-injecting store wrapper.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Artifact, ArtifactId, ArtifactMeta, ArtifactPayload};
use crate::impls::memory::InMemoryArtifactStore;
use crate::impls::recording::RecordingSink;
use crate::ports::{ArtifactStore, StoreError};

use super::context::JobContext;

pub(crate) fn test_context(data_dir: &Path) -> (JobContext, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let ctx = JobContext::new(
        data_dir,
        "relic-test-plugin",
        sink.clone(),
        sink.clone(),
        sink.clone(),
    );
    (ctx, sink)
}

/// Lay out a job workspace: the build output plus a package.json declaring
/// `version`.
pub(crate) fn write_workspace(dir: &Path, file: &str, bytes: &[u8], version: &str) {
    let file_path = dir.join(file);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&file_path, bytes).unwrap();
    std::fs::write(
        dir.join("package.json"),
        format!(r#"{{"name": "my-app", "version": "{version}"}}"#),
    )
    .unwrap();
}

pub(crate) async fn seed_artifact(
    store: &dyn ArtifactStore,
    project: &str,
    job: &str,
    date: DateTime<Utc>,
) -> ArtifactId {
    store
        .insert(Artifact {
            project: project.to_string(),
            job: job.to_string(),
            version: "0.0.1".to_string(),
            date,
            payload: ArtifactPayload {
                name: "build.zip".to_string(),
                data: b"seed".to_vec(),
            },
        })
        .await
        .unwrap()
}

pub(crate) fn failing_store() -> FailingStore {
    FailingStore::default()
}

/// Store wrapper that fails selected operations, standing in for a broken
/// persistence backend. Everything else delegates to an in-memory store.
#[derive(Default)]
pub(crate) struct FailingStore {
    inner: InMemoryArtifactStore,
    fail_insert: bool,
    fail_count: bool,
    fail_find_oldest: bool,
    fail_delete: bool,
}

impl FailingStore {
    pub(crate) fn fail_insert(mut self) -> Self {
        self.fail_insert = true;
        self
    }

    pub(crate) fn fail_count(mut self) -> Self {
        self.fail_count = true;
        self
    }

    pub(crate) fn fail_find_oldest(mut self) -> Self {
        self.fail_find_oldest = true;
        self
    }

    pub(crate) fn fail_delete(mut self) -> Self {
        self.fail_delete = true;
        self
    }

    fn injected() -> StoreError {
        StoreError::Backend("injected failure".to_string())
    }
}

#[async_trait]
impl ArtifactStore for FailingStore {
    async fn insert(&self, artifact: Artifact) -> Result<ArtifactId, StoreError> {
        if self.fail_insert {
            return Err(Self::injected());
        }
        self.inner.insert(artifact).await
    }

    async fn count_by_project(&self, project: &str) -> Result<usize, StoreError> {
        if self.fail_count {
            return Err(Self::injected());
        }
        self.inner.count_by_project(project).await
    }

    async fn find_oldest(
        &self,
        project: &str,
        limit: usize,
    ) -> Result<Vec<ArtifactId>, StoreError> {
        if self.fail_find_oldest {
            return Err(Self::injected());
        }
        self.inner.find_oldest(project, limit).await
    }

    async fn delete_by_ids(&self, ids: &[ArtifactId]) -> Result<(), StoreError> {
        if self.fail_delete {
            return Err(Self::injected());
        }
        self.inner.delete_by_ids(ids).await
    }

    async fn find_recent(&self, project: &str) -> Result<Vec<ArtifactMeta>, StoreError> {
        self.inner.find_recent(project).await
    }

    async fn find_latest(&self, project: &str) -> Result<Option<ArtifactMeta>, StoreError> {
        self.inner.find_latest(project).await
    }

    async fn fetch(
        &self,
        project: &str,
        id: ArtifactId,
    ) -> Result<Option<Artifact>, StoreError> {
        self.inner.fetch(project, id).await
    }
}
