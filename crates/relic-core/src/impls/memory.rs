//! In-memory artifact store.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Artifact, ArtifactId, ArtifactMeta};
use crate::ports::{ArtifactStore, StoreError};

/// In-memory store state.
///
/// Records keep insertion order; every date sort is a stable sort over this
/// vector, which is what gives the port its tie-break guarantee.
#[derive(Default)]
struct StoreState {
    records: Vec<(ArtifactId, Artifact)>,
}

impl StoreState {
    fn for_project<'a>(
        &'a self,
        project: &'a str,
    ) -> impl Iterator<Item = &'a (ArtifactId, Artifact)> {
        self.records.iter().filter(move |(_, a)| a.project == project)
    }
}

/// In-memory [`ArtifactStore`] for tests and the demo CLI.
#[derive(Default)]
pub struct InMemoryArtifactStore {
    state: Mutex<StoreState>,
}

impl InMemoryArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ArtifactStore for InMemoryArtifactStore {
    async fn insert(&self, artifact: Artifact) -> Result<ArtifactId, StoreError> {
        let id = ArtifactId::generate();
        let mut state = self.state.lock().await;
        state.records.push((id, artifact));
        Ok(id)
    }

    async fn count_by_project(&self, project: &str) -> Result<usize, StoreError> {
        let state = self.state.lock().await;
        Ok(state.for_project(project).count())
    }

    async fn find_oldest(
        &self,
        project: &str,
        limit: usize,
    ) -> Result<Vec<ArtifactId>, StoreError> {
        let state = self.state.lock().await;
        let mut entries: Vec<_> = state
            .for_project(project)
            .map(|(id, a)| (*id, a.date))
            .collect();
        // Stable: equal dates keep insertion order.
        entries.sort_by_key(|(_, date)| *date);
        Ok(entries.into_iter().take(limit).map(|(id, _)| id).collect())
    }

    async fn delete_by_ids(&self, ids: &[ArtifactId]) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;
        state.records.retain(|(id, _)| !ids.contains(id));
        Ok(())
    }

    async fn find_recent(&self, project: &str) -> Result<Vec<ArtifactMeta>, StoreError> {
        let state = self.state.lock().await;
        let mut metas: Vec<ArtifactMeta> = state
            .for_project(project)
            .map(|(id, a)| ArtifactMeta::of(*id, a))
            .collect();
        metas.sort_by_key(|m| m.date);
        metas.reverse();
        Ok(metas)
    }

    async fn find_latest(&self, project: &str) -> Result<Option<ArtifactMeta>, StoreError> {
        Ok(self.find_recent(project).await?.into_iter().next())
    }

    async fn fetch(
        &self,
        project: &str,
        id: ArtifactId,
    ) -> Result<Option<Artifact>, StoreError> {
        let state = self.state.lock().await;
        Ok(state
            .records
            .iter()
            .find(|(record_id, a)| *record_id == id && a.project == project)
            .map(|(_, a)| a.clone()))
    }
}
