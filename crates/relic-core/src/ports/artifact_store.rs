//! ArtifactStore port: the persistent, ordered artifact collection.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Artifact, ArtifactId, ArtifactMeta};

/// Failure reported by the persistence collaborator.
///
/// The core never retries: a store failure is fatal to the current save or
/// clean invocation and surfaces once through the completion contract.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store operation failed: {0}")]
    Backend(String),
}

/// Ordered collection of artifact records keyed by project.
///
/// Design intent:
/// - The store exclusively owns persisted records; the save operation
///   constructs an [`Artifact`] and hands it over, keeping no reference.
/// - Ordering is always by `date` (the job creation time), with insertion
///   order as the stable tie-break. That guarantee is load-bearing: cleaning
///   deletes ascending by date, so the retained set is always the most
///   recently created records.
/// - No atomic "delete oldest beyond N" is required; the count→fetch→delete
///   sequence is non-atomic by design (single writer per project assumed).
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Persist one record, returning its assigned id.
    async fn insert(&self, artifact: Artifact) -> Result<ArtifactId, StoreError>;

    /// Number of records stored for `project`.
    async fn count_by_project(&self, project: &str) -> Result<usize, StoreError>;

    /// Ids of the `limit` oldest records for `project`, ascending by date,
    /// insertion order breaking ties.
    async fn find_oldest(
        &self,
        project: &str,
        limit: usize,
    ) -> Result<Vec<ArtifactId>, StoreError>;

    /// Bulk-remove records by id. Unknown ids are ignored.
    async fn delete_by_ids(&self, ids: &[ArtifactId]) -> Result<(), StoreError>;

    /// Listing view for `project`, newest first, payloads omitted.
    async fn find_recent(&self, project: &str) -> Result<Vec<ArtifactMeta>, StoreError>;

    /// The newest record for `project`, payload omitted.
    async fn find_latest(&self, project: &str) -> Result<Option<ArtifactMeta>, StoreError>;

    /// Full record (payload included) for download, scoped to `project`.
    async fn fetch(
        &self,
        project: &str,
        id: ArtifactId,
    ) -> Result<Option<Artifact>, StoreError>;
}
