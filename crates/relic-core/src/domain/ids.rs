//! Domain identifiers (strongly-typed IDs).
//!
//! IDs are ULIDs (Universally Unique Lexicographically Sortable Identifiers)
//! wrapped in a phantom-typed `Id<T>` so distinct ID families cannot be mixed
//! up at compile time. ULIDs carry their creation time in the leading bits,
//! so freshly allocated ids sort in allocation order — handy for stable
//! tie-breaking when two artifacts share a date.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use ulid::Ulid;

/// Marker trait for each ID family.
///
/// Provides the prefix used by `Display` (e.g. "artifact-").
pub trait IdMarker: Send + Sync + 'static {
    fn prefix() -> &'static str;
}

/// Generic ID type.
///
/// `T` is `PhantomData`: zero bytes at runtime, a distinct type at compile
/// time.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Id<T: IdMarker> {
    ulid: Ulid,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T: IdMarker> Id<T> {
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self {
            ulid,
            _marker: PhantomData,
        }
    }

    /// Allocate a fresh ID from the current time.
    pub fn generate() -> Self {
        Self::from_ulid(Ulid::new())
    }

    pub fn as_ulid(&self) -> Ulid {
        self.ulid
    }
}

impl<T: IdMarker> From<Ulid> for Id<T> {
    fn from(ulid: Ulid) -> Self {
        Self::from_ulid(ulid)
    }
}

impl<T: IdMarker> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", T::prefix(), self.ulid)
    }
}

/// Marker type for stored artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArtifactMarker {}

impl IdMarker for ArtifactMarker {
    fn prefix() -> &'static str {
        "artifact-"
    }
}

/// Identifier of a persisted artifact record.
///
/// Job ids stay opaque strings: they come from the host CI system and are
/// traceability-only, never an ordering key.
pub type ArtifactId = Id<ArtifactMarker>;
