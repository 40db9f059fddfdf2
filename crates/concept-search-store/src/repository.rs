//! The read-only storage boundary used by the search core.

use concept_search_types::{Concept, DisplayFilter, TerminologySystem, VersionKey};

use crate::types::StoreResult;

/// Read access to terminology systems and their concept snapshots.
///
/// Implementations must match displays through [`DisplayFilter`] and must
/// order fetched concepts by code ascending (byte-wise string order), so
/// that the same `(version, filter, offset, limit)` always yields the same
/// slice. An `offset` past the last match yields an empty list.
pub trait ConceptRepository {
    /// Looks up a system by its canonical URL.
    fn find_system_by_url(&self, url: &str) -> StoreResult<Option<TerminologySystem>>;

    /// Counts the concepts of `version` whose display matches `filter`.
    fn count_concepts_matching(
        &self,
        version: VersionKey,
        filter: &DisplayFilter,
    ) -> StoreResult<usize>;

    /// Fetches up to `limit` matching concepts of `version`, skipping the
    /// first `offset` matches.
    fn fetch_concepts_matching(
        &self,
        version: VersionKey,
        filter: &DisplayFilter,
        offset: usize,
        limit: usize,
    ) -> StoreResult<Vec<Concept>>;
}
