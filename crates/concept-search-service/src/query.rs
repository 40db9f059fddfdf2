//! Count and slice queries against one version snapshot.

use std::sync::Arc;

use concept_search_store::ConceptRepository;
use concept_search_types::{Concept, DisplayFilter, VersionKey};

use crate::error::Result;

/// Executes filtered, code-ordered queries against a repository.
pub struct ConceptQuery<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: ?Sized> Clone for ConceptQuery<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ConceptRepository + ?Sized> ConceptQuery<R> {
    /// Creates a query layer over `repository`.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Counts the concepts of `version` whose display matches `filter`.
    pub fn count_matches(&self, version: VersionKey, filter: &DisplayFilter) -> Result<usize> {
        Ok(self.repository.count_concepts_matching(version, filter)?)
    }

    /// Fetches up to `limit` matches starting at the 0-based `offset`,
    /// ordered by code.
    ///
    /// A `limit` of zero returns an empty list without reaching storage.
    pub fn fetch_page(
        &self,
        version: VersionKey,
        filter: &DisplayFilter,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Concept>> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        Ok(self
            .repository
            .fetch_concepts_matching(version, filter, offset, limit)?)
    }
}
