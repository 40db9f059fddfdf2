//! Lazy, index-addressable search results.
//!
//! A provider is bound to one `(system, version, filter)` triple and keeps
//! nothing else. Every call re-runs its count or slice query, so a provider
//! can be held across requests and queried for any range in any order.
//! That is safe because the version it is bound to never changes.

use concept_search_store::ConceptRepository;
use concept_search_types::{DisplayFilter, SearchResult, VersionKey};

use crate::error::Result;
use crate::projection::project;
use crate::query::ConceptQuery;

/// Count and range access to a result set that is never materialized.
pub trait PagedResults {
    /// Total number of results, or `None` if the provider does not compute it.
    fn total_count(&self) -> Result<Option<usize>>;

    /// Results at indices `from_index..to_index`, in order.
    ///
    /// Returns an empty list when `to_index <= from_index`.
    fn results_in_range(&self, from_index: usize, to_index: usize) -> Result<Vec<SearchResult>>;

    /// Continuation token identifying this search across calls.
    ///
    /// `None` means callers re-query by offset for every page.
    fn stable_identity(&self) -> Option<String> {
        None
    }

    /// Page size the provider would like, if it has a preference.
    fn preferred_page_size(&self) -> Option<usize> {
        None
    }
}

/// Concept search results for one system version and display filter.
pub struct ConceptSearchProvider<R: ?Sized> {
    query: ConceptQuery<R>,
    system_url: String,
    version: VersionKey,
    filter: DisplayFilter,
}

impl<R: ?Sized> Clone for ConceptSearchProvider<R> {
    fn clone(&self) -> Self {
        Self {
            query: self.query.clone(),
            system_url: self.system_url.clone(),
            version: self.version,
            filter: self.filter.clone(),
        }
    }
}

impl<R: ?Sized> std::fmt::Debug for ConceptSearchProvider<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConceptSearchProvider")
            .field("system_url", &self.system_url)
            .field("version", &self.version)
            .field("filter", &self.filter.text())
            .finish()
    }
}

impl<R: ConceptRepository + ?Sized> ConceptSearchProvider<R> {
    /// Binds a provider to `version` of `system_url` and `filter`.
    pub fn new(
        query: ConceptQuery<R>,
        system_url: impl Into<String>,
        version: VersionKey,
        filter: DisplayFilter,
    ) -> Self {
        Self {
            query,
            system_url: system_url.into(),
            version,
            filter,
        }
    }

    /// Canonical URL the search runs under.
    pub fn system_url(&self) -> &str {
        &self.system_url
    }

    /// Key of the version the search is bound to.
    pub fn version_key(&self) -> VersionKey {
        self.version
    }

    /// The display filter text.
    pub fn filter_text(&self) -> &str {
        self.filter.text()
    }
}

impl<R: ConceptRepository + ?Sized> PagedResults for ConceptSearchProvider<R> {
    fn total_count(&self) -> Result<Option<usize>> {
        self.query
            .count_matches(self.version, &self.filter)
            .map(Some)
    }

    fn results_in_range(&self, from_index: usize, to_index: usize) -> Result<Vec<SearchResult>> {
        if to_index <= from_index {
            return Ok(Vec::new());
        }

        let concepts = self
            .query
            .fetch_page(self.version, &self.filter, from_index, to_index - from_index)?;

        Ok(concepts
            .into_iter()
            .map(|concept| project(concept, &self.system_url))
            .collect())
    }
}
