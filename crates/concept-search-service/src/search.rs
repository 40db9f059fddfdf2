//! The `search` entry point handed to the transport layer.

use std::sync::Arc;

use concept_search_store::ConceptRepository;
use concept_search_types::DisplayFilter;

use crate::error::{Result, SearchError};
use crate::provider::ConceptSearchProvider;
use crate::query::ConceptQuery;
use crate::resolver::resolve_current_version;

/// Starts concept searches against a repository.
pub struct ConceptSearchService<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: ?Sized> Clone for ConceptSearchService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ConceptRepository + ?Sized> ConceptSearchService<R> {
    /// Creates a service reading from `repository`.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validates the parameters, resolves the current version of
    /// `system_url` and returns a provider bound to it.
    ///
    /// An empty `filter_text` is valid and matches every concept; an absent
    /// one is rejected. Parameters are checked before storage is touched.
    ///
    /// # Errors
    /// [`SearchError::BadRequest`] for a missing or blank URL or a missing
    /// filter, otherwise whatever version resolution reports.
    pub fn search(
        &self,
        system_url: Option<&str>,
        filter_text: Option<&str>,
    ) -> Result<ConceptSearchProvider<R>> {
        let system_url = system_url
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| SearchError::BadRequest("Missing required parameter: url".to_string()))?;

        let filter_text = filter_text
            .ok_or_else(|| SearchError::BadRequest("Missing required parameter: value".to_string()))?;

        let version = resolve_current_version(self.repository.as_ref(), system_url)?;

        tracing::debug!(
            url = system_url,
            filter = filter_text,
            version,
            "concept search bound to current version"
        );

        Ok(ConceptSearchProvider::new(
            ConceptQuery::new(Arc::clone(&self.repository)),
            system_url,
            version,
            DisplayFilter::new(filter_text),
        ))
    }
}
