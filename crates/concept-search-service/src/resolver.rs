//! Canonical URL to current version resolution.

use concept_search_store::ConceptRepository;
use concept_search_types::VersionKey;

use crate::error::{Result, SearchError};

/// Resolves `system_url` to the key of its current version.
///
/// The pointer is read fresh on every call; a publish between two searches
/// is picked up by the second one.
///
/// # Errors
/// [`SearchError::NotFound`] if the system is unknown or has no current
/// version, [`SearchError::StorageFailure`] if the lookup itself fails.
pub fn resolve_current_version<R>(repository: &R, system_url: &str) -> Result<VersionKey>
where
    R: ConceptRepository + ?Sized,
{
    let system = repository.find_system_by_url(system_url)?.ok_or_else(|| {
        tracing::debug!(url = system_url, "no terminology system registered");
        SearchError::NotFound(format!("No CodeSystem found for url: {}", system_url))
    })?;

    system.current_version_key().ok_or_else(|| {
        tracing::debug!(url = system_url, "terminology system has no current version");
        SearchError::NotFound(format!("CodeSystem has no current version: {}", system_url))
    })
}
