//! Error types for concept search.

use concept_search_store::StoreError;
use thiserror::Error;

/// Result type for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors surfaced to the transport layer.
///
/// None of these are handled by returning a shorter page: a failed call
/// yields no results at all.
#[derive(Error, Debug)]
pub enum SearchError {
    /// A required parameter is missing or blank.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The system is unknown or has no current version.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The terminology store failed to answer.
    #[error("Storage failure: {0}")]
    StorageFailure(#[from] StoreError),
}

impl SearchError {
    /// Returns true if repeating the same call might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, SearchError::StorageFailure(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_storage_failures_are_retryable() {
        assert!(!SearchError::BadRequest("url".to_string()).is_retryable());
        assert!(!SearchError::NotFound("url".to_string()).is_retryable());
        assert!(SearchError::from(StoreError::UnknownVersion(1)).is_retryable());
    }

    #[test]
    fn test_messages() {
        let err = SearchError::NotFound("No CodeSystem found for url: http://x".to_string());
        assert_eq!(err.to_string(), "Not found: No CodeSystem found for url: http://x");

        let err = SearchError::from(StoreError::Unavailable("down".to_string()));
        assert_eq!(
            err.to_string(),
            "Storage failure: Terminology store unavailable: down"
        );
    }
}
