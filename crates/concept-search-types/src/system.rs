//! Terminology system type.

use crate::VersionKey;

/// A coded terminology identified by its canonical URL.
///
/// The current version pointer may move when a new version is published,
/// so callers resolve it once per search rather than caching it.
///
/// # Examples
///
/// ```
/// use concept_search_types::TerminologySystem;
///
/// let system = TerminologySystem::new("http://loinc.org");
/// assert!(system.current_version_key().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerminologySystem {
    /// Canonical URL, unique across systems.
    pub url: String,
    /// Key of the current version, absent if nothing has been published.
    pub current_version: Option<VersionKey>,
}

impl TerminologySystem {
    /// Creates a system without a current version.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            current_version: None,
        }
    }

    /// Creates a system whose current version is `key`.
    pub fn with_current_version(url: impl Into<String>, key: VersionKey) -> Self {
        Self {
            url: url.into(),
            current_version: Some(key),
        }
    }

    /// Returns the key of the current version, if any.
    pub fn current_version_key(&self) -> Option<VersionKey> {
        self.current_version
    }
}
