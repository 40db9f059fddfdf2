//! In-memory terminology store.
//!
//! Versions are published whole and never modified afterwards; publishing
//! only moves the owning system's current-version pointer. Readers clone
//! an `Arc` to the snapshot they need and query it without holding the
//! store lock.
//!
//! ```ignore
//! let store = TerminologyStore::new();
//! let key = store.publish_version("http://example.com/cs", None, concepts)?;
//!
//! let filter = DisplayFilter::new("concept");
//! let total = store.count_concepts_matching(key, &filter)?;
//! let first_page = store.fetch_concepts_matching(key, &filter, 0, 10)?;
//! ```

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use concept_search_types::{Concept, DisplayFilter, TerminologySystem, TerminologyVersion, VersionKey};

use crate::repository::ConceptRepository;
use crate::types::{StoreError, StoreResult};

/// An immutable concept snapshot.
struct VersionSnapshot {
    meta: TerminologyVersion,
    /// Concepts sorted by code.
    concepts: Vec<Concept>,
    /// Lowercased displays, parallel to `concepts`.
    folded: Vec<String>,
}

impl VersionSnapshot {
    fn count_matching(&self, filter: &DisplayFilter) -> usize {
        if filter.is_unrestricted() {
            return self.concepts.len();
        }

        #[cfg(feature = "parallel")]
        {
            self.folded
                .par_iter()
                .filter(|display| filter.matches_folded(display))
                .count()
        }

        #[cfg(not(feature = "parallel"))]
        {
            self.folded
                .iter()
                .filter(|display| filter.matches_folded(display))
                .count()
        }
    }

    fn fetch_matching(&self, filter: &DisplayFilter, offset: usize, limit: usize) -> Vec<Concept> {
        if limit == 0 {
            return Vec::new();
        }

        if filter.is_unrestricted() {
            return self
                .concepts
                .iter()
                .skip(offset)
                .take(limit)
                .cloned()
                .collect();
        }

        self.concepts
            .iter()
            .zip(&self.folded)
            .filter(|(_, display)| filter.matches_folded(display))
            .skip(offset)
            .take(limit)
            .map(|(concept, _)| concept.clone())
            .collect()
    }
}

/// A version whose codes are sorted and known to be unique, ready to publish.
pub(crate) struct PreparedVersion {
    url: String,
    label: Option<String>,
    concepts: Vec<Concept>,
    folded: Vec<String>,
}

impl PreparedVersion {
    /// Sorts `concepts` by code and rejects duplicate codes.
    pub(crate) fn new(url: &str, label: Option<String>, mut concepts: Vec<Concept>) -> StoreResult<Self> {
        concepts.sort_by(|a, b| a.code.cmp(&b.code));

        if let Some(pair) = concepts.windows(2).find(|pair| pair[0].code == pair[1].code) {
            return Err(StoreError::DuplicateCode {
                url: url.to_string(),
                code: pair[0].code.clone(),
            });
        }

        let folded = concepts.iter().map(|c| c.display.to_lowercase()).collect();

        Ok(Self {
            url: url.to_string(),
            label,
            concepts,
            folded,
        })
    }

    pub(crate) fn concept_count(&self) -> usize {
        self.concepts.len()
    }
}

#[derive(Default)]
struct StoreInner {
    systems: HashMap<String, TerminologySystem>,
    versions: HashMap<VersionKey, Arc<VersionSnapshot>>,
    last_key: VersionKey,
}

impl StoreInner {
    fn publish(&mut self, prepared: PreparedVersion) -> VersionKey {
        let key = self.last_key + 1;

        let snapshot = VersionSnapshot {
            meta: TerminologyVersion {
                key,
                system_url: prepared.url.clone(),
                label: prepared.label,
                concept_count: prepared.concepts.len(),
            },
            concepts: prepared.concepts,
            folded: prepared.folded,
        };

        self.last_key = key;
        self.versions.insert(key, Arc::new(snapshot));
        self.systems
            .entry(prepared.url.clone())
            .or_insert_with(|| TerminologySystem::new(prepared.url))
            .current_version = Some(key);

        key
    }
}

/// Append-only in-memory store of terminology versions.
///
/// `TerminologyStore` is `Send + Sync`; share it behind an `Arc`.
#[derive(Default)]
pub struct TerminologyStore {
    inner: RwLock<StoreInner>,
}

impl std::fmt::Debug for TerminologyStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug = f.debug_struct("TerminologyStore");
        match self.inner.read() {
            Ok(inner) => debug
                .field("systems", &inner.systems.len())
                .field("versions", &inner.versions.len())
                .field("last_key", &inner.last_key),
            Err(_) => debug.field("poisoned", &true),
        };
        debug.finish()
    }
}

impl TerminologyStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, StoreInner>> {
        self.inner
            .read()
            .map_err(|_| StoreError::Unavailable("terminology store lock poisoned".to_string()))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, StoreInner>> {
        self.inner
            .write()
            .map_err(|_| StoreError::Unavailable("terminology store lock poisoned".to_string()))
    }

    fn snapshot(&self, key: VersionKey) -> StoreResult<Arc<VersionSnapshot>> {
        self.read()?
            .versions
            .get(&key)
            .cloned()
            .ok_or(StoreError::UnknownVersion(key))
    }

    /// Registers a system with no current version.
    ///
    /// Does nothing if the system is already known.
    pub fn register_system(&self, url: &str) -> StoreResult<()> {
        self.write()?
            .systems
            .entry(url.to_string())
            .or_insert_with(|| TerminologySystem::new(url));
        Ok(())
    }

    /// Publishes `concepts` as a new version of `url` and makes it current.
    ///
    /// The system is registered if it is not known yet. Previous versions
    /// stay addressable by key.
    ///
    /// # Errors
    /// Returns [`StoreError::DuplicateCode`] if two concepts share a code.
    pub fn publish_version(
        &self,
        url: &str,
        label: Option<String>,
        concepts: Vec<Concept>,
    ) -> StoreResult<VersionKey> {
        let prepared = PreparedVersion::new(url, label, concepts)?;
        Ok(self.write()?.publish(prepared))
    }

    /// Publishes already validated versions in order, under one lock.
    ///
    /// Either every version becomes visible or, if the lock is poisoned,
    /// none does.
    pub(crate) fn publish_prepared(&self, batch: Vec<PreparedVersion>) -> StoreResult<Vec<VersionKey>> {
        let mut inner = self.write()?;
        Ok(batch.into_iter().map(|prepared| inner.publish(prepared)).collect())
    }

    /// Returns the metadata of a version.
    pub fn version(&self, key: VersionKey) -> StoreResult<Option<TerminologyVersion>> {
        Ok(self.read()?.versions.get(&key).map(|s| s.meta.clone()))
    }

    // Statistics

    /// Returns the number of known systems.
    pub fn system_count(&self) -> StoreResult<usize> {
        Ok(self.read()?.systems.len())
    }

    /// Returns the number of published versions.
    pub fn version_count(&self) -> StoreResult<usize> {
        Ok(self.read()?.versions.len())
    }

    /// Returns the number of concepts across current versions only.
    pub fn current_concept_count(&self) -> StoreResult<usize> {
        let inner = self.read()?;
        Ok(inner
            .systems
            .values()
            .filter_map(|s| s.current_version)
            .filter_map(|key| inner.versions.get(&key))
            .map(|s| s.concepts.len())
            .sum())
    }
}

impl ConceptRepository for TerminologyStore {
    fn find_system_by_url(&self, url: &str) -> StoreResult<Option<TerminologySystem>> {
        Ok(self.read()?.systems.get(url).cloned())
    }

    fn count_concepts_matching(
        &self,
        version: VersionKey,
        filter: &DisplayFilter,
    ) -> StoreResult<usize> {
        Ok(self.snapshot(version)?.count_matching(filter))
    }

    fn fetch_concepts_matching(
        &self,
        version: VersionKey,
        filter: &DisplayFilter,
        offset: usize,
        limit: usize,
    ) -> StoreResult<Vec<Concept>> {
        Ok(self.snapshot(version)?.fetch_matching(filter, offset, limit))
    }
}
