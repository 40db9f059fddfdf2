//! Terminology version snapshot type.

/// Internal numeric key of a terminology version.
///
/// Keys are assigned by the store and are distinct from the canonical URL
/// and from any human-readable version label.
pub type VersionKey = u64;

/// Metadata describing one immutable version of a terminology system.
///
/// The concepts themselves are owned by the store; this struct only names
/// the snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerminologyVersion {
    /// Internal key of this version.
    pub key: VersionKey,
    /// Canonical URL of the owning system.
    pub system_url: String,
    /// Business version label (e.g. `"2024-03"`), if the publisher gave one.
    pub label: Option<String>,
    /// Number of concepts in the snapshot.
    pub concept_count: usize,
}
