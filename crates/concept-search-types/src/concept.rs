//! Concept type.
//!
//! This module provides the `Concept` struct, a single `(code, display)`
//! entry of a terminology version.

/// A concept belonging to one terminology version.
///
/// Codes are unique within a version and give the version its stable
/// ordering. The display is free text and is what searches match against.
///
/// # Examples
///
/// ```
/// use concept_search_types::Concept;
///
/// let concept = Concept::new("8480-6", "Systolic blood pressure");
/// assert_eq!(concept.code, "8480-6");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Concept {
    /// Short identifier, unique within its version.
    pub code: String,
    /// Human-readable label.
    pub display: String,
}

impl Concept {
    /// Creates a concept from a code and a display.
    pub fn new(code: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            display: display.into(),
        }
    }
}
