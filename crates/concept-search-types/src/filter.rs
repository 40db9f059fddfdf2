//! The display matching predicate.
//!
//! Every storage engine must match through this type so that results do
//! not depend on engine-specific collation or text indexing.

/// Case-insensitive substring filter over concept displays.
///
/// Both sides are lowercased with [`str::to_lowercase`] and compared with
/// a plain `contains`. No whitespace, diacritic or locale normalization is
/// applied. An empty filter matches every display.
///
/// # Examples
///
/// ```
/// use concept_search_types::DisplayFilter;
///
/// let filter = DisplayFilter::new("CONCEPT 4");
/// assert!(filter.matches("Concept 42"));
/// assert!(!filter.matches("Concept 5"));
/// assert!(DisplayFilter::new("").matches("anything"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisplayFilter {
    text: String,
    folded: String,
}

impl DisplayFilter {
    /// Creates a filter for `text`.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let folded = text.to_lowercase();
        Self { text, folded }
    }

    /// The filter text as given by the caller.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns true if the filter matches every display.
    pub fn is_unrestricted(&self) -> bool {
        self.folded.is_empty()
    }

    /// Returns true if `display` contains the filter text, ignoring case.
    pub fn matches(&self, display: &str) -> bool {
        if self.is_unrestricted() {
            return true;
        }
        display.to_lowercase().contains(&self.folded)
    }

    /// Like [`matches`](Self::matches), for a display that is already lowercased.
    pub fn matches_folded(&self, folded_display: &str) -> bool {
        folded_display.contains(&self.folded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_match() {
        let lower = DisplayFilter::new("concept");
        let upper = DisplayFilter::new("CONCEPT");

        for display in ["Concept 1", "CONCEPT 2", "a concept", "Other"] {
            assert_eq!(lower.matches(display), upper.matches(display));
        }
        assert!(lower.matches("My Concept"));
        assert!(!lower.matches("Other"));
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = DisplayFilter::new("");
        assert!(filter.is_unrestricted());
        assert!(filter.matches(""));
        assert!(filter.matches("Concept 1"));
        assert!(filter.matches_folded("concept 1"));
    }

    #[test]
    fn test_no_whitespace_normalization() {
        let filter = DisplayFilter::new("concept  1");
        assert!(!filter.matches("Concept 1"));
        assert!(filter.matches("Concept  10"));
    }

    #[test]
    fn test_wildcard_characters_are_literal() {
        let filter = DisplayFilter::new("50%");
        assert!(filter.matches("Reduced by 50%"));
        assert!(!filter.matches("Reduced by 500"));

        let underscore = DisplayFilter::new("a_b");
        assert!(!underscore.matches("axb"));
        assert!(underscore.matches("A_B"));
    }

    #[test]
    fn test_text_is_preserved() {
        let filter = DisplayFilter::new("Blood Pressure");
        assert_eq!(filter.text(), "Blood Pressure");
        assert!(filter.matches_folded("high blood pressure"));
    }
}
