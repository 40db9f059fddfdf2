//! Wire-level result types.

use crate::Concept;

/// A `(system, code, display)` triple identifying a concept in a system.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coding {
    /// Canonical URL of the terminology system.
    pub system: String,
    /// Concept code.
    pub code: String,
    /// Concept display.
    pub display: String,
}

impl Coding {
    /// Creates a coding from its parts.
    pub fn new(
        system: impl Into<String>,
        code: impl Into<String>,
        display: impl Into<String>,
    ) -> Self {
        Self {
            system: system.into(),
            code: code.into(),
            display: display.into(),
        }
    }

    /// Creates a coding for `concept` within the system at `system_url`.
    pub fn from_concept(system_url: &str, concept: Concept) -> Self {
        Self::new(system_url, concept.code, concept.display)
    }
}

/// One matched concept, as handed to the transport layer.
///
/// The `id` is generated per result and carries no meaning beyond
/// identifying the entry in a serialized page.
///
/// Serializes as:
///
/// ```json
/// {"id": "…", "concept": {"system": "…", "code": "…", "display": "…"}}
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Generated identifier of this entry.
    pub id: String,
    /// The matched concept in the context of the searched system.
    pub concept: Coding,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coding_from_concept() {
        let concept = Concept::new("code1", "Concept 1");
        let coding = Coding::from_concept("http://example.com/cs", concept);

        assert_eq!(coding.system, "http://example.com/cs");
        assert_eq!(coding.code, "code1");
        assert_eq!(coding.display, "Concept 1");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_search_result_json_shape() {
        let result = SearchResult {
            id: "abc".to_string(),
            concept: Coding::new("http://example.com/cs", "code1", "Concept 1"),
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["id"], "abc");
        assert_eq!(value["concept"]["system"], "http://example.com/cs");
        assert_eq!(value["concept"]["code"], "code1");
        assert_eq!(value["concept"]["display"], "Concept 1");
        assert_eq!(value.as_object().unwrap().len(), 2);
    }
}
