//! Concept to wire result projection.

use concept_search_types::{Coding, Concept, SearchResult};
use uuid::Uuid;

/// Wraps `concept` as a result under `system_url`.
///
/// Each call assigns a fresh random identifier, unrelated to the concept.
pub fn project(concept: Concept, system_url: &str) -> SearchResult {
    SearchResult {
        id: Uuid::new_v4().to_string(),
        concept: Coding::from_concept(system_url, concept),
    }
}
