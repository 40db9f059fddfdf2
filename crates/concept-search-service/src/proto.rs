//! gRPC messages for the `conceptsearch.ConceptSearch` service.
//!
//! The service stubs (`concept_search_server`, `concept_search_client`) are
//! generated by the build script and included at the bottom of this module.

/// `$concept-search` request.
///
/// `url` and `value` are optional on the wire so that an absent value can
/// be told apart from an empty one.
#[derive(Clone, PartialEq, prost::Message)]
pub struct SearchConceptsRequest {
    /// Canonical URL of the terminology system.
    #[prost(string, optional, tag = "1")]
    pub url: Option<String>,
    /// Display filter text.
    #[prost(string, optional, tag = "2")]
    pub value: Option<String>,
    /// Index of the first result to return.
    #[prost(uint32, tag = "3")]
    pub offset: u32,
    /// Requested page size.
    #[prost(uint32, optional, tag = "4")]
    pub count: Option<u32>,
    /// Whether to compute the total match count (defaults to true).
    #[prost(bool, optional, tag = "5")]
    pub include_total: Option<bool>,
}

/// A `(system, code, display)` triple.
#[derive(Clone, PartialEq, prost::Message)]
pub struct Coding {
    #[prost(string, tag = "1")]
    pub system: String,
    #[prost(string, tag = "2")]
    pub code: String,
    #[prost(string, tag = "3")]
    pub display: String,
}

/// One result entry.
#[derive(Clone, PartialEq, prost::Message)]
pub struct ConceptEntry {
    /// Generated entry identifier.
    #[prost(string, tag = "1")]
    pub id: String,
    /// The matched concept.
    #[prost(message, optional, tag = "2")]
    pub concept: Option<Coding>,
}

/// One page of `$concept-search` results.
#[derive(Clone, PartialEq, prost::Message)]
pub struct SearchConceptsResponse {
    #[prost(message, repeated, tag = "1")]
    pub entries: Vec<ConceptEntry>,
    /// Total number of matches, when requested.
    #[prost(uint64, optional, tag = "2")]
    pub total: Option<u64>,
    /// Index of the first entry of this page.
    #[prost(uint64, tag = "3")]
    pub offset: u64,
    /// Offset to request for the following page, if there is one.
    #[prost(uint64, optional, tag = "4")]
    pub next_offset: Option<u64>,
}

include!(concat!(env!("OUT_DIR"), "/conceptsearch.ConceptSearch.rs"));
