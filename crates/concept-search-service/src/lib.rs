//! # concept-search-service
//!
//! Paged substring search over the concepts of a terminology system's
//! current version, served over gRPC.
//!
//! A search is started with [`ConceptSearchService::search`], which
//! resolves the system's current version and returns a
//! [`ConceptSearchProvider`]. The provider answers "how many matches" and
//! "give me matches `a..b`" on demand through [`PagedResults`], re-running
//! its query for every call rather than holding results in memory.
//!
//! ```ignore
//! use std::sync::Arc;
//! use concept_search_service::{ConceptSearchService, PagedResults};
//! use concept_search_store::TerminologyStore;
//!
//! let service = ConceptSearchService::new(Arc::new(store));
//! let provider = service.search(Some("http://example.com/cs"), Some("concept"))?;
//! let total = provider.total_count()?;
//! let first_ten = provider.results_in_range(0, 10)?;
//! ```

#![warn(missing_docs)]

#[allow(missing_docs)]
pub mod proto;

pub mod config;
mod error;
pub mod page;
mod projection;
mod provider;
mod query;
mod resolver;
mod search;
mod server;

pub use config::ServerConfig;
pub use error::{Result, SearchError};
pub use page::{assemble_page, Page, PageRequest, PagingConfig};
pub use projection::project;
pub use provider::{ConceptSearchProvider, PagedResults};
pub use query::ConceptQuery;
pub use resolver::resolve_current_version;
pub use search::ConceptSearchService;
pub use server::SearchServer;
