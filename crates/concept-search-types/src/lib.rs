//! # concept-search-types
//!
//! Type definitions for coded terminologies ("code systems").
//!
//! A terminology system is identified by its canonical URL and points at
//! exactly one current version. A version is an immutable snapshot of
//! concepts, each a `(code, display)` pair. Search results wrap a matched
//! concept together with the system URL it was found under.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via serde.
//!   Disable this feature for zero-dependency usage.
//!
//! ## Usage
//!
//! ```rust
//! use concept_search_types::{Concept, DisplayFilter, TerminologySystem};
//!
//! let system = TerminologySystem::with_current_version("http://example.com/cs", 7);
//! assert_eq!(system.current_version_key(), Some(7));
//!
//! let concept = Concept::new("code42", "Concept 42");
//! assert!(DisplayFilter::new("concept 4").matches(&concept.display));
//! ```

#![warn(missing_docs)]

mod coding;
mod concept;
mod filter;
mod system;
mod version;

// Re-export all public types at crate root
pub use coding::{Coding, SearchResult};
pub use concept::Concept;
pub use filter::DisplayFilter;
pub use system::TerminologySystem;
pub use version::{TerminologyVersion, VersionKey};
