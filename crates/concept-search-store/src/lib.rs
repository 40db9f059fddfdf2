//! # concept-search-store
//!
//! Storage side of concept search: the [`ConceptRepository`] boundary the
//! search core reads through, an append-only in-memory
//! [`TerminologyStore`] implementing it, and a loader that fills the store
//! from tab-delimited concept files listed in a `terminologies.json`
//! manifest.
//!
//! ```ignore
//! use concept_search_store::{load_directory, TerminologyStore};
//!
//! let store = TerminologyStore::new();
//! let stats = load_directory(&store, "./data")?;
//! println!("loaded {} concepts", stats.concepts);
//! ```

#![warn(missing_docs)]

mod concept;
mod loader;
mod parser;
mod repository;
mod store;
mod types;

pub use loader::{discover_terminology_files, load_directory, MANIFEST_FILE_NAME};
pub use parser::{ConceptFileParser, TsvRecord};
pub use repository::ConceptRepository;
pub use store::TerminologyStore;
pub use types::{
    LoadStats, StoreError, StoreResult, TerminologyEntry, TerminologyFile, TerminologyFiles,
    TerminologyManifest,
};

// Re-export concept-search-types for convenience
pub use concept_search_types;
