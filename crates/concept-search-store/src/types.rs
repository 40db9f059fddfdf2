//! Store and loader types.

use std::path::PathBuf;

use concept_search_types::VersionKey;
use serde::Deserialize;
use thiserror::Error;

/// Errors raised by the store and the loader.
#[derive(Error, Debug)]
pub enum StoreError {
    /// I/O error reading a data file.
    #[error("IO error reading terminology data: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error.
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// The manifest could not be decoded.
    #[error("Invalid terminology manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    /// File not found.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Directory not found.
    #[error("Directory not found: {path}")]
    DirectoryNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Invalid header - too few columns.
    #[error("Invalid header: expected {expected} columns, found {found}")]
    InvalidHeader {
        /// Expected column count.
        expected: usize,
        /// Found column count.
        found: usize,
    },

    /// Unexpected column name.
    #[error("Unexpected column '{found}' at position {position}, expected '{expected}'")]
    UnexpectedColumn {
        /// The column position.
        position: usize,
        /// Expected column name.
        expected: String,
        /// Found column name.
        found: String,
    },

    /// A concept row had an empty code.
    #[error("Empty concept code at line {line}")]
    EmptyCode {
        /// 1-based line number in the source file.
        line: u64,
    },

    /// The same code appeared twice in one version.
    #[error("Duplicate code '{code}' in version of {url}")]
    DuplicateCode {
        /// Canonical URL of the system being published.
        url: String,
        /// The repeated code.
        code: String,
    },

    /// No version with this key exists.
    #[error("Unknown terminology version: {0}")]
    UnknownVersion(VersionKey),

    /// The store cannot currently serve reads.
    #[error("Terminology store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Decoded `terminologies.json` manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct TerminologyManifest {
    /// Entries in publication order.
    pub terminologies: Vec<TerminologyEntry>,
}

/// One manifest entry: a concept file published as a version of `url`.
#[derive(Debug, Clone, Deserialize)]
pub struct TerminologyEntry {
    /// Canonical URL of the terminology system.
    pub url: String,
    /// Business version label.
    #[serde(default)]
    pub version: Option<String>,
    /// Concept file, relative to the manifest directory.
    pub file: PathBuf,
}

/// A manifest entry whose file has been located on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminologyFile {
    /// Canonical URL of the terminology system.
    pub url: String,
    /// Business version label.
    pub label: Option<String>,
    /// Resolved path of the concept file.
    pub path: PathBuf,
}

/// Discovered terminology files in a data directory.
#[derive(Debug, Clone, Default)]
pub struct TerminologyFiles {
    /// Path of the manifest that listed the files.
    pub manifest_path: PathBuf,
    /// Files in publication order.
    pub files: Vec<TerminologyFile>,
}

impl TerminologyFiles {
    /// Returns the number of distinct system URLs.
    pub fn system_count(&self) -> usize {
        let mut urls: Vec<&str> = self.files.iter().map(|f| f.url.as_str()).collect();
        urls.sort_unstable();
        urls.dedup();
        urls.len()
    }
}

/// Statistics from loading a data directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Distinct systems touched.
    pub systems: usize,
    /// Versions published.
    pub versions: usize,
    /// Concepts published across all versions.
    pub concepts: usize,
    /// Time taken to load in milliseconds.
    pub load_time_ms: u64,
}
