//! Concept file rows.
//!
//! A concept file has a `code` column followed by a `display` column.

use concept_search_types::Concept;
use csv::StringRecord;

use crate::parser::TsvRecord;
use crate::types::{StoreError, StoreResult};

/// Expected columns in a concept file.
const CONCEPT_COLUMNS: &[&str] = &["code", "display"];

impl TsvRecord for Concept {
    const EXPECTED_COLUMNS: &'static [&'static str] = CONCEPT_COLUMNS;

    fn from_record(record: &StringRecord, line: u64) -> StoreResult<Self> {
        let code = record.get(0).unwrap_or("").trim();
        if code.is_empty() {
            return Err(StoreError::EmptyCode { line });
        }

        Ok(Concept::new(code, record.get(1).unwrap_or("")))
    }
}
