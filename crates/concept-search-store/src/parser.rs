//! Streaming parser for tab-delimited concept files.

use std::fs::File;
use std::io::{BufReader, Read};
use std::marker::PhantomData;
use std::path::Path;

use csv::{Reader, ReaderBuilder, StringRecord};

use crate::types::{StoreError, StoreResult};

/// Trait for types that can be parsed from a tab-delimited row.
pub trait TsvRecord: Sized {
    /// Expected leading column names for this record type.
    const EXPECTED_COLUMNS: &'static [&'static str];

    /// Parse a record from a CSV StringRecord.
    ///
    /// `line` is the 1-based line number of the row, for error reporting.
    fn from_record(record: &StringRecord, line: u64) -> StoreResult<Self>;
}

/// A streaming parser over a concept file.
///
/// Rows are decoded one at a time; blank rows are skipped. Quote
/// characters are kept verbatim since displays are free text.
pub struct ConceptFileParser<R: Read, T: TsvRecord> {
    reader: Reader<R>,
    _marker: PhantomData<T>,
}

impl<T: TsvRecord> ConceptFileParser<BufReader<File>, T> {
    /// Creates a new parser from a file path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or has invalid headers.
    pub fn from_path<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(StoreError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}

impl<R: Read, T: TsvRecord> ConceptFileParser<R, T> {
    /// Creates a new parser from a reader.
    pub fn from_reader(reader: R) -> StoreResult<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .flexible(false)
            .quoting(false)
            .trim(csv::Trim::None)
            .from_reader(reader);

        Self::validate_headers(&mut csv_reader)?;

        Ok(Self {
            reader: csv_reader,
            _marker: PhantomData,
        })
    }

    /// Validates that the file starts with the expected column headers.
    fn validate_headers(reader: &mut Reader<R>) -> StoreResult<()> {
        let headers = reader.headers()?;
        let expected = T::EXPECTED_COLUMNS;

        if headers.len() < expected.len() {
            return Err(StoreError::InvalidHeader {
                expected: expected.len(),
                found: headers.len(),
            });
        }

        for (i, expected_col) in expected.iter().enumerate() {
            let found = headers.get(i).unwrap_or("");
            // Handle UTF-8 BOM at start of file
            let found = found.trim_start_matches('\u{feff}');
            if found != *expected_col {
                return Err(StoreError::UnexpectedColumn {
                    position: i,
                    expected: expected_col.to_string(),
                    found: found.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Parses all records into a Vec, stopping at the first bad row.
    pub fn parse_all(self) -> StoreResult<Vec<T>> {
        self.collect()
    }
}

impl<R: Read, T: TsvRecord> Iterator for ConceptFileParser<R, T> {
    type Item = StoreResult<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut record = StringRecord::new();
            match self.reader.read_record(&mut record) {
                Ok(true) => {
                    // Skip empty records
                    if record.is_empty() || record.iter().all(|f| f.trim().is_empty()) {
                        continue;
                    }

                    let line = record.position().map(|p| p.line()).unwrap_or(0);
                    return Some(T::from_record(&record, line));
                }
                Ok(false) => return None,
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Pair(String, String);

    impl TsvRecord for Pair {
        const EXPECTED_COLUMNS: &'static [&'static str] = &["left", "right"];

        fn from_record(record: &StringRecord, _line: u64) -> StoreResult<Self> {
            Ok(Pair(
                record.get(0).unwrap_or("").to_string(),
                record.get(1).unwrap_or("").to_string(),
            ))
        }
    }

    fn parse(input: &str) -> StoreResult<Vec<Pair>> {
        ConceptFileParser::<_, Pair>::from_reader(input.as_bytes())?.parse_all()
    }

    #[test]
    fn test_parse_rows() {
        let rows = parse("left\tright\na\tb\nc\td\n").unwrap();
        assert_eq!(
            rows,
            vec![
                Pair("a".to_string(), "b".to_string()),
                Pair("c".to_string(), "d".to_string()),
            ]
        );
    }

    #[test]
    fn test_bom_in_header_is_tolerated() {
        let rows = parse("\u{feff}left\tright\na\tb\n").unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_quotes_are_literal() {
        let rows = parse("left\tright\na\t\"quoted\" text\n").unwrap();
        assert_eq!(rows[0].1, "\"quoted\" text");
    }

    #[test]
    fn test_wrong_header_is_rejected() {
        let err = parse("left\tdisplay\na\tb\n").unwrap_err();
        assert!(matches!(
            err,
            StoreError::UnexpectedColumn { position: 1, .. }
        ));
    }

    #[test]
    fn test_short_header_is_rejected() {
        let err = parse("left\na\n").unwrap_err();
        assert!(matches!(
            err,
            StoreError::InvalidHeader {
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn test_extra_header_columns_are_ignored() {
        let rows = parse("left\tright\tnotes\na\tb\tc\n").unwrap();
        assert_eq!(rows, vec![Pair("a".to_string(), "b".to_string())]);
    }

    #[test]
    fn test_ragged_row_is_an_error() {
        assert!(parse("left\tright\na\tb\tc\n").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = ConceptFileParser::<_, Pair>::from_path("/definitely/not/here.tsv").err();
        assert!(matches!(err, Some(StoreError::FileNotFound { .. })));
    }
}
