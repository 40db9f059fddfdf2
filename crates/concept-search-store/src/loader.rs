//! Data directory discovery and loading.

use std::fs;
use std::path::Path;
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use concept_search_types::Concept;

use crate::parser::ConceptFileParser;
use crate::store::{PreparedVersion, TerminologyStore};
use crate::types::{
    LoadStats, StoreError, StoreResult, TerminologyFile, TerminologyFiles, TerminologyManifest,
};

/// Name of the manifest expected at the root of a data directory.
pub const MANIFEST_FILE_NAME: &str = "terminologies.json";

/// Discovers the concept files listed by a data directory's manifest.
///
/// File paths in the manifest are resolved against the directory. Every
/// listed file must exist.
pub fn discover_terminology_files<P: AsRef<Path>>(path: P) -> StoreResult<TerminologyFiles> {
    let path = path.as_ref();

    if !path.is_dir() {
        return Err(StoreError::DirectoryNotFound {
            path: path.display().to_string(),
        });
    }

    let manifest_path = path.join(MANIFEST_FILE_NAME);
    if !manifest_path.exists() {
        return Err(StoreError::FileNotFound {
            path: manifest_path.display().to_string(),
        });
    }

    let manifest: TerminologyManifest = serde_json::from_str(&fs::read_to_string(&manifest_path)?)?;

    let mut files = Vec::with_capacity(manifest.terminologies.len());
    for entry in manifest.terminologies {
        let file_path = path.join(&entry.file);
        if !file_path.is_file() {
            return Err(StoreError::FileNotFound {
                path: file_path.display().to_string(),
            });
        }

        files.push(TerminologyFile {
            url: entry.url,
            label: entry.version,
            path: file_path,
        });
    }

    Ok(TerminologyFiles {
        manifest_path,
        files,
    })
}

/// Loads every file listed by a data directory's manifest into `store`.
///
/// Files are parsed concurrently when the `parallel` feature is enabled,
/// then published in manifest order, so the last entry for a URL becomes
/// its current version. Nothing is published unless every file parses and
/// has unique codes.
pub fn load_directory<P: AsRef<Path>>(store: &TerminologyStore, path: P) -> StoreResult<LoadStats> {
    let start = Instant::now();
    let files = discover_terminology_files(path)?;

    #[cfg(feature = "parallel")]
    let parsed: Vec<StoreResult<Vec<Concept>>> = files.files.par_iter().map(parse_file).collect();

    #[cfg(not(feature = "parallel"))]
    let parsed: Vec<StoreResult<Vec<Concept>>> = files.files.iter().map(parse_file).collect();

    let mut stats = LoadStats {
        systems: files.system_count(),
        ..Default::default()
    };

    let mut prepared = Vec::with_capacity(files.files.len());
    for (file, concepts) in files.files.iter().zip(parsed) {
        let version = PreparedVersion::new(&file.url, file.label.clone(), concepts?)?;
        stats.concepts += version.concept_count();
        prepared.push(version);
    }

    stats.versions = store.publish_prepared(prepared)?.len();

    stats.load_time_ms = start.elapsed().as_millis() as u64;
    Ok(stats)
}

fn parse_file(file: &TerminologyFile) -> StoreResult<Vec<Concept>> {
    ConceptFileParser::<_, Concept>::from_path(&file.path)?.parse_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::ConceptRepository;
    use concept_search_types::DisplayFilter;

    fn write(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).unwrap();
    }

    #[test]
    fn test_discover_resolves_paths() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a.tsv", "code\tdisplay\nc1\tOne\n");
        write(
            dir.path(),
            MANIFEST_FILE_NAME,
            r#"{"terminologies":[{"url":"http://example.com/a","version":"1","file":"a.tsv"}]}"#,
        );

        let files = discover_terminology_files(dir.path()).unwrap();
        assert_eq!(files.files.len(), 1);
        assert_eq!(files.files[0].url, "http://example.com/a");
        assert_eq!(files.files[0].label.as_deref(), Some("1"));
        assert_eq!(files.files[0].path, dir.path().join("a.tsv"));
    }

    #[test]
    fn test_discover_missing_directory() {
        let err = discover_terminology_files("/definitely/not/a/dir").unwrap_err();
        assert!(matches!(err, StoreError::DirectoryNotFound { .. }));
    }

    #[test]
    fn test_discover_missing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let err = discover_terminology_files(dir.path()).unwrap_err();
        assert!(matches!(err, StoreError::FileNotFound { .. }));
    }

    #[test]
    fn test_discover_missing_concept_file() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            MANIFEST_FILE_NAME,
            r#"{"terminologies":[{"url":"http://example.com/a","file":"missing.tsv"}]}"#,
        );

        let err = discover_terminology_files(dir.path()).unwrap_err();
        assert!(matches!(err, StoreError::FileNotFound { ref path } if path.ends_with("missing.tsv")));
    }

    #[test]
    fn test_discover_bad_manifest() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), MANIFEST_FILE_NAME, "{not json");

        let err = discover_terminology_files(dir.path()).unwrap_err();
        assert!(matches!(err, StoreError::Manifest(_)));
    }

    #[test]
    fn test_load_directory_publishes_in_order() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a1.tsv", "code\tdisplay\nc1\tOld one\n");
        write(dir.path(), "a2.tsv", "code\tdisplay\nc1\tNew one\nc2\tNew two\n");
        write(dir.path(), "b.tsv", "code\tdisplay\tnotes\nx\tOther\tignored\n");
        write(
            dir.path(),
            MANIFEST_FILE_NAME,
            r#"{"terminologies":[
                {"url":"http://example.com/a","version":"1","file":"a1.tsv"},
                {"url":"http://example.com/b","file":"b.tsv"},
                {"url":"http://example.com/a","version":"2","file":"a2.tsv"}
            ]}"#,
        );

        let store = TerminologyStore::new();
        let stats = load_directory(&store, dir.path()).unwrap();

        assert_eq!(stats.systems, 2);
        assert_eq!(stats.versions, 3);
        assert_eq!(stats.concepts, 4);

        let system = store.find_system_by_url("http://example.com/a").unwrap().unwrap();
        let current = system.current_version_key().unwrap();
        let version = store.version(current).unwrap().unwrap();
        assert_eq!(version.label.as_deref(), Some("2"));

        let all = store
            .fetch_concepts_matching(current, &DisplayFilter::new("new"), 0, 10)
            .unwrap();
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_load_directory_stops_on_bad_file() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a.tsv", "code\tlabel\nc1\tOne\n");
        write(
            dir.path(),
            MANIFEST_FILE_NAME,
            r#"{"terminologies":[{"url":"http://example.com/a","file":"a.tsv"}]}"#,
        );

        let store = TerminologyStore::new();
        let err = load_directory(&store, dir.path()).unwrap_err();
        assert!(matches!(err, StoreError::UnexpectedColumn { .. }));
        assert_eq!(store.version_count().unwrap(), 0);
    }

    #[test]
    fn test_load_directory_publishes_nothing_when_a_later_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a.tsv", "code\tdisplay\nc1\tOne\n");
        write(dir.path(), "b.tsv", "code\tdisplay\nx\tFirst\nx\tSecond\n");
        write(
            dir.path(),
            MANIFEST_FILE_NAME,
            r#"{"terminologies":[
                {"url":"http://example.com/a","file":"a.tsv"},
                {"url":"http://example.com/b","file":"b.tsv"}
            ]}"#,
        );

        let store = TerminologyStore::new();
        let err = load_directory(&store, dir.path()).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateCode { ref code, .. } if code == "x"));
        assert_eq!(store.version_count().unwrap(), 0);
        assert!(store.find_system_by_url("http://example.com/a").unwrap().is_none());
    }
}
