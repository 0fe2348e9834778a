//! Catalog Tests
//!
//! Tests for the SQLite-backed catalog: schema, inserts, and the four read
//! queries.

use namefs::catalog::{Catalog, FileEntry, FileType, SqliteCatalog, VersionRecord};

fn file_entry(path: &str, parent: &str, version: Option<u64>) -> FileEntry {
    FileEntry {
        path: path.to_string(),
        parent: parent.to_string(),
        file_type: if version.is_some() {
            FileType::File
        } else {
            FileType::Directory
        },
        mtime: 1_700_000_000,
        current_version: version,
    }
}

// =============================================================================
// file_system Queries
// =============================================================================

#[test]
fn test_file_entry_round_trip() {
    let catalog = SqliteCatalog::in_memory().unwrap();
    let entry = file_entry("/a.txt", "/", Some(3));
    catalog.insert_entry(&entry).unwrap();

    let stored = catalog.file_entry("/a.txt").unwrap().unwrap();
    assert_eq!(stored, entry);
}

#[test]
fn test_missing_file_entry_is_none() {
    let catalog = SqliteCatalog::in_memory().unwrap();
    assert!(catalog.file_entry("/nope").unwrap().is_none());
}

#[test]
fn test_lookups_are_exact_match() {
    let catalog = SqliteCatalog::in_memory().unwrap();
    catalog.insert_entry(&file_entry("/a.txt", "/", Some(1))).unwrap();

    assert!(catalog.file_entry("/a").unwrap().is_none());
    assert!(catalog.file_entry("/a.txt/").unwrap().is_none());
    assert!(catalog.file_entry("/A.TXT").unwrap().is_none());
}

#[test]
fn test_directory_entry_has_no_version() {
    let catalog = SqliteCatalog::in_memory().unwrap();
    catalog.insert_entry(&file_entry("/docs", "/", None)).unwrap();

    let stored = catalog.file_entry("/docs").unwrap().unwrap();
    assert_eq!(stored.file_type, FileType::Directory);
    assert_eq!(stored.current_version, None);
}

// =============================================================================
// file_versions Queries
// =============================================================================

#[test]
fn test_version_record_round_trip() {
    let catalog = SqliteCatalog::in_memory().unwrap();
    let record = VersionRecord {
        size: 4096,
        total_segments: 2,
    };
    catalog.insert_version("/a.txt", 7, &record).unwrap();

    assert_eq!(catalog.version_record("/a.txt", 7).unwrap(), Some(record));
    assert_eq!(catalog.version_record("/a.txt", 8).unwrap(), None);
    assert_eq!(catalog.version_record("/b.txt", 7).unwrap(), None);
}

// =============================================================================
// file_segments Queries
// =============================================================================

#[test]
fn test_segment_data_round_trip() {
    let catalog = SqliteCatalog::in_memory().unwrap();
    catalog.insert_segment("/a.txt", 3, 0, b"hello").unwrap();
    catalog.insert_segment("/a.txt", 3, 1, b"world").unwrap();

    assert_eq!(&catalog.segment_data("/a.txt", 3, 0).unwrap().unwrap()[..], b"hello");
    assert_eq!(&catalog.segment_data("/a.txt", 3, 1).unwrap().unwrap()[..], b"world");
    assert!(catalog.segment_data("/a.txt", 3, 2).unwrap().is_none());
    assert!(catalog.segment_data("/a.txt", 4, 0).unwrap().is_none());
}

#[test]
fn test_segment_data_preserves_binary_bytes() {
    let catalog = SqliteCatalog::in_memory().unwrap();
    let blob: Vec<u8> = (0..=255).collect();
    catalog.insert_segment("/bin", 1, 0, &blob).unwrap();

    let stored = catalog.segment_data("/bin", 1, 0).unwrap().unwrap();
    assert_eq!(&stored[..], blob.as_slice());
}

// =============================================================================
// Directory Enumeration
// =============================================================================

#[test]
fn test_children_in_insertion_order() {
    let catalog = SqliteCatalog::in_memory().unwrap();
    catalog.insert_entry(&file_entry("/docs", "/", None)).unwrap();
    catalog.insert_entry(&file_entry("/docs/z", "/docs", Some(1))).unwrap();
    catalog.insert_entry(&file_entry("/docs/a", "/docs", None)).unwrap();

    let children = catalog.children("/docs").unwrap();
    assert_eq!(children.len(), 2);
    // Storage order, not lexicographic
    assert_eq!(children[0].path, "/docs/z");
    assert_eq!(children[0].file_type, FileType::File);
    assert_eq!(children[1].path, "/docs/a");
    assert_eq!(children[1].file_type, FileType::Directory);
}

#[test]
fn test_children_of_leaf_is_empty() {
    let catalog = SqliteCatalog::in_memory().unwrap();
    catalog.insert_entry(&file_entry("/a.txt", "/", Some(1))).unwrap();
    assert!(catalog.children("/a.txt").unwrap().is_empty());
}

// =============================================================================
// On-Disk Catalog
// =============================================================================

#[test]
fn test_catalog_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("catalog.db");

    {
        let catalog = SqliteCatalog::open(&db_path).unwrap();
        catalog.insert_entry(&file_entry("/a.txt", "/", Some(3))).unwrap();
        catalog.insert_segment("/a.txt", 3, 0, b"persisted").unwrap();
    }

    let reopened = SqliteCatalog::open(&db_path).unwrap();
    assert!(reopened.file_entry("/a.txt").unwrap().is_some());
    assert_eq!(
        &reopened.segment_data("/a.txt", 3, 0).unwrap().unwrap()[..],
        b"persisted"
    );
}
