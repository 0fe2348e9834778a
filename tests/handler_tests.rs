//! Request Handler Tests
//!
//! End-of-pipeline behavior: what gets published, and when silence is kept.

use namefs::catalog::{FileEntry, FileType, SqliteCatalog, VersionRecord};
use namefs::name::{Name, VERSION_MARKER};
use namefs::response::{FileInfo, FILE_MARKER};
use namefs::{Publisher, RequestHandler, Result};

const PREFIX: &str = "/ndn/namefs";

/// Publisher that captures everything it is handed
#[derive(Default)]
struct CapturingPublisher {
    published: Vec<(Name, Vec<u8>)>,
}

impl Publisher for CapturingPublisher {
    fn publish(&mut self, name: &Name, payload: &[u8]) -> Result<()> {
        self.published.push((name.clone(), payload.to_vec()));
        Ok(())
    }
}

fn seed_catalog() -> SqliteCatalog {
    let catalog = SqliteCatalog::in_memory().unwrap();
    catalog
        .insert_entry(&FileEntry {
            path: "/a.txt".to_string(),
            parent: "/".to_string(),
            file_type: FileType::File,
            mtime: 1_700_000_000,
            current_version: Some(3),
        })
        .unwrap();
    catalog
        .insert_version(
            "/a.txt",
            3,
            &VersionRecord {
                size: 10,
                total_segments: 1,
            },
        )
        .unwrap();
    catalog
        .insert_segment("/a.txt", 3, 0, b"0123456789")
        .unwrap();
    catalog
}

// =============================================================================
// Publication Tests
// =============================================================================

#[test]
fn test_bare_file_interest_publishes_redirect_descriptor() {
    let mut handler = RequestHandler::new(PREFIX, seed_catalog(), CapturingPublisher::default());
    let interest = Name::from_uri("/ndn/namefs/a.txt").unwrap();

    handler.on_interest(&interest).unwrap();

    let published = &handler.publisher().published;
    assert_eq!(published.len(), 1);
    let (name, payload) = published[0].clone();

    let components: Vec<_> = name.iter().collect();
    assert_eq!(name.len(), interest.len() + 2);
    assert_eq!(components[name.len() - 2].marker(), Some(VERSION_MARKER));
    assert_eq!(components[name.len() - 2].decode_version(), Some(3));
    assert_eq!(components[name.len() - 1].to_uri(), FILE_MARKER);

    let info: FileInfo = bincode::deserialize(&payload).unwrap();
    assert_eq!(info.version, 3);
    assert_eq!(info.size, 10);
    assert_eq!(info.total_segments, 1);
}

#[test]
fn test_segment_interest_publishes_under_the_request_name() {
    let mut handler = RequestHandler::new(PREFIX, seed_catalog(), CapturingPublisher::default());
    let interest = Name::from_uri("/ndn/namefs/a.txt")
        .unwrap()
        .append_version(3)
        .append_segment(0);

    handler.on_interest(&interest).unwrap();

    let published = &handler.publisher().published;
    assert_eq!(published.len(), 1);
    let (name, payload) = &published[0];
    assert_eq!(*name, interest);
    assert_eq!(payload.as_slice(), b"0123456789");
}

#[test]
fn test_unresolvable_interest_stays_silent() {
    let mut handler = RequestHandler::new(PREFIX, seed_catalog(), CapturingPublisher::default());
    let interest = Name::from_uri("/ndn/namefs/missing").unwrap();

    // No error, no publication
    handler.on_interest(&interest).unwrap();
    assert!(handler.publisher().published.is_empty());
}

#[test]
fn test_interest_counter_advances_even_on_misses() {
    let mut handler = RequestHandler::new(PREFIX, seed_catalog(), CapturingPublisher::default());
    let hit = Name::from_uri("/ndn/namefs/a.txt").unwrap();
    let miss = Name::from_uri("/ndn/namefs/missing").unwrap();

    handler.on_interest(&hit).unwrap();
    handler.on_interest(&miss).unwrap();
    assert_eq!(handler.interest_count(), 2);
    assert_eq!(handler.publisher().published.len(), 1);
}
