//! Response Builder Tests
//!
//! Tests for outgoing-name suffix assembly and payload serialization.

use bytes::Bytes;
use namefs::catalog::{DirChild, FileType};
use namefs::name::{Component, Name, VERSION_MARKER};
use namefs::resolver::Resolution;
use namefs::response::{build_response, DirListing, FileInfo, DIR_MARKER, FILE_MARKER};

fn request() -> Name {
    Name::from_uri("/ndn/namefs/a.txt").unwrap()
}

fn last_component(name: &Name) -> &Component {
    name.iter().last().expect("name has components")
}

// =============================================================================
// Segment Responses
// =============================================================================

#[test]
fn test_segment_payload_passes_through_verbatim() {
    let request = request().append_version(3).append_segment(0);
    let resolution = Resolution::Segment(Bytes::from_static(b"0123456789"));

    let (name, payload) = build_response(&request, &resolution).unwrap().unwrap();
    assert_eq!(name, request);
    assert_eq!(&payload[..], b"0123456789");
}

// =============================================================================
// Descriptor Responses
// =============================================================================

#[test]
fn test_direct_descriptor_appends_only_the_file_marker() {
    let request = request().append_version(3);
    let resolution = Resolution::Descriptor {
        version: 3,
        size: 10,
        total_segments: 1,
        redirect: false,
    };

    let (name, payload) = build_response(&request, &resolution).unwrap().unwrap();

    // Exactly one component was appended: the terminal file marker
    assert_eq!(name.len(), request.len() + 1);
    assert_eq!(last_component(&name).to_uri(), FILE_MARKER);

    let info: FileInfo = bincode::deserialize(&payload).unwrap();
    assert_eq!(
        info,
        FileInfo {
            size: 10,
            total_segments: 1,
            version: 3
        }
    );
}

#[test]
fn test_redirect_descriptor_pins_the_resolved_version() {
    let request = request();
    let resolution = Resolution::Descriptor {
        version: 3,
        size: 10,
        total_segments: 1,
        redirect: true,
    };

    let (name, _) = build_response(&request, &resolution).unwrap().unwrap();

    // version component + terminal marker
    assert_eq!(name.len(), request.len() + 2);
    let components: Vec<_> = name.iter().collect();
    let version_comp = components[name.len() - 2];
    assert_eq!(version_comp.marker(), Some(VERSION_MARKER));
    assert_eq!(version_comp.decode_version(), Some(3));
    assert_eq!(last_component(&name).to_uri(), FILE_MARKER);
}

// =============================================================================
// Directory Responses
// =============================================================================

#[test]
fn test_directory_name_carries_mtime_and_dir_marker() {
    let request = Name::from_uri("/ndn/namefs/docs").unwrap();
    let resolution = Resolution::Directory {
        mtime: 1_700_000_100,
        entries: vec![
            DirChild {
                file_type: FileType::File,
                path: "/docs/a".to_string(),
            },
            DirChild {
                file_type: FileType::Directory,
                path: "/docs/b".to_string(),
            },
        ],
    };

    let (name, payload) = build_response(&request, &resolution).unwrap().unwrap();

    assert_eq!(name.len(), request.len() + 2);
    let components: Vec<_> = name.iter().collect();
    assert_eq!(components[name.len() - 2].decode_version(), Some(1_700_000_100));
    assert_eq!(last_component(&name).to_uri(), DIR_MARKER);

    let listing: DirListing = bincode::deserialize(&payload).unwrap();
    assert_eq!(listing.entries.len(), 2);
    assert_eq!(listing.entries[0].path, "/docs/a");
    assert!(!listing.entries[0].is_directory());
    assert_eq!(listing.entries[1].path, "/docs/b");
    assert!(listing.entries[1].is_directory());
}

#[test]
fn test_directory_entries_keep_their_order() {
    let entries: Vec<DirChild> = (0..8)
        .map(|i| DirChild {
            file_type: FileType::File,
            path: format!("/docs/{}", i),
        })
        .collect();
    let resolution = Resolution::Directory {
        mtime: 1,
        entries: entries.clone(),
    };

    let (_, payload) = build_response(&request(), &resolution).unwrap().unwrap();
    let listing: DirListing = bincode::deserialize(&payload).unwrap();
    for (i, entry) in listing.entries.iter().enumerate() {
        assert_eq!(entry.path, entries[i].path);
    }
}

// =============================================================================
// NotFound
// =============================================================================

#[test]
fn test_not_found_builds_nothing() {
    let result = build_response(&request(), &Resolution::NotFound).unwrap();
    assert!(result.is_none());
}
