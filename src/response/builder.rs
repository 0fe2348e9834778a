//! Response builder
//!
//! Assembles the outgoing name and serialized payload for each resolution
//! shape.

use bytes::Bytes;

use super::{DirEntry, DirListing, FileInfo, DIR_MARKER, FILE_MARKER};
use crate::error::Result;
use crate::name::{Component, Name};
use crate::resolver::Resolution;

/// The terminal marker in component form (its URI spelling starts with a
/// percent escape, so it must be decoded rather than taken literally)
fn terminal(marker: &str) -> Result<Component> {
    Component::from_escaped(marker)
}

/// Build the outgoing (name, payload) pair for a resolution
///
/// Returns `Ok(None)` for `Resolution::NotFound`: no response exists and the
/// caller must stay silent.
pub fn build_response(request: &Name, resolution: &Resolution) -> Result<Option<(Name, Bytes)>> {
    match resolution {
        // The segment name is already canonical; bytes pass through verbatim
        Resolution::Segment(data) => Ok(Some((request.clone(), data.clone()))),

        Resolution::Descriptor {
            version,
            size,
            total_segments,
            redirect,
        } => {
            let info = FileInfo {
                size: *size,
                total_segments: *total_segments,
                version: *version,
            };
            let payload = Bytes::from(bincode::serialize(&info)?);

            // A redirect answers a version-less request, so the name must
            // pin the resolved version for follow-up segment fetches.
            let mut name = request.clone();
            if *redirect {
                name = name.append_version(*version);
            }
            name.push(terminal(FILE_MARKER)?);
            Ok(Some((name, payload)))
        }

        Resolution::Directory { mtime, entries } => {
            let listing = DirListing {
                entries: entries.iter().map(DirEntry::from).collect(),
            };
            let payload = Bytes::from(bincode::serialize(&listing)?);
            let mut name = request.clone().append_version(*mtime);
            name.push(terminal(DIR_MARKER)?);
            Ok(Some((name, payload)))
        }

        Resolution::NotFound => Ok(None),
    }
}
