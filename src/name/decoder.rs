//! Name decoder
//!
//! Splits an incoming request name into its logical file path and optional
//! version and segment markers. Decoding is best-effort: a marker component
//! with an undecodable payload is treated as absent, so the request falls
//! through the resolution cascade as if the marker were never present.

use super::{Name, SEGMENT_MARKER, VERSION_MARKER};

/// The decoded form of a request name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedName {
    /// Logical file path with the routable prefix removed; "/" for the root
    pub path: String,

    /// Version pinned by the request, if any
    pub version: Option<u64>,

    /// Segment requested, if any
    pub segment: Option<u64>,
}

impl DecodedName {
    /// Construct a decoded name directly (useful for resolver callers that
    /// already know the parts)
    pub fn new(path: impl Into<String>, version: Option<u64>, segment: Option<u64>) -> Self {
        Self {
            path: path.into(),
            version,
            segment,
        }
    }
}

/// Decode a request name against a routable prefix
///
/// Components are scanned in name order: version and segment markers are
/// captured, every other component is appended to the accumulated path with
/// a leading separator. The prefix is then stripped by length, and an empty
/// remainder normalizes to the root path "/".
///
/// Pure function over the name; never fails.
pub fn decode_name(name: &Name, global_prefix: &str) -> DecodedName {
    let mut path = String::new();
    let mut version = None;
    let mut segment = None;

    for component in name.iter() {
        match component.marker() {
            Some(VERSION_MARKER) => version = component.decode_version(),
            Some(SEGMENT_MARKER) => segment = component.decode_segment(),
            Some(_) => {
                path.push('/');
                path.push_str(&component.to_uri());
            }
            // Empty components carry no marker byte to classify; skip them.
            None => {}
        }
    }

    let path = match path.get(global_prefix.len()..) {
        Some("") | None => "/".to_string(),
        Some(rest) => rest.to_string(),
    };

    DecodedName {
        path,
        version,
        segment,
    }
}
