//! Resolver Module
//!
//! Maps a decoded request name onto the catalog and decides which of the
//! three response shapes to produce.
//!
//! ## Lookup Cascade
//!
//! ```text
//! version + segment  →  file_segments (single direct lookup)
//! version only       →  file_versions
//! neither            →  file_system
//!                         ├── directory → children of path
//!                         └── file      → current version → file_versions
//! ```
//!
//! Every miss at any level degrades to `Resolution::NotFound`; the protocol
//! has no negative acknowledgement, so the handler answers a miss with
//! silence. A catalog failure, by contrast, is a real error and propagates.

use bytes::Bytes;

use crate::catalog::{Catalog, DirChild, FileType};
use crate::error::Result;
use crate::name::DecodedName;

/// Outcome of resolving one request against the catalog
///
/// Constructed per request, consumed immediately by the response builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Raw bytes of one segment of one version
    Segment(Bytes),

    /// Whole-file metadata descriptor
    Descriptor {
        version: u64,
        size: u64,
        total_segments: u64,
        /// True when the request did not pin a version and the response name
        /// must therefore encode the resolved one
        redirect: bool,
    },

    /// Children of a directory, in storage order
    Directory {
        /// Directory modification time, carried into the response name
        mtime: u64,
        entries: Vec<DirChild>,
    },

    /// No match; the request is silently dropped
    NotFound,
}

/// Resolves decoded names against an injected catalog
pub struct Resolver<C: Catalog> {
    catalog: C,
}

impl<C: Catalog> Resolver<C> {
    /// Create a resolver over the given catalog handle
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    /// Run the lookup cascade for one decoded request
    pub fn resolve(&self, request: &DecodedName) -> Result<Resolution> {
        match (request.version, request.segment) {
            // Segment request: one direct lookup, nothing else is consulted
            (Some(version), Some(segment)) => {
                self.resolve_segment(&request.path, version, segment)
            }

            // Whole file at a pinned version
            (Some(version), None) => self.resolve_version(&request.path, version),

            // Bare path: directory listing or file at its current version
            (None, _) => self.resolve_path(&request.path),
        }
    }

    fn resolve_segment(&self, path: &str, version: u64, segment: u64) -> Result<Resolution> {
        match self.catalog.segment_data(path, version, segment)? {
            Some(data) => Ok(Resolution::Segment(data)),
            None => {
                tracing::debug!("no segment {} of {}@{}", segment, path, version);
                Ok(Resolution::NotFound)
            }
        }
    }

    fn resolve_version(&self, path: &str, version: u64) -> Result<Resolution> {
        match self.catalog.version_record(path, version)? {
            Some(record) => Ok(Resolution::Descriptor {
                version,
                size: record.size,
                total_segments: record.total_segments,
                redirect: false,
            }),
            None => {
                tracing::debug!("no version {} of {}", version, path);
                Ok(Resolution::NotFound)
            }
        }
    }

    fn resolve_path(&self, path: &str) -> Result<Resolution> {
        let entry = match self.catalog.file_entry(path)? {
            Some(entry) => entry,
            None => {
                tracing::debug!("no such file or directory: {}", path);
                return Ok(Resolution::NotFound);
            }
        };

        match entry.file_type {
            FileType::Directory => {
                let entries = self.catalog.children(path)?;
                if entries.is_empty() {
                    // Zero children means nothing to answer with
                    tracing::debug!("empty directory: {}", path);
                    return Ok(Resolution::NotFound);
                }
                Ok(Resolution::Directory {
                    mtime: entry.mtime,
                    entries,
                })
            }
            FileType::File => {
                let version = match entry.current_version {
                    Some(version) => version,
                    None => {
                        tracing::warn!("file {} has no current version pointer", path);
                        return Ok(Resolution::NotFound);
                    }
                };
                // A dangling current-version pointer is a store inconsistency;
                // treated as a miss rather than a crash.
                match self.catalog.version_record(path, version)? {
                    Some(record) => Ok(Resolution::Descriptor {
                        version,
                        size: record.size,
                        total_segments: record.total_segments,
                        redirect: true,
                    }),
                    None => {
                        tracing::warn!(
                            "file {} points at version {} with no version row",
                            path,
                            version
                        );
                        Ok(Resolution::NotFound)
                    }
                }
            }
        }
    }
}
