//! Catalog Module
//!
//! Read boundary to the path-indexed file-metadata store.
//!
//! ## Logical Tables
//!
//! ```text
//! file_system    path → parent, type, mtime, current version
//! file_versions  (path, version) → total size, segment count
//! file_segments  (path, version, segment) → raw bytes
//! ```
//!
//! The resolver consumes exactly four read queries; everything else about
//! the store (schema creation, file ingestion) belongs to the writer side
//! and is surfaced here only as helpers on the SQLite implementation.

mod sqlite;

pub use sqlite::SqliteCatalog;

use std::sync::Arc;

use bytes::Bytes;

use crate::error::Result;

/// Entry type in the file system table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum FileType {
    Directory = 0,
    File = 1,
}

impl FileType {
    /// Map a stored type discriminant; unknown values read as directories,
    /// matching the loose typing of the store
    pub fn from_raw(raw: i64) -> Self {
        if raw == 1 {
            FileType::File
        } else {
            FileType::Directory
        }
    }
}

/// A file_system row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: String,
    pub parent: String,
    pub file_type: FileType,
    /// Modification time (unix seconds)
    pub mtime: u64,
    /// Current version pointer; meaningful only for files
    pub current_version: Option<u64>,
}

/// A file_versions row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionRecord {
    /// Total byte size of the file at this version
    pub size: u64,
    /// Number of segments the version is split into
    pub total_segments: u64,
}

/// One child in a directory enumeration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirChild {
    pub file_type: FileType,
    pub path: String,
}

/// Read interface to the file-metadata store
///
/// All lookups are exact-match and read-only; a miss is `Ok(None)` (or an
/// empty child list), never an error. Errors are reserved for store-level
/// failures.
pub trait Catalog {
    /// Look up a file_system row by path
    fn file_entry(&self, path: &str) -> Result<Option<FileEntry>>;

    /// Look up a file_versions row by (path, version)
    fn version_record(&self, path: &str, version: u64) -> Result<Option<VersionRecord>>;

    /// Look up raw segment bytes by (path, version, segment)
    fn segment_data(&self, path: &str, version: u64, segment: u64) -> Result<Option<Bytes>>;

    /// Enumerate file_system rows whose parent equals `parent`, in storage
    /// order
    fn children(&self, parent: &str) -> Result<Vec<DirChild>>;
}

impl<C: Catalog + ?Sized> Catalog for &C {
    fn file_entry(&self, path: &str) -> Result<Option<FileEntry>> {
        (**self).file_entry(path)
    }

    fn version_record(&self, path: &str, version: u64) -> Result<Option<VersionRecord>> {
        (**self).version_record(path, version)
    }

    fn segment_data(&self, path: &str, version: u64, segment: u64) -> Result<Option<Bytes>> {
        (**self).segment_data(path, version, segment)
    }

    fn children(&self, parent: &str) -> Result<Vec<DirChild>> {
        (**self).children(parent)
    }
}

impl<C: Catalog + ?Sized> Catalog for Arc<C> {
    fn file_entry(&self, path: &str) -> Result<Option<FileEntry>> {
        (**self).file_entry(path)
    }

    fn version_record(&self, path: &str, version: u64) -> Result<Option<VersionRecord>> {
        (**self).version_record(path, version)
    }

    fn segment_data(&self, path: &str, version: u64, segment: u64) -> Result<Option<Bytes>> {
        (**self).segment_data(path, version, segment)
    }

    fn children(&self, parent: &str) -> Result<Vec<DirChild>> {
        (**self).children(parent)
    }
}
