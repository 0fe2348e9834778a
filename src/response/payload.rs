//! Response payload records
//!
//! Structured records serialized into response content.

use serde::{Deserialize, Serialize};

use crate::catalog::{DirChild, FileType};

/// Whole-file metadata descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    /// Total byte size of the file at this version
    pub size: u64,

    /// Number of segments the version is split into
    pub total_segments: u64,

    /// The version the descriptor refers to
    pub version: u64,
}

/// One entry of a directory listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirEntry {
    /// 0 = directory, 1 = file
    pub file_type: u8,

    /// Full catalog path of the child
    pub path: String,
}

impl From<&DirChild> for DirEntry {
    fn from(child: &DirChild) -> Self {
        Self {
            file_type: child.file_type as u8,
            path: child.path.clone(),
        }
    }
}

impl DirEntry {
    /// True if the entry denotes a directory
    pub fn is_directory(&self) -> bool {
        self.file_type == FileType::Directory as u8
    }
}

/// A directory listing payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirListing {
    pub entries: Vec<DirEntry>,
}
