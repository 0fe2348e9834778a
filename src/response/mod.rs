//! Response Module
//!
//! Turns a resolution into the outgoing (name, payload) pair.
//!
//! ## Naming Suffix Convention
//!
//! ```text
//! Segment            request name unchanged
//! Descriptor         request + %C1.FS.file
//! Descriptor (redir) request + <version> + %C1.FS.file
//! Directory          request + <mtime as version> + %C1.FS.dir
//! ```
//!
//! Payload records are serialized with bincode; the bytes are opaque to this
//! module beyond field assignment. Signing of the finished packet is the
//! publisher's concern.

mod builder;
mod payload;

pub use builder::build_response;
pub use payload::{DirEntry, DirListing, FileInfo};

/// Terminal name component identifying file-descriptor content
pub const FILE_MARKER: &str = "%C1.FS.file";

/// Terminal name component identifying directory-listing content
pub const DIR_MARKER: &str = "%C1.FS.dir";
