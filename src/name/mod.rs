//! Name Module
//!
//! Hierarchical names for named-data content requests.
//!
//! ## Name Structure
//!
//! ```text
//! /<routable prefix>/<path components...>[/<version>][/<segment>]
//! ┌───────────────┬──────────────────────┬───────────┬───────────┐
//! │ /ndn/namefs   │ /docs/report.txt     │ %FD...    │ %00...    │
//! └───────────────┴──────────────────────┴───────────┴───────────┘
//! ```
//!
//! A component is classified by its leading type-marker byte:
//! - `0xFD`: version marker, remainder is a big-endian version number
//! - `0x00`: segment marker, remainder is a big-endian sequence number
//! - anything else: literal path component
//!
//! At most one version and one segment component appear in a request name;
//! the decoder takes the last of each if a name carries duplicates.

mod component;
mod decoder;

pub use component::{Component, SEGMENT_MARKER, VERSION_MARKER};
pub use decoder::{decode_name, DecodedName};

use std::fmt;

use crate::error::{NamefsError, Result};

/// An ordered sequence of name components
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Name {
    components: Vec<Component>,
}

impl Name {
    /// Create an empty name
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a name from URI form, e.g. "/ndn/namefs/docs/a.txt"
    ///
    /// Each slash-delimited segment is percent-decoded into one component.
    /// Empty segments (leading slash, doubled slashes) are skipped.
    pub fn from_uri(uri: &str) -> Result<Self> {
        let mut name = Name::new();
        for part in uri.split('/') {
            if part.is_empty() {
                continue;
            }
            name.push(Component::from_escaped(part)?);
        }
        Ok(name)
    }

    /// Append a component
    pub fn push(&mut self, component: Component) {
        self.components.push(component);
    }

    /// Append a literal path component, returning self for chaining
    pub fn append_literal(mut self, text: &str) -> Self {
        self.components.push(Component::literal(text));
        self
    }

    /// Append a version-marker component
    pub fn append_version(mut self, version: u64) -> Self {
        self.components.push(Component::version(version));
        self
    }

    /// Append a segment-marker component
    pub fn append_segment(mut self, segment: u64) -> Self {
        self.components.push(Component::segment(segment));
        self
    }

    /// Iterate over components in name order
    pub fn iter(&self) -> std::slice::Iter<'_, Component> {
        self.components.iter()
    }

    /// Number of components
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// True if the name has no components
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Render the name in URI form
    pub fn to_uri(&self) -> String {
        if self.components.is_empty() {
            return "/".to_string();
        }
        let mut uri = String::new();
        for component in &self.components {
            uri.push('/');
            uri.push_str(&component.to_uri());
        }
        uri
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uri())
    }
}

impl FromIterator<Component> for Name {
    fn from_iter<I: IntoIterator<Item = Component>>(iter: I) -> Self {
        Self {
            components: iter.into_iter().collect(),
        }
    }
}

impl std::str::FromStr for Name {
    type Err = NamefsError;

    fn from_str(s: &str) -> Result<Self> {
        Name::from_uri(s)
    }
}
