//! Name component definitions
//!
//! Components are opaque byte strings; the leading byte doubles as a type
//! marker for version and segment components.

use crate::error::{NamefsError, Result};

/// Leading byte of a version-marker component
pub const VERSION_MARKER: u8 = 0xFD;

/// Leading byte of a segment-marker component
pub const SEGMENT_MARKER: u8 = 0x00;

/// One component of a hierarchical name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component(Vec<u8>);

impl Component {
    /// Create a component from raw bytes
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Create a literal path component from text
    pub fn literal(text: &str) -> Self {
        Self(text.as_bytes().to_vec())
    }

    /// Create a version-marker component
    ///
    /// Encoded as the marker byte followed by the version number in
    /// big-endian with leading zero bytes trimmed (at least one byte).
    pub fn version(version: u64) -> Self {
        let mut bytes = vec![VERSION_MARKER];
        bytes.extend_from_slice(&trimmed_be(version));
        Self(bytes)
    }

    /// Create a segment-marker component
    pub fn segment(segment: u64) -> Self {
        let mut bytes = vec![SEGMENT_MARKER];
        bytes.extend_from_slice(&trimmed_be(segment));
        Self(bytes)
    }

    /// Parse a component from percent-escaped URI text
    pub fn from_escaped(text: &str) -> Result<Self> {
        let raw = text.as_bytes();
        let mut bytes = Vec::with_capacity(raw.len());
        let mut i = 0;
        while i < raw.len() {
            if raw[i] == b'%' {
                let hex = raw.get(i + 1..i + 3).ok_or_else(|| {
                    NamefsError::Name(format!("truncated percent escape in '{}'", text))
                })?;
                let hex = std::str::from_utf8(hex)
                    .ok()
                    .and_then(|h| u8::from_str_radix(h, 16).ok())
                    .ok_or_else(|| {
                        NamefsError::Name(format!("invalid percent escape in '{}'", text))
                    })?;
                bytes.push(hex);
                i += 3;
            } else {
                bytes.push(raw[i]);
                i += 1;
            }
        }
        Ok(Self(bytes))
    }

    /// Raw component bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The leading type-marker byte, if the component is non-empty
    pub fn marker(&self) -> Option<u8> {
        self.0.first().copied()
    }

    /// Decode the component as a version number
    ///
    /// Returns None when the component is not a version marker or when the
    /// marker payload is malformed (empty or wider than 64 bits).
    pub fn decode_version(&self) -> Option<u64> {
        self.decode_marked(VERSION_MARKER)
    }

    /// Decode the component as a segment sequence number
    pub fn decode_segment(&self) -> Option<u64> {
        self.decode_marked(SEGMENT_MARKER)
    }

    fn decode_marked(&self, marker: u8) -> Option<u64> {
        let payload = match self.0.split_first() {
            Some((&first, rest)) if first == marker => rest,
            _ => return None,
        };
        if payload.is_empty() || payload.len() > 8 {
            return None;
        }
        Some(payload.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64))
    }

    /// Render the component in percent-escaped URI form
    pub fn to_uri(&self) -> String {
        let mut uri = String::with_capacity(self.0.len());
        for &b in &self.0 {
            if b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~') {
                uri.push(b as char);
            } else {
                uri.push_str(&format!("%{:02X}", b));
            }
        }
        uri
    }
}

/// Big-endian bytes of a u64 with leading zero bytes trimmed; never empty
fn trimmed_be(value: u64) -> Vec<u8> {
    let bytes = value.to_be_bytes();
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(7);
    bytes[start..].to_vec()
}
