//! Frame codec
//!
//! Encoding and decoding for the TCP frame protocol and the wire form of
//! names.
//!
//! ## Name Wire Format
//!
//! ```text
//! ┌──────────────┬───────────────────────────────────────┐
//! │ Count (2)    │ per component: len (2) + raw bytes    │
//! └──────────────┴───────────────────────────────────────┘
//! ```

use std::io::{Read, Write};

use crate::error::{NamefsError, Result};
use crate::name::{Component, Name};

/// Header size: 1 byte frame type + 4 bytes length
pub const HEADER_SIZE: usize = 5;

/// Trailer size: 4 bytes CRC32 over the payload
pub const TRAILER_SIZE: usize = 4;

/// Maximum payload size (16 MB)
pub const MAX_PAYLOAD_SIZE: u32 = 16 * 1024 * 1024;

/// Frame types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum FrameType {
    Interest = 0x01,
    Data = 0x02,
}

impl FrameType {
    fn from_byte(byte: u8) -> Result<Self> {
        match byte {
            0x01 => Ok(FrameType::Interest),
            0x02 => Ok(FrameType::Data),
            other => Err(NamefsError::Protocol(format!(
                "Unknown frame type: 0x{:02x}",
                other
            ))),
        }
    }
}

/// A decoded frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub frame_type: FrameType,
    pub payload: Vec<u8>,
}

// =============================================================================
// Name Wire Encoding/Decoding
// =============================================================================

/// Encode a name to its wire form
pub fn encode_name(name: &Name) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&(name.len() as u16).to_be_bytes());
    for component in name.iter() {
        bytes.extend_from_slice(&(component.as_bytes().len() as u16).to_be_bytes());
        bytes.extend_from_slice(component.as_bytes());
    }
    bytes
}

/// Decode a name from wire form
///
/// Returns the name and the number of bytes consumed.
pub fn decode_name_wire(bytes: &[u8]) -> Result<(Name, usize)> {
    if bytes.len() < 2 {
        return Err(NamefsError::Protocol(
            "Name wire form: missing component count".to_string(),
        ));
    }
    let count = u16::from_be_bytes([bytes[0], bytes[1]]) as usize;
    let mut offset = 2;
    let mut name = Name::new();

    for _ in 0..count {
        let len_bytes = bytes.get(offset..offset + 2).ok_or_else(|| {
            NamefsError::Protocol("Name wire form: truncated component length".to_string())
        })?;
        let len = u16::from_be_bytes([len_bytes[0], len_bytes[1]]) as usize;
        offset += 2;

        let raw = bytes.get(offset..offset + len).ok_or_else(|| {
            NamefsError::Protocol("Name wire form: truncated component".to_string())
        })?;
        name.push(Component::from_bytes(raw.to_vec()));
        offset += len;
    }

    Ok((name, offset))
}

// =============================================================================
// Frame Encoding
// =============================================================================

/// Encode an interest frame carrying a request name
pub fn encode_interest(name: &Name) -> Vec<u8> {
    encode_frame(FrameType::Interest, &encode_name(name))
}

/// Encode a data frame carrying a response name and its content
pub fn encode_data(name: &Name, content: &[u8]) -> Vec<u8> {
    let name_bytes = encode_name(name);
    let mut payload = Vec::with_capacity(2 + name_bytes.len() + content.len());
    payload.extend_from_slice(&(name_bytes.len() as u16).to_be_bytes());
    payload.extend_from_slice(&name_bytes);
    payload.extend_from_slice(content);
    encode_frame(FrameType::Data, &payload)
}

/// Decode the payload of a data frame into (name, content)
pub fn decode_data(payload: &[u8]) -> Result<(Name, Vec<u8>)> {
    if payload.len() < 2 {
        return Err(NamefsError::Protocol(
            "Data frame: missing name length".to_string(),
        ));
    }
    let name_len = u16::from_be_bytes([payload[0], payload[1]]) as usize;
    let name_bytes = payload.get(2..2 + name_len).ok_or_else(|| {
        NamefsError::Protocol("Data frame: truncated name".to_string())
    })?;
    let (name, consumed) = decode_name_wire(name_bytes)?;
    if consumed != name_len {
        return Err(NamefsError::Protocol(
            "Data frame: trailing bytes after name".to_string(),
        ));
    }
    let content = payload[2 + name_len..].to_vec();
    Ok((name, content))
}

/// Encode a full frame: header + payload + CRC trailer
fn encode_frame(frame_type: FrameType, payload: &[u8]) -> Vec<u8> {
    let crc = crc32fast::hash(payload);

    let mut message = Vec::with_capacity(HEADER_SIZE + payload.len() + TRAILER_SIZE);
    message.push(frame_type as u8);
    message.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    message.extend_from_slice(payload);
    message.extend_from_slice(&crc.to_be_bytes());
    message
}

// =============================================================================
// Stream-based I/O helpers
// =============================================================================

/// Read a complete frame from a stream
///
/// Blocks until a complete frame is received or an error occurs. A CRC
/// mismatch is a protocol error.
pub fn read_frame<R: Read>(reader: &mut R) -> Result<Frame> {
    // Read header first
    let mut header = [0u8; HEADER_SIZE];
    reader.read_exact(&mut header)?;

    let frame_type = FrameType::from_byte(header[0])?;
    let payload_len = u32::from_be_bytes([header[1], header[2], header[3], header[4]]);

    if payload_len > MAX_PAYLOAD_SIZE {
        return Err(NamefsError::Protocol(format!(
            "Payload too large: {} bytes (max {})",
            payload_len, MAX_PAYLOAD_SIZE
        )));
    }

    // Read payload and trailer
    let mut payload = vec![0u8; payload_len as usize];
    if payload_len > 0 {
        reader.read_exact(&mut payload)?;
    }
    let mut trailer = [0u8; TRAILER_SIZE];
    reader.read_exact(&mut trailer)?;

    let expected = u32::from_be_bytes(trailer);
    let actual = crc32fast::hash(&payload);
    if expected != actual {
        return Err(NamefsError::Protocol(format!(
            "Frame checksum mismatch: expected 0x{:08x}, got 0x{:08x}",
            expected, actual
        )));
    }

    Ok(Frame {
        frame_type,
        payload,
    })
}

/// Write a pre-encoded frame to a stream
pub fn write_frame<W: Write>(writer: &mut W, frame: &[u8]) -> Result<()> {
    writer.write_all(frame)?;
    writer.flush()?;
    Ok(())
}
