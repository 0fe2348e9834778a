//! Network Module
//!
//! TCP surface of the surrounding service: frame codec, per-connection
//! handling and the accept loop. The resolution core never sees any of
//! this; it is reached only through the `Publisher` trait.
//!
//! ## Frame Format
//!
//! ```text
//! ┌──────────┬──────────┬────────────────────┬──────────┐
//! │ Type (1) │ Len (4)  │       Payload      │ CRC32(4) │
//! └──────────┴──────────┴────────────────────┴──────────┘
//! ```
//!
//! ### Frame Types
//! - 0x01: INTEREST - Payload: wire-encoded request name
//! - 0x02: DATA     - Payload: name_len (2) + name + content
//!
//! The CRC covers the payload and stands where a production deployment
//! would carry the packet signature.

mod codec;
mod connection;
mod server;

pub use codec::{
    decode_data, decode_name_wire, encode_data, encode_interest, encode_name, read_frame,
    write_frame, Frame, FrameType, HEADER_SIZE, MAX_PAYLOAD_SIZE, TRAILER_SIZE,
};
pub use connection::{Connection, FramePublisher};
pub use server::Server;
