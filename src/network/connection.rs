//! Connection Handler
//!
//! Handles individual client connections: reads interest frames in a loop
//! and answers them through a frame-writing publisher on the same stream.

use std::io::{BufReader, BufWriter, Write};
use std::net::TcpStream;
use std::sync::Arc;
use std::time::Duration;

use crate::catalog::Catalog;
use crate::error::{NamefsError, Result};
use crate::handler::{Publisher, RequestHandler};
use crate::name::Name;

use super::codec::{decode_name_wire, encode_data, read_frame, write_frame, FrameType};

/// Publisher that writes data frames to an output stream
///
/// Stands in for the signed-packet emission of a full deployment; the frame
/// codec adds the integrity trailer.
pub struct FramePublisher<W: Write> {
    writer: W,
}

impl<W: Write> FramePublisher<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Borrow the underlying writer
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Consume the publisher and return the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Publisher for FramePublisher<W> {
    fn publish(&mut self, name: &Name, payload: &[u8]) -> Result<()> {
        write_frame(&mut self.writer, &encode_data(name, payload))
    }
}

/// Handles a single client connection
pub struct Connection<C: Catalog> {
    /// TCP stream reader (buffered for efficiency)
    reader: BufReader<TcpStream>,

    /// Interest pipeline writing responses back on the same stream
    handler: RequestHandler<Arc<C>, FramePublisher<BufWriter<TcpStream>>>,

    /// Peer address for logging
    peer_addr: String,
}

impl<C: Catalog> Connection<C> {
    /// Create a new connection handler
    ///
    /// Sets up buffered I/O and the per-connection interest pipeline.
    pub fn new(stream: TcpStream, global_prefix: &str, catalog: Arc<C>) -> Result<Self> {
        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        // Disable Nagle's algorithm for low latency
        stream.set_nodelay(true)?;

        let read_stream = stream.try_clone()?;
        let write_stream = stream;

        let publisher = FramePublisher::new(BufWriter::new(write_stream));
        let handler = RequestHandler::new(global_prefix, catalog, publisher);

        Ok(Self {
            reader: BufReader::new(read_stream),
            handler,
            peer_addr,
        })
    }

    /// Configure connection timeouts
    pub fn set_timeouts(&mut self, read_ms: u64, write_ms: u64) -> Result<()> {
        let stream = self.reader.get_ref();
        if read_ms > 0 {
            stream.set_read_timeout(Some(Duration::from_millis(read_ms)))?;
        }
        if write_ms > 0 {
            stream.set_write_timeout(Some(Duration::from_millis(write_ms)))?;
        }
        Ok(())
    }

    /// Handle the connection (blocking until closed)
    ///
    /// Reads interest frames in a loop; each one runs the full pipeline.
    /// Returns when the client disconnects or an error occurs.
    pub fn handle(&mut self) -> Result<()> {
        tracing::debug!("Connection established from {}", self.peer_addr);

        loop {
            let frame = match read_frame(&mut self.reader) {
                Ok(frame) => frame,
                Err(NamefsError::Io(ref e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                    tracing::debug!("Client {} disconnected", self.peer_addr);
                    return Ok(());
                }
                Err(NamefsError::Io(ref e)) if e.kind() == std::io::ErrorKind::ConnectionReset => {
                    tracing::debug!("Connection reset by client {}", self.peer_addr);
                    return Ok(());
                }
                Err(NamefsError::Io(ref e))
                    if e.kind() == std::io::ErrorKind::ConnectionAborted =>
                {
                    tracing::debug!("Connection aborted by client {}", self.peer_addr);
                    return Ok(());
                }
                Err(NamefsError::Io(ref e))
                    if matches!(
                        e.kind(),
                        std::io::ErrorKind::WouldBlock | std::io::ErrorKind::TimedOut
                    ) =>
                {
                    tracing::debug!("Read timeout for client {}", self.peer_addr);
                    return Ok(());
                }
                Err(e) => {
                    tracing::warn!("Error reading from {}: {}", self.peer_addr, e);
                    return Err(e);
                }
            };

            if frame.frame_type != FrameType::Interest {
                tracing::warn!(
                    "Unexpected {:?} frame from {}, ignoring",
                    frame.frame_type,
                    self.peer_addr
                );
                continue;
            }

            let (name, _) = match decode_name_wire(&frame.payload) {
                Ok(decoded) => decoded,
                Err(e) => {
                    tracing::warn!("Bad interest from {}: {}", self.peer_addr, e);
                    continue;
                }
            };

            tracing::trace!("Received interest from {}: {}", self.peer_addr, name);

            // NotFound is already swallowed inside on_interest; an error here
            // means the catalog or the stream failed.
            if let Err(e) = self.handler.on_interest(&name) {
                if let NamefsError::Io(ref io_err) = e {
                    match io_err.kind() {
                        std::io::ErrorKind::ConnectionAborted
                        | std::io::ErrorKind::ConnectionReset
                        | std::io::ErrorKind::BrokenPipe => {
                            tracing::debug!(
                                "Client {} disconnected before response could be sent: {}",
                                self.peer_addr,
                                e
                            );
                            return Ok(());
                        }
                        _ => {}
                    }
                }
                tracing::warn!("Error handling interest from {}: {}", self.peer_addr, e);
                return Err(e);
            }
        }
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }
}
