//! TCP Server
//!
//! Accepts connections and dispatches each to its own thread.

use std::net::TcpListener;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::Result;

use super::connection::Connection;

/// TCP server for namefs
pub struct Server<C: Catalog + Send + Sync + 'static> {
    config: Config,
    catalog: Arc<C>,
    shutdown: Arc<AtomicBool>,
    active: Arc<AtomicUsize>,
}

impl<C: Catalog + Send + Sync + 'static> Server<C> {
    /// Create a new server with the given config and catalog
    pub fn new(config: Config, catalog: Arc<C>) -> Self {
        Self {
            config,
            catalog,
            shutdown: Arc::new(AtomicBool::new(false)),
            active: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A handle that can signal shutdown from another thread
    pub fn shutdown_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.shutdown)
    }

    /// Start the server (blocking)
    ///
    /// Non-blocking accept so the shutdown flag is polled between
    /// connections.
    pub fn run(&self) -> Result<()> {
        let listener = TcpListener::bind(&self.config.listen_addr)?;
        listener.set_nonblocking(true)?;
        tracing::info!("Listening on {}", self.config.listen_addr);

        loop {
            if self.shutdown.load(Ordering::Relaxed) {
                tracing::info!("Shutdown requested, stopping accept loop");
                break;
            }

            let (stream, addr) = match listener.accept() {
                Ok(accepted) => accepted,
                Err(ref e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(50));
                    continue;
                }
                Err(e) => {
                    tracing::warn!("Accept failed: {}", e);
                    continue;
                }
            };

            if self.active.load(Ordering::Relaxed) >= self.config.max_connections {
                tracing::warn!("Connection limit reached, rejecting {}", addr);
                drop(stream);
                continue;
            }

            // Connections run blocking I/O again
            stream.set_nonblocking(false)?;

            let catalog = Arc::clone(&self.catalog);
            let active = Arc::clone(&self.active);
            let prefix = self.config.global_prefix.clone();
            let read_ms = self.config.read_timeout_ms;
            let write_ms = self.config.write_timeout_ms;

            active.fetch_add(1, Ordering::Relaxed);
            thread::spawn(move || {
                let result = Connection::new(stream, &prefix, catalog).and_then(|mut conn| {
                    conn.set_timeouts(read_ms, write_ms)?;
                    conn.handle()
                });
                if let Err(e) = result {
                    tracing::warn!("Connection from {} ended with error: {}", addr, e);
                }
                active.fetch_sub(1, Ordering::Relaxed);
            });
        }

        // Give in-flight connections a moment to drain
        while self.active.load(Ordering::Relaxed) > 0 {
            thread::sleep(Duration::from_millis(50));
        }
        Ok(())
    }

    /// Signal the server to shutdown gracefully
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Number of currently active connections
    pub fn active_connections(&self) -> usize {
        self.active.load(Ordering::Relaxed)
    }
}
