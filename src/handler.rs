//! Request Handler
//!
//! Top-level entry point invoked once per inbound interest.
//!
//! ## Pipeline
//!
//! ```text
//! interest name ──▶ decode ──▶ resolve ──▶ build ──▶ publish
//!                                 │
//!                                 └── NotFound: log and stay silent
//! ```
//!
//! Absence of a response is itself the protocol's negative answer; a miss is
//! never surfaced to the requester, and never raised to the caller either.

use crate::catalog::Catalog;
use crate::error::Result;
use crate::name::{decode_name, Name};
use crate::resolver::{Resolution, Resolver};
use crate::response::build_response;

/// Sink for finished responses
///
/// Implementations own signing and transmission; this crate only hands over
/// the outgoing name and payload bytes.
pub trait Publisher {
    fn publish(&mut self, name: &Name, payload: &[u8]) -> Result<()>;
}

/// Handles inbound interests against a resolver and a publisher
pub struct RequestHandler<C: Catalog, P: Publisher> {
    resolver: Resolver<C>,
    publisher: P,
    global_prefix: String,
    /// Interests seen so far, for diagnostics
    interest_count: u64,
}

impl<C: Catalog, P: Publisher> RequestHandler<C, P> {
    /// Create a handler from its collaborators
    pub fn new(global_prefix: impl Into<String>, catalog: C, publisher: P) -> Self {
        Self {
            resolver: Resolver::new(catalog),
            publisher,
            global_prefix: global_prefix.into(),
            interest_count: 0,
        }
    }

    /// Process one inbound interest
    ///
    /// Fire-and-forget from the caller's point of view: a resolvable request
    /// side-effects through the publisher, an unresolvable one is dropped.
    /// The returned error covers only catalog and publish failures.
    pub fn on_interest(&mut self, name: &Name) -> Result<()> {
        self.interest_count += 1;
        tracing::debug!("interest #{}: {}", self.interest_count, name);

        let request = decode_name(name, &self.global_prefix);
        tracing::debug!(
            "decoded path={} version={:?} segment={:?}",
            request.path,
            request.version,
            request.segment
        );

        let resolution = self.resolver.resolve(&request)?;
        if let Resolution::NotFound = resolution {
            tracing::debug!("no match for {}, dropping", name);
            return Ok(());
        }

        if let Some((outgoing, payload)) = build_response(name, &resolution)? {
            tracing::debug!("publishing {} ({} bytes)", outgoing, payload.len());
            self.publisher.publish(&outgoing, &payload)?;
        }
        Ok(())
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Interests processed so far
    pub fn interest_count(&self) -> u64 {
        self.interest_count
    }

    /// The publisher the handler emits through
    pub fn publisher(&self) -> &P {
        &self.publisher
    }

    /// Mutable access to the publisher
    pub fn publisher_mut(&mut self) -> &mut P {
        &mut self.publisher
    }
}
