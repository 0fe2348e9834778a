//! # namefs
//!
//! A named-data filesystem server that resolves hierarchically-named,
//! versioned, segmented content requests against a file-metadata catalog:
//! - Three-tier lookup cascade (segment → version → path)
//! - Typed responses: segment bytes, file descriptor, directory listing
//! - Deterministic response-name suffix scheme
//! - Silent-drop semantics for unresolvable requests
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      TCP Server                              │
//! │                (interest frames in)                          │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                  Request Handler                             │
//! │        decode ─▶ resolve ─▶ build ─▶ publish                 │
//! └─────────┬───────────────────────────────────┬───────────────┘
//!           │                                   │
//!           ▼                                   ▼
//!   ┌─────────────┐                     ┌─────────────┐
//!   │   Resolver  │                     │  Publisher  │
//!   │  (cascade)  │                     │ (data out)  │
//!   └──────┬──────┘                     └─────────────┘
//!          │
//!          ▼
//!   ┌─────────────┐
//!   │   Catalog   │
//!   │  (SQLite)   │
//!   └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod name;
pub mod catalog;
pub mod resolver;
pub mod response;
pub mod handler;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use catalog::{Catalog, SqliteCatalog};
pub use config::Config;
pub use error::{NamefsError, Result};
pub use handler::{Publisher, RequestHandler};
pub use name::{decode_name, Component, DecodedName, Name};
pub use resolver::{Resolution, Resolver};
pub use response::build_response;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of namefs
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
