//! Error types for namefs
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using NamefsError
pub type Result<T> = std::result::Result<T, NamefsError>;

/// Unified error type for namefs operations
#[derive(Debug, Error)]
pub enum NamefsError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Catalog Errors
    // -------------------------------------------------------------------------
    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Catalog query failed: {0}")]
    Query(#[from] rusqlite::Error),

    // -------------------------------------------------------------------------
    // Name Errors
    // -------------------------------------------------------------------------
    #[error("Malformed name: {0}")]
    Name(String),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Network Errors
    // -------------------------------------------------------------------------
    #[error("Network error: {0}")]
    Network(String),

    #[error("Protocol error: {0}")]
    Protocol(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<bincode::Error> for NamefsError {
    fn from(e: bincode::Error) -> Self {
        NamefsError::Serialization(e.to_string())
    }
}
