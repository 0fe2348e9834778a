//! namefs Server Binary
//!
//! Starts the TCP server answering interests from a catalog database.

use std::sync::Arc;

use clap::Parser;
use namefs::network::Server;
use namefs::{Config, SqliteCatalog};
use tracing_subscriber::{fmt, EnvFilter};

/// namefs Server
#[derive(Parser, Debug)]
#[command(name = "namefs-server")]
#[command(about = "Named-data filesystem server over a file-metadata catalog")]
#[command(version)]
struct Args {
    /// Path to the SQLite catalog database
    #[arg(short, long, default_value = "./namefs.db")]
    db: String,

    /// Routable prefix stripped from incoming names
    #[arg(short, long, default_value = "/ndn/namefs")]
    prefix: String,

    /// Listen address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:6363")]
    listen: String,

    /// Maximum concurrent connections
    #[arg(short, long, default_value = "1024")]
    max_connections: usize,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,namefs=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("namefs Server v{}", namefs::VERSION);
    tracing::info!("Catalog database: {}", args.db);
    tracing::info!("Routable prefix: {}", args.prefix);
    tracing::info!("Listen address: {}", args.listen);

    // Build config from args
    let config = Config::builder()
        .db_path(&args.db)
        .global_prefix(&args.prefix)
        .listen_addr(&args.listen)
        .max_connections(args.max_connections)
        .build();

    // Open catalog
    let catalog = match SqliteCatalog::open(&config.db_path) {
        Ok(c) => Arc::new(c),
        Err(e) => {
            tracing::error!("Failed to open catalog: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Catalog opened successfully");

    // Start server
    let server = Server::new(config, catalog);
    if let Err(e) = server.run() {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server stopped");
}
