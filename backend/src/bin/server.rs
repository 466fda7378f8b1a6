//! comicsdb HTTP Server Binary
//!
//! This is the main entry point for the comic catalog REST API server.
//! It loads configuration, seeds the catalog, sets up the HTTP router, and
//! starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin comicsdb-server
//!
//! # With a configuration file
//! COMICSDB_CONFIG=comicsdb.toml cargo run --bin comicsdb-server
//! ```
//!
//! # Environment Variables
//!
//! - `COMICSDB_CONFIG`: Path to a TOML configuration file (optional)
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 1984)
//! - `COMICSDB_SEED`: Load the fixture comics (default: true)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use comicsdb::config::ServerConfig;
use comicsdb::db::CatalogStore;
use comicsdb::http::{create_router, AppState};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Fatal: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    info!("Starting comicsdb HTTP Server");

    let config = ServerConfig::load()?;

    let store = if config.catalog.seed {
        CatalogStore::seeded()
    } else {
        CatalogStore::new()
    };
    info!("Catalog initialized with {} comics", store.len());

    let state = AppState::from_config(Arc::new(store), &config);
    let app = create_router(state);

    let addr = config.bind_addr()?;
    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
