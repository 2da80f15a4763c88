//! Planet Query HTTP Server Binary
//!
//! This is the main entry point for the planet query REST API server.
//! It initializes the upstream provider client, sets up the HTTP router,
//! and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin planet-server
//! ```
//!
//! # Environment Variables
//!
//! - `UPSTREAM_BASE_URL`: Base URL of the planetary-data provider
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use planet_query::config::AppConfig;
use planet_query::http::{create_router, AppState};
use planet_query::provider::{HttpPlanetProvider, PlanetDataProvider};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
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

    info!("Starting Planet Query HTTP Server");

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;
    info!("Upstream provider: {}", config.upstream_base_url);

    // Single shared client; connection reuse comes from reqwest's defaults
    let provider = HttpPlanetProvider::new(config.upstream_base_url.clone())?;
    let state = AppState::new(Arc::new(provider) as Arc<dyn PlanetDataProvider>);

    // Create router with all endpoints
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Server listening on http://{}", addr);
    info!("Liveness probe: http://{}/test", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
