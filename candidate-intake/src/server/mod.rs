//! HTTP surface for candidate management

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

use anyhow::{Context, Result};

use crate::config::Config;
use router::build_routes;
use state::AppState;

/// Serve the API until Ctrl+C
pub async fn listen(config: &Config) -> Result<()> {
    let pool = config.connect().await?;
    let state = AppState::new(config, pool);
    let app = build_routes(state, config)?;

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("Failed to bind port {}", config.port))?;
    log::info!("Application is running on: http://localhost:{}", config.port);

    tokio::select! {
        r = axum::serve(listener, app) => {
            log::warn!("server ended unexpectedly: {:?}", &r)
        },
        _ = tokio::signal::ctrl_c() => {
            log::info!("received ctrl+c interrupt, closing server");
        }
    }
    Ok(())
}
