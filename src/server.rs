//! HTTP server initialization and runtime setup.
//!
//! Handles cache setup, upstream client construction, and Axum server lifecycle.

use crate::application::services::{CacheAside, CacheTtls, PlayerService};
use crate::config::Config;
use crate::infrastructure::cache::connect_store;
use crate::infrastructure::riot::RiotClient;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Cache store (Redis, or in-memory fallback)
/// - Riot API client
/// - Player lookup service
/// - Axum HTTP server
///
/// Stops accepting connections on Ctrl+C and drains in-flight requests.
///
/// # Errors
///
/// Returns an error if:
/// - The Riot API client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = connect_store(&config).await;

    let riot = RiotClient::from_config(&config).context("Failed to build Riot API client")?;
    tracing::info!("Riot API client ready ({})", config.riot_api_base_url);

    let player_service = PlayerService::new(
        Arc::new(riot),
        CacheAside::new(store),
        CacheTtls::from_config(&config),
    );

    let state = AppState::new(Arc::new(player_service));

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
