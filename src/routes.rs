//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /player/{name}/{tag}`   - Account lookup (rate limited)
//! - `GET  /{name}/{tag}/matches`  - Match id lookup (rate limited)
//! - `GET  /health`                - Health check: cache store
//! - anything else                 - JSON 404
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, not_found_handler};
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_governor::key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
///
/// The peer address variant needs the server to be started with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    let lookups = api::routes::lookup_routes();
    let lookups = if behind_proxy {
        lookups.layer(rate_limit::layer(SmartIpKeyExtractor))
    } else {
        lookups.layer(rate_limit::layer(PeerIpKeyExtractor))
    };

    let router = Router::new()
        .route("/health", get(health_handler))
        .merge(lookups)
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
