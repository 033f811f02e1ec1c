//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::KeyExtractor,
};

/// Creates a rate limiter for the lookup endpoints.
///
/// Every miss on these endpoints spends the service's own Riot API quota,
/// so a single client must not be able to drain it.
///
/// # Limits
///
/// - **Replenish**: one request every 2 seconds
/// - **Burst**: 100 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Pass [`tower_governor::key_extractor::PeerIpKeyExtractor`] to key on the
/// socket peer address, or
/// [`tower_governor::key_extractor::SmartIpKeyExtractor`] when running behind
/// a trusted reverse proxy that sets `X-Forwarded-For` / `X-Real-IP`.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/player/{name}/{tag}", get(player_handler))
///     .layer(rate_limit::layer(PeerIpKeyExtractor));
/// ```
pub fn layer<K: KeyExtractor>(
    key_extractor: K,
) -> GovernorLayer<K, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(key_extractor)
            .per_second(2)
            .burst_size(100)
            .finish()
            .expect("rate limit quota must be non-zero"),
    );

    GovernorLayer::new(governor_conf)
}
