//! Lookup route configuration.

use crate::api::handlers::{matches_handler, player_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Routes that may reach the Riot API.
///
/// # Endpoints
///
/// - `GET /player/{name}/{tag}`   - Account for a Riot ID
/// - `GET /{name}/{tag}/matches`  - Recent match ids (`?count=&type=`)
pub fn lookup_routes() -> Router<AppState> {
    Router::new()
        .route("/player/{name}/{tag}", get(player_handler))
        .route("/{name}/{tag}/matches", get(matches_handler))
}
