//! Handler for match history lookups.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};
use serde_json::json;

use crate::api::dto::matches::MatchesQuery;
use crate::domain::entities::MatchSummary;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the most recent match ids of a player.
///
/// # Endpoint
///
/// `GET /{name}/{tag}/matches`
///
/// # Query Parameters
///
/// - `count` (optional): Number of ids (default: 20, clamped to 1..=50 upstream)
/// - `type` (optional): `ranked` (default), `normal`, `tourney` or `tutorial`
///
/// # Response
///
/// ```json
/// {
///   "name": "faker",
///   "tag": "kr1",
///   "type": "ranked",
///   "count": 2,
///   "matches": ["KR_7001", "KR_7000"]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for a non-numeric `count` or unknown `type`.
/// Upstream failures as for [`crate::api::handlers::player_handler`].
pub async fn matches_handler(
    State(state): State<AppState>,
    Path((name, tag)): Path<(String, String)>,
    query: Result<Query<MatchesQuery>, QueryRejection>,
) -> Result<Json<MatchSummary>, AppError> {
    let Query(params) = query.map_err(|e| {
        AppError::bad_request(
            "Invalid query parameters",
            json!({ "reason": e.body_text() }),
        )
    })?;

    let match_type = params.match_type().map_err(|e| {
        AppError::bad_request("Invalid match type", json!({ "reason": e.to_string() }))
    })?;

    let summary = state
        .player_service
        .get_matches(&name, &tag, params.count(), match_type)
        .await?;

    Ok(Json(summary))
}
