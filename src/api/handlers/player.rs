//! Handler for account lookups.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::domain::entities::Account;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves a Riot ID to its account.
///
/// # Endpoint
///
/// `GET /player/{name}/{tag}`
///
/// # Response
///
/// The account exactly as Riot returned it, served from cache when fresh:
///
/// ```json
/// { "puuid": "abc123", "gameName": "Faker", "tagLine": "KR1" }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if Riot does not know the Riot ID.
/// Returns 429 if Riot rate limits this service, 502 on other upstream failures.
pub async fn player_handler(
    State(state): State<AppState>,
    Path((name, tag)): Path<(String, String)>,
) -> Result<Json<Account>, AppError> {
    let account = state.player_service.get_account(&name, &tag).await?;

    Ok(Json(account))
}
