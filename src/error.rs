//! HTTP-facing error type.
//!
//! Every handler returns `Result<_, AppError>`; the error renders as
//! `{ "error": { "code", "message", "details" } }` with a matching status.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::RiotError;
use crate::utils::riot_id::RiotIdError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

#[derive(Debug)]
pub enum AppError {
    Validation {
        message: String,
        details: Value,
    },
    NotFound {
        message: String,
        details: Value,
    },
    /// The Riot API failed; `status` is what this service answers with.
    Upstream {
        status: StatusCode,
        message: String,
        details: Value,
    },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn upstream(status: StatusCode, message: impl Into<String>, details: Value) -> Self {
        Self::Upstream {
            status,
            message: message.into(),
            details,
        }
    }

    /// Status code this error renders with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Upstream { status, .. } => *status,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation { message, .. }
            | AppError::NotFound { message, .. }
            | AppError::Upstream { message, .. } => f.write_str(message),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Upstream {
                message, details, ..
            } => ("upstream_error", message, details),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Status this service answers with for a given upstream status.
///
/// Client-side conditions the caller can act on (bad input, unknown player,
/// rate limited) pass through. Everything else, including an upstream 401/403
/// caused by this service's own key, is a bad gateway.
pub fn map_upstream_status(upstream: u16) -> StatusCode {
    match upstream {
        400 => StatusCode::BAD_REQUEST,
        404 => StatusCode::NOT_FOUND,
        429 => StatusCode::TOO_MANY_REQUESTS,
        _ => StatusCode::BAD_GATEWAY,
    }
}

impl From<RiotError> for AppError {
    fn from(e: RiotError) -> Self {
        match e {
            RiotError::Upstream { status, body } => {
                // Riot error bodies are JSON; keep them structured when possible.
                let upstream_body =
                    serde_json::from_str::<Value>(&body).unwrap_or(Value::String(body));
                AppError::upstream(
                    map_upstream_status(status),
                    format!("Riot API returned {}", status),
                    json!({ "upstream_status": status, "upstream_body": upstream_body }),
                )
            }
            RiotError::Transport(reason) => AppError::upstream(
                StatusCode::BAD_GATEWAY,
                "Riot API unreachable",
                json!({ "reason": reason }),
            ),
            RiotError::Decode(reason) => AppError::upstream(
                StatusCode::BAD_GATEWAY,
                "Unexpected Riot API response",
                json!({ "reason": reason }),
            ),
        }
    }
}

impl From<RiotIdError> for AppError {
    fn from(e: RiotIdError) -> Self {
        AppError::bad_request("Invalid Riot ID", json!({ "reason": e.to_string() }))
    }
}
