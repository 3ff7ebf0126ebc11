//! Account relay routes: password change steps and account deletion.
//!
//! The browser sends its bearer token here; handlers forward it unchanged
//! to the upstream and hand the upstream's JSON envelope straight back.
//! In-band failures (`error` set in the body) still answer 200 so the page
//! can show `msgUser`; only an unreachable or garbled upstream is a 502.

use axum::extract::{FromRequestParts, State};
use axum::http::StatusCode;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::response::Json;
use client::net::types::{ApiMessage, PasswordResetRequest, RelayError};

use crate::services::account::AccountError;
use crate::state::AppState;

const BEARER_PREFIX: &str = "Bearer ";
const UPSTREAM_UNAVAILABLE: &str = "upstream unavailable";

// =============================================================================
// BEARER EXTRACTOR
// =============================================================================

/// Bearer token from the `Authorization` header.
/// Use as a handler parameter to require one; rejects with 401.
#[derive(Debug)]
pub struct BearerToken(pub String);

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| {
                tracing::warn!("missing Authorization header");
                StatusCode::UNAUTHORIZED
            })?;
        let Some(token) = header.strip_prefix(BEARER_PREFIX).map(str::trim) else {
            tracing::warn!("invalid authorization scheme: expected Bearer");
            return Err(StatusCode::UNAUTHORIZED);
        };
        if token.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }
        Ok(Self(token.to_owned()))
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

type RelayResult = Result<Json<ApiMessage>, (StatusCode, Json<RelayError>)>;

/// `PUT /api/password`: one step of the password-change flow.
pub async fn change_password(
    State(state): State<AppState>,
    BearerToken(jwt): BearerToken,
    Json(request): Json<PasswordResetRequest>,
) -> RelayResult {
    state
        .account
        .reset_password(&jwt, &request)
        .await
        .map(Json)
        .map_err(|e| relay_failure("password", &e))
}

/// `DELETE /api/user`: delete the caller's account.
pub async fn delete_user(State(state): State<AppState>, BearerToken(jwt): BearerToken) -> RelayResult {
    state
        .account
        .delete_account(&jwt)
        .await
        .map(Json)
        .map_err(|e| relay_failure("user", &e))
}

fn relay_failure(endpoint: &str, err: &AccountError) -> (StatusCode, Json<RelayError>) {
    tracing::error!(endpoint, error = %err, "upstream account call failed");
    (StatusCode::BAD_GATEWAY, Json(RelayError { error: UPSTREAM_UNAVAILABLE.to_owned() }))
}

#[cfg(test)]
#[path = "account_test.rs"]
mod tests;
