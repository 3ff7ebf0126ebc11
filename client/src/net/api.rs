//! REST API helpers for the account endpoints relayed by our server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None` since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport and decode failures collapse into `None`. Callers treat `None`
//! as "server unreachable" and an [`ApiMessage`] with a truthy `error` as a
//! rejected request, mirroring how the upstream reports failures in-band.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ApiMessage, PasswordResetRequest};

#[cfg(any(test, feature = "hydrate"))]
const PASSWORD_ENDPOINT: &str = "/api/password";

#[cfg(any(test, feature = "hydrate"))]
const USER_ENDPOINT: &str = "/api/user";

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(jwt: &str) -> String {
    format!("Bearer {jwt}")
}

/// Drive one step of the password-change flow via `PUT /api/password`.
pub async fn reset_password(jwt: &str, request: &PasswordResetRequest) -> Option<ApiMessage> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(PASSWORD_ENDPOINT)
            .header("Authorization", &bearer_header(jwt))
            .json(request)
            .ok()?
            .send()
            .await
            .map_err(|e| log::warn!("password request failed: {e}"))
            .ok()?;
        resp.json::<ApiMessage>()
            .await
            .map_err(|e| log::warn!("password response decode failed (status {}): {e}", resp.status()))
            .ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (jwt, request);
        None
    }
}

/// Delete the current account via `DELETE /api/user`.
pub async fn delete_account(jwt: &str) -> Option<ApiMessage> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(USER_ENDPOINT)
            .header("Authorization", &bearer_header(jwt))
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| log::warn!("delete account request failed: {e}"))
            .ok()?;
        resp.json::<ApiMessage>()
            .await
            .map_err(|e| log::warn!("delete account response decode failed (status {}): {e}", resp.status()))
            .ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = jwt;
        None
    }
}
