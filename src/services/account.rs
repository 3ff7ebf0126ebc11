//! Upstream account API client.
//!
//! DESIGN
//! ======
//! The browser never talks to the upstream directly. Route handlers forward
//! the caller's bearer token through [`AccountApi`], which keeps handlers
//! testable with a mock and keeps `reqwest` confined to [`AccountClient`].
//!
//! The upstream signals failures in the JSON body (`error` field), often
//! with a non-2xx status. Any body that parses as [`ApiMessage`] is
//! therefore returned as `Ok`; only transport or decode failures are errors.

use client::net::types::{ApiMessage, PasswordResetRequest};
use reqwest::Method;

use crate::config::UpstreamTimeouts;

/// Errors produced by upstream account calls.
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request never produced a response.
    #[error("upstream request failed: {0}")]
    Request(String),

    /// The response body was not the expected JSON envelope.
    #[error("upstream response parse failed (status {status}): {reason}")]
    Parse { status: u16, reason: String },
}

/// Account operations backed by the upstream API.
#[async_trait::async_trait]
pub trait AccountApi: Send + Sync {
    /// `PUT /password`: one step of the password-change flow.
    async fn reset_password(&self, jwt: &str, request: &PasswordResetRequest) -> Result<ApiMessage, AccountError>;

    /// `DELETE /user`: remove the caller's account.
    async fn delete_account(&self, jwt: &str) -> Result<ApiMessage, AccountError>;
}

/// `reqwest`-backed [`AccountApi`].
pub struct AccountClient {
    http: reqwest::Client,
    base_url: String,
}

impl AccountClient {
    /// Build a client for `base_url` (no trailing slash).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(base_url: impl Into<String>, timeouts: UpstreamTimeouts) -> Result<Self, AccountError> {
        let http = reqwest::Client::builder()
            .timeout(timeouts.request())
            .connect_timeout(timeouts.connect())
            .build()
            .map_err(|e| AccountError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: base_url.into() })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        jwt: &str,
        body: Option<&PasswordResetRequest>,
    ) -> Result<ApiMessage, AccountError> {
        let mut request = self
            .http
            .request(method.clone(), self.url(path))
            .bearer_auth(jwt)
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AccountError::Request(e.to_string()))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| AccountError::Request(e.to_string()))?;

        let message = parse_account_response(status, &text)?;
        tracing::debug!(%method, path, status, upstream_error = message.is_error(), "upstream account call");
        Ok(message)
    }
}

#[async_trait::async_trait]
impl AccountApi for AccountClient {
    async fn reset_password(&self, jwt: &str, request: &PasswordResetRequest) -> Result<ApiMessage, AccountError> {
        self.send(Method::PUT, "/password", jwt, Some(request)).await
    }

    async fn delete_account(&self, jwt: &str) -> Result<ApiMessage, AccountError> {
        self.send(Method::DELETE, "/user", jwt, None).await
    }
}

/// Decode an upstream body, whatever its status.
pub(crate) fn parse_account_response(status: u16, body: &str) -> Result<ApiMessage, AccountError> {
    serde_json::from_str(body).map_err(|e| AccountError::Parse { status, reason: e.to_string() })
}

#[cfg(test)]
#[path = "account_test.rs"]
mod tests;
