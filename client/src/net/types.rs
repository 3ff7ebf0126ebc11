//! Shared wire DTOs for the account API.
//!
//! DESIGN
//! ======
//! The same types are used by the browser (talking to our server) and by the
//! server (talking to the upstream account API), so the JSON shape only has
//! to be described once.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Reply envelope returned by every upstream account endpoint.
///
/// Failure is signalled in-band by `error`, whose type varies between
/// endpoints (bool, string, or absent), so it is kept as a raw JSON value and
/// interpreted by truthiness in [`ApiMessage::is_error`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiMessage {
    #[serde(default)]
    pub error: serde_json::Value,
    /// Message meant for the end user.
    #[serde(default)]
    pub msg_user: String,
    /// Raw upstream message, diagnostic only.
    #[serde(default)]
    pub msg_original: String,
}

impl ApiMessage {
    /// Successful reply carrying `msg_user`.
    #[must_use]
    pub fn ok(msg_user: impl Into<String>) -> Self {
        Self { error: serde_json::Value::Bool(false), msg_user: msg_user.into(), msg_original: String::new() }
    }

    /// Failed reply carrying `msg_user`.
    #[must_use]
    pub fn failed(msg_user: impl Into<String>) -> Self {
        Self { error: serde_json::Value::Bool(true), msg_user: msg_user.into(), msg_original: String::new() }
    }

    /// Whether the upstream flagged this reply as a failure.
    ///
    /// `null`, `false`, `""` and `0` all mean success.
    #[must_use]
    pub fn is_error(&self) -> bool {
        match &self.error {
            serde_json::Value::Null => false,
            serde_json::Value::Bool(b) => *b,
            serde_json::Value::String(s) => !s.is_empty(),
            serde_json::Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
        }
    }

    /// User-facing message, or `fallback` when the upstream sent none.
    #[must_use]
    pub fn user_message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.msg_user.is_empty() { fallback } else { &self.msg_user }
    }
}

/// Body of `PUT /password`. Each flow step sends only the fields it owns.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordResetRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
}

impl PasswordResetRequest {
    /// First step: ask the upstream to send a verification code to `email`.
    #[must_use]
    pub fn request_code(email: impl Into<String>) -> Self {
        Self { email: Some(email.into()), ..Self::default() }
    }

    /// Second step: check `code` for `email`.
    #[must_use]
    pub fn verify_code(email: impl Into<String>, code: impl Into<String>) -> Self {
        Self { email: Some(email.into()), code: Some(code.into()), ..Self::default() }
    }

    /// Final step: set `new_password` for `email`.
    #[must_use]
    pub fn set_password(email: impl Into<String>, new_password: impl Into<String>) -> Self {
        Self { email: Some(email.into()), new_password: Some(new_password.into()), ..Self::default() }
    }
}

/// Error body our server returns when it cannot reach the upstream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayError {
    pub error: String,
}
