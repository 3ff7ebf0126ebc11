//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login flow (outside this app) leaves an auth record in
//! `localStorage`. The profile page reads it once at mount and uses the
//! bearer token for every account call.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

use crate::util::storage;

/// `localStorage` key holding the serialized [`AuthRecord`].
pub const AUTH_DATA_KEY: &str = "authData";

/// `localStorage` flag set by the login flow next to [`AUTH_DATA_KEY`].
pub const IS_AUTHENTICATED_KEY: &str = "isAuthenticated";

/// Client-held identity written by the login flow.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthRecord {
    #[serde(rename = "nome", default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub jwt: String,
}

impl AuthRecord {
    /// Uppercased first letter of the name, used as the avatar fallback.
    #[must_use]
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map_or_else(|| "U".to_owned(), |c| c.to_uppercase().collect())
    }
}

/// Authentication state tracking the stored record and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub record: Option<AuthRecord>,
    pub loading: bool,
}

impl AuthState {
    /// Bearer token of the current record, empty when signed out.
    #[must_use]
    pub fn jwt(&self) -> String {
        self.record.as_ref().map(|r| r.jwt.clone()).unwrap_or_default()
    }
}

/// Read the auth record left by the login flow.
pub fn load_auth_record() -> Option<AuthRecord> {
    storage::load_json(AUTH_DATA_KEY)
}

/// Persist `record` back to `localStorage`.
pub fn save_auth_record(record: &AuthRecord) {
    storage::save_json(AUTH_DATA_KEY, record);
}

/// Drop every auth key so the next page load starts signed out.
pub fn clear_auth_storage() {
    storage::remove(AUTH_DATA_KEY);
    storage::remove(IS_AUTHENTICATED_KEY);
}
