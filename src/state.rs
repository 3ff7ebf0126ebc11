//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! The dashboard keeps no data of its own; it only holds the upstream
//! account client, behind a trait object so handler tests can swap in a mock.

use std::sync::Arc;

use crate::services::account::AccountApi;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub account: Arc<dyn AccountApi>,
}

impl AppState {
    #[must_use]
    pub fn new(account: Arc<dyn AccountApi>) -> Self {
        Self { account }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use std::sync::Mutex;

    use client::net::types::{ApiMessage, PasswordResetRequest};

    use crate::services::account::AccountError;

    /// One call observed by [`MockAccount`].
    #[derive(Debug, Clone, PartialEq)]
    pub enum AccountCall {
        ResetPassword { jwt: String, request: PasswordResetRequest },
        DeleteAccount { jwt: String },
    }

    /// Scripted [`AccountApi`]: pops replies in order, records every call.
    /// With no replies left it answers with a plain success envelope.
    pub struct MockAccount {
        replies: Mutex<Vec<Result<ApiMessage, AccountError>>>,
        pub calls: Mutex<Vec<AccountCall>>,
    }

    impl MockAccount {
        #[must_use]
        pub fn new(replies: Vec<Result<ApiMessage, AccountError>>) -> Self {
            Self { replies: Mutex::new(replies), calls: Mutex::new(Vec::new()) }
        }

        fn next_reply(&self) -> Result<ApiMessage, AccountError> {
            let mut replies = self.replies.lock().unwrap();
            if replies.is_empty() { Ok(ApiMessage::ok("")) } else { replies.remove(0) }
        }
    }

    #[async_trait::async_trait]
    impl AccountApi for MockAccount {
        async fn reset_password(&self, jwt: &str, request: &PasswordResetRequest) -> Result<ApiMessage, AccountError> {
            self.calls
                .lock()
                .unwrap()
                .push(AccountCall::ResetPassword { jwt: jwt.to_owned(), request: request.clone() });
            self.next_reply()
        }

        async fn delete_account(&self, jwt: &str) -> Result<ApiMessage, AccountError> {
            self.calls.lock().unwrap().push(AccountCall::DeleteAccount { jwt: jwt.to_owned() });
            self.next_reply()
        }
    }

    /// `AppState` backed by `mock`. Keep the `Arc` to inspect recorded calls.
    #[must_use]
    pub fn test_app_state(mock: Arc<MockAccount>) -> AppState {
        AppState::new(mock)
    }
}
