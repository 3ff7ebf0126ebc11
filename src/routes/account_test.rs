use super::*;
use std::sync::Arc;

use axum::http::Request;
use axum::http::header::AUTHORIZATION;

use crate::state::test_helpers::{AccountCall, MockAccount, test_app_state};

async fn extract(header: Option<&str>) -> Result<BearerToken, StatusCode> {
    let mut builder = Request::builder().uri("/api/user");
    if let Some(value) = header {
        builder = builder.header(AUTHORIZATION, value);
    }
    let (mut parts, ()) = builder.body(()).unwrap().into_parts();
    BearerToken::from_request_parts(&mut parts, &()).await
}

// =============================================================================
// BearerToken
// =============================================================================

#[tokio::test]
async fn bearer_token_extracted() {
    let token = extract(Some("Bearer abc.def.ghi")).await.unwrap();
    assert_eq!(token.0, "abc.def.ghi");
}

#[tokio::test]
async fn missing_authorization_is_unauthorized() {
    assert_eq!(extract(None).await.unwrap_err(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn non_bearer_scheme_is_unauthorized() {
    let err = extract(Some("Basic dXNlcjpwYXNz")).await.unwrap_err();
    assert_eq!(err, StatusCode::UNAUTHORIZED);
}

// =============================================================================
// change_password
// =============================================================================

#[tokio::test]
async fn change_password_relays_request_and_reply() {
    let mock = Arc::new(MockAccount::new(vec![Ok(ApiMessage::ok("ana@example.com"))]));
    let state = test_app_state(mock.clone());
    let request = PasswordResetRequest::request_code("ana@example.com");

    let Json(reply) = change_password(State(state), BearerToken("jwt-1".into()), Json(request.clone()))
        .await
        .unwrap();
    assert_eq!(reply, ApiMessage::ok("ana@example.com"));

    let calls = mock.calls.lock().unwrap();
    assert_eq!(*calls, vec![AccountCall::ResetPassword { jwt: "jwt-1".into(), request }]);
}

#[tokio::test]
async fn change_password_passes_in_band_failure_through() {
    let mock = Arc::new(MockAccount::new(vec![Ok(ApiMessage::failed("Código expirado"))]));
    let state = test_app_state(mock);
    let request = PasswordResetRequest::verify_code("ana@example.com", "123456");

    let Json(reply) = change_password(State(state), BearerToken("jwt".into()), Json(request))
        .await
        .unwrap();
    assert!(reply.is_error());
    assert_eq!(reply.msg_user, "Código expirado");
}

#[tokio::test]
async fn change_password_upstream_failure_is_bad_gateway() {
    let mock = Arc::new(MockAccount::new(vec![Err(AccountError::Request("connection refused".into()))]));
    let state = test_app_state(mock);
    let request = PasswordResetRequest::set_password("ana@example.com", "longenough");

    let (status, Json(body)) = change_password(State(state), BearerToken("jwt".into()), Json(request))
        .await
        .unwrap_err();
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body.error, UPSTREAM_UNAVAILABLE);
}

// =============================================================================
// delete_user
// =============================================================================

#[tokio::test]
async fn delete_user_forwards_token() {
    let mock = Arc::new(MockAccount::new(Vec::new()));
    let state = test_app_state(mock.clone());

    let Json(reply) = delete_user(State(state), BearerToken("jwt-del".into())).await.unwrap();
    assert!(!reply.is_error());

    let calls = mock.calls.lock().unwrap();
    assert_eq!(*calls, vec![AccountCall::DeleteAccount { jwt: "jwt-del".into() }]);
}

#[tokio::test]
async fn delete_user_parse_failure_is_bad_gateway() {
    let mock = Arc::new(MockAccount::new(vec![Err(AccountError::Parse { status: 500, reason: "eof".into() })]));
    let state = test_app_state(mock);

    let (status, _) = delete_user(State(state), BearerToken("jwt".into())).await.unwrap_err();
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn empty_bearer_token_is_unauthorized() {
    assert_eq!(extract(Some("Bearer   ")).await.unwrap_err(), StatusCode::UNAUTHORIZED);
}
