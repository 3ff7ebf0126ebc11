use super::*;

// =============================================================
// ApiMessage
// =============================================================

#[test]
fn api_message_deserializes_camel_case_fields() {
    let raw = r#"{"error":"","msgUser":"ana@example.com","msgOriginal":"sent"}"#;
    let msg: ApiMessage = serde_json::from_str(raw).unwrap();
    assert_eq!(msg.msg_user, "ana@example.com");
    assert_eq!(msg.msg_original, "sent");
    assert!(!msg.is_error());
}

#[test]
fn api_message_missing_fields_default_to_success() {
    let msg: ApiMessage = serde_json::from_str("{}").unwrap();
    assert!(!msg.is_error());
    assert!(msg.msg_user.is_empty());
}

#[test]
fn api_message_falsy_error_values_are_success() {
    for raw in ["null", "false", "\"\"", "0"] {
        let json = format!(r#"{{"error":{raw},"msgUser":"x"}}"#);
        let msg: ApiMessage = serde_json::from_str(&json).unwrap();
        assert!(!msg.is_error(), "expected success for error={raw}");
    }
}

#[test]
fn api_message_truthy_error_values_are_failures() {
    for raw in ["true", "\"invalid code\"", "1", "{\"code\":4}", "[1]"] {
        let json = format!(r#"{{"error":{raw},"msgUser":"x"}}"#);
        let msg: ApiMessage = serde_json::from_str(&json).unwrap();
        assert!(msg.is_error(), "expected failure for error={raw}");
    }
}

#[test]
fn api_message_constructors_set_error_flag() {
    assert!(!ApiMessage::ok("done").is_error());
    assert!(ApiMessage::failed("nope").is_error());
}

#[test]
fn user_message_or_falls_back_when_empty() {
    let msg = ApiMessage::failed("");
    assert_eq!(msg.user_message_or("Erro desconhecido"), "Erro desconhecido");
    let msg = ApiMessage::failed("Email não cadastrado");
    assert_eq!(msg.user_message_or("Erro desconhecido"), "Email não cadastrado");
}

// =============================================================
// PasswordResetRequest
// =============================================================

#[test]
fn request_code_serializes_email_only() {
    let body = serde_json::to_value(PasswordResetRequest::request_code("a@b.com")).unwrap();
    assert_eq!(body, serde_json::json!({ "email": "a@b.com" }));
}

#[test]
fn verify_code_serializes_email_and_code() {
    let body = serde_json::to_value(PasswordResetRequest::verify_code("a@b.com", "123456")).unwrap();
    assert_eq!(body, serde_json::json!({ "email": "a@b.com", "code": "123456" }));
}

#[test]
fn set_password_serializes_email_and_new_password() {
    let body = serde_json::to_value(PasswordResetRequest::set_password("a@b.com", "hunter22")).unwrap();
    assert_eq!(body, serde_json::json!({ "email": "a@b.com", "new_password": "hunter22" }));
}
