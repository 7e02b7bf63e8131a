use super::*;

// =============================================================
// SessionUser / MeResponse
// =============================================================

#[test]
fn me_response_reads_user_fields() {
    let me: MeResponse =
        serde_json::from_str(r#"{"user":{"id":7,"id_level":3,"nama":"Sari","email":"s@x.id"}}"#).expect("me");
    let user = me.user.expect("user");
    assert_eq!(user.id_level, Some(3));
    assert_eq!(user.nama, "Sari");
}

#[test]
fn me_response_without_user_is_none() {
    let me: MeResponse = serde_json::from_str("{}").expect("me");
    assert!(me.user.is_none());
}

#[test]
fn session_user_tolerates_missing_level() {
    let user: SessionUser = serde_json::from_str(r#"{"nama":"Budi"}"#).expect("user");
    assert_eq!(user.id_level, None);
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_request_serializes_identifier_and_password() {
    let req = LoginRequest {
        identifier: "budi".to_owned(),
        password: "rahasia".to_owned(),
    };
    let value = serde_json::to_value(&req).expect("json");
    assert_eq!(value, serde_json::json!({"identifier": "budi", "password": "rahasia"}));
}

#[test]
fn login_response_reads_redirect_to() {
    let resp: LoginResponse =
        serde_json::from_str(r#"{"user":{"id_level":2,"nama":"Budi"},"redirectTo":"/custom"}"#).expect("login");
    assert_eq!(resp.redirect_to.as_deref(), Some("/custom"));
    assert_eq!(resp.user.map(|u| u.nama), Some("Budi".to_owned()));
}

// =============================================================
// ErrorBody
// =============================================================

#[test]
fn error_body_reads_need_verification_flag() {
    let body = ErrorBody::parse(r#"{"message":"Email belum diverifikasi","needVerification":true}"#);
    assert!(body.need_verification);
    assert_eq!(body.message.as_deref(), Some("Email belum diverifikasi"));
}

#[test]
fn error_body_defaults_flag_to_false() {
    let body = ErrorBody::parse(r#"{"message":"Password salah"}"#);
    assert!(!body.need_verification);
}

#[test]
fn error_body_non_json_is_empty() {
    let body = ErrorBody::parse("<html>502 Bad Gateway</html>");
    assert_eq!(body, ErrorBody::default());
}
