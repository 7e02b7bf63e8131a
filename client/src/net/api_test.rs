use super::*;

#[test]
fn endpoint_paths_match_backend_contract() {
    assert_eq!(ME_PATH, "/auth/me");
    assert_eq!(LOGIN_PATH, "/auth/login");
    assert_eq!(RESEND_VERIFICATION_PATH, "/auth/resend-verification");
    assert_eq!(FORGOT_PASSWORD_PATH, "/auth/forgot-password");
}

#[test]
fn decode_body_empty_is_default() {
    let resp: MessageResponse = decode_body("").expect("empty body");
    assert_eq!(resp, MessageResponse::default());
    let resp: MessageResponse = decode_body("  \n").expect("blank body");
    assert_eq!(resp.message, None);
}

#[test]
fn decode_body_reads_json() {
    let resp: LoginResponse = decode_body(r#"{"user":{"id_level":1,"nama":"Ani"}}"#).expect("login");
    assert_eq!(resp.user.and_then(|u| u.id_level), Some(1));
}

#[test]
fn decode_body_rejects_malformed_json() {
    let err = decode_body::<MeResponse>("{not json").expect_err("malformed");
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn error_from_response_keeps_status_and_message() {
    let err = error_from_response(401, r#"{"message":"Unauthorized"}"#);
    assert!(err.is_unauthorized());
    assert_eq!(err.server_message(), Some("Unauthorized"));
}

#[test]
fn error_from_response_ignores_html_bodies() {
    let err = error_from_response(502, "<html>Bad Gateway</html>");
    assert_eq!(err.status(), Some(502));
    assert_eq!(err.server_message(), None);
}

#[test]
fn transport_error_detects_abort_as_timeout() {
    assert_eq!(transport_error("AbortError: The user aborted a request."), ApiError::Timeout);
    assert_eq!(
        transport_error("TypeError: Failed to fetch"),
        ApiError::Network("TypeError: Failed to fetch".to_owned())
    );
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_api_outside_browser_is_unavailable() {
    let api = HttpAuthApi::new(AppConfig::default());
    let result = futures::executor::block_on(api.me());
    assert_eq!(result, Err(ApiError::Unavailable));
}

// =============================================================
// Response classification
// =============================================================

fn raw(status: u16, text: &str) -> RawResponse {
    RawResponse {
        ok: (200..300).contains(&status),
        status,
        text: text.to_owned(),
    }
}

#[test]
fn classify_decodes_login_success() {
    let resp: LoginResponse =
        classify(&raw(200, r#"{"user":{"id_level":2,"nama":"Budi"},"redirectTo":"/x"}"#)).expect("login");
    assert_eq!(resp.redirect_to.as_deref(), Some("/x"));
    assert_eq!(resp.user.map(|u| u.nama), Some("Budi".to_owned()));
}

#[test]
fn classify_me_401_is_unauthorized() {
    let err = classify::<MeResponse>(&raw(401, "")).expect_err("401");
    assert!(err.is_unauthorized());
}

#[test]
fn classify_login_rejection_carries_verification_flag() {
    let err = classify::<LoginResponse>(&raw(403, r#"{"message":"Verify first","needVerification":true}"#))
        .expect_err("403");
    assert!(err.needs_verification());
    assert_eq!(err.server_message(), Some("Verify first"));
}

#[test]
fn classify_strict_rejects_undecodable_success() {
    let err = classify::<MeResponse>(&raw(200, "OK")).expect_err("plain text");
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn classify_unit_ignores_success_body() {
    assert_eq!(classify_unit(&raw(200, "OK")), Ok(()));
    assert_eq!(classify_unit(&raw(204, "")), Ok(()));
    assert_eq!(classify_unit(&raw(200, r#"{"message":{"id":"verification.sent"}}"#)), Ok(()));
}

#[test]
fn classify_unit_keeps_failure_status() {
    let err = classify_unit(&raw(429, r#"{"message":"Too many requests"}"#)).expect_err("429");
    assert_eq!(err.status(), Some(429));
    assert_eq!(err.server_message(), Some("Too many requests"));
}

#[test]
fn classify_lenient_reset_plain_text_success_is_default() {
    let resp: MessageResponse = classify_lenient(&raw(200, "OK")).expect("plain text");
    assert_eq!(resp, MessageResponse::default());
    let resp: MessageResponse =
        classify_lenient(&raw(200, r#"{"message":{"id":"reset.sent"}}"#)).expect("structured message");
    assert_eq!(resp.message, None);
}

#[test]
fn classify_lenient_reset_keeps_server_message() {
    let resp: MessageResponse = classify_lenient(&raw(200, r#"{"message":"Check your inbox"}"#)).expect("json");
    assert_eq!(resp.message.as_deref(), Some("Check your inbox"));
}

#[test]
fn classify_lenient_reset_failure_is_error() {
    let err = classify_lenient::<MessageResponse>(&raw(500, "<html>oops</html>")).expect_err("500");
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.server_message(), None);
}
