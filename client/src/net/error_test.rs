use super::*;

fn http(status: u16, message: Option<&str>, need_verification: bool) -> ApiError {
    ApiError::Http {
        status,
        body: ErrorBody {
            message: message.map(str::to_owned),
            need_verification,
        },
    }
}

#[test]
fn status_only_for_http_errors() {
    assert_eq!(http(403, None, false).status(), Some(403));
    assert_eq!(ApiError::Timeout.status(), None);
    assert_eq!(ApiError::Network("offline".to_owned()).status(), None);
}

#[test]
fn is_unauthorized_matches_401_only() {
    assert!(http(401, None, false).is_unauthorized());
    assert!(!http(403, None, false).is_unauthorized());
    assert!(!ApiError::Unavailable.is_unauthorized());
}

#[test]
fn server_message_trims_and_skips_blank() {
    assert_eq!(http(400, Some("  Password salah "), false).server_message(), Some("Password salah"));
    assert_eq!(http(400, Some("   "), false).server_message(), None);
    assert_eq!(http(400, None, false).server_message(), None);
}

#[test]
fn transport_errors_carry_no_server_message() {
    assert_eq!(ApiError::Network("connection refused".to_owned()).server_message(), None);
    assert_eq!(ApiError::Decode("eof".to_owned()).server_message(), None);
}

#[test]
fn needs_verification_reads_body_flag() {
    assert!(http(403, Some("verify first"), true).needs_verification());
    assert!(!http(403, Some("nope"), false).needs_verification());
    assert!(!ApiError::Timeout.needs_verification());
}

#[test]
fn display_never_includes_body() {
    let err = http(500, Some("stack trace here"), false);
    assert_eq!(err.to_string(), "request failed (500)");
}
