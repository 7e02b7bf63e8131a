//! JSON DTOs for the `/auth/*` endpoints.
//!
//! DESIGN
//! ======
//! The backend speaks camelCase for top-level flags (`redirectTo`,
//! `needVerification`) and Indonesian field names for the user record
//! (`nama`, `id_level`). Fields the client never reads are not modeled.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated user as reported by the backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SessionUser {
    /// Role code used to pick a landing route. Absent for malformed records.
    #[serde(default)]
    pub id_level: Option<i64>,
    /// Display name shown in the welcome notice.
    #[serde(default)]
    pub nama: String,
}

/// Response of `GET /auth/me`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MeResponse {
    #[serde(default)]
    pub user: Option<SessionUser>,
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    /// Username or email.
    pub identifier: String,
    pub password: String,
}

/// Successful response of `POST /auth/login`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub user: Option<SessionUser>,
    /// Server-suggested landing path; takes precedence over the role table.
    #[serde(default, rename = "redirectTo")]
    pub redirect_to: Option<String>,
}

/// Body of the email-only endpoints (`/auth/forgot-password`,
/// `/auth/resend-verification`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmailRequest {
    pub email: String,
}

/// Response carrying an optional human-readable message.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body returned with non-2xx statuses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    /// Set on login rejections for accounts whose email is not yet verified.
    #[serde(default, rename = "needVerification")]
    pub need_verification: bool,
}

impl ErrorBody {
    /// Decode an error body, falling back to an empty body for non-JSON text.
    pub fn parse(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_default()
    }
}
