//! Failure classification for auth API calls.
//!
//! ERROR HANDLING
//! ==============
//! Every request outcome that is not a decoded 2xx body lands here. Pages
//! never show `Display` output to users; they read `server_message()` and
//! fall back to their own fixed copy.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ErrorBody;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("request failed ({status})")]
    Http { status: u16, body: ErrorBody },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
    /// A 2xx body could not be decoded.
    #[error("response error: {0}")]
    Decode(String),
    /// HTTP calls are browser-only; SSR builds get this instead.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for the "no session" answer of the session probe.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Human-readable message supplied by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Http { body, .. } => body
                .message
                .as_deref()
                .map(str::trim)
                .filter(|m| !m.is_empty()),
            _ => None,
        }
    }

    pub fn needs_verification(&self) -> bool {
        matches!(self, Self::Http { body, .. } if body.need_verification)
    }
}
