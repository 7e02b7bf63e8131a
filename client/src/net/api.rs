//! REST client for the external auth API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, always sending the
//! session cookie and bounded by an abort timeout.
//! Server-side (SSR): every call fails with [`ApiError::Unavailable`] since
//! the session cookie only exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Calls return `Result` and never panic. Non-2xx bodies are decoded into
//! [`ErrorBody`] so pages can show the server's `message`; anything that is
//! not JSON becomes an empty body and the page falls back to its own copy.
//! On 2xx, login and `/auth/me` bodies must decode; the reset body is
//! optional and the resend body is never read.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{LoginRequest, LoginResponse, MeResponse, MessageResponse};
use crate::config::AppConfig;
#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;
#[cfg(any(test, feature = "hydrate"))]
use serde::de::DeserializeOwned;

pub const ME_PATH: &str = "/auth/me";
pub const LOGIN_PATH: &str = "/auth/login";
pub const RESEND_VERIFICATION_PATH: &str = "/auth/resend-verification";
pub const FORGOT_PASSWORD_PATH: &str = "/auth/forgot-password";

/// The backend calls the sign-in screens depend on.
///
/// Pages talk to [`HttpAuthApi`]; tests substitute an in-memory double.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// `GET /auth/me`: who is signed in on this browser, if anyone.
    ///
    /// # Errors
    ///
    /// `Http` with status 401 when there is no session; any other variant
    /// for transport or decode failures.
    async fn me(&self) -> Result<MeResponse, ApiError>;

    /// `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// `Http` for rejected credentials (the body may carry
    /// `needVerification`); transport and decode failures otherwise.
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;

    /// `POST /auth/resend-verification`. The success body is ignored.
    ///
    /// # Errors
    ///
    /// `Http` for any non-2xx status; transport failures otherwise.
    async fn resend_verification(&self, email: &str) -> Result<(), ApiError>;

    /// `POST /auth/forgot-password`. A 2xx body that does not decode counts
    /// as success without a message.
    ///
    /// # Errors
    ///
    /// `Http` for any non-2xx status; transport failures otherwise.
    async fn forgot_password(&self, email: &str) -> Result<MessageResponse, ApiError>;
}

/// [`AuthApi`] backed by the browser's fetch.
#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    config: AppConfig,
}

impl HttpAuthApi {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Client for the configured backend (build-time default plus browser override).
    pub fn from_env() -> Self {
        Self::new(AppConfig::load())
    }
}

impl AuthApi for HttpAuthApi {
    async fn me(&self) -> Result<MeResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            classify(&self.get(ME_PATH).await?)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            classify(&self.post(LOGIN_PATH, request).await?)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    async fn resend_verification(&self, email: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = super::types::EmailRequest { email: email.to_owned() };
            classify_unit(&self.post(RESEND_VERIFICATION_PATH, &payload).await?)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = email;
            Err(ApiError::Unavailable)
        }
    }

    async fn forgot_password(&self, email: &str) -> Result<MessageResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = super::types::EmailRequest { email: email.to_owned() };
            classify_lenient(&self.post(FORGOT_PASSWORD_PATH, &payload).await?)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = email;
            Err(ApiError::Unavailable)
        }
    }
}

/// Status and body text of a completed exchange.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Debug, PartialEq, Eq)]
struct RawResponse {
    ok: bool,
    status: u16,
    text: String,
}

#[cfg(feature = "hydrate")]
impl HttpAuthApi {
    async fn get(&self, path: &str) -> Result<RawResponse, ApiError> {
        use gloo_net::http::Request;
        use web_sys::RequestCredentials;

        let url = self.config.url(path);
        self.exchange(|signal| {
            Request::get(&url)
                .credentials(RequestCredentials::Include)
                .abort_signal(Some(signal))
                .build()
                .map_err(|e| ApiError::Network(e.to_string()))
        })
        .await
    }

    async fn post<B: serde::Serialize>(&self, path: &str, body: &B) -> Result<RawResponse, ApiError> {
        use gloo_net::http::Request;
        use web_sys::RequestCredentials;

        let url = self.config.url(path);
        self.exchange(|signal| {
            Request::post(&url)
                .credentials(RequestCredentials::Include)
                .abort_signal(Some(signal))
                .json(body)
                .map_err(|e| ApiError::Network(e.to_string()))
        })
        .await
    }

    /// Send and read the whole body under one abort timer, so a stalled
    /// backend cannot pin the form in its submitting state.
    async fn exchange(
        &self,
        build: impl FnOnce(&web_sys::AbortSignal) -> Result<gloo_net::http::Request, ApiError>,
    ) -> Result<RawResponse, ApiError> {
        let controller =
            web_sys::AbortController::new().map_err(|_| ApiError::Network("abort controller unavailable".to_owned()))?;
        let signal = controller.signal();
        let timeout_controller = controller.clone();
        let timeout = gloo_timers::callback::Timeout::new(self.config.request_timeout_ms, move || {
            timeout_controller.abort();
        });

        let request = build(&signal)?;
        let response = request
            .send()
            .await
            .map_err(|e| transport_error(&e.to_string()))?;
        let status = response.status();
        let ok = response.ok();
        let text = response
            .text()
            .await
            .map_err(|e| transport_error(&e.to_string()))?;
        drop(timeout);
        Ok(RawResponse { ok, status, text })
    }
}

/// Non-2xx becomes [`ApiError::Http`]; a 2xx body must decode as `T`.
#[cfg(any(test, feature = "hydrate"))]
fn classify<T: DeserializeOwned + Default>(raw: &RawResponse) -> Result<T, ApiError> {
    if raw.ok { decode_body(&raw.text) } else { Err(error_from_response(raw.status, &raw.text)) }
}

/// Like [`classify`], but a 2xx body that does not decode yields `T::default()`.
#[cfg(any(test, feature = "hydrate"))]
fn classify_lenient<T: DeserializeOwned + Default>(raw: &RawResponse) -> Result<T, ApiError> {
    if raw.ok {
        Ok(decode_body(&raw.text).unwrap_or_default())
    } else {
        Err(error_from_response(raw.status, &raw.text))
    }
}

/// Only the status matters; a 2xx body is ignored.
#[cfg(any(test, feature = "hydrate"))]
fn classify_unit(raw: &RawResponse) -> Result<(), ApiError> {
    if raw.ok { Ok(()) } else { Err(error_from_response(raw.status, &raw.text)) }
}

/// Decode a 2xx body. An empty body decodes to `T::default()`.
#[cfg(any(test, feature = "hydrate"))]
fn decode_body<T: DeserializeOwned + Default>(text: &str) -> Result<T, ApiError> {
    if text.trim().is_empty() {
        return Ok(T::default());
    }
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(any(test, feature = "hydrate"))]
fn error_from_response(status: u16, text: &str) -> ApiError {
    ApiError::Http {
        status,
        body: ErrorBody::parse(text),
    }
}

/// Aborted requests are our own timeout firing.
#[cfg(any(test, feature = "hydrate"))]
fn transport_error(message: &str) -> ApiError {
    let lowered = message.to_ascii_lowercase();
    if lowered.contains("abort") || lowered.contains("timeout") {
        ApiError::Timeout
    } else {
        ApiError::Network(message.to_owned())
    }
}
