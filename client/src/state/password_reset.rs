//! Forgot-password form state.
//!
//! One-shot: once the reset link is `Sent` the email input stays disabled for
//! the life of the page.

#[cfg(test)]
#[path = "password_reset_test.rs"]
mod password_reset_test;

use std::sync::LazyLock;

use regex::Regex;

use super::form::SubmitRejected;
use crate::net::error::ApiError;
use crate::net::types::MessageResponse;

pub const EMAIL_REQUIRED: &str = "Email is required.";
pub const EMAIL_INVALID: &str = "Invalid email format.";
pub const RESET_SENT: &str = "If the email is registered, a reset link has been sent.";
pub const RESET_FAILED: &str = "Failed to send the reset link. Please try again.";

const EMAIL_SHAPE: &str = r"^\S+@\S+\.\S+$";

static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(EMAIL_SHAPE).ok());

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ResetPhase {
    #[default]
    Idle,
    Submitting,
    Error(String),
    /// Terminal; carries the confirmation shown to the user.
    Sent(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PasswordResetState {
    pub email: String,
    pub phase: ResetPhase,
}

/// Minimal address shape check: `local@domain.tld` without whitespace.
///
/// # Errors
///
/// [`EMAIL_REQUIRED`] for a blank address, [`EMAIL_INVALID`] when the
/// trimmed address does not match the shape.
pub fn validate_email(raw: &str) -> Result<String, &'static str> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(EMAIL_REQUIRED);
    }
    if !EMAIL_RE.as_ref().is_some_and(|re| re.is_match(email)) {
        return Err(EMAIL_INVALID);
    }
    Ok(email.to_owned())
}

impl PasswordResetState {
    pub fn is_submitting(&self) -> bool {
        self.phase == ResetPhase::Submitting
    }

    pub fn is_sent(&self) -> bool {
        matches!(self.phase, ResetPhase::Sent(_))
    }

    pub fn accepts_input(&self) -> bool {
        matches!(self.phase, ResetPhase::Idle | ResetPhase::Error(_))
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            ResetPhase::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn success_message(&self) -> Option<&str> {
        match &self.phase {
            ResetPhase::Sent(message) => Some(message),
            _ => None,
        }
    }

    pub fn set_email(&mut self, value: String) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.email = value;
        true
    }

    /// Validate and enter `Submitting`, returning the address to send.
    ///
    /// # Errors
    ///
    /// `Busy` while submitting or after the link was sent; `Invalid` when the
    /// address fails validation (the phase becomes `Error`).
    pub fn begin_submit(&mut self) -> Result<String, SubmitRejected> {
        if !self.accepts_input() {
            return Err(SubmitRejected::Busy);
        }
        match validate_email(&self.email) {
            Ok(email) => {
                self.phase = ResetPhase::Submitting;
                Ok(email)
            }
            Err(message) => {
                self.phase = ResetPhase::Error(message.to_owned());
                Err(SubmitRejected::Invalid)
            }
        }
    }

    pub fn finish(&mut self, result: Result<MessageResponse, ApiError>) {
        if !self.is_submitting() {
            return;
        }
        match result {
            Ok(resp) => {
                let message = non_blank(resp.message).unwrap_or_else(|| RESET_SENT.to_owned());
                self.email.clear();
                self.phase = ResetPhase::Sent(message);
            }
            Err(err) => {
                let message = err.server_message().unwrap_or(RESET_FAILED).to_owned();
                self.phase = ResetPhase::Error(message);
            }
        }
    }
}

fn non_blank(message: Option<String>) -> Option<String> {
    message.map(|m| m.trim().to_owned()).filter(|m| !m.is_empty())
}
