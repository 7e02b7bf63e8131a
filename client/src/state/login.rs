//! Login form state machine.
//!
//! `Idle`/`Error` accept edits and submits. `Submitting` and
//! `ResendingVerification` hold one request each; `AwaitingVerificationConfirm`
//! waits on the user's yes/no; `Success` is terminal until navigation.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::time::Duration;

use super::form::{NoticeKind, Notices, SubmitRejected};
use crate::net::error::ApiError;
use crate::net::types::{LoginRequest, LoginResponse};
use crate::util::roles::landing_path;

pub const FIELDS_REQUIRED: &str = "Username/email and password are required.";
pub const LOGIN_FAILED: &str = "Login failed. Please try again.";
pub const VERIFICATION_SENT: &str = "Verification email sent. Please check your inbox.";
pub const VERIFICATION_RESEND_FAILED: &str = "Could not resend the verification email.";

/// Time the welcome notice stays on screen before the redirect unmounts it.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(1);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoginPhase {
    #[default]
    Idle,
    Submitting,
    Error(String),
    /// The server rejected an unverified account; asking whether to resend.
    AwaitingVerificationConfirm { email: String, message: String },
    ResendingVerification,
    Success { display_name: String },
}

/// What the page should do after a login response was applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginStep {
    /// Wait [`REDIRECT_DELAY`], then navigate here.
    Redirect(String),
    Stay,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginState {
    /// Username or email.
    pub identifier: String,
    pub password: String,
    pub password_visible: bool,
    pub phase: LoginPhase,
    pub notices: Notices,
}

impl LoginState {
    /// A request is outstanding; the submit trigger shows progress.
    pub fn is_busy(&self) -> bool {
        matches!(self.phase, LoginPhase::Submitting | LoginPhase::ResendingVerification)
    }

    pub fn accepts_input(&self) -> bool {
        matches!(self.phase, LoginPhase::Idle | LoginPhase::Error(_))
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            LoginPhase::Error(message) | LoginPhase::AwaitingVerificationConfirm { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn set_identifier(&mut self, value: String) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.identifier = value;
        true
    }

    pub fn set_password(&mut self, value: String) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.password = value;
        true
    }

    pub fn toggle_password_visibility(&mut self) {
        self.password_visible = !self.password_visible;
    }

    /// Validate and enter `Submitting`, returning the request to send.
    ///
    /// # Errors
    ///
    /// `Busy` while another request is outstanding or the form has finished;
    /// `Invalid` when a field is blank (the phase becomes `Error`).
    pub fn begin_submit(&mut self) -> Result<LoginRequest, SubmitRejected> {
        if !self.accepts_input() {
            return Err(SubmitRejected::Busy);
        }
        let identifier = self.identifier.trim();
        if identifier.is_empty() || self.password.trim().is_empty() {
            self.phase = LoginPhase::Error(FIELDS_REQUIRED.to_owned());
            return Err(SubmitRejected::Invalid);
        }
        let request = LoginRequest {
            identifier: identifier.to_owned(),
            password: self.password.clone(),
        };
        self.phase = LoginPhase::Submitting;
        Ok(request)
    }

    /// Classify the login response into the next phase.
    pub fn apply_login_result(&mut self, result: Result<LoginResponse, ApiError>) -> LoginStep {
        match result {
            Ok(LoginResponse {
                user: Some(user),
                redirect_to,
            }) => {
                let destination = redirect_to
                    .map(|path| path.trim().to_owned())
                    .filter(|path| !path.is_empty())
                    .unwrap_or_else(|| landing_path(user.id_level).to_owned());
                let welcome = if user.nama.trim().is_empty() {
                    "Welcome!".to_owned()
                } else {
                    format!("Welcome, {}!", user.nama.trim())
                };
                self.notices.show(NoticeKind::Success, welcome);
                self.password.clear();
                self.phase = LoginPhase::Success { display_name: user.nama };
                LoginStep::Redirect(destination)
            }
            Ok(LoginResponse { user: None, .. }) => {
                self.fail(LOGIN_FAILED.to_owned());
                LoginStep::Stay
            }
            Err(err) => {
                let message = err.server_message().unwrap_or(LOGIN_FAILED).to_owned();
                if err.needs_verification() {
                    self.notices.show(NoticeKind::Error, message.clone());
                    self.phase = LoginPhase::AwaitingVerificationConfirm {
                        email: self.identifier.trim().to_owned(),
                        message,
                    };
                } else {
                    self.fail(message);
                }
                LoginStep::Stay
            }
        }
    }

    /// Record the user's answer to the resend prompt.
    ///
    /// Returns the address to resend to when the user agreed; `None` when
    /// they declined or no prompt was open.
    pub fn answer_verification_prompt(&mut self, resend: bool) -> Option<String> {
        let LoginPhase::AwaitingVerificationConfirm { email, message } = &self.phase else {
            return None;
        };
        let (email, message) = (email.clone(), message.clone());
        if resend {
            self.phase = LoginPhase::ResendingVerification;
            Some(email)
        } else {
            self.phase = LoginPhase::Error(message);
            None
        }
    }

    pub fn finish_resend(&mut self, result: Result<(), ApiError>) {
        if self.phase != LoginPhase::ResendingVerification {
            return;
        }
        match result {
            Ok(()) => {
                self.notices.show(NoticeKind::Success, VERIFICATION_SENT);
                self.phase = LoginPhase::Idle;
            }
            Err(_) => self.fail(VERIFICATION_RESEND_FAILED.to_owned()),
        }
    }

    fn fail(&mut self, message: String) {
        self.notices.show(NoticeKind::Error, message.clone());
        self.phase = LoginPhase::Error(message);
    }
}
