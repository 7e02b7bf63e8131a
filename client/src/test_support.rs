//! In-memory doubles for the auth API, page state and navigation.

use std::cell::{Cell, RefCell};

use leptos_router::NavigateOptions;

use crate::net::api::AuthApi;
use crate::net::error::ApiError;
use crate::net::types::{LoginRequest, LoginResponse, MeResponse, MessageResponse};
use crate::state::form::FormCell;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiCall {
    Me,
    Login(LoginRequest),
    ResendVerification(String),
    ForgotPassword(String),
}

/// Canned responses plus a log of every call made.
pub struct MockAuthApi {
    pub me: Result<MeResponse, ApiError>,
    pub login: Result<LoginResponse, ApiError>,
    pub resend: Result<(), ApiError>,
    pub forgot: Result<MessageResponse, ApiError>,
    /// Runs inside every call before it resolves, e.g. to unmount the page.
    pub during_call: Option<Box<dyn Fn()>>,
    pub calls: RefCell<Vec<ApiCall>>,
}

impl Default for MockAuthApi {
    fn default() -> Self {
        Self {
            me: Err(ApiError::Unavailable),
            login: Err(ApiError::Unavailable),
            resend: Err(ApiError::Unavailable),
            forgot: Err(ApiError::Unavailable),
            during_call: None,
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl MockAuthApi {
    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: ApiCall) {
        self.calls.borrow_mut().push(call);
        if let Some(hook) = &self.during_call {
            hook();
        }
    }
}

impl AuthApi for MockAuthApi {
    async fn me(&self) -> Result<MeResponse, ApiError> {
        self.record(ApiCall::Me);
        self.me.clone()
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.record(ApiCall::Login(request.clone()));
        self.login.clone()
    }

    async fn resend_verification(&self, email: &str) -> Result<(), ApiError> {
        self.record(ApiCall::ResendVerification(email.to_owned()));
        self.resend.clone()
    }

    async fn forgot_password(&self, email: &str) -> Result<MessageResponse, ApiError> {
        self.record(ApiCall::ForgotPassword(email.to_owned()));
        self.forgot.clone()
    }
}

/// Page state that can be "unmounted" to exercise stale responses.
pub struct TestCell<T> {
    value: RefCell<T>,
    live: Cell<bool>,
}

impl<T: Clone> TestCell<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: RefCell::new(value),
            live: Cell::new(true),
        }
    }

    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    pub fn unmount(&self) {
        self.live.set(false);
    }
}

impl<T> FormCell<T> for TestCell<T> {
    fn try_update_form<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        if !self.live.get() {
            return None;
        }
        Some(f(&mut self.value.borrow_mut()))
    }
}

/// Records `(path, replace)` for every navigation.
#[derive(Default)]
pub struct NavLog(RefCell<Vec<(String, bool)>>);

impl NavLog {
    pub fn navigator(&self) -> impl Fn(&str, NavigateOptions) + '_ {
        move |path: &str, options: NavigateOptions| self.0.borrow_mut().push((path.to_owned(), options.replace))
    }

    pub fn entries(&self) -> Vec<(String, bool)> {
        self.0.borrow().clone()
    }
}
