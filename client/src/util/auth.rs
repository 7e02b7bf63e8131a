//! Session probe run when the login screen mounts.
//!
//! SYSTEM CONTEXT
//! ==============
//! A visitor who already holds a session cookie should never see the login
//! form: the probe asks `/auth/me` once and, if a user comes back, replaces
//! the history entry with that user's landing route. Every other outcome
//! leaves the form visible.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos_router::NavigateOptions;

use super::roles::landing_path;
use crate::net::api::AuthApi;
use crate::net::types::MeResponse;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionProbe {
    Authenticated { destination: &'static str },
    /// No session (401, or a 2xx without a user).
    Anonymous,
    /// Any other failure. Logged, then handled like `Anonymous`.
    Failed,
}

/// Ask the backend who is signed in and pick their landing route.
pub async fn probe_session<A: AuthApi>(api: &A) -> SessionProbe {
    match api.me().await {
        Ok(MeResponse { user: Some(user) }) => SessionProbe::Authenticated {
            destination: landing_path(user.id_level),
        },
        Ok(MeResponse { user: None }) => SessionProbe::Anonymous,
        Err(err) if err.is_unauthorized() => SessionProbe::Anonymous,
        Err(err) => {
            leptos::logging::warn!("session probe failed: {err}");
            SessionProbe::Failed
        }
    }
}

/// Probe, then navigate with `replace` if a session exists and the caller is
/// still mounted.
pub async fn run_session_probe<A, L, N>(api: &A, is_live: L, navigate: N) -> SessionProbe
where
    A: AuthApi,
    L: Fn() -> bool,
    N: Fn(&str, NavigateOptions),
{
    let probe = probe_session(api).await;
    if let SessionProbe::Authenticated { destination } = probe {
        if is_live() {
            navigate(
                destination,
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    }
    probe
}

/// Start the session probe for the calling component.
///
/// Component bodies run once per mount, so this probes exactly once per
/// mount. The result is dropped if the component unmounts first.
pub fn install_session_probe<F>(navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            let api = crate::net::api::HttpAuthApi::from_env();
            run_session_probe(&api, || alive_task.load(Ordering::Relaxed), navigate).await;
        });
        leptos::prelude::on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = navigate;
    }
}
