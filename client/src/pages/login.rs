//! Login page: username/email + password, with the session probe on mount.
//!
//! SYSTEM CONTEXT
//! ==============
//! Entry point for every role. A visitor with a live session is redirected
//! before they can interact; everyone else submits credentials and is sent
//! to their role's landing route (or the server's `redirectTo`) after a short
//! welcome notice.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::future::Future;
use std::time::Duration;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::auth_card::AuthCard;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::toast::Toast;
use crate::net::api::AuthApi;
use crate::state::form::{FormCell, Notice};
use crate::state::login::{LoginPhase, LoginState, LoginStep, REDIRECT_DELAY};
use crate::util::auth::install_session_probe;
use crate::util::roles::paths;

/// Run one login attempt against `form`.
///
/// Does nothing if the form refuses to start (blank fields or a request
/// already in flight). On success waits `REDIRECT_DELAY` via `sleep`, then
/// navigates unless the page was torn down meanwhile.
pub async fn submit_login<A, C, N, S, F>(api: &A, form: &C, navigate: N, sleep: S)
where
    A: AuthApi,
    C: FormCell<LoginState>,
    N: Fn(&str, NavigateOptions),
    S: FnOnce(Duration) -> F,
    F: Future<Output = ()>,
{
    let Some(Ok(request)) = form.try_update_form(LoginState::begin_submit) else {
        return;
    };
    let result = api.login(&request).await;
    let Some(LoginStep::Redirect(destination)) = form.try_update_form(|s| s.apply_login_result(result)) else {
        return;
    };
    sleep(REDIRECT_DELAY).await;
    if form.is_live() {
        navigate(&destination, NavigateOptions::default());
    }
}

/// Apply the user's answer to the "resend verification email?" prompt,
/// issuing the resend request on yes.
pub async fn resolve_verification_prompt<A, C>(api: &A, form: &C, resend: bool)
where
    A: AuthApi,
    C: FormCell<LoginState>,
{
    let Some(Some(email)) = form.try_update_form(|s| s.answer_verification_prompt(resend)) else {
        return;
    };
    let result = api.resend_verification(&email).await;
    form.try_update_form(|s| s.finish_resend(result));
}

/// The visible notice, recomputed only when it actually changes so typing
/// does not restart the toast's dismiss timer.
fn current_notice(form: RwSignal<LoginState>) -> Memo<Option<Notice>> {
    Memo::new(move |_| form.with(|s| s.notices.current.clone()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let form = RwSignal::new(LoginState::default());
    let navigate = use_navigate();

    install_session_probe(navigate.clone());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let api = crate::net::api::HttpAuthApi::from_env();
                submit_login(&api, &form, navigate, gloo_timers::future::sleep).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &navigate;
        }
    };

    let answer_prompt = move |resend: bool| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = crate::net::api::HttpAuthApi::from_env();
            resolve_verification_prompt(&api, &form, resend).await;
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = resend;
        }
    };
    let on_confirm_resend = Callback::new(move |()| answer_prompt(true));
    let on_cancel_resend = Callback::new(move |()| answer_prompt(false));
    let on_dismiss = Callback::new(move |seq: u64| {
        form.try_update(|s| s.notices.dismiss(seq));
    });

    let locked = move || !form.with(LoginState::accepts_input);
    let busy = move || form.with(LoginState::is_busy);
    let awaiting_confirm = move || form.with(|s| matches!(s.phase, LoginPhase::AwaitingVerificationConfirm { .. }));
    let prompt_message = Signal::derive(move || {
        form.with(|s| match &s.phase {
            LoginPhase::AwaitingVerificationConfirm { email, message } => {
                format!("{message} Send a new verification email to {email}?")
            }
            _ => String::new(),
        })
    });

    view! {
        <AuthCard title="Sign In" subtitle="Use your username or email">
            <form class="auth-form" on:submit=on_submit>
                <label class="auth-label" for="identifier">"Username or email"</label>
                <input
                    id="identifier"
                    class="auth-input"
                    type="text"
                    autocomplete="username"
                    placeholder="kasir01 or you@example.com"
                    prop:value=move || form.with(|s| s.identifier.clone())
                    prop:disabled=locked
                    on:input=move |ev| {
                        form.update(|s| {
                            s.set_identifier(event_target_value(&ev));
                        });
                    }
                />
                <label class="auth-label" for="password">"Password"</label>
                <div class="auth-password">
                    <input
                        id="password"
                        class="auth-input"
                        type=move || if form.with(|s| s.password_visible) { "text" } else { "password" }
                        autocomplete="current-password"
                        prop:value=move || form.with(|s| s.password.clone())
                        prop:disabled=locked
                        on:input=move |ev| {
                            form.update(|s| {
                                s.set_password(event_target_value(&ev));
                            });
                        }
                    />
                    <button
                        class="auth-password__toggle"
                        type="button"
                        title="Show or hide password"
                        on:click=move |_| form.update(LoginState::toggle_password_visibility)
                    >
                        {move || if form.with(|s| s.password_visible) { "Hide" } else { "Show" }}
                    </button>
                </div>
                <Show when=move || form.with(|s| s.error_message().is_some())>
                    <p class="auth-error">{move || form.with(|s| s.error_message().unwrap_or_default().to_owned())}</p>
                </Show>
                <button class="auth-button" type="submit" disabled=locked>
                    {move || if busy() { "Signing in..." } else { "Sign In" }}
                </button>
            </form>
            <div class="auth-links">
                <a href=paths::FORGOT_PASSWORD>"Forgot password?"</a>
                <a href=paths::REGISTER>"Create an account"</a>
            </div>
        </AuthCard>
        <Toast notice=current_notice(form) on_dismiss=on_dismiss/>
        <Show when=awaiting_confirm>
            <ConfirmDialog
                title="Email not verified"
                message=prompt_message
                confirm_label="Resend email"
                cancel_label="Not now"
                on_confirm=on_confirm_resend
                on_cancel=on_cancel_resend
            />
        </Show>
    }
}
