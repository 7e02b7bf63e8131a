//! Forgot-password page: request a reset link for an email address.

#[cfg(test)]
#[path = "forgot_password_test.rs"]
mod forgot_password_test;

use leptos::prelude::*;

use crate::components::auth_card::AuthCard;
use crate::net::api::AuthApi;
use crate::state::form::FormCell;
use crate::state::password_reset::PasswordResetState;
use crate::util::roles::paths;

/// Validate the address and, if it passes, ask the backend for a reset link.
pub async fn submit_password_reset<A, C>(api: &A, form: &C)
where
    A: AuthApi,
    C: FormCell<PasswordResetState>,
{
    let Some(Ok(email)) = form.try_update_form(PasswordResetState::begin_submit) else {
        return;
    };
    let result = api.forgot_password(&email).await;
    form.try_update_form(|s| s.finish(result));
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let form = RwSignal::new(PasswordResetState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = crate::net::api::HttpAuthApi::from_env();
            submit_password_reset(&api, &form).await;
        });
    };

    let locked = move || !form.with(PasswordResetState::accepts_input);

    view! {
        <AuthCard title="Forgot Password" subtitle="We will email you a link to reset it">
            <form class="auth-form" on:submit=on_submit>
                <label class="auth-label" for="email">"Email"</label>
                <input
                    id="email"
                    class="auth-input"
                    type="email"
                    autocomplete="email"
                    placeholder="you@example.com"
                    prop:value=move || form.with(|s| s.email.clone())
                    prop:disabled=locked
                    on:input=move |ev| {
                        form.update(|s| {
                            s.set_email(event_target_value(&ev));
                        });
                    }
                />
                <Show when=move || form.with(|s| s.error_message().is_some())>
                    <p class="auth-error">{move || form.with(|s| s.error_message().unwrap_or_default().to_owned())}</p>
                </Show>
                <Show when=move || form.with(PasswordResetState::is_sent)>
                    <p class="auth-success">{move || form.with(|s| s.success_message().unwrap_or_default().to_owned())}</p>
                </Show>
                <button class="auth-button" type="submit" disabled=locked>
                    {move || if form.with(PasswordResetState::is_submitting) { "Sending..." } else { "Send Reset Link" }}
                </button>
            </form>
            <div class="auth-links">
                <a href=paths::LOGIN>"Back to sign in"</a>
            </div>
        </AuthCard>
    }
}
