//! Centered card layout shared by the sign-in screens.

use leptos::prelude::*;

#[component]
pub fn AuthCard(title: &'static str, subtitle: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>{title}</h1>
                <p class="auth-card__subtitle">{subtitle}</p>
                {children()}
            </div>
        </div>
    }
}
