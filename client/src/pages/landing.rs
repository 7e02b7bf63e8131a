//! Placeholder destinations for the routes the sign-in flow navigates to.
//!
//! The real dashboards, the transaction screen, the registration form and
//! the marketing home live outside this crate; these views only give each
//! route something to render.

use leptos::prelude::*;

use crate::components::auth_card::AuthCard;
use crate::util::roles::{Role, paths};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <AuthCard title="POS Portal" subtitle="Point of sale for your outlets">
            <div class="auth-links">
                <a class="auth-button" href=paths::LOGIN>"Sign In"</a>
                <a href=paths::REGISTER>"Create an account"</a>
            </div>
        </AuthCard>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <AuthCard title="Create an Account" subtitle="Registration is handled by your company admin">
            <div class="auth-links">
                <a href=paths::LOGIN>"Already have an account? Sign in"</a>
            </div>
        </AuthCard>
    }
}

/// Landing route for one role.
#[component]
pub fn RoleLandingPage(role: Role) -> impl IntoView {
    view! {
        <div class="role-landing" data-role=role.code().to_string()>
            <h1>{role.label()}</h1>
        </div>
    }
}
