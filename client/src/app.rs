//! Root application component with routing.
//!
//! There are no shared state contexts: each page owns its own form state.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::forgot_password::ForgotPasswordPage;
use crate::pages::landing::{HomePage, RegisterPage, RoleLandingPage};
use crate::pages::login::LoginPage;
use crate::util::roles::Role;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/pos-portal.css"/>
        <Title text="POS Portal"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route
                    path=(StaticSegment("super-admin"), StaticSegment("dashboard"))
                    view=|| view! { <RoleLandingPage role=Role::SuperAdmin/> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("dashboard"))
                    view=|| view! { <RoleLandingPage role=Role::Admin/> }
                />
                <Route
                    path=(StaticSegment("cashier"), StaticSegment("transaction"))
                    view=|| view! { <RoleLandingPage role=Role::Cashier/> }
                />
                <Route
                    path=(StaticSegment("company-admin"), StaticSegment("dashboard"))
                    view=|| view! { <RoleLandingPage role=Role::CompanyAdmin/> }
                />
            </Routes>
        </Router>
    }
}
