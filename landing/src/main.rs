// Mein Stylist Landing Page — Leptos 0.8 Edition
// Built by the Mein Stylist team (c)2025

mod logging;
mod pages;
mod sections;

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use pages::{HomePage, MembershipPage, NotFoundPage};
use stylist_form::SiteConfig;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    leptos::mount::mount_to_body(App);
}

#[component]
fn App() -> impl IntoView {
    let config = SiteConfig::from_build_env().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "invalid site configuration, using defaults");
        SiteConfig::default()
    });
    tracing::debug!(base = ?config.base_path(), locale = %config.locale, "site configured");

    let base = config.base_path().unwrap_or_default().to_owned();
    provide_context(config);

    view! {
        <Router base=base>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/membership") view=MembershipPage />
            </Routes>
        </Router>
    }
}
