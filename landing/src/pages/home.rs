// Home page - hero, product story, pricing
use crate::sections::{
    Benefits, CallToAction, Features, Footer, Hero, Nav, NavLink, Pricing,
};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let links = vec![
        NavLink::anchor("#features", "Funktionen"),
        NavLink::anchor("#pricing", "Preise"),
        NavLink::route("/membership", "Jetzt starten").with_class("btn-primary"),
    ];

    view! {
        <div class="app">
            <Nav links=links />
            <main>
                <Hero />
                <Features />
                <Benefits />
                <Pricing />
                <CallToAction />
            </main>
            <Footer />
        </div>
    }
}
