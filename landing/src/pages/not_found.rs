use crate::sections::{Nav, NavLink};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Nav links=vec![NavLink::route("/", "Startseite")] />
        <section class="page-header">
            <div class="container">
                <h1 class="page-title">"Seite nicht gefunden"</h1>
                <p class="page-description">
                    "Die angeforderte Seite existiert nicht. "
                    <A href="/">"Zur Startseite"</A>
                </p>
            </div>
        </section>
    }
}
