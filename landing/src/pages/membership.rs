// Membership page - partner pitch + contact form
use crate::sections::{ContactSection, MembershipHeader, MembershipInfo, Nav, NavLink};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn MembershipPage() -> impl IntoView {
    let links = vec![NavLink::route("/", "Zurück zur Hauptseite")];

    view! {
        <div class="membership-page">
            <Nav links=links />
            <main>
                <MembershipHeader />
                <MembershipInfo />
                <ContactSection />
            </main>
            <footer class="footer">
                <div class="container">
                    <div class="footer-bottom">
                        <p>
                            "© 2025 Mein Stylist. Alle Rechte vorbehalten. | "
                            <A href="/">"Zurück zur Hauptseite"</A>
                        </p>
                    </div>
                </div>
            </footer>
        </div>
    }
}
