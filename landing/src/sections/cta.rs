use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section class="cta">
            <div class="container">
                <div class="cta-content">
                    <h2>"Bereit, Ihr Geschäft zu revolutionieren?"</h2>
                    <p>
                        "Schließen Sie sich tausenden von Friseuren an, "
                        "die bereits ihren Buchungsprozess modernisiert haben"
                    </p>
                    <div class="cta-buttons">
                        <A href="/membership" attr:class="btn-primary-large">
                            "3 Monate kostenlos testen"
                        </A>
                        <p class="cta-note">"Keine Kreditkarte erforderlich • Jederzeit kündbar"</p>
                    </div>
                </div>
            </div>
        </section>
    }
}
