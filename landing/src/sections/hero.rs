use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-container">
                <div class="hero-content">
                    <h1 class="hero-title">
                        "Revolutionieren Sie Ihren Friseursalon mit "
                        <span class="highlight">"intelligenter Terminbuchung"</span>
                    </h1>
                    <p class="hero-subtitle">
                        "Die professionelle Terminverwaltung speziell für Friseure. "
                        "Akzeptieren Sie Online-Buchungen, verwalten Sie Ihren Terminkalender "
                        "und behalten Sie die volle Kontrolle über Ihre Kunden."
                    </p>
                    <div class="hero-cta">
                        <A href="/membership" attr:class="btn-primary-large">
                            "3 Monate kostenlos testen"
                        </A>
                    </div>
                    <div class="hero-social-proof">
                        <p class="social-proof-text">"Vertraut von über 10.000 Friseuren weltweit"</p>
                    </div>
                </div>
                <Mockup />
            </div>
        </section>
    }
}

#[component]
fn Mockup() -> impl IntoView {
    view! {
        <div class="hero-image" aria-hidden="true">
            <div class="hero-mockup">
                <div class="mockup-screen">
                    <div class="mockup-header"></div>
                    <div class="mockup-content">
                        <div class="mockup-calendar"></div>
                    </div>
                </div>
            </div>
        </div>
    }
}
