use super::BRAND;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-content">
                    <div class="footer-brand">
                        <div class="footer-logo">{BRAND}</div>
                        <p>"Die komplette Buchungslösung für Friseur-Profis"</p>
                    </div>
                    <div class="footer-links">
                        <div class="footer-section">
                            <h4>"Produkt"</h4>
                            <a href="#features">"Funktionen"</a>
                            <a href="#pricing">"Preise"</a>
                            <a href="#demo">"Demo"</a>
                        </div>
                        <div class="footer-section">
                            <h4>"Support"</h4>
                            <a href="#help">"Hilfe-Center"</a>
                            <A href="/membership">"Kontakt"</A>
                            <a href="#tutorials">"Anleitungen"</a>
                        </div>
                        <div class="footer-section">
                            <h4>"Unternehmen"</h4>
                            <a href="#about">"Über uns"</a>
                            <a href="#careers">"Karriere"</a>
                            <a href="#privacy">"Datenschutz"</a>
                        </div>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>"© 2025 "{BRAND}". Alle Rechte vorbehalten."</p>
                </div>
            </div>
        </footer>
    }
}
