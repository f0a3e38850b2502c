use super::BRAND;
use leptos::prelude::*;

/// (icon, title, description)
const PARTNER_BENEFITS: &[(&str, &str, &str)] = &[
    (
        "🎯",
        "Exklusive Vorteile",
        "Erhalten Sie Zugang zu erweiterten Funktionen und Prioritäts-Support",
    ),
    (
        "💼",
        "Geschäftswachstum",
        "Profitieren Sie von unserem Marketing und erweiterten Geschäftstools",
    ),
    (
        "🤝",
        "Persönliche Betreuung",
        "Erhalten Sie einen dedizierten Ansprechpartner für Ihre Bedürfnisse",
    ),
];

/// (title, description), numbered in order
const PROCESS_STEPS: &[(&str, &str)] = &[
    (
        "Kontaktformular ausfüllen",
        "Teilen Sie uns mit, warum Sie Partner werden möchten",
    ),
    (
        "Bewertung & Gespräch",
        "Unser Team prüft Ihre Anfrage und kontaktiert Sie für ein Gespräch",
    ),
    (
        "Partner-Onboarding",
        "Nach der Genehmigung erhalten Sie Zugang zu exklusiven Partner-Features",
    ),
];

#[component]
pub fn MembershipHeader() -> impl IntoView {
    let subtitle = format!("Werden Sie Teil des {BRAND} Partner-Netzwerks");
    view! {
        <section class="membership-header">
            <div class="container">
                <div class="membership-content">
                    <h1>"Partner werden"</h1>
                    <p class="membership-subtitle">{subtitle}</p>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn MembershipInfo() -> impl IntoView {
    view! {
        <section class="membership-info">
            <div class="container">
                <div class="info-content">
                    <h2>"Kontaktieren Sie uns für Ihren Partnerstatus"</h2>
                    <p>
                        "Um Partner bei "{BRAND}" zu werden, müssen Sie sich direkt bei unserem Team bewerben. "
                        "Wir prüfen jeden Antrag sorgfältig, um sicherzustellen, dass unsere Partner den höchsten "
                        "Qualitätsstandards entsprechen."
                    </p>

                    <div class="benefits-grid">
                        {PARTNER_BENEFITS
                            .iter()
                            .map(|(icon, title, description)| {
                                view! {
                                    <div class="benefit-item">
                                        <div class="benefit-icon" aria-hidden="true">{*icon}</div>
                                        <h3>{*title}</h3>
                                        <p>{*description}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="process-info">
                        <h3>"So funktioniert der Bewerbungsprozess:"</h3>
                        <ol class="process-steps">
                            {PROCESS_STEPS
                                .iter()
                                .enumerate()
                                .map(|(index, (title, description))| {
                                    view! {
                                        <li class="process-step">
                                            <span class="step-number">{index + 1}</span>
                                            <div class="step-content">
                                                <h4>{*title}</h4>
                                                <p>{*description}</p>
                                            </div>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ol>
                    </div>
                </div>
            </div>
        </section>
    }
}
