use leptos::prelude::*;
use leptos_router::components::A;

/// Pricing plan card content
struct Plan {
    title: &'static str,
    price: &'static str,
    period: &'static str,
    badge: Option<&'static str>,
    features: &'static [&'static str],
    action: PlanAction,
}

enum PlanAction {
    /// Leads to the partner request form
    Signup(&'static str),
    /// Jumps to the pricing explanation below the cards
    LearnMore(&'static str),
}

const PLANS: &[Plan] = &[
    Plan {
        title: "Für alle Friseure",
        price: "3 Monate",
        period: "kostenlos",
        badge: Some("Empfohlen"),
        features: &[
            "Unbegrenzte Terminbuchungen",
            "Kundenverwaltung und -profile",
            "Automatische Erinnerungen",
            "Mobile App",
            "E-Mail-Support",
            "Keine Kreditkarte erforderlich",
        ],
        action: PlanAction::Signup("Jetzt kostenlos starten"),
    },
    Plan {
        title: "Nach der Testphase",
        price: "10 Cent",
        period: "pro Buchung",
        badge: None,
        features: &[
            "Nur zahlen für tatsächliche Buchungen",
            "Monatliche Rechnung",
            "Keine versteckten Kosten",
            "Sie behalten Kundenkontrolle",
            "Jederzeit kündbar",
            "Prioritäts-Support",
        ],
        action: PlanAction::LearnMore("Mehr erfahren"),
    },
];

#[component]
pub fn Pricing() -> impl IntoView {
    view! {
        <section id="pricing" class="pricing">
            <div class="container">
                <div class="section-header">
                    <h2>"Einfache, transparente Preise"</h2>
                    <p>"Starten Sie kostenlos und zahlen Sie nur für das, was Sie nutzen"</p>
                </div>
                <div class="pricing-grid">
                    {PLANS.iter().map(|plan| view! { <PricingCard plan=plan /> }).collect_view()}
                </div>
                <div id="pricing-model" class="pricing-note">
                    <h4>"Warum dieses Preismodell?"</h4>
                    <p>
                        "Kunden können nicht direkt über die App bezahlen - das bedeutet, Sie behalten die vollständige Kontrolle "
                        "über Ihre Kundenbeziehungen und Zahlungsabwicklung. Wir rechnen nur für erfolgreiche Buchungen ab."
                    </p>
                </div>
            </div>
        </section>
    }
}

#[component]
fn PricingCard(plan: &'static Plan) -> impl IntoView {
    let class = if plan.badge.is_some() {
        "pricing-card featured"
    } else {
        "pricing-card"
    };

    let action = match plan.action {
        PlanAction::Signup(label) => {
            view! { <A href="/membership" attr:class="btn-primary">{label}</A> }.into_any()
        }
        PlanAction::LearnMore(label) => {
            view! { <a href="#pricing-model" class="btn-primary">{label}</a> }.into_any()
        }
    };

    view! {
        <div class=class>
            {plan.badge.map(|badge| view! { <div class="popular-badge">{badge}</div> })}
            <div class="pricing-header">
                <h3>{plan.title}</h3>
                <div class="pricing-price">
                    <span class="price">{plan.price}</span>
                    <span class="period">{plan.period}</span>
                </div>
            </div>
            <ul class="pricing-features">
                {plan.features.iter().map(|feature| view! { <li>{*feature}</li> }).collect_view()}
            </ul>
            {action}
        </div>
    }
}
