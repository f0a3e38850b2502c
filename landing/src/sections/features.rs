use leptos::prelude::*;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        icon: "📅",
        title: "Intelligente Terminplanung",
        description: "Intelligenter Kalender der Doppelbuchungen verhindert und Ihren Tagesablauf optimiert",
    },
    Feature {
        icon: "💳",
        title: "Kundenkontrolle",
        description: "Kunden können nicht direkt über die App bezahlen - Sie behalten die vollständige Kontrolle über die Kundenbeziehung",
    },
    Feature {
        icon: "📱",
        title: "Mobile-optimierte Web-App",
        description: "Verwalten Sie Buchungen unterwegs mit unserer für mobile Geräte optimierten Web-Anwendung. \
            Funktioniert in jedem Browser - keine App-Installation erforderlich",
    },
    Feature {
        icon: "👥",
        title: "Kundenverwaltung",
        description: "Erstellen Sie detaillierte Kundenprofile mit Servicehistorie und Präferenzen",
    },
    Feature {
        icon: "📊",
        title: "Geschäftsanalysen",
        description: "Verfolgen Sie Umsatz, beliebte Services und Wachstumstrends mit detaillierten Berichten",
    },
    Feature {
        icon: "🔔",
        title: "Automatische Erinnerungen",
        description: "Reduzieren Sie No-Shows mit automatischen SMS- und E-Mail-Terminerinnerungen",
    },
];

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="container">
                <div class="section-header">
                    <h2>"Alles was Sie für Ihren Salon brauchen"</h2>
                    <p>"Optimieren Sie Ihre Geschäftsabläufe mit professionellen Tools für Friseure"</p>
                </div>
                <div class="features-grid">
                    {FEATURES
                        .iter()
                        .map(|feature| {
                            view! {
                                <FeatureCard
                                    icon=feature.icon
                                    title=feature.title
                                    description=feature.description
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <article class="feature-card">
            <div class="feature-icon" aria-hidden="true">{icon}</div>
            <h3>{title}</h3>
            <p>{description}</p>
        </article>
    }
}
