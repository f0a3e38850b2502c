use leptos::prelude::*;
use leptos_router::components::A;

const BENEFITS: &[&str] = &[
    "Steigern Sie Ihre Buchungen um 40% mit 24/7 Online-Terminplanung",
    "Reduzieren Sie No-Shows um 60% mit automatischen Erinnerungen",
    "Sparen Sie täglich 2+ Stunden bei Verwaltungsaufgaben",
    "Behalten Sie die volle Kontrolle über Kundenzahlungen",
    "Stärken Sie Kundenbeziehungen mit detaillierten Profilen",
    "Skalieren Sie Ihr Geschäft mit Multi-Stylist-Unterstützung",
];

/// (number, label)
const STATS: &[(&str, &str)] = &[
    ("40%", "Mehr Buchungen"),
    ("60%", "Weniger No-Shows"),
    ("2 Std.", "Täglich gespart"),
];

#[component]
pub fn Benefits() -> impl IntoView {
    view! {
        <section class="benefits">
            <div class="container">
                <div class="benefits-grid">
                    <div class="benefits-content">
                        <h2>"Steigern Sie Ihr Geschäft mit professionellen Tools"</h2>
                        <ul class="benefits-list">
                            {BENEFITS
                                .iter()
                                .map(|benefit| view! { <li>"✅ "{*benefit}</li> })
                                .collect_view()}
                        </ul>
                        <A href="/membership" attr:class="btn-primary-large">
                            "Jetzt 3 Monate kostenlos testen"
                        </A>
                    </div>
                    <div class="benefits-image">
                        <div class="stats-card">
                            {STATS
                                .iter()
                                .map(|(number, label)| {
                                    view! {
                                        <div class="stat">
                                            <div class="stat-number">{*number}</div>
                                            <div class="stat-label">{*label}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
