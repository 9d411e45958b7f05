//! About Page

use leptos::*;
use sparplan::{format_eur, AppRoute, Etf, MAX_RATE, MIN_RATE};

#[component]
pub fn AboutView() -> impl IntoView {
    super::set_page_title(AppRoute::About);

    view! {
        <div class="max-w-2xl space-y-6">
            <h1 class="text-3xl font-bold">"Über den Sparplan-Rechner"</h1>

            <p class="text-gray-300">
                "Mit dem Sparplan-Rechner stellst du monatliche Sparpläne auf ETFs zusammen. "
                {format!(
                    "Die Sparrate muss zwischen {} und {} pro Monat liegen.",
                    format_eur(MIN_RATE),
                    format_eur(MAX_RATE)
                )}
            </p>

            <p class="text-gray-400 text-sm">
                "Angelegte Sparpläne gelten nur für die aktuelle Sitzung und werden nicht gespeichert. "
                "Dies ist keine Anlageberatung."
            </p>

            <section>
                <h2 class="text-xl font-semibold mb-3">"Verfügbare ETFs"</h2>
                <ul class="space-y-1 text-gray-300">
                    {Etf::ALL
                        .into_iter()
                        .map(|etf| view! {
                            <li>
                                <span class="font-medium">{etf.name()}</span>
                                <span class="text-gray-500 ml-2">{etf.isin()}</span>
                            </li>
                        })
                        .collect_view()}
                </ul>
            </section>
        </div>
    }
}
