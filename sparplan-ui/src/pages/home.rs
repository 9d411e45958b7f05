//! Home Page
//!
//! Savings plan form next to the list of plans created so far.

use leptos::*;
use sparplan::AppRoute;

use crate::components::{MyList, SavingsPlanForm};

/// Home view component
#[component]
pub fn HomeView() -> impl IntoView {
    super::set_page_title(AppRoute::Home);

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Sparplan-Rechner"</h1>
                <p class="text-gray-400 mt-1">"Lege einen monatlichen ETF-Sparplan an"</p>
            </div>

            <div class="grid md:grid-cols-2 gap-8">
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Neuer Sparplan"</h2>
                    <SavingsPlanForm />
                </section>

                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Meine Sparpläne"</h2>
                    <MyList />
                </section>
            </div>
        </div>
    }
}
