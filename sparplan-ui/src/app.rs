//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;
use sparplan::AppRoute;

use crate::components::{Nav, Toast};
use crate::pages::{AboutView, HomeView, LoginView, RegisterView};
use crate::state::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path=AppRoute::Home.path() view=HomeView />
                        <Route path=AppRoute::About.path() view=AboutView />
                        <Route path=AppRoute::Login.path() view=LoginView />
                        <Route path=AppRoute::Register.path() view=RegisterView />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Footer with the session's plan count
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm text-gray-400">
                <span>
                    {move || match state.plans.with(Vec::len) {
                        0 => "Keine Sparpläne in dieser Sitzung".to_string(),
                        1 => "1 Sparplan in dieser Sitzung".to_string(),
                        n => format!("{} Sparpläne in dieser Sitzung", n),
                    }}
                </span>
                <span>"Keine Anlageberatung"</span>
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Seite nicht gefunden"</h1>
            <p class="text-gray-400 mb-6">"Diese Seite gibt es nicht."</p>
            <A
                href=AppRoute::Home.path()
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Zum Sparplan-Rechner"
            </A>
        </div>
    }
}
