//! Login Page
//!
//! The form is in place; there is no account backend behind it yet.

use leptos::*;
use leptos_router::A;
use sparplan::AppRoute;

use crate::state::GlobalState;

#[component]
pub fn LoginView() -> impl IntoView {
    super::set_page_title(AppRoute::Login);
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        state.show_info("Die Anmeldung ist noch nicht verfügbar.");
    };

    view! {
        <div class="max-w-md mx-auto bg-gray-800 rounded-xl p-6 space-y-6">
            <h1 class="text-2xl font-bold">"Anmelden"</h1>

            <form on:submit=on_submit class="space-y-4">
                <div>
                    <label for="email" class="block text-sm text-gray-400 mb-2">"E-Mail"</label>
                    <input
                        id="email"
                        type="email"
                        autocomplete="email"
                        required=true
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white border border-gray-600"
                    />
                </div>
                <div>
                    <label for="password" class="block text-sm text-gray-400 mb-2">"Passwort"</label>
                    <input
                        id="password"
                        type="password"
                        autocomplete="current-password"
                        required=true
                        class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white border border-gray-600"
                    />
                </div>
                <button
                    type="submit"
                    class="w-full bg-primary-600 hover:bg-primary-700 rounded-lg py-3 font-semibold transition-colors"
                >
                    "Anmelden"
                </button>
            </form>

            <p class="text-sm text-gray-400">
                "Noch kein Konto? "
                <A href=AppRoute::Register.path() class="text-primary-400 hover:underline">"Jetzt registrieren"</A>
            </p>
        </div>
    }
}
