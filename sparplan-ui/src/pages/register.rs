//! Registration Page

use leptos::*;
use leptos_router::A;
use sparplan::AppRoute;

use crate::state::GlobalState;

#[component]
pub fn RegisterView() -> impl IntoView {
    super::set_page_title(AppRoute::Register);
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        state.show_info("Die Registrierung ist noch nicht verfügbar.");
    };

    view! {
        <div class="max-w-md mx-auto bg-gray-800 rounded-xl p-6 space-y-6">
            <h1 class="text-2xl font-bold">"Registrieren"</h1>

            <form on:submit=on_submit class="space-y-4">
                {[
                    ("name", "Name", "text", "name"),
                    ("email", "E-Mail", "email", "email"),
                    ("password", "Passwort", "password", "new-password"),
                ]
                    .into_iter()
                    .map(|(id, label, kind, autocomplete)| view! {
                        <div>
                            <label for=id class="block text-sm text-gray-400 mb-2">{label}</label>
                            <input
                                id=id
                                type=kind
                                autocomplete=autocomplete
                                required=true
                                class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white border border-gray-600"
                            />
                        </div>
                    })
                    .collect_view()}
                <button
                    type="submit"
                    class="w-full bg-primary-600 hover:bg-primary-700 rounded-lg py-3 font-semibold transition-colors"
                >
                    "Konto anlegen"
                </button>
            </form>

            <p class="text-sm text-gray-400">
                "Bereits registriert? "
                <A href=AppRoute::Login.path() class="text-primary-400 hover:underline">"Zum Login"</A>
            </p>
        </div>
    }
}
