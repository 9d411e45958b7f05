//! Savings Plan Form Component
//!
//! ETF selection, monthly rate and duration. The rate is validated on every
//! keystroke; the submit button stays disabled while the input is invalid.

use leptos::*;
use sparplan::{parse_rate, parse_years, validate, Etf, SavingsPlanInput, MAX_RATE, MIN_RATE};

use crate::state::GlobalState;

/// Savings plan form component
#[component]
pub fn SavingsPlanForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let initial = SavingsPlanInput::default();
    let (etf, set_etf) = create_signal(initial.etf);
    let (rate, set_rate) = create_signal(initial.rate);
    let (years, set_years) = create_signal(initial.years);

    let input = move || SavingsPlanInput {
        etf: etf.get(),
        rate: rate.get(),
        years: years.get(),
    };
    let result = create_memo(move |_| validate(&input()));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        match state.add_plan(input()) {
            Ok(plan) => state.show_success(&format!(
                "Sparplan #{} für {} angelegt",
                plan.seq,
                plan.etf.name()
            )),
            Err(e) => state.show_error(&e.to_string()),
        }
    };

    view! {
        <form on:submit=on_submit class="space-y-4" novalidate=true>
            // ETF selector
            <div>
                <label for="etf" class="block text-sm text-gray-400 mb-2">"ETF"</label>
                <select
                    id="etf"
                    name="etf"
                    on:change=move |ev| match event_target_value(&ev).parse::<Etf>() {
                        Ok(selected) => set_etf.set(selected),
                        Err(e) => web_sys::console::warn_1(&e.to_string().into()),
                    }
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                >
                    {Etf::ALL
                        .into_iter()
                        .map(|option| view! {
                            <option value=option.id() selected=move || etf.get() == option>
                                {option.name()}
                            </option>
                        })
                        .collect_view()}
                </select>
            </div>

            // Monthly rate
            <div>
                <label for="rate" class="block text-sm text-gray-400 mb-2">"Sparrate (€ pro Monat)"</label>
                <input
                    id="rate"
                    name="rate"
                    type="number"
                    min=MIN_RATE
                    max=MAX_RATE
                    step="1"
                    value=initial.rate.to_string()
                    on:input=move |ev| set_rate.set(parse_rate(&event_target_value(&ev)))
                    class=move || {
                        let base = "w-full bg-gray-700 rounded-lg px-4 py-3 text-white border focus:outline-none";
                        if result.get().is_valid {
                            format!("{} border-gray-600 focus:border-primary-500", base)
                        } else {
                            format!("{} border-red-500", base)
                        }
                    }
                />
            </div>

            // Duration
            <div>
                <label for="years" class="block text-sm text-gray-400 mb-2">"Laufzeit (Jahre)"</label>
                <input
                    id="years"
                    name="years"
                    type="number"
                    min="1"
                    step="1"
                    value=initial.years.to_string()
                    on:input=move |ev| set_years.set(parse_years(&event_target_value(&ev)))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            // Validation message
            <Show when=move || !result.get().is_valid>
                <p class="text-sm text-red-400" role="alert">{move || result.get().message}</p>
            </Show>

            // Submit button
            <button
                type="submit"
                disabled=move || !result.get().is_valid
                class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                       transition-colors"
            >
                "Sparplan anlegen"
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::provide_global_state;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    /// Mount the form into a fresh container and return that container
    fn mount_form() -> web_sys::HtmlElement {
        let container = document()
            .create_element("div")
            .unwrap()
            .unchecked_into::<web_sys::HtmlElement>();
        document().body().unwrap().append_child(&container).unwrap();

        mount_to(container.clone(), || {
            provide_global_state();
            view! { <SavingsPlanForm /> }
        });

        container
    }

    fn find(container: &web_sys::HtmlElement, selector: &str) -> web_sys::Element {
        container
            .query_selector(selector)
            .unwrap()
            .unwrap_or_else(|| panic!("{selector} not rendered"))
    }

    /// Type a value into an input the way a user would
    async fn set_value(container: &web_sys::HtmlElement, selector: &str, value: &str) {
        let input = find(container, selector).unchecked_into::<web_sys::HtmlInputElement>();
        input.set_value(value);

        let init = web_sys::EventInit::new();
        init.set_bubbles(true);
        let event = web_sys::Event::new_with_event_init_dict("input", &init).unwrap();
        input.dispatch_event(&event).unwrap();

        // Let the reactive system flush
        gloo_timers::future::TimeoutFuture::new(0).await;
    }

    fn submit_button(container: &web_sys::HtmlElement) -> web_sys::Element {
        find(container, r#"button[type="submit"]"#)
    }

    #[wasm_bindgen_test]
    fn renders_all_form_fields() {
        let container = mount_form();

        for selector in ["#etf", "#rate", "#years", r#"button[type="submit"]"#] {
            let matches = container.query_selector_all(selector).unwrap();
            assert_eq!(matches.length(), 1, "{selector}");
        }

        let options = container.query_selector_all("#etf option").unwrap();
        assert_eq!(options.length(), Etf::ALL.len() as u32);
    }

    #[wasm_bindgen_test]
    async fn shows_message_for_low_rate() {
        let container = mount_form();

        set_value(&container, "#rate", "10").await;

        let text = container.text_content().unwrap_or_default();
        assert!(text.contains("Sparrate muss zwischen 25 und 10.000 € liegen"), "{text}");
    }

    #[wasm_bindgen_test]
    async fn disables_button_for_invalid_values() {
        let container = mount_form();

        set_value(&container, "#rate", "10").await;

        assert!(submit_button(&container).has_attribute("disabled"));
    }

    #[wasm_bindgen_test]
    async fn enables_button_for_valid_values() {
        let container = mount_form();

        set_value(&container, "#rate", "10").await;
        set_value(&container, "#rate", "200").await;
        set_value(&container, "#years", "15").await;

        assert!(!submit_button(&container).has_attribute("disabled"));
        let text = container.text_content().unwrap_or_default();
        assert!(!text.contains("Sparrate muss"), "{text}");
    }
}
