//! Plan List Component
//!
//! The savings plans created in this session.

use leptos::*;
use sparplan::{format_eur, SavingsPlan};

use crate::state::GlobalState;

/// List of submitted savings plans
#[component]
pub fn MyList() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="space-y-2">
            {move || {
                let plans = state.plans.get();

                if plans.is_empty() {
                    view! {
                        <p class="text-gray-400 text-sm">"Noch keine Sparpläne angelegt."</p>
                    }.into_view()
                } else {
                    view! {
                        <ul class="divide-y divide-gray-700">
                            {plans.into_iter().rev().map(|plan| view! { <PlanRow plan=plan /> }).collect_view()}
                        </ul>
                    }.into_view()
                }
            }}
        </div>
    }
}

#[component]
fn PlanRow(plan: SavingsPlan) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let seq = plan.seq;
    let created = plan.created_at.format("%d.%m.%Y %H:%M").to_string();

    view! {
        <li class="flex items-center justify-between py-3">
            <div>
                <div class="font-medium">
                    {format!("#{} {}", plan.seq, plan.etf.name())}
                </div>
                <div class="text-sm text-gray-400">
                    {format!("{} / Monat · {} Jahre · {}", format_eur(plan.rate), plan.years, created)}
                </div>
            </div>
            <button
                type="button"
                on:click=move |_| state.remove_plan(seq)
                class="px-3 py-1 bg-gray-700 hover:bg-gray-600 rounded text-sm transition-colors"
                title="Entfernen"
            >
                "×"
            </button>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::provide_global_state;
    use sparplan::{Etf, SavingsPlanInput};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn container() -> web_sys::HtmlElement {
        let el = document()
            .create_element("div")
            .unwrap()
            .unchecked_into::<web_sys::HtmlElement>();
        document().body().unwrap().append_child(&el).unwrap();
        el
    }

    #[wasm_bindgen_test]
    fn renders_the_component() {
        let el = container();

        mount_to(el.clone(), || {
            provide_global_state();
            view! { <MyList /> }
        });

        assert!(el.child_element_count() > 0);
        assert!(el.text_content().unwrap_or_default().contains("Noch keine Sparpläne"));
    }

    #[wasm_bindgen_test]
    fn renders_submitted_plans() {
        let el = container();

        mount_to(el.clone(), || {
            let state = provide_global_state();
            state
                .add_plan(SavingsPlanInput {
                    etf: Etf::SP500,
                    rate: 200.0,
                    years: 15,
                })
                .unwrap();
            view! { <MyList /> }
        });

        let text = el.text_content().unwrap_or_default();
        assert!(text.contains("iShares Core S&P 500"), "{text}");
        assert!(text.contains("200 € / Monat"), "{text}");
        assert_eq!(el.query_selector_all("li").unwrap().length(), 1);
    }
}
