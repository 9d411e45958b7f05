//! Global Application State
//!
//! Reactive state management using Leptos signals. Nothing here outlives the
//! browser tab: submitted plans are kept in memory for the session only.

use leptos::*;
use sparplan::{PlanError, SavingsPlan, SavingsPlanInput};

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Plans submitted in this session, oldest first
    pub plans: RwSignal<Vec<SavingsPlan>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    /// Informational message (for toasts)
    pub info: RwSignal<Option<String>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    // One counter per toast; a timer only clears the toast it was started for
    success_generation: StoredValue<u64>,
    info_generation: StoredValue<u64>,
    error_generation: StoredValue<u64>,
}

/// Provide global state to the component tree
pub fn provide_global_state() -> GlobalState {
    let state = GlobalState {
        plans: create_rw_signal(Vec::new()),
        success: create_rw_signal(None),
        info: create_rw_signal(None),
        error: create_rw_signal(None),
        success_generation: store_value(0),
        info_generation: store_value(0),
        error_generation: store_value(0),
    };

    provide_context(state);
    state
}

impl GlobalState {
    /// Validate and append a plan to the session list
    pub fn add_plan(&self, input: SavingsPlanInput) -> Result<SavingsPlan, PlanError> {
        let seq = self
            .plans
            .with_untracked(|plans| plans.last().map_or(1, |p| p.seq + 1));

        let plan = input.submit(seq, chrono::Utc::now())?;
        self.plans.update(|plans| plans.push(plan.clone()));

        Ok(plan)
    }

    /// Remove a plan by its sequence number
    pub fn remove_plan(&self, seq: u32) {
        self.plans.update(|plans| plans.retain(|p| p.seq != seq));
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        flash(self.success, self.success_generation, message, 3000);
    }

    /// Show an informational message (auto-clears after timeout)
    pub fn show_info(&self, message: &str) {
        flash(self.info, self.info_generation, message, 4000);
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        flash(self.error, self.error_generation, message, 5000);
    }
}

fn flash(
    signal: RwSignal<Option<String>>,
    generation: StoredValue<u64>,
    message: &str,
    millis: u32,
) {
    generation.update_value(|g| *g += 1);
    let shown = generation.get_value();
    signal.set(Some(message.to_string()));

    gloo_timers::callback::Timeout::new(millis, move || {
        // A newer message, even with the same text, keeps its own timer
        if generation.get_value() == shown {
            signal.set(None);
        }
    })
    .forget();
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparplan::Etf;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn input(rate: f64) -> SavingsPlanInput {
        SavingsPlanInput {
            etf: Etf::FtseAllWorld,
            rate,
            years: 15,
        }
    }

    #[wasm_bindgen_test]
    fn test_add_and_remove_plans() {
        let runtime = create_runtime();
        let state = provide_global_state();

        let first = state.add_plan(input(200.0)).unwrap();
        let second = state.add_plan(input(50.0)).unwrap();
        assert_eq!((first.seq, second.seq), (1, 2));
        assert_eq!(state.plans.get_untracked().len(), 2);

        assert!(state.add_plan(input(10.0)).is_err());
        assert_eq!(state.plans.get_untracked().len(), 2);

        state.remove_plan(1);
        let remaining = state.plans.get_untracked();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].seq, 2);

        // Numbering continues after removals
        assert_eq!(state.add_plan(input(75.0)).unwrap().seq, 3);

        runtime.dispose();
    }

    #[wasm_bindgen_test]
    async fn test_repeated_message_gets_full_timeout() {
        use gloo_timers::future::TimeoutFuture;

        let runtime = create_runtime();
        let signal = create_rw_signal(None);
        let generation = store_value(0);

        flash(signal, generation, "Die Anmeldung ist noch nicht verfügbar.", 100);
        TimeoutFuture::new(60).await;
        flash(signal, generation, "Die Anmeldung ist noch nicht verfügbar.", 100);

        // First timer has fired, the second message is still up
        TimeoutFuture::new(70).await;
        assert_eq!(signal.get_untracked().as_deref(), Some("Die Anmeldung ist noch nicht verfügbar."));

        TimeoutFuture::new(120).await;
        assert_eq!(signal.get_untracked(), None);

        runtime.dispose();
    }
}
