//! Set Entry Component
//!
//! Weight and reps inputs for the selected session.

use leptos::*;

use crate::state::use_global_state;

#[component]
pub fn SetEntry() -> impl IntoView {
    let state = use_global_state();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        state.add_set();
    };

    view! {
        <form on:submit=on_submit class="flex flex-wrap items-end gap-3 mb-6">
            <NumberField
                label="Weight (kg)"
                step="0.5"
                value=Signal::derive(move || state.view.with(|v| v.form.weight.clone()))
                on_input=move |value| state.view.update(|v| v.form.weight = value)
            />
            <NumberField
                label="Reps"
                step="1"
                value=Signal::derive(move || state.view.with(|v| v.form.reps.clone()))
                on_input=move |value| state.view.update(|v| v.form.reps = value)
            />
            <button
                type="submit"
                disabled=move || !state.view.with(|v| v.can_add_set())
                class="bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       disabled:cursor-not-allowed rounded-lg px-6 py-2 font-semibold transition-colors"
            >
                "Add set"
            </button>
        </form>
    }
}

#[component]
fn NumberField(
    label: &'static str,
    step: &'static str,
    value: Signal<String>,
    on_input: impl Fn(String) + 'static,
) -> impl IntoView {
    view! {
        <label class="flex flex-col text-sm text-gray-400">
            {label}
            <input
                type="number"
                step=step
                prop:value=move || value.get()
                on:input=move |ev| on_input(event_target_value(&ev))
                class="w-32 bg-gray-700 text-white rounded-lg px-3 py-2 mt-1"
            />
        </label>
    }
}
