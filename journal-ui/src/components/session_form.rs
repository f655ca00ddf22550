//! Session Form Component
//!
//! Note input shared by new sessions and new sets, plus the create button.

use leptos::*;

use crate::state::use_global_state;

#[component]
pub fn SessionForm() -> impl IntoView {
    let state = use_global_state();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        state.create_session();
    };

    view! {
        <form on:submit=on_submit class="space-y-3">
            <label class="block text-sm text-gray-400" for="note">"Note"</label>
            <input
                id="note"
                type="text"
                placeholder="e.g. chest day"
                prop:value=move || state.view.with(|v| v.form.note.clone())
                on:input=move |ev| {
                    let note = event_target_value(&ev);
                    state.view.update(|v| v.form.note = note);
                }
                class="w-full bg-gray-700 rounded-lg px-3 py-2"
            />
            <button
                type="submit"
                disabled=move || state.view.with(|v| v.is_loading())
                class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       disabled:cursor-not-allowed rounded-lg py-2 font-semibold transition-colors"
            >
                "New session"
            </button>
        </form>
    }
}
