//! Session Picker Component
//!
//! Selector over the latest sessions and the delete-session button.

use leptos::*;

use crate::state::use_global_state;

#[component]
pub fn SessionPicker() -> impl IntoView {
    let state = use_global_state();

    let options = move || {
        state.view.with(|v| {
            v.sessions()
                .iter()
                .map(|s| (s.session_id.clone(), s.label()))
                .collect::<Vec<_>>()
        })
    };
    let selected = move || state.view.with(|v| v.selected().unwrap_or_default().to_string());

    view! {
        <div class="space-y-3">
            <label class="block text-sm text-gray-400" for="session">"Latest sessions"</label>
            <select
                id="session"
                on:change=move |ev| state.select_session(event_target_value(&ev))
                prop:value=selected
                class="w-full bg-gray-700 rounded-lg px-3 py-2"
            >
                <option value="">"(none)"</option>
                {move || {
                    options()
                        .into_iter()
                        .map(|(id, label)| {
                            let is_selected = id == selected();
                            view! { <option value=id selected=is_selected>{label}</option> }
                        })
                        .collect::<Vec<_>>()
                }}
            </select>
            <button
                type="button"
                on:click=move |_| state.delete_session()
                disabled=move || state.view.with(|v| v.selected().is_none())
                class="w-full bg-gray-700 hover:bg-red-700 disabled:opacity-50
                       disabled:cursor-not-allowed rounded-lg py-2 text-sm transition-colors"
            >
                "Delete session"
            </button>
        </div>
    }
}
