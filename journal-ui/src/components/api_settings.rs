//! API Settings Component
//!
//! Base URL of the workout API, kept in local storage.

use leptos::*;

use crate::state::use_global_state;

#[component]
pub fn ApiSettingsPanel() -> impl IntoView {
    let state = use_global_state();

    let (api_url, set_api_url) = create_signal(state.api_base.get_untracked());
    let (testing, set_testing) = create_signal(false);

    let save_and_test = move |_| {
        state.change_api_base(&api_url.get_untracked());
        set_api_url.set(state.api_base.get_untracked());
        set_testing.set(true);

        spawn_local(async move {
            match state.api().health().await {
                Ok(status) if status.ok => {
                    let stage = status.stage.unwrap_or_else(|| "unknown".to_string());
                    state.show_success(&format!("Connected (stage: {})", stage));
                    state.load_sessions();
                }
                Ok(_) => state.show_error("API reports not ok"),
                Err(e) => state.show_error(&e.to_string()),
            }
            set_testing.set(false);
        });
    };

    view! {
        <details class="bg-gray-800 rounded-xl p-6">
            <summary class="cursor-pointer text-sm text-gray-400">"API connection"</summary>
            <div class="flex flex-wrap items-center gap-3 mt-4">
                <input
                    type="url"
                    prop:value=move || api_url.get()
                    on:input=move |ev| set_api_url.set(event_target_value(&ev))
                    class="flex-1 min-w-[16rem] bg-gray-700 rounded-lg px-3 py-2"
                />
                <button
                    type="button"
                    on:click=save_and_test
                    disabled=move || testing.get()
                    class="bg-gray-700 hover:bg-gray-600 disabled:opacity-50 rounded-lg px-4 py-2 text-sm"
                >
                    {move || if testing.get() { "Testing..." } else { "Save & test" }}
                </button>
            </div>
        </details>
    }
}
