//! App Root Component
//!
//! Page layout and global providers.

use leptos::*;

use crate::components::{
    ApiSettingsPanel, SessionForm, SessionPicker, SetEntry, SetList, Toast, VolumeChart,
};
use crate::state::{provide_global_state, use_global_state};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();
    let state = use_global_state();

    // Initial load: latest sessions, first one selected
    state.load_sessions();

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <Header />

            <main class="flex-1 container mx-auto px-4 py-8 pb-24 space-y-6">
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Session"</h2>
                    <div class="grid md:grid-cols-2 gap-6">
                        <SessionForm />
                        <SessionPicker />
                    </div>
                </section>

                <section class="bg-gray-800 rounded-xl p-6">
                    <SetsHeading />
                    <SetEntry />
                    <SetList />
                </section>

                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Volume"</h2>
                    <VolumeChart />
                </section>

                <ApiSettingsPanel />
            </main>

            <Toast />
        </div>
    }
}

#[component]
fn Header() -> impl IntoView {
    let state = use_global_state();

    view! {
        <header class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4 py-4 flex items-center justify-between">
                <h1 class="text-2xl font-bold">"Workout Journal"</h1>
                <a
                    href=move || state.api_base.get()
                    target="_blank"
                    rel="noopener"
                    class="text-sm text-primary-400 hover:text-primary-300"
                >
                    "Open API"
                </a>
            </div>
        </header>
    }
}

/// "Sets" title with the selected session's id and update time
#[component]
fn SetsHeading() -> impl IntoView {
    let state = use_global_state();

    let detail = move || {
        state.view.with(|v| {
            v.current_session().map(|s| {
                format!(
                    "{} · updated {}",
                    s.session_id,
                    workout_journal::format_timestamp(s.display_timestamp())
                )
            })
        })
    };

    view! {
        <div class="flex items-baseline justify-between mb-4">
            <h2 class="text-xl font-semibold">"Sets"</h2>
            <span class="text-sm text-gray-400">{detail}</span>
        </div>
    }
}
