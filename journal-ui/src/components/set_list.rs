//! Set List Component
//!
//! Sets of the selected session, newest first.

use leptos::*;

use workout_journal::LoadPhase;

use crate::state::use_global_state;

#[component]
pub fn SetList() -> impl IntoView {
    let state = use_global_state();

    view! {
        <div>
            {move || {
                let (phase, sets) = state.view.with(|v| (v.sets_phase(), v.sets().to_vec()));
                if phase == LoadPhase::Loading && sets.is_empty() {
                    return view! {
                        <div class="py-6 flex justify-center">
                            <div class="loading-spinner w-6 h-6" />
                        </div>
                    }
                    .into_view();
                }
                if sets.is_empty() {
                    return view! { <p class="text-gray-400 text-sm">"No sets yet."</p> }
                        .into_view();
                }
                view! {
                    <ul class="divide-y divide-gray-700">
                        {sets
                            .into_iter()
                            .map(|set| {
                                let seq = set.seq;
                                view! {
                                    <li class="flex items-center justify-between py-2">
                                        <span>{set.summary()}</span>
                                        <button
                                            type="button"
                                            on:click=move |_| state.delete_set(seq)
                                            class="text-sm text-gray-400 hover:text-red-400"
                                        >
                                            "Delete"
                                        </button>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                }
                .into_view()
            }}
        </div>
    }
}
