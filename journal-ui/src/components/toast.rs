//! Toast Notification Component
//!
//! Shows success, warning and error messages.

use leptos::*;

use workout_journal::NoticeLevel;

use crate::state::use_global_state;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_global_state();

    view! {
        <div class="fixed bottom-4 right-4 z-50 space-y-2">
            {move || {
                state.success.get().map(|msg| view! {
                    <ToastMessage message=msg level=NoticeLevel::Success />
                })
            }}

            {move || {
                state.warning.get().map(|msg| view! {
                    <ToastMessage message=msg level=NoticeLevel::Warning />
                })
            }}

            {move || {
                state.error.get().map(|msg| view! {
                    <ToastMessage message=msg level=NoticeLevel::Error />
                })
            }}
        </div>
    }
}

fn toast_style(level: NoticeLevel) -> (&'static str, &'static str) {
    match level {
        NoticeLevel::Success => ("✓", "bg-green-600"),
        NoticeLevel::Warning => ("⚠", "bg-yellow-600"),
        NoticeLevel::Error => ("✕", "bg-red-600"),
    }
}

#[component]
fn ToastMessage(
    #[prop(into)]
    message: String,
    level: NoticeLevel,
) -> impl IntoView {
    let (icon, bg_class) = toast_style(level);

    view! {
        <div class=format!(
            "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
             transform transition-all duration-300 ease-out animate-slide-in",
            bg_class
        )>
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium">{message}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_level_has_its_own_color() {
        let colors: Vec<&str> = [NoticeLevel::Success, NoticeLevel::Warning, NoticeLevel::Error]
            .into_iter()
            .map(|level| toast_style(level).1)
            .collect();
        assert_eq!(colors, vec!["bg-green-600", "bg-yellow-600", "bg-red-600"]);
    }
}
