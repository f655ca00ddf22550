//! Global Application State
//!
//! The page state lives in one signal holding a [`SessionView`]. Every
//! action follows the same three steps: a synchronous `prepare`/`begin`
//! update, the awaited API call, then a `finish` update. Notices the view
//! queues are drained into toasts after each step.

use leptos::*;

use workout_journal::{
    ApiSettings, JournalApi, Notice, NoticeLevel, SessionView, SetsTicket, DEFAULT_USER_ID,
    SESSION_LIST_LIMIT,
};

use crate::api::{self, GlooJournalApi};

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// API base URL, read from local storage once at startup
    pub api_base: RwSignal<String>,
    /// Sessions, selection, sets, form inputs and loading flag
    pub view: RwSignal<SessionView>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    /// Validation message (for toasts)
    pub warning: RwSignal<Option<String>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState::new(api::get_api_base()));
}

/// Fetch the state provided by [`provide_global_state`]
pub fn use_global_state() -> GlobalState {
    expect_context::<GlobalState>()
}

/// How long a toast of `level` stays up
pub fn toast_timeout_ms(level: NoticeLevel) -> u32 {
    match level {
        NoticeLevel::Success => 3000,
        NoticeLevel::Warning | NoticeLevel::Error => 5000,
    }
}

/// Browser confirmation dialog; no window means no
pub fn browser_confirm(prompt: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(prompt).ok())
        .unwrap_or(false)
}

impl GlobalState {
    pub fn new(api_base: String) -> Self {
        Self {
            api_base: create_rw_signal(api_base),
            view: create_rw_signal(SessionView::new()),
            success: create_rw_signal(None),
            warning: create_rw_signal(None),
            error: create_rw_signal(None),
        }
    }

    /// Client for the current base URL
    pub fn api(&self) -> GlooJournalApi {
        GlooJournalApi::new(ApiSettings::new(
            self.api_base.get_untracked(),
            DEFAULT_USER_ID,
        ))
    }

    /// Switch to another API: persist the URL and start over with empty state
    pub fn change_api_base(&self, url: &str) {
        api::set_api_base(url);
        self.api_base.set(api::get_api_base());
        self.view.set(SessionView::new());
    }

    /// Show a notice as a toast (auto-clears after timeout)
    pub fn show(&self, notice: Notice) {
        let signal = match notice.level {
            NoticeLevel::Success => self.success,
            NoticeLevel::Warning => self.warning,
            NoticeLevel::Error => self.error,
        };
        signal.set(Some(notice.message.clone()));

        let shown = notice.message;
        gloo_timers::callback::Timeout::new(toast_timeout_ms(notice.level), move || {
            // A newer toast of the same kind keeps its own timer
            if signal.get_untracked().as_deref() == Some(shown.as_str()) {
                signal.set(None);
            }
        })
        .forget();
    }

    pub fn show_success(&self, message: &str) {
        self.show(Notice::success(message));
    }

    pub fn show_error(&self, message: &str) {
        self.show(Notice::error(message));
    }

    /// Move queued view notices into toasts
    fn flush_notices(&self) {
        let notices = self.view.try_update(|v| v.take_notices()).unwrap_or_default();
        for notice in notices {
            self.show(notice);
        }
    }

    // ============ Actions ============

    /// Load the latest sessions and the first one's sets
    pub fn load_sessions(&self) {
        let state = *self;
        spawn_local(async move {
            state.view.update(|v| v.begin_sessions_fetch());
            let result = state.api().list_sessions(SESSION_LIST_LIMIT).await;
            let ticket = state
                .view
                .try_update(|v| v.finish_sessions_fetch(result))
                .flatten();
            state.flush_notices();
            if let Some(ticket) = ticket {
                state.load_sets(ticket).await;
            }
        });
    }

    /// Change the selected session; an empty id selects nothing
    pub fn select_session(&self, session_id: String) {
        let ticket = self
            .view
            .try_update(|v| v.select(Some(session_id)))
            .flatten();
        if let Some(ticket) = ticket {
            let state = *self;
            spawn_local(async move { state.load_sets(ticket).await });
        }
    }

    async fn load_sets(self, ticket: SetsTicket) {
        let result = self
            .api()
            .list_sets(ticket.session_id(), ticket.limit())
            .await;
        self.view.update(|v| v.finish_sets_fetch(&ticket, result));
        self.flush_notices();
    }

    /// Create a session from the note input and select it
    pub fn create_session(&self) {
        let Some(note) = self.view.try_update(|v| v.prepare_create_session()).flatten() else {
            return;
        };
        let state = *self;
        spawn_local(async move {
            let result = state.api().create_session(note.clone()).await;
            let ticket = state
                .view
                .try_update(|v| v.finish_create_session(note, result))
                .flatten();
            state.flush_notices();
            if let Some(ticket) = ticket {
                state.load_sets(ticket).await;
            }
        });
    }

    /// Add a set from the weight/reps inputs, then refetch the list
    pub fn add_set(&self) {
        let pending = self.view.try_update(|v| v.prepare_add_set()).flatten();
        self.flush_notices();
        let Some(pending) = pending else {
            return;
        };
        let state = *self;
        spawn_local(async move {
            let api = state.api();
            match api.create_set(&pending.session_id, pending.request).await {
                Ok(()) => {
                    let ticket = state
                        .view
                        .try_update(|v| v.begin_refetch(&pending.session_id))
                        .flatten();
                    match ticket {
                        Some(ticket) => {
                            let result = api.list_sets(ticket.session_id(), ticket.limit()).await;
                            state.view.update(|v| v.finish_add_set(Some(&ticket), result));
                        }
                        // Another session was selected meanwhile
                        None => state.view.update(|v| v.finish_add_set(None, Ok(Vec::new()))),
                    }
                }
                Err(e) => state.view.update(|v| v.finish_add_set(None, Err(e))),
            }
            state.flush_notices();
        });
    }

    /// Delete set `seq` of the selected session after confirmation
    pub fn delete_set(&self, seq: u64) {
        let Some(session_id) = self.view.with_untracked(|v| v.prepare_delete_set()) else {
            return;
        };
        if !browser_confirm(&SessionView::delete_set_prompt(seq)) {
            return;
        }
        let state = *self;
        spawn_local(async move {
            let api = state.api();
            match api.delete_set(&session_id, seq).await {
                Ok(()) => {
                    let ticket = state
                        .view
                        .try_update(|v| v.begin_refetch(&session_id))
                        .flatten();
                    match ticket {
                        Some(ticket) => {
                            let result = api.list_sets(ticket.session_id(), ticket.limit()).await;
                            state
                                .view
                                .update(|v| v.finish_delete_set(seq, Some(&ticket), result));
                        }
                        None => state
                            .view
                            .update(|v| v.finish_delete_set(seq, None, Ok(Vec::new()))),
                    }
                }
                Err(e) => state.view.update(|v| v.finish_delete_set(seq, None, Err(e))),
            }
            state.flush_notices();
        });
    }

    /// Delete the selected session (and its sets) after confirmation
    pub fn delete_session(&self) {
        let Some(session_id) = self.view.with_untracked(|v| v.prepare_delete_session()) else {
            return;
        };
        if !browser_confirm(&SessionView::delete_session_prompt(&session_id)) {
            return;
        }
        let state = *self;
        spawn_local(async move {
            let result = state.api().delete_session(&session_id).await;
            let ticket = state
                .view
                .try_update(|v| v.finish_delete_session(&session_id, result))
                .flatten();
            state.flush_notices();
            if let Some(ticket) = ticket {
                state.load_sets(ticket).await;
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_timeouts() {
        assert_eq!(toast_timeout_ms(NoticeLevel::Success), 3000);
        assert_eq!(toast_timeout_ms(NoticeLevel::Warning), 5000);
        assert_eq!(toast_timeout_ms(NoticeLevel::Error), 5000);
    }

    #[test]
    fn test_view_signal_holds_form_and_notices() {
        let runtime = create_runtime();
        provide_context(GlobalState::new("http://localhost:3000".to_string()));
        let state = use_global_state();

        let ticket = state
            .view
            .try_update(|v| {
                v.finish_sessions_fetch(Ok(vec![workout_journal::Session {
                    session_id: "s1".to_string(),
                    created_at: 1_700_000_000,
                    last_updated_at: None,
                    set_count: Some(0),
                    note: None,
                }]))
            })
            .flatten();
        assert_eq!(ticket.as_ref().map(|t| t.session_id()), Some("s1"));

        state.view.update(|v| {
            v.form.weight = "heavy".to_string();
            v.form.reps = "5".to_string();
        });
        let pending = state.view.try_update(|v| v.prepare_add_set()).flatten();
        assert!(pending.is_none());

        let notices = state.view.try_update(|v| v.take_notices()).unwrap_or_default();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Warning);
        assert!(!state.view.with(|v| v.is_loading()));

        runtime.dispose();
    }

    #[test]
    fn test_api_follows_base_signal() {
        let runtime = create_runtime();
        let state = GlobalState::new("http://localhost:3000".to_string());
        assert_eq!(state.api().base_url(), "http://localhost:3000");

        state.api_base.set("https://api.example.com/prod/".to_string());
        assert_eq!(state.api().base_url(), "https://api.example.com/prod");

        runtime.dispose();
    }
}
