//! Journal Controller
//!
//! Drives a [`SessionView`] against any [`JournalApi`]: one method per user
//! action. Each mutation is awaited before its refetch is issued, so the
//! refetched list always reflects at least that mutation.

use crate::api::{JournalApi, SESSION_LIST_LIMIT};
use crate::view::{SessionView, SetsTicket};

/// Asks the user to confirm a destructive action
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// View state plus the API it talks to
pub struct JournalController<A> {
    api: A,
    view: SessionView,
}

impl<A: JournalApi> JournalController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            view: SessionView::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn view(&self) -> &SessionView {
        &self.view
    }

    /// Mutable access for form input
    pub fn view_mut(&mut self) -> &mut SessionView {
        &mut self.view
    }

    /// Load the latest sessions and, if that selects one, its sets
    pub async fn mount(&mut self) {
        self.view.begin_sessions_fetch();
        let result = self.api.list_sessions(SESSION_LIST_LIMIT).await;
        if let Some(ticket) = self.view.finish_sessions_fetch(result) {
            self.load_sets(ticket).await;
        }
    }

    /// Switch to another session (or none) and load its sets
    pub async fn select_session(&mut self, session_id: Option<String>) {
        if let Some(ticket) = self.view.select(session_id) {
            self.load_sets(ticket).await;
        }
    }

    /// Reload the selected session's sets
    pub async fn refresh_sets(&mut self) {
        if let Some(id) = self.view.selected().map(str::to_string) {
            let ticket = self.view.begin_sets_fetch(id);
            self.load_sets(ticket).await;
        }
    }

    async fn load_sets(&mut self, ticket: SetsTicket) {
        let result = self.api.list_sets(ticket.session_id(), ticket.limit()).await;
        self.view.finish_sets_fetch(&ticket, result);
    }

    /// Create a session from the note input and select it
    pub async fn create_session(&mut self) {
        let Some(note) = self.view.prepare_create_session() else {
            return;
        };
        let result = self.api.create_session(note.clone()).await;
        if let Some(ticket) = self.view.finish_create_session(note, result) {
            self.load_sets(ticket).await;
        }
    }

    /// Add a set from the weight/reps inputs, then refetch the list
    pub async fn add_set(&mut self) {
        let Some(pending) = self.view.prepare_add_set() else {
            return;
        };
        match self.api.create_set(&pending.session_id, pending.request).await {
            Ok(()) => match self.view.begin_refetch(&pending.session_id) {
                Some(ticket) => {
                    let result = self.api.list_sets(ticket.session_id(), ticket.limit()).await;
                    self.view.finish_add_set(Some(&ticket), result);
                }
                None => self.view.finish_add_set(None, Ok(Vec::new())),
            },
            Err(e) => self.view.finish_add_set(None, Err(e)),
        }
    }

    /// Delete set `seq` of the selected session after confirmation
    pub async fn delete_set(&mut self, seq: u64, confirm: &impl Confirm) {
        let Some(session_id) = self.view.prepare_delete_set() else {
            return;
        };
        if !confirm.confirm(&SessionView::delete_set_prompt(seq)) {
            return;
        }
        match self.api.delete_set(&session_id, seq).await {
            Ok(()) => match self.view.begin_refetch(&session_id) {
                Some(ticket) => {
                    let result = self.api.list_sets(ticket.session_id(), ticket.limit()).await;
                    self.view.finish_delete_set(seq, Some(&ticket), result);
                }
                None => self.view.finish_delete_set(seq, None, Ok(Vec::new())),
            },
            Err(e) => self.view.finish_delete_set(seq, None, Err(e)),
        }
    }

    /// Delete the selected session (and its sets) after confirmation
    pub async fn delete_session(&mut self, confirm: &impl Confirm) {
        let Some(session_id) = self.view.prepare_delete_session() else {
            return;
        };
        if !confirm.confirm(&SessionView::delete_session_prompt(&session_id)) {
            return;
        }
        let result = self.api.delete_session(&session_id).await;
        if let Some(ticket) = self.view.finish_delete_session(&session_id, result) {
            self.load_sets(ticket).await;
        }
    }
}
