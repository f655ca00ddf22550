//! Session/Set View State
//!
//! Client-held state of the journal page and its transitions. The view
//! never talks to the network itself: each user action is split into a
//! `prepare_*`/`begin_*` step that says what to send and a `finish_*` step
//! that folds the response back in. The async [`crate::controller`] and
//! the web UI both drive it that way.
//!
//! The cached lists are never authoritative. After every mutation the
//! affected list is replaced wholesale with a fresh fetch; the only local
//! patch is the optimistic prepend of a newly created session.

use crate::api::SET_LIST_LIMIT;
use crate::error::JournalResult;
use crate::input::{parse_set_input, INVALID_SET_INPUT};
use crate::models::{CreateSessionResponse, CreateSetRequest, Session, WorkoutSet};

/// Progress of one list fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
}

/// Severity of a user-facing notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

/// Transient message for the user
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Warning, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into() }
    }
}

/// Text fields of the page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormInputs {
    /// Session note; also sent as the note of each added set
    pub note: String,
    pub weight: String,
    pub reps: String,
}

/// Claim on the set list for one fetch.
///
/// Only the newest ticket may write the list, so a slow response for a
/// session the user already left cannot overwrite the current one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetsTicket {
    generation: u64,
    session_id: String,
    limit: usize,
}

impl SetsTicket {
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

/// A validated add-set submission
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSet {
    pub session_id: String,
    pub request: CreateSetRequest,
}

/// Page state
#[derive(Debug, Clone, Default)]
pub struct SessionView {
    sessions: Vec<Session>,
    selected: Option<String>,
    sets: Vec<WorkoutSet>,
    sessions_phase: LoadPhase,
    sets_phase: LoadPhase,
    sets_generation: u64,
    loading: bool,
    notices: Vec<Notice>,
    pub form: FormInputs,
}

impl SessionView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The selected session's record, if it is in the cached list
    pub fn current_session(&self) -> Option<&Session> {
        let id = self.selected.as_deref()?;
        self.sessions.iter().find(|s| s.session_id == id)
    }

    /// Sets of the selected session, as the API returned them (newest first)
    pub fn sets(&self) -> &[WorkoutSet] {
        &self.sets
    }

    pub fn sessions_phase(&self) -> LoadPhase {
        self.sessions_phase
    }

    pub fn sets_phase(&self) -> LoadPhase {
        self.sets_phase
    }

    /// True while a create-session or add-set submission is in flight
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn can_add_set(&self) -> bool {
        !self.loading && self.selected.is_some()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Hand pending notifications to the front-end
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    fn notify(&mut self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => tracing::info!(message = %notice.message, "notice"),
            NoticeLevel::Warning | NoticeLevel::Error => {
                tracing::warn!(message = %notice.message, "notice")
            }
        }
        self.notices.push(notice);
    }

    // ============ Session list ============

    pub fn begin_sessions_fetch(&mut self) {
        self.sessions_phase = LoadPhase::Loading;
    }

    /// Apply the mount-time session list. Selects the first session when
    /// nothing is selected yet and returns the set fetch that selection needs.
    pub fn finish_sessions_fetch(
        &mut self,
        result: JournalResult<Vec<Session>>,
    ) -> Option<SetsTicket> {
        match result {
            Ok(sessions) => {
                self.sessions = sessions;
                self.sessions_phase = LoadPhase::Loaded;
                if self.selected.is_none() {
                    let first = self.sessions.first().map(|s| s.session_id.clone());
                    return self.select(first);
                }
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "Session list fetch failed");
                self.sessions_phase = LoadPhase::Idle;
                self.notify(Notice::error("Failed to load sessions"));
                None
            }
        }
    }

    // ============ Selection and set list ============

    /// Change the selection. Returns the set fetch to run when the
    /// selection moved to another session; selecting nothing fetches nothing.
    pub fn select(&mut self, session_id: Option<String>) -> Option<SetsTicket> {
        let session_id = session_id.filter(|id| !id.is_empty());
        if session_id == self.selected {
            return None;
        }
        self.selected = session_id;
        match self.selected.clone() {
            Some(id) => Some(self.begin_sets_fetch(id)),
            None => {
                self.invalidate_sets_fetch();
                None
            }
        }
    }

    /// Start a set list fetch for `session_id`, superseding any in flight
    pub fn begin_sets_fetch(&mut self, session_id: impl Into<String>) -> SetsTicket {
        self.sets_generation += 1;
        self.sets_phase = LoadPhase::Loading;
        SetsTicket {
            generation: self.sets_generation,
            session_id: session_id.into(),
            limit: SET_LIST_LIMIT,
        }
    }

    /// Start the refetch that follows a set mutation on `session_id`.
    ///
    /// `None` when that session is no longer selected: the selection's own
    /// fetch stays current and there is nothing to refetch.
    pub fn begin_refetch(&mut self, session_id: &str) -> Option<SetsTicket> {
        if self.selected.as_deref() != Some(session_id) {
            tracing::debug!(session_id, "Skipping refetch for deselected session");
            return None;
        }
        Some(self.begin_sets_fetch(session_id))
    }

    fn invalidate_sets_fetch(&mut self) {
        self.sets_generation += 1;
        self.sets_phase = LoadPhase::Idle;
    }

    fn is_current(&self, ticket: &SetsTicket) -> bool {
        ticket.generation == self.sets_generation
            && self.selected.as_deref() == Some(ticket.session_id.as_str())
    }

    /// Replace the set list if `ticket` is still the newest claim.
    /// Returns false when the response was stale and dropped.
    pub fn apply_sets(&mut self, ticket: &SetsTicket, sets: Vec<WorkoutSet>) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(
                session_id = %ticket.session_id,
                generation = ticket.generation,
                "Dropping stale set list response"
            );
            return false;
        }
        self.sets = sets;
        self.sets_phase = LoadPhase::Loaded;
        true
    }

    /// Fold a selection-driven set fetch back in
    pub fn finish_sets_fetch(&mut self, ticket: &SetsTicket, result: JournalResult<Vec<WorkoutSet>>) {
        match result {
            Ok(sets) => {
                self.apply_sets(ticket, sets);
            }
            Err(e) => {
                tracing::warn!(error = %e, session_id = %ticket.session_id, "Set list fetch failed");
                if self.is_current(ticket) {
                    self.sets_phase = LoadPhase::Loaded;
                    self.notify(Notice::error("Failed to load sets"));
                }
            }
        }
    }

    /// Apply the refetch that follows a mutation. `ticket` is `None` when
    /// no refetch was issued: `result` then carries the mutation failure,
    /// or `Ok` when the mutation succeeded on a session no longer selected.
    fn finish_refetch(
        &mut self,
        ticket: Option<&SetsTicket>,
        result: JournalResult<Vec<WorkoutSet>>,
    ) -> JournalResult<()> {
        match (ticket, result) {
            (Some(ticket), Ok(sets)) => {
                self.apply_sets(ticket, sets);
                Ok(())
            }
            (ticket, result) => {
                if let Some(ticket) = ticket {
                    if self.is_current(ticket) {
                        self.sets_phase = LoadPhase::Loaded;
                    }
                }
                result.map(|_| ())
            }
        }
    }

    // ============ Create session ============

    /// Claim the loading flag and produce the note to send.
    /// `None` while another submission is in flight.
    pub fn prepare_create_session(&mut self) -> Option<Option<String>> {
        if self.loading {
            return None;
        }
        self.loading = true;
        let note = self.form.note.trim();
        Some((!note.is_empty()).then(|| note.to_string()))
    }

    /// Prepend the created session and select it
    pub fn finish_create_session(
        &mut self,
        note: Option<String>,
        result: JournalResult<CreateSessionResponse>,
    ) -> Option<SetsTicket> {
        self.loading = false;
        match result {
            Ok(created) => {
                self.sessions.insert(
                    0,
                    Session {
                        session_id: created.session_id.clone(),
                        created_at: created.created_at,
                        last_updated_at: None,
                        set_count: Some(0),
                        note,
                    },
                );
                self.form.note.clear();
                self.notify(Notice::success("Session created"));
                self.select(Some(created.session_id))
            }
            Err(e) => {
                tracing::warn!(error = %e, "Session create failed");
                self.notify(Notice::error("Failed to create session"));
                None
            }
        }
    }

    // ============ Add set ============

    /// Validate the set form and claim the loading flag.
    ///
    /// Returns `None` without touching the network when no session is
    /// selected, a submission is in flight, or the input does not parse
    /// (the last case also queues a warning).
    pub fn prepare_add_set(&mut self) -> Option<PendingSet> {
        let session_id = self.selected.clone()?;
        if self.loading {
            return None;
        }
        let input = match parse_set_input(&self.form.weight, &self.form.reps) {
            Ok(input) => input,
            Err(_) => {
                self.notify(Notice::warning(INVALID_SET_INPUT));
                return None;
            }
        };
        self.loading = true;
        let note = self.form.note.trim();
        Some(PendingSet {
            session_id,
            request: CreateSetRequest {
                weight: input.weight,
                reps: input.reps,
                note: (!note.is_empty()).then(|| note.to_string()),
            },
        })
    }

    /// Fold the add-set outcome back in: `ticket` and `result` describe the
    /// refetch that followed a successful POST. Without a ticket, `result`
    /// is the POST failure, or `Ok` (ignored list) when
    /// [`SessionView::begin_refetch`] found the session deselected.
    pub fn finish_add_set(
        &mut self,
        ticket: Option<&SetsTicket>,
        result: JournalResult<Vec<WorkoutSet>>,
    ) {
        self.loading = false;
        match self.finish_refetch(ticket, result) {
            Ok(()) => {
                self.form.weight.clear();
                self.form.reps.clear();
                self.notify(Notice::success("Set added"));
            }
            Err(e) => {
                tracing::warn!(error = %e, "Set add failed");
                self.notify(Notice::error("Failed to add set"));
            }
        }
    }

    // ============ Delete set ============

    /// Confirmation prompt for deleting set `seq`
    pub fn delete_set_prompt(seq: u64) -> String {
        format!("Delete set #{}?", seq)
    }

    /// Session to delete the set from, if any is selected
    pub fn prepare_delete_set(&self) -> Option<String> {
        self.selected.clone()
    }

    /// Same shape as [`SessionView::finish_add_set`]
    pub fn finish_delete_set(
        &mut self,
        seq: u64,
        ticket: Option<&SetsTicket>,
        result: JournalResult<Vec<WorkoutSet>>,
    ) {
        match self.finish_refetch(ticket, result) {
            Ok(()) => self.notify(Notice::success(format!("Deleted set #{}", seq))),
            Err(e) => {
                tracing::warn!(error = %e, seq, "Set delete failed");
                self.notify(Notice::error("Failed to delete set"));
            }
        }
    }

    // ============ Delete session ============

    /// Confirmation prompt for deleting a session and its sets
    pub fn delete_session_prompt(session_id: &str) -> String {
        format!("Delete session {}? Its sets will be deleted too.", session_id)
    }

    /// Session to delete, if any is selected
    pub fn prepare_delete_session(&self) -> Option<String> {
        self.selected.clone()
    }

    /// Drop the deleted session locally. When it was the selected one, clear
    /// the set list and move the selection to the first remaining session
    /// (or none).
    pub fn finish_delete_session(
        &mut self,
        session_id: &str,
        result: JournalResult<()>,
    ) -> Option<SetsTicket> {
        match result {
            Ok(()) => {
                let next = self
                    .sessions
                    .iter()
                    .find(|s| s.session_id != session_id)
                    .map(|s| s.session_id.clone());
                self.sessions.retain(|s| s.session_id != session_id);
                self.notify(Notice::success(format!("Deleted session {}", session_id)));
                if self.selected.as_deref() == Some(session_id) {
                    self.sets.clear();
                    self.select(next)
                } else {
                    None
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, session_id, "Session delete failed");
                self.notify(Notice::error("Failed to delete session"));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JournalError;

    fn session(id: &str) -> Session {
        Session {
            session_id: id.to_string(),
            created_at: 1_700_000_000,
            last_updated_at: None,
            set_count: None,
            note: None,
        }
    }

    fn set(seq: u64) -> WorkoutSet {
        WorkoutSet { seq, weight: 50.0, reps: 5, note: None, created_at: 1_700_000_000 }
    }

    #[test]
    fn test_first_session_selected_on_mount() {
        let mut view = SessionView::new();
        view.begin_sessions_fetch();
        assert_eq!(view.sessions_phase(), LoadPhase::Loading);

        let ticket = view.finish_sessions_fetch(Ok(vec![session("s1"), session("s2")]));
        assert_eq!(view.selected(), Some("s1"));
        assert_eq!(view.sessions_phase(), LoadPhase::Loaded);
        assert_eq!(ticket.unwrap().session_id(), "s1");
        assert_eq!(view.sets_phase(), LoadPhase::Loading);
    }

    #[test]
    fn test_existing_selection_is_kept_on_mount() {
        let mut view = SessionView::new();
        view.select(Some("s2".to_string()));
        let ticket = view.finish_sessions_fetch(Ok(vec![session("s1"), session("s2")]));
        assert!(ticket.is_none());
        assert_eq!(view.selected(), Some("s2"));
    }

    #[test]
    fn test_session_fetch_failure_notifies() {
        let mut view = SessionView::new();
        view.begin_sessions_fetch();
        let ticket = view.finish_sessions_fetch(Err(JournalError::Transport("down".into())));
        assert!(ticket.is_none());
        assert_eq!(view.sessions_phase(), LoadPhase::Idle);
        assert_eq!(view.notices()[0].level, NoticeLevel::Error);
    }

    #[test]
    fn test_reselecting_same_session_fetches_nothing() {
        let mut view = SessionView::new();
        assert!(view.select(Some("s1".to_string())).is_some());
        assert!(view.select(Some("s1".to_string())).is_none());
        assert!(view.select(Some(String::new())).is_none());
        assert_eq!(view.selected(), None);
    }

    #[test]
    fn test_stale_set_response_is_dropped() {
        let mut view = SessionView::new();
        let first = view.select(Some("s1".to_string())).unwrap();
        let second = view.select(Some("s2".to_string())).unwrap();

        // s2 answers first, then the slow s1 response arrives
        view.finish_sets_fetch(&second, Ok(vec![set(9)]));
        assert!(!view.apply_sets(&first, vec![set(1), set(2)]));
        assert_eq!(view.sets(), &[set(9)]);
        assert_eq!(view.sets_phase(), LoadPhase::Loaded);
    }

    #[test]
    fn test_newer_fetch_for_same_session_wins() {
        let mut view = SessionView::new();
        let old = view.select(Some("s1".to_string())).unwrap();
        let new = view.begin_sets_fetch("s1");
        assert!(view.apply_sets(&new, vec![set(2), set(1)]));
        assert!(!view.apply_sets(&old, vec![set(1)]));
        assert_eq!(view.sets().len(), 2);
    }

    #[test]
    fn test_stale_failure_is_silent() {
        let mut view = SessionView::new();
        let first = view.select(Some("s1".to_string())).unwrap();
        view.select(Some("s2".to_string()));
        view.finish_sets_fetch(&first, Err(JournalError::status("GET", "/x", 500)));
        assert!(view.notices().is_empty());
        assert_eq!(view.sets_phase(), LoadPhase::Loading);
    }

    #[test]
    fn test_create_session_prepends_and_selects() {
        let mut view = SessionView::new();
        view.finish_sessions_fetch(Ok(vec![session("old")]));
        view.form.note = "legs".to_string();

        let note = view.prepare_create_session().unwrap();
        assert_eq!(note.as_deref(), Some("legs"));
        assert!(view.is_loading());
        assert!(view.prepare_create_session().is_none());

        let ticket = view.finish_create_session(
            note,
            Ok(CreateSessionResponse { session_id: "new".to_string(), created_at: 1_700_000_100 }),
        );
        assert!(!view.is_loading());
        assert_eq!(ticket.unwrap().session_id(), "new");
        assert_eq!(view.sessions()[0].session_id, "new");
        assert_eq!(view.sessions()[0].set_count, Some(0));
        assert_eq!(view.sessions()[0].note.as_deref(), Some("legs"));
        assert_eq!(view.selected(), Some("new"));
        assert!(view.form.note.is_empty());
    }

    #[test]
    fn test_create_session_failure_keeps_state() {
        let mut view = SessionView::new();
        view.form.note = "legs".to_string();
        let note = view.prepare_create_session().unwrap();
        let ticket = view.finish_create_session(note, Err(JournalError::status("POST", "/sessions", 500)));
        assert!(ticket.is_none());
        assert!(!view.is_loading());
        assert!(view.sessions().is_empty());
        assert_eq!(view.form.note, "legs");
        assert_eq!(view.take_notices()[0].message, "Failed to create session");
        assert!(view.notices().is_empty());
    }

    #[test]
    fn test_add_set_validation_warns() {
        let mut view = SessionView::new();
        view.select(Some("s1".to_string()));

        view.form.weight = "abc".to_string();
        view.form.reps = "5".to_string();
        assert!(view.prepare_add_set().is_none());

        view.form.weight = "40".to_string();
        view.form.reps = "3.5".to_string();
        assert!(view.prepare_add_set().is_none());

        assert!(!view.is_loading());
        let notices = view.take_notices();
        assert_eq!(notices.len(), 2);
        assert!(notices.iter().all(|n| n.level == NoticeLevel::Warning));
        assert_eq!(notices[0].message, INVALID_SET_INPUT);
    }

    #[test]
    fn test_add_set_requires_selection() {
        let mut view = SessionView::new();
        view.form.weight = "40".to_string();
        view.form.reps = "5".to_string();
        assert!(view.prepare_add_set().is_none());
        assert!(view.notices().is_empty());
    }

    #[test]
    fn test_add_set_success_replaces_list() {
        let mut view = SessionView::new();
        let ticket = view.select(Some("s1".to_string())).unwrap();
        view.apply_sets(&ticket, vec![set(1)]);
        view.form.note = "top set".to_string();
        view.form.weight = "42.5".to_string();
        view.form.reps = "10".to_string();

        let pending = view.prepare_add_set().unwrap();
        assert_eq!(pending.session_id, "s1");
        assert_eq!(pending.request.weight, 42.5);
        assert_eq!(pending.request.reps, 10);
        assert_eq!(pending.request.note.as_deref(), Some("top set"));
        assert!(!view.can_add_set());

        let refetch = view.begin_sets_fetch("s1");
        view.finish_add_set(Some(&refetch), Ok(vec![set(2), set(1)]));
        assert_eq!(view.sets(), &[set(2), set(1)]);
        assert!(view.form.weight.is_empty());
        assert!(view.form.reps.is_empty());
        assert!(view.can_add_set());
    }

    #[test]
    fn test_add_set_post_failure_keeps_inputs() {
        let mut view = SessionView::new();
        view.select(Some("s1".to_string()));
        view.form.weight = "40".to_string();
        view.form.reps = "5".to_string();
        view.prepare_add_set().unwrap();

        view.finish_add_set(None, Err(JournalError::status("POST", "/sessions/s1/sets", 400)));
        assert!(!view.is_loading());
        assert_eq!(view.form.weight, "40");
        assert_eq!(view.take_notices().last().unwrap().message, "Failed to add set");
    }

    #[test]
    fn test_delete_set_refetch_failure_keeps_old_list() {
        let mut view = SessionView::new();
        let ticket = view.select(Some("s1".to_string())).unwrap();
        view.apply_sets(&ticket, vec![set(2), set(1)]);

        let refetch = view.begin_sets_fetch("s1");
        view.finish_delete_set(2, Some(&refetch), Err(JournalError::Transport("reset".into())));
        assert_eq!(view.sets().len(), 2);
        assert_eq!(view.sets_phase(), LoadPhase::Loaded);
        assert_eq!(view.take_notices()[0].level, NoticeLevel::Error);
    }

    #[test]
    fn test_delete_only_session_clears_everything() {
        let mut view = SessionView::new();
        let ticket = view.finish_sessions_fetch(Ok(vec![session("s1")])).unwrap();
        view.apply_sets(&ticket, vec![set(1)]);

        let id = view.prepare_delete_session().unwrap();
        let next = view.finish_delete_session(&id, Ok(()));
        assert!(next.is_none());
        assert_eq!(view.selected(), None);
        assert!(view.sessions().is_empty());
        assert!(view.sets().is_empty());
    }

    #[test]
    fn test_delete_session_moves_to_next() {
        let mut view = SessionView::new();
        view.finish_sessions_fetch(Ok(vec![session("s1"), session("s2"), session("s3")]));
        let next = view.finish_delete_session("s1", Ok(()));
        assert_eq!(next.unwrap().session_id(), "s2");
        assert_eq!(view.selected(), Some("s2"));
        assert_eq!(view.sessions().len(), 2);
    }

    #[test]
    fn test_delete_session_failure_keeps_list() {
        let mut view = SessionView::new();
        view.finish_sessions_fetch(Ok(vec![session("s1")]));
        view.finish_delete_session("s1", Err(JournalError::Transport("reset".into())));
        assert_eq!(view.sessions().len(), 1);
        assert_eq!(view.selected(), Some("s1"));
    }

    #[test]
    fn test_switching_sessions_during_add_set() {
        let mut view = SessionView::new();
        let t1 = view.select(Some("s1".to_string())).unwrap();
        view.apply_sets(&t1, vec![set(1)]);
        view.form.weight = "40".to_string();
        view.form.reps = "5".to_string();
        let pending = view.prepare_add_set().unwrap();

        // User moves to s2 while the POST for s1 is in flight
        let t2 = view.select(Some("s2".to_string())).unwrap();
        assert!(view.begin_refetch(&pending.session_id).is_none());
        view.finish_add_set(None, Ok(Vec::new()));

        view.finish_sets_fetch(&t2, Ok(vec![set(8), set(7)]));
        assert_eq!(view.selected(), Some("s2"));
        assert_eq!(view.sets(), &[set(8), set(7)]);
        assert_eq!(view.sets_phase(), LoadPhase::Loaded);
        assert!(!view.is_loading());
        assert_eq!(view.take_notices().last().unwrap().message, "Set added");
    }

    #[test]
    fn test_refetch_for_selected_session() {
        let mut view = SessionView::new();
        view.select(Some("s1".to_string()));
        let ticket = view.begin_refetch("s1").unwrap();
        view.finish_delete_set(3, Some(&ticket), Ok(vec![set(2)]));
        assert_eq!(view.sets(), &[set(2)]);
        assert_eq!(view.take_notices()[0].message, "Deleted set #3");
    }

    #[test]
    fn test_deleting_other_session_keeps_selected_sets() {
        let mut view = SessionView::new();
        view.finish_sessions_fetch(Ok(vec![session("s1"), session("s2")]));
        let id = view.prepare_delete_session().unwrap();

        // Selection moves on before the DELETE for s1 resolves
        let t2 = view.select(Some("s2".to_string())).unwrap();
        view.finish_sets_fetch(&t2, Ok(vec![set(4)]));

        let next = view.finish_delete_session(&id, Ok(()));
        assert!(next.is_none());
        assert_eq!(view.selected(), Some("s2"));
        assert_eq!(view.sets(), &[set(4)]);
        assert_eq!(view.sessions().len(), 1);
    }

    #[test]
    fn test_current_session() {
        let mut view = SessionView::new();
        assert!(view.current_session().is_none());
        view.finish_sessions_fetch(Ok(vec![session("s1")]));
        assert_eq!(view.current_session().unwrap().session_id, "s1");
    }

    #[test]
    fn test_prompts() {
        assert_eq!(SessionView::delete_set_prompt(3), "Delete set #3?");
        assert!(SessionView::delete_session_prompt("s1").starts_with("Delete session s1?"));
    }
}
