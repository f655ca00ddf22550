//! API Contract
//!
//! The remote REST API as a trait, the endpoint paths, and the process-wide
//! connection settings. Both the native reqwest client and the browser
//! client implement [`JournalApi`]; the view controller only sees the trait.

use async_trait::async_trait;
use std::sync::OnceLock;

use crate::error::JournalResult;
use crate::models::{CreateSessionResponse, CreateSetRequest, Session, WorkoutSet};

/// Header carrying the client identity on every request
pub const USER_ID_HEADER: &str = "x-user-id";

/// Identity used until authentication exists
pub const DEFAULT_USER_ID: &str = "demo";

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:3000";

/// How many sessions the view loads on mount
pub const SESSION_LIST_LIMIT: usize = 10;

/// How many sets the view loads per session
pub const SET_LIST_LIMIT: usize = 50;

/// Operations of the remote workout API
///
/// Futures are not required to be `Send`: browser fetch futures live on
/// the single UI thread.
#[async_trait(?Send)]
pub trait JournalApi {
    /// GET /sessions?limit=N
    async fn list_sessions(&self, limit: usize) -> JournalResult<Vec<Session>>;

    /// POST /sessions
    async fn create_session(&self, note: Option<String>) -> JournalResult<CreateSessionResponse>;

    /// DELETE /sessions/{id}
    async fn delete_session(&self, session_id: &str) -> JournalResult<()>;

    /// GET /sessions/{id}/sets?limit=N, newest first
    async fn list_sets(&self, session_id: &str, limit: usize) -> JournalResult<Vec<WorkoutSet>>;

    /// POST /sessions/{id}/sets
    async fn create_set(&self, session_id: &str, set: CreateSetRequest) -> JournalResult<()>;

    /// DELETE /sessions/{id}/sets/{seq}
    async fn delete_set(&self, session_id: &str, seq: u64) -> JournalResult<()>;
}

/// Endpoint paths relative to the base URL
pub mod paths {
    /// Session ids are opaque, so they are encoded as a single path segment
    fn segment(session_id: &str) -> String {
        urlencoding::encode(session_id).into_owned()
    }

    pub fn sessions() -> String {
        "/sessions".to_string()
    }

    pub fn sessions_list(limit: usize) -> String {
        format!("/sessions?limit={}", limit)
    }

    pub fn session(session_id: &str) -> String {
        format!("/sessions/{}", segment(session_id))
    }

    pub fn sets(session_id: &str) -> String {
        format!("/sessions/{}/sets", segment(session_id))
    }

    pub fn sets_list(session_id: &str, limit: usize) -> String {
        format!("/sessions/{}/sets?limit={}", segment(session_id), limit)
    }

    pub fn set(session_id: &str, seq: u64) -> String {
        format!("/sessions/{}/sets/{}", segment(session_id), seq)
    }
}

/// Where the API lives and who we claim to be
#[derive(Debug, Clone, PartialEq)]
pub struct ApiSettings {
    pub base_url: String,
    pub user_id: String,
}

impl ApiSettings {
    pub fn new(base_url: impl Into<String>, user_id: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            user_id: user_id.into(),
        }
    }

    /// Absolute URL for an endpoint path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE, DEFAULT_USER_ID)
    }
}

static SETTINGS: OnceLock<ApiSettings> = OnceLock::new();

/// Install the process-wide settings. Only the first call wins; later
/// calls return the settings already in place.
pub fn init_settings(settings: ApiSettings) -> &'static ApiSettings {
    SETTINGS.get_or_init(|| settings)
}

/// Process-wide settings, or the defaults if none were installed
pub fn settings() -> &'static ApiSettings {
    SETTINGS.get_or_init(ApiSettings::default)
}
