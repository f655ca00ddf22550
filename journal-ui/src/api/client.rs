//! HTTP API Client
//!
//! [`JournalApi`] over the browser's fetch, plus the API base URL kept in
//! local storage.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use workout_journal::{
    paths, ApiSettings, ApiStatus, CreateSessionRequest, CreateSessionResponse, CreateSetRequest,
    ItemsResponse, JournalApi, JournalError, JournalResult, Session, WorkoutSet,
    DEFAULT_API_BASE, DEFAULT_USER_ID, USER_ID_HEADER,
};

const API_URL_KEY: &str = "workout_journal_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten());
    normalize_api_base(stored.as_deref())
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_URL_KEY, url.trim());
        }
    }
}

/// Blank means default; trailing slashes are dropped
fn normalize_api_base(stored: Option<&str>) -> String {
    match stored.map(str::trim).filter(|url| !url.is_empty()) {
        Some(url) => url.trim_end_matches('/').to_string(),
        None => DEFAULT_API_BASE.to_string(),
    }
}

/// Workout API over gloo-net
#[derive(Debug, Clone)]
pub struct GlooJournalApi {
    settings: ApiSettings,
}

impl GlooJournalApi {
    pub fn new(settings: ApiSettings) -> Self {
        Self { settings }
    }

    pub fn base_url(&self) -> &str {
        &self.settings.base_url
    }

    fn builder(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header(USER_ID_HEADER, &self.settings.user_id)
            .header("Accept", "application/json")
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> JournalResult<T> {
        let response = self
            .builder(Request::get(&self.settings.url(path)))
            .send()
            .await
            .map_err(|e| JournalError::Transport(e.to_string()))?;

        let response = check_status("GET", path, response)?;
        response
            .json()
            .await
            .map_err(|e| JournalError::Decode(e.to_string()))
    }

    async fn post<T, B>(&self, path: &str, body: &B) -> JournalResult<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let request = self
            .builder(Request::post(&self.settings.url(path)))
            .json(body)
            .map_err(|e| JournalError::Decode(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| JournalError::Transport(e.to_string()))?;

        let response = check_status("POST", path, response)?;
        response
            .json()
            .await
            .map_err(|e| JournalError::Decode(e.to_string()))
    }

    /// DELETE tolerates an empty body
    async fn delete(&self, path: &str) -> JournalResult<()> {
        let response = self
            .builder(Request::delete(&self.settings.url(path)))
            .send()
            .await
            .map_err(|e| JournalError::Transport(e.to_string()))?;

        check_status("DELETE", path, response)?;
        Ok(())
    }

    /// Status document at the API root
    pub async fn health(&self) -> JournalResult<ApiStatus> {
        self.get("/").await
    }
}

fn check_status(method: &'static str, path: &str, response: Response) -> JournalResult<Response> {
    if response.ok() {
        Ok(response)
    } else {
        web_sys::console::warn_1(
            &format!("{} {} -> {}", method, path, response.status()).into(),
        );
        Err(JournalError::status(method, path, response.status()))
    }
}

#[async_trait(?Send)]
impl JournalApi for GlooJournalApi {
    async fn list_sessions(&self, limit: usize) -> JournalResult<Vec<Session>> {
        let resp: ItemsResponse<Session> = self.get(&paths::sessions_list(limit)).await?;
        Ok(resp.items)
    }

    async fn create_session(&self, note: Option<String>) -> JournalResult<CreateSessionResponse> {
        self.post(&paths::sessions(), &CreateSessionRequest { note }).await
    }

    async fn delete_session(&self, session_id: &str) -> JournalResult<()> {
        self.delete(&paths::session(session_id)).await
    }

    async fn list_sets(&self, session_id: &str, limit: usize) -> JournalResult<Vec<WorkoutSet>> {
        let resp: ItemsResponse<WorkoutSet> =
            self.get(&paths::sets_list(session_id, limit)).await?;
        Ok(resp.items)
    }

    async fn create_set(&self, session_id: &str, set: CreateSetRequest) -> JournalResult<()> {
        let _: serde_json::Value = self.post(&paths::sets(session_id), &set).await?;
        Ok(())
    }

    async fn delete_set(&self, session_id: &str, seq: u64) -> JournalResult<()> {
        self.delete(&paths::set(session_id, seq)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_api_base() {
        assert_eq!(normalize_api_base(None), "http://localhost:3000");
        assert_eq!(normalize_api_base(Some("  ")), "http://localhost:3000");
        assert_eq!(
            normalize_api_base(Some("https://api.example.com/prod/")),
            "https://api.example.com/prod"
        );
    }

    #[test]
    fn test_api_uses_demo_identity() {
        let api = GlooJournalApi::new(ApiSettings::new("http://localhost:3000/", DEFAULT_USER_ID));
        assert_eq!(api.base_url(), "http://localhost:3000");
        assert_eq!(api.settings.user_id, "demo");
    }
}
