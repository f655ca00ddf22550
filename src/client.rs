//! Workout API REST Client
//!
//! Native HTTP client for the workout API. One attempt per call: no retry,
//! no timeout, no backoff. Failures go straight back to the caller.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::{paths, ApiSettings, JournalApi, USER_ID_HEADER};
use crate::error::{JournalError, JournalResult};
use crate::models::{
    ApiStatus, CreateSessionRequest, CreateSessionResponse, CreateSetRequest, ItemsResponse,
    Session, WorkoutSet,
};

/// Workout API client
#[derive(Debug, Clone)]
pub struct JournalClient {
    client: Client,
    settings: ApiSettings,
}

impl JournalClient {
    /// Create a client for the given base URL and identity
    pub fn new(settings: ApiSettings) -> JournalResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| JournalError::Transport(e.to_string()))?;

        Ok(Self { client, settings })
    }

    /// Create a client from the process-wide settings
    pub fn from_global() -> JournalResult<Self> {
        Self::new(crate::api::settings().clone())
    }

    /// Get the current settings
    pub fn settings(&self) -> &ApiSettings {
        &self.settings
    }

    fn request(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header(USER_ID_HEADER, &self.settings.user_id)
            .header(ACCEPT, "application/json")
    }

    /// GET `path` and parse the JSON body
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> JournalResult<T> {
        tracing::debug!(method = "GET", path, "API request");

        let response = self
            .request(self.client.get(self.settings.url(path)))
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(method = "GET", path, status = status.as_u16(), "API request failed");
            return Err(JournalError::status("GET", path, status.as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| JournalError::Decode(e.to_string()))
    }

    /// POST `body` (an empty object when `None`) to `path` and parse the JSON body
    pub async fn post<T, B>(&self, path: &str, body: Option<&B>) -> JournalResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        tracing::debug!(method = "POST", path, "API request");

        let payload = match body {
            Some(body) => serde_json::to_vec(body)?,
            None => b"{}".to_vec(),
        };

        let response = self
            .request(self.client.post(self.settings.url(path)))
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(method = "POST", path, status = status.as_u16(), "API request failed");
            return Err(JournalError::status("POST", path, status.as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| JournalError::Decode(e.to_string()))
    }

    /// DELETE `path`. An empty or non-JSON body (e.g. 204) yields `{}`.
    pub async fn delete(&self, path: &str) -> JournalResult<serde_json::Value> {
        tracing::debug!(method = "DELETE", path, "API request");

        let response = self
            .request(self.client.delete(self.settings.url(path)))
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(method = "DELETE", path, status = status.as_u16(), "API request failed");
            return Err(JournalError::status("DELETE", path, status.as_u16()));
        }

        let text = response.text().await.unwrap_or_default();
        Ok(parse_optional_body(&text))
    }

    /// Fetch the status document at the API root
    pub async fn health(&self) -> JournalResult<ApiStatus> {
        self.get("/").await
    }
}

#[async_trait(?Send)]
impl JournalApi for JournalClient {
    async fn list_sessions(&self, limit: usize) -> JournalResult<Vec<Session>> {
        let resp: ItemsResponse<Session> = self.get(&paths::sessions_list(limit)).await?;
        Ok(resp.items)
    }

    async fn create_session(&self, note: Option<String>) -> JournalResult<CreateSessionResponse> {
        let body = CreateSessionRequest { note };
        let created: CreateSessionResponse = self.post(&paths::sessions(), Some(&body)).await?;
        tracing::info!(session_id = %created.session_id, "Session created");
        Ok(created)
    }

    async fn delete_session(&self, session_id: &str) -> JournalResult<()> {
        self.delete(&paths::session(session_id)).await?;
        tracing::info!(session_id, "Session deleted");
        Ok(())
    }

    async fn list_sets(&self, session_id: &str, limit: usize) -> JournalResult<Vec<WorkoutSet>> {
        let resp: ItemsResponse<WorkoutSet> =
            self.get(&paths::sets_list(session_id, limit)).await?;
        Ok(resp.items)
    }

    async fn create_set(&self, session_id: &str, set: CreateSetRequest) -> JournalResult<()> {
        // The created-set payload is not needed; the caller refetches the list.
        let _: serde_json::Value = self.post(&paths::sets(session_id), Some(&set)).await?;
        tracing::info!(session_id, weight = set.weight, reps = set.reps, "Set added");
        Ok(())
    }

    async fn delete_set(&self, session_id: &str, seq: u64) -> JournalResult<()> {
        self.delete(&paths::set(session_id, seq)).await?;
        tracing::info!(session_id, seq, "Set deleted");
        Ok(())
    }
}

fn map_send_error(e: reqwest::Error) -> JournalError {
    tracing::warn!(error = %e, "API unreachable");
    JournalError::Transport(e.to_string())
}

/// Parse a body that may legitimately be empty
fn parse_optional_body(text: &str) -> serde_json::Value {
    serde_json::from_str(text).unwrap_or_else(|_| serde_json::Value::Object(Default::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_optional_body() {
        assert_eq!(parse_optional_body(""), serde_json::json!({}));
        assert_eq!(parse_optional_body("not json"), serde_json::json!({}));
        assert_eq!(
            parse_optional_body(r#"{"deleted":true}"#),
            serde_json::json!({ "deleted": true })
        );
    }

    #[test]
    fn test_client_keeps_settings() {
        let client = JournalClient::new(ApiSettings::new("http://localhost:9999/", "tester")).unwrap();
        assert_eq!(client.settings().base_url, "http://localhost:9999");
        assert_eq!(client.settings().user_id, "tester");
    }
}
