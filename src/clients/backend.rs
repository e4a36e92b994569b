//! Remote backend client.
//!
//! The backend exposes a single `/command` endpoint whose body carries one
//! `command` field: either a string-encoded JSON action, or a free-form
//! transcript the server interprets itself (the voice path).

use reqwest::Client;
use serde::Serialize;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::debug;

use crate::errors::AssistError;
use crate::normalize::normalize_result;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Actions the backend understands. Serialized as the string-encoded JSON
/// the `/command` endpoint expects, e.g.
/// `{"action":"fetch_comments","video_id":"abc123"}`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum BackendCommand {
    FetchComments { video_id: String },
    SummarizeComments { video_id: String },
    AnalyzeSentiment { video_id: String },
}

pub struct BackendClient {
    http: Client,
    endpoint: String,
}

impl BackendClient {
    pub fn new(endpoint: String) -> Result<Self, AssistError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AssistError::Network(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { http, endpoint })
    }

    /// POST one pre-encoded command string and return the raw JSON reply.
    async fn post_command(&self, command: &str) -> Result<Value, AssistError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&json!({ "command": command }))
            .send()
            .await?;

        let status = response.status();
        let body: Value = response
            .json()
            .await
            .map_err(|e| AssistError::Parse(format!("Backend reply was not JSON: {e}")))?;

        if !status.is_success() {
            let message = body
                .get("error")
                .and_then(Value::as_str)
                .map_or_else(|| body.to_string(), str::to_string);
            return Err(AssistError::Upstream(message));
        }

        Ok(body)
    }

    /// Send a structured action and normalize the backend's `result` field
    /// into a comment list.
    pub async fn send_action(&self, command: &BackendCommand) -> Result<Vec<String>, AssistError> {
        let encoded = serde_json::to_string(command)?;
        debug!("Sending backend command: {encoded}");
        let body = self.post_command(&encoded).await?;

        // Some error replies come back with a success status and an `error`
        // field in place of `result`.
        if body.get("result").is_none() {
            if let Some(message) = body.get("error").and_then(Value::as_str) {
                return Err(AssistError::Upstream(message.to_string()));
            }
        }

        normalize_result(body.get("result"))
    }

    /// Fetch comments for one video.
    pub async fn fetch_comments(&self, video_id: &str) -> Result<Vec<String>, AssistError> {
        self.send_action(&BackendCommand::FetchComments {
            video_id: video_id.to_string(),
        })
        .await
    }

    /// Forward a voice transcript verbatim for server-side interpretation and
    /// return the backend's JSON reply untouched.
    pub async fn relay_transcript(&self, transcript: &str) -> Result<Value, AssistError> {
        self.post_command(transcript).await
    }
}
