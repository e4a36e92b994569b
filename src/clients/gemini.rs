//! Generative-language (Gemini) client.
//!
//! Encapsulates the summarization endpoint: request envelope construction,
//! the HTTP call, and extraction of the result text from the nested response
//! shape.

use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{error, warn};

use crate::errors::AssistError;

const GENERATE_URL_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Literal shown when the response envelope carries no text at any known path.
pub const NO_SUMMARY_FALLBACK: &str = "No summary returned.";

pub struct GeminiClient {
    http: Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Result<Self, AssistError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AssistError::Network(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            api_key,
            model,
        })
    }

    /// Request envelope: a single text part in a single content turn.
    #[must_use]
    pub fn request_body(prompt: &str) -> Value {
        json!({ "contents": [{ "parts": [{ "text": prompt }] }] })
    }

    /// Submit one prompt and return display text.
    ///
    /// The return value feeds a UI-facing field, so transport, status, and
    /// parse failures are absorbed into an error string instead of
    /// propagating. Single attempt, no retries.
    pub async fn summarize(&self, prompt: &str) -> String {
        let url = format!("{GENERATE_URL_BASE}/{}:generateContent", self.model);

        let response = match self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&Self::request_body(prompt))
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                error!("Summarization request failed: {e}");
                return format!("Error contacting summarization service: {e}");
            }
        };

        let status = response.status();
        let body: Value = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                error!("Summarization response was not JSON: {e}");
                return format!("Error reading summarization response: {e}");
            }
        };

        if !status.is_success() {
            warn!("Summarization endpoint returned {status}: {body}");
            return format!("Summarization error ({status}): {body}");
        }

        extract_summary(&body).unwrap_or_else(|| NO_SUMMARY_FALLBACK.to_string())
    }
}

/// Pull the summary text out of a response envelope: the documented
/// candidate path first, then one legacy path.
#[must_use]
pub fn extract_summary(body: &Value) -> Option<String> {
    if let Some(text) = body
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
    {
        return Some(text.to_string());
    }
    body.pointer("/output/text")
        .and_then(Value::as_str)
        .map(str::to_string)
}
