//! Direct video-comments API client.
//!
//! Second rung of the fallback chain: used only when an API key is
//! configured, to pull top-level comment threads without going through the
//! backend.

use futures::future::join_all;
use reqwest::Client;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use tracing::warn;

use crate::errors::AssistError;

const COMMENT_THREADS_URL: &str = "https://www.googleapis.com/youtube/v3/commentThreads";
const MAX_RESULTS: u32 = 50;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct DirectApiClient {
    http: Client,
    api_key: String,
}

impl DirectApiClient {
    pub fn new(api_key: String) -> Result<Self, AssistError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AssistError::Network(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { http, api_key })
    }

    /// Fetch top-level comment texts for one video, in API order.
    pub async fn fetch_comments(&self, video_id: &str) -> Result<Vec<String>, AssistError> {
        let max_results = MAX_RESULTS.to_string();
        let response = self
            .http
            .get(COMMENT_THREADS_URL)
            .query(&[
                ("part", "snippet"),
                ("videoId", video_id),
                ("maxResults", max_results.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body: Value = response
            .json()
            .await
            .map_err(|e| AssistError::Parse(format!("Comment API reply was not JSON: {e}")))?;

        if !status.is_success() {
            return Err(AssistError::Upstream(body.to_string()));
        }

        let Some(items) = body.get("items").and_then(Value::as_array) else {
            return Ok(Vec::new());
        };

        Ok(items
            .iter()
            .map(|item| {
                item.pointer("/snippet/topLevelComment/snippet/textDisplay")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string()
            })
            .collect())
    }

    /// Fetch several videos' comments concurrently, keyed by video id.
    ///
    /// A failed video yields an empty list rather than failing the batch.
    pub async fn fetch_many(&self, video_ids: &[String]) -> HashMap<String, Vec<String>> {
        let fetches = video_ids.iter().map(|id| async move {
            let comments = match self.fetch_comments(id).await {
                Ok(comments) => comments,
                Err(e) => {
                    warn!("Comment fetch for {id} failed: {e}");
                    Vec::new()
                }
            };
            (id.clone(), comments)
        });
        join_all(fetches).await.into_iter().collect()
    }
}
