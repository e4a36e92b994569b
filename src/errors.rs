use thiserror::Error;

/// Failure taxonomy for the assistant pipeline.
///
/// Individual clients surface these; the source chain and the summarizer
/// absorb them into degraded results or display strings, so nothing here is
/// fatal to the process. An empty comment set is not an error at all: the
/// sentiment pass reports it as `SentimentOutcome::NoData`.
#[derive(Debug, Error)]
pub enum AssistError {
    #[error("Network failure: {0}")]
    Network(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Upstream response carried no usable result")]
    EmptyResult,

    #[error("No API credentials configured")]
    NoCredentials,

    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for AssistError {
    fn from(error: reqwest::Error) -> Self {
        AssistError::Network(error.to_string())
    }
}

impl From<serde_json::Error> for AssistError {
    fn from(error: serde_json::Error) -> Self {
        AssistError::Parse(error.to_string())
    }
}
