use std::env;
use url::Url;

/// Model used when `GEMINI_MODEL` is not set.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend_url: String,
    pub gemini_api_key: String,
    pub gemini_model: String,
    /// Optional key for the direct video-comments API; the chain skips that
    /// source entirely when this is absent.
    pub youtube_api_key: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let backend_url =
            env::var("ASSIST_BACKEND_URL").map_err(|e| format!("ASSIST_BACKEND_URL: {}", e))?;
        Url::parse(&backend_url)
            .map_err(|e| format!("ASSIST_BACKEND_URL is not a valid URL: {}", e))?;

        Ok(Self {
            backend_url,
            gemini_api_key: env::var("GEMINI_API_KEY")
                .map_err(|e| format!("GEMINI_API_KEY: {}", e))?,
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            youtube_api_key: env::var("YOUTUBE_API_KEY").ok().filter(|k| !k.is_empty()),
        })
    }
}
