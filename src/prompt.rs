/// Hard cap on the comments portion of a summarization prompt, in characters.
/// Keeps the request payload bounded no matter how busy the comment section is.
pub const MAX_COMMENT_BLOB_CHARS: usize = 40_000;

/// Inputs for one summarization call. Built fresh per call, never mutated.
#[derive(Debug, Clone)]
pub struct SummaryRequest {
    pub title: String,
    pub description: String,
    pub comments: Vec<String>,
    pub max_chars: usize,
}

impl SummaryRequest {
    #[must_use]
    pub fn new(title: String, description: String, comments: Vec<String>) -> Self {
        Self {
            title,
            description,
            comments,
            max_chars: MAX_COMMENT_BLOB_CHARS,
        }
    }
}

/// Join comments with blank-line separators for prompt inclusion.
#[must_use]
pub fn comments_blob(comments: &[String]) -> String {
    comments.join("\n\n")
}

/// Hard character cut, counted in Unicode scalar values. Not sentence-aware.
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Assemble the full summarization prompt.
///
/// Only the comments blob is subject to truncation; title and description are
/// always included whole.
#[must_use]
pub fn build_prompt(request: &SummaryRequest) -> String {
    let blob = truncate_chars(&comments_blob(&request.comments), request.max_chars);
    format!(
        "Title: {}\n\nDescription: {}\n\nTop Comments:\n{}",
        request.title, request.description, blob
    )
}
