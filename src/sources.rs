//! Comment acquisition strategies and the fallback chain.
//!
//! Sources are tried in strict priority order with short-circuit on first
//! success; each rung is treated as lower quality than the one before it, so
//! nothing runs speculatively in parallel. The chain itself never fails.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::clients::backend::BackendClient;
use crate::clients::youtube::DirectApiClient;
use crate::core::models::{FetchedComments, Provenance};
use crate::errors::AssistError;
use crate::page::{PageDom, scrape_comments};

/// Cap on comments taken from the page snapshot.
pub const PAGE_SCRAPE_LIMIT: usize = 30;

/// One strategy for acquiring comments.
#[async_trait]
pub trait CommentSource: Send + Sync {
    fn provenance(&self) -> Provenance;
    async fn fetch(&self, video_id: &str) -> Result<Vec<String>, AssistError>;
}

/// Ordered acquisition strategies.
pub struct SourceChain {
    sources: Vec<Box<dyn CommentSource>>,
}

impl SourceChain {
    #[must_use]
    pub fn new(sources: Vec<Box<dyn CommentSource>>) -> Self {
        Self { sources }
    }

    /// The standard priority order: backend, then the direct API (skipped
    /// without credentials), then the page snapshot.
    #[must_use]
    pub fn standard(
        backend: BackendClient,
        direct: Option<DirectApiClient>,
        page: Arc<dyn PageDom>,
    ) -> Self {
        Self::new(vec![
            Box::new(BackendSource { client: backend }),
            Box::new(DirectApiSource { client: direct }),
            Box::new(PageScrapeSource {
                page,
                limit: PAGE_SCRAPE_LIMIT,
            }),
        ])
    }

    /// Try each source in order and return the first success with its
    /// provenance.
    ///
    /// Never fails: individual failures are logged and skipped, and if every
    /// source errors the result is an empty page-scrape list. Provenance is
    /// for display only.
    pub async fn fetch(&self, video_id: &str) -> FetchedComments {
        for source in &self.sources {
            match source.fetch(video_id).await {
                Ok(comments) => {
                    info!(
                        provenance = %source.provenance(),
                        count = comments.len(),
                        "Comment fetch succeeded"
                    );
                    return FetchedComments {
                        comments,
                        provenance: source.provenance(),
                    };
                }
                Err(e) => {
                    warn!(provenance = %source.provenance(), "Comment source failed: {e}");
                }
            }
        }
        FetchedComments {
            comments: Vec::new(),
            provenance: Provenance::PageScrape,
        }
    }
}

struct BackendSource {
    client: BackendClient,
}

#[async_trait]
impl CommentSource for BackendSource {
    fn provenance(&self) -> Provenance {
        Provenance::Backend
    }

    async fn fetch(&self, video_id: &str) -> Result<Vec<String>, AssistError> {
        self.client.fetch_comments(video_id).await
    }
}

struct DirectApiSource {
    client: Option<DirectApiClient>,
}

#[async_trait]
impl CommentSource for DirectApiSource {
    fn provenance(&self) -> Provenance {
        Provenance::DirectApi
    }

    async fn fetch(&self, video_id: &str) -> Result<Vec<String>, AssistError> {
        match &self.client {
            Some(client) => client.fetch_comments(video_id).await,
            None => Err(AssistError::NoCredentials),
        }
    }
}

struct PageScrapeSource {
    page: Arc<dyn PageDom>,
    limit: usize,
}

#[async_trait]
impl CommentSource for PageScrapeSource {
    fn provenance(&self) -> Provenance {
        Provenance::PageScrape
    }

    async fn fetch(&self, _video_id: &str) -> Result<Vec<String>, AssistError> {
        // Absence of comment elements is an empty list, not an error.
        Ok(scrape_comments(self.page.as_ref(), self.limit))
    }
}
