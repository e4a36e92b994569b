//! Orchestration over the source chain, summarizer, and sentiment pass.
//!
//! The original panel kept a page-global comment cache that several handlers
//! mutated ambiently; here the cache is explicit state on [`Assistant`] with
//! a single writer per operation, and it is only ever replaced wholesale.

use std::sync::Arc;
use tracing::info;

use crate::clients::gemini::GeminiClient;
use crate::core::models::FetchedComments;
use crate::page::{PageDom, scrape_comments};
use crate::prompt::{SummaryRequest, build_prompt};
use crate::sentiment::{self, SentimentOutcome};
use crate::sources::{PAGE_SCRAPE_LIMIT, SourceChain};

pub struct Assistant {
    chain: SourceChain,
    gemini: GeminiClient,
    page: Arc<dyn PageDom>,
    cache: Option<FetchedComments>,
}

impl Assistant {
    #[must_use]
    pub fn new(chain: SourceChain, gemini: GeminiClient, page: Arc<dyn PageDom>) -> Self {
        Self {
            chain,
            gemini,
            page,
            cache: None,
        }
    }

    /// Run the source chain and replace the cached list wholesale.
    pub async fn fetch_comments(&mut self, video_id: &str) -> FetchedComments {
        let fetched = self.chain.fetch(video_id).await;
        self.cache = Some(fetched.clone());
        fetched
    }

    /// Cached comments, fetching through the chain when nothing is cached yet.
    async fn comments_for(&mut self, video_id: &str) -> FetchedComments {
        if let Some(cached) = &self.cache {
            return cached.clone();
        }
        self.fetch_comments(video_id).await
    }

    /// Summarize the page from its metadata plus the best-available comments.
    ///
    /// Always yields display text; summarization failures come back as error
    /// strings from the client rather than as `Err`.
    pub async fn summarize(&mut self, video_id: &str) -> String {
        let fetched = self.comments_for(video_id).await;
        let request = SummaryRequest::new(
            self.page.title(),
            self.page.description(),
            fetched.comments,
        );
        let prompt = build_prompt(&request);
        info!(chars = prompt.chars().count(), "Submitting summarization prompt");
        self.gemini.summarize(&prompt).await
    }

    /// Sentiment over the cached comments, or the page scrape when nothing
    /// has been fetched yet.
    #[must_use]
    pub fn sentiment(&self) -> SentimentOutcome {
        match &self.cache {
            Some(fetched) => sentiment::analyze(&fetched.comments),
            None => sentiment::analyze(&scrape_comments(self.page.as_ref(), PAGE_SCRAPE_LIMIT)),
        }
    }
}
