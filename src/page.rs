//! Page DOM collaborator.
//!
//! The watch page itself is external; this models the read-only pieces the
//! assistant needs: title, description, and visible comment texts. The
//! concrete implementation parses a saved HTML snapshot of the page.

use regex::Regex;
use std::sync::LazyLock;

/// Read-only view of a watch page.
pub trait PageDom: Send + Sync {
    fn title(&self) -> String;
    fn description(&self) -> String;
    /// Visible comment texts in page order, unfiltered and uncapped.
    fn comment_texts(&self) -> Vec<String>;
}

/// Scrape up to `limit` non-empty comment texts from a page.
///
/// Defined to never fail: a page without comment elements yields an empty
/// list.
#[must_use]
pub fn scrape_comments(page: &dyn PageDom, limit: usize) -> Vec<String> {
    page.comment_texts()
        .into_iter()
        .take(limit)
        .filter(|text| !text.is_empty())
        .collect()
}

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("title pattern compiles")
});

static META_DESCRIPTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<meta\s+name="description"\s+content="([^"]*)""#)
        .expect("meta description pattern compiles")
});

// Comment renderers carry id="content-text" on the text element.
static COMMENT_TEXT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<([a-z][a-z0-9-]*)[^>]*\bid="content-text"[^>]*>(.*?)</([a-z][a-z0-9-]*)>"#)
        .expect("comment text pattern compiles")
});

/// A parsed HTML snapshot of a watch page.
#[derive(Debug, Clone, Default)]
pub struct HtmlSnapshot {
    title: String,
    description: String,
    comments: Vec<String>,
}

impl HtmlSnapshot {
    /// Parse a snapshot out of raw page HTML. Absent elements yield empty
    /// fields, never an error.
    #[must_use]
    pub fn parse(html: &str) -> Self {
        let title = TITLE_RE
            .captures(html)
            .map(|caps| visible_text(&caps[1]))
            .unwrap_or_default();
        let description = META_DESCRIPTION_RE
            .captures(html)
            .map(|caps| caps[1].trim().to_string())
            .unwrap_or_default();
        let comments = COMMENT_TEXT_RE
            .captures_iter(html)
            .map(|caps| visible_text(&caps[2]))
            .collect();
        Self {
            title,
            description,
            comments,
        }
    }

    /// A snapshot with no page behind it (no title, no comments).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }
}

impl PageDom for HtmlSnapshot {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn description(&self) -> String {
        self.description.clone()
    }

    fn comment_texts(&self) -> Vec<String> {
        self.comments.clone()
    }
}

/// Render an HTML fragment to single-line visible text.
fn visible_text(fragment: &str) -> String {
    let rendered = html2text::from_read(fragment.as_bytes(), 200).unwrap_or_default();
    rendered.split_whitespace().collect::<Vec<_>>().join(" ")
}
