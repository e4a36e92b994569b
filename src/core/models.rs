use std::fmt;

/// Which source in the fallback chain produced a comment list.
///
/// Used for display messaging only; nothing downstream branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    Backend,
    DirectApi,
    PageScrape,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provenance::Backend => write!(f, "backend"),
            Provenance::DirectApi => write!(f, "direct-api"),
            Provenance::PageScrape => write!(f, "page-scrape"),
        }
    }
}

/// An ordered comment list plus where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedComments {
    pub comments: Vec<String>,
    pub provenance: Provenance,
}

impl FetchedComments {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }
}
