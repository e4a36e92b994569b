//! Keyword sentiment heuristic.
//!
//! Intentionally naive: case-insensitive substring matching against two fixed
//! keyword patterns, with no tokenization and no negation handling ("not
//! good" counts as positive). That limitation is accepted; this feeds a
//! coarse mood readout, not analytics.

use regex::Regex;
use std::sync::LazyLock;

static POSITIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)good|great|love|awesome|excellent|nice|amazing|best|happy|fantastic")
        .expect("positive keyword pattern compiles")
});

static NEGATIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)bad|terrible|hate|awful|worst|sucks|poor|disappoint")
        .expect("negative keyword pattern compiles")
});

/// Aggregate sentiment counts over a comment list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentimentTally {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub total: usize,
}

/// Outcome of one sentiment pass.
///
/// An empty input reports `NoData` rather than a zero tally, so the caller
/// can tell "nothing to analyze" apart from "all neutral".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentOutcome {
    NoData,
    Tally(SentimentTally),
}

/// Classify each comment and tally the buckets.
///
/// The positive pattern is checked first and short-circuits, so a comment
/// matching both patterns counts as positive only. Comments matching neither
/// land in the neutral remainder.
#[must_use]
pub fn analyze(comments: &[String]) -> SentimentOutcome {
    if comments.is_empty() {
        return SentimentOutcome::NoData;
    }

    let mut positive = 0;
    let mut negative = 0;
    for comment in comments {
        if POSITIVE_RE.is_match(comment) {
            positive += 1;
        } else if NEGATIVE_RE.is_match(comment) {
            negative += 1;
        }
    }

    let total = comments.len();
    SentimentOutcome::Tally(SentimentTally {
        positive,
        negative,
        neutral: total - positive - negative,
        total,
    })
}

/// Render an outcome for the output panel.
#[must_use]
pub fn format_outcome(outcome: &SentimentOutcome) -> String {
    match outcome {
        SentimentOutcome::NoData => "No comments available for sentiment analysis.".to_string(),
        SentimentOutcome::Tally(tally) => format!(
            "Sentiment (simple):\nPositive: {}\nNegative: {}\nNeutral: {}\n\n(Analyzed {} comments)",
            tally.positive, tally.negative, tally.neutral, tally.total
        ),
    }
}
