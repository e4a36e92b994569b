/// yt-assist - a video-page assistant pipeline: comment acquisition with
/// fallbacks, generative summarization, and a keyword sentiment tally.
///
/// # Architecture
///
/// The system is a chain of small pieces, leaves first:
/// - `normalize`: folds the backend's heterogeneous `result` shapes into an
///   ordered list of comment strings
/// - `sources`: prioritized acquisition strategies (remote backend, direct
///   comments API, page snapshot scrape) behind a never-failing chain
/// - `prompt`: bounded-size summarization prompt assembly
/// - `clients`: reqwest clients for the backend, the Gemini endpoint, and
///   the direct comments API
/// - `sentiment`: two fixed keyword patterns and a tally
/// - `assistant`: orchestration plus the explicit comment cache
///
/// The browser page is modeled by the `page::PageDom` trait; the CLI feeds
/// it a saved HTML snapshot.
// Module declarations
pub mod assistant;
pub mod clients;
pub mod core;
pub mod errors;
pub mod normalize;
pub mod page;
pub mod prompt;
pub mod sentiment;
pub mod sources;

pub use errors::AssistError;

/// Configure structured logging for the CLI.
///
/// Filtering follows `RUST_LOG` when set and defaults to `info`. Call once
/// at startup.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
