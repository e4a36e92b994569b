use anyhow::Result;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use yt_assist::assistant::Assistant;
use yt_assist::clients::backend::{BackendClient, BackendCommand};
use yt_assist::clients::gemini::GeminiClient;
use yt_assist::clients::youtube::DirectApiClient;
use yt_assist::core::config::AppConfig;
use yt_assist::core::models::Provenance;
use yt_assist::page::{HtmlSnapshot, PageDom};
use yt_assist::sentiment;
use yt_assist::sources::SourceChain;

#[derive(Parser)]
#[command(name = "yt-assist", version, about = "Video-page assistant: comments, summary, sentiment")]
struct Cli {
    /// Saved HTML snapshot of the watch page; supplies title, description,
    /// and the scrape fallback. Without it the page is treated as empty.
    #[arg(long, global = true)]
    page: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch comments through the fallback chain and print them.
    Fetch { video_id: String },
    /// Fetch several videos' comments concurrently via the direct API.
    FetchMany { video_ids: Vec<String> },
    /// Summarize title, description, and comments.
    Summarize { video_id: String },
    /// Tally keyword sentiment over the comments.
    Sentiment { video_id: String },
    /// Relay a voice transcript verbatim to the backend.
    Voice { transcript: String },
    /// Ask the backend to run an action server-side.
    Backend {
        #[arg(value_parser = ["fetch_comments", "summarize_comments", "analyze_sentiment"])]
        action: String,
        video_id: String,
    },
}

fn load_page(path: Option<&Path>) -> Result<HtmlSnapshot> {
    match path {
        Some(path) => {
            let html = fs::read_to_string(path)?;
            Ok(HtmlSnapshot::parse(&html))
        }
        None => Ok(HtmlSnapshot::empty()),
    }
}

fn build_assistant(config: &AppConfig, page: Arc<dyn PageDom>) -> Result<Assistant> {
    let backend = BackendClient::new(config.backend_url.clone())?;
    let direct = match &config.youtube_api_key {
        Some(key) => Some(DirectApiClient::new(key.clone())?),
        None => None,
    };
    let gemini = GeminiClient::new(config.gemini_api_key.clone(), config.gemini_model.clone())?;
    let chain = SourceChain::standard(backend, direct, Arc::clone(&page));
    Ok(Assistant::new(chain, gemini, page))
}

#[tokio::main]
async fn main() -> Result<()> {
    yt_assist::setup_logging();

    let cli = Cli::parse();
    let config = AppConfig::from_env().map_err(anyhow::Error::msg)?;
    let page: Arc<dyn PageDom> = Arc::new(load_page(cli.page.as_deref())?);

    match cli.command {
        Command::Fetch { video_id } => {
            let mut assistant = build_assistant(&config, page)?;
            let fetched = assistant.fetch_comments(&video_id).await;
            if fetched.provenance != Provenance::Backend {
                println!("Showing {} comments.", fetched.provenance);
            }
            if fetched.is_empty() {
                println!("No comments returned.");
            } else {
                println!("{}", fetched.comments.join("\n\n"));
            }
        }
        Command::FetchMany { video_ids } => {
            let key = config
                .youtube_api_key
                .clone()
                .ok_or_else(|| anyhow::anyhow!("YOUTUBE_API_KEY is required for fetch-many"))?;
            let direct = DirectApiClient::new(key)?;
            let results = direct.fetch_many(&video_ids).await;
            for video_id in &video_ids {
                let comments = results.get(video_id).map_or(&[][..], Vec::as_slice);
                println!("== {video_id} ({} comments)", comments.len());
                for comment in comments {
                    println!("{comment}");
                }
            }
        }
        Command::Summarize { video_id } => {
            let mut assistant = build_assistant(&config, page)?;
            println!("{}", assistant.summarize(&video_id).await);
        }
        Command::Sentiment { video_id } => {
            let mut assistant = build_assistant(&config, page)?;
            assistant.fetch_comments(&video_id).await;
            println!("{}", sentiment::format_outcome(&assistant.sentiment()));
        }
        Command::Voice { transcript } => {
            let backend = BackendClient::new(config.backend_url.clone())?;
            let reply = backend.relay_transcript(&transcript).await?;
            println!("{}", serde_json::to_string_pretty(&reply)?);
        }
        Command::Backend { action, video_id } => {
            let backend = BackendClient::new(config.backend_url.clone())?;
            let command = match action.as_str() {
                "summarize_comments" => BackendCommand::SummarizeComments { video_id },
                "analyze_sentiment" => BackendCommand::AnalyzeSentiment { video_id },
                _ => BackendCommand::FetchComments { video_id },
            };
            let lines = backend.send_action(&command).await?;
            println!("{}", lines.join("\n\n"));
        }
    }

    Ok(())
}
