use std::path::PathBuf;

use clap::{ArgGroup, Args, Subcommand};
use lumen_core::history::HISTORY_LIMIT;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Transcribe, diarize, and summarize an audio recording.
    Conversation(MediaArgs),
    /// Caption and tag an image.
    Image(MediaArgs),
    /// Summarize a text file or a URL.
    Summarize(SummarizeArgs),
    /// Show recent analyses, newest first.
    History(HistoryArgs),
}

/// Arguments for `lumen conversation` and `lumen image`.
#[derive(Clone, Debug, Args)]
pub struct MediaArgs {
    /// Path to the uploaded file.
    pub file: PathBuf,
}

/// Arguments for `lumen summarize`.
#[derive(Clone, Debug, Args)]
#[command(group(ArgGroup::new("source").required(true).args(["file", "url"])))]
pub struct SummarizeArgs {
    /// Text file whose contents are summarized.
    #[arg(long)]
    pub file: Option<PathBuf>,
    /// URL to summarize (the page itself is not fetched).
    #[arg(long)]
    pub url: Option<String>,
}

/// Arguments for `lumen history`.
#[derive(Clone, Debug, Args)]
pub struct HistoryArgs {
    /// Number of entries to show (at most 10).
    #[arg(short, long, default_value_t = HISTORY_LIMIT)]
    pub limit: u32,

    /// Create the history table on the configured store before listing.
    #[arg(long)]
    pub init: bool,
}
