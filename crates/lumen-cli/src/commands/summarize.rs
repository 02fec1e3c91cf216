use anyhow::bail;
use lumen_core::enums::DocumentKind;
use lumen_core::history::NewHistoryEntry;
use lumen_core::results::SummarizationResult;
use lumen_gateway::InferenceGateway;
use lumen_skills::Analyzer;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SummarizeArgs;
use crate::commands::record_history;
use crate::context::AppContext;
use crate::media::{display_name, load_text};
use crate::output::output;

/// Handle `lumen summarize`.
pub async fn handle(
    args: &SummarizeArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let (input, name, kind) = match (&args.file, &args.url) {
        (Some(path), None) => (load_text(path)?, display_name(path), DocumentKind::File),
        (None, Some(url)) => (url.clone(), url.clone(), DocumentKind::Url),
        _ => bail!("pass exactly one of --file or --url"),
    };

    let result = summarize(&ctx.analyzer, &input, kind).await?;
    output(&result, flags.format)?;

    record_history(
        &ctx.history,
        NewHistoryEntry::new(kind.input_type(), name, result.into()),
    )
    .await;
    Ok(())
}

async fn summarize<G: InferenceGateway>(
    analyzer: &Analyzer<G>,
    input: &str,
    kind: DocumentKind,
) -> anyhow::Result<SummarizationResult> {
    Ok(analyzer.summarize_content(input, kind).await?)
}
