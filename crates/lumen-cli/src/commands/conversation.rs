use lumen_core::enums::InputType;
use lumen_core::history::NewHistoryEntry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::MediaArgs;
use crate::commands::record_history;
use crate::context::AppContext;
use crate::media::load_asset;
use crate::output::output;

/// Handle `lumen conversation`.
pub async fn handle(args: &MediaArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let audio = load_asset(&args.file)?;
    let result = ctx.analyzer.analyze_conversation(&audio).await?;
    output(&result, flags.format)?;

    record_history(
        &ctx.history,
        NewHistoryEntry::new(InputType::Audio, audio.name, result.into()),
    )
    .await;
    Ok(())
}
