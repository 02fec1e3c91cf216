use lumen_core::enums::InputType;
use lumen_core::history::NewHistoryEntry;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::MediaArgs;
use crate::commands::record_history;
use crate::context::AppContext;
use crate::media::load_asset;
use crate::output::output;

/// Handle `lumen image`.
pub async fn handle(args: &MediaArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let image = load_asset(&args.file)?;
    let result = ctx.analyzer.analyze_image(&image).await?;
    output(&result, flags.format)?;

    record_history(
        &ctx.history,
        NewHistoryEntry::new(InputType::Image, image.name, result.into()),
    )
    .await;
    Ok(())
}
