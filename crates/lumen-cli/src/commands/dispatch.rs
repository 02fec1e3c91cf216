use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Conversation(args) => commands::conversation::handle(&args, ctx, flags).await,
        Commands::Image(args) => commands::image::handle(&args, ctx, flags).await,
        Commands::Summarize(args) => commands::summarize::handle(&args, ctx, flags).await,
        Commands::History(args) => commands::history::handle(&args, ctx, flags).await,
    }
}
