use lumen_core::history::HistoryItem;
use lumen_db::HistoryDb;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::HistoryArgs;
use crate::commands::open_history;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lumen history`.
pub async fn handle(
    args: &HistoryArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let db = open_history(&ctx.history).await;
    if let (true, Some(db)) = (args.init, &db) {
        provision(db).await;
    }
    let items = recent(db.as_ref(), args.limit).await;
    output(&items, flags.format)
}

async fn provision(db: &HistoryDb) {
    match db.migrate().await {
        Ok(()) => tracing::info!("history table ready"),
        Err(error) => tracing::warn!(%error, "failed to create history table"),
    }
}

/// Newest entries, or an empty list when the store is missing or unreadable.
async fn recent(history: Option<&HistoryDb>, limit: u32) -> Vec<HistoryItem> {
    let Some(db) = history else {
        return Vec::new();
    };
    match db.recent(limit).await {
        Ok(items) => items,
        Err(error) => {
            tracing::warn!(%error, "failed to load history");
            Vec::new()
        }
    }
}
