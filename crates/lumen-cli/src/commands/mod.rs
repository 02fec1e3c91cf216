pub mod conversation;
pub mod dispatch;
pub mod history;
pub mod image;
pub mod summarize;

use lumen_config::HistoryConfig;
use lumen_core::history::NewHistoryEntry;
use lumen_db::HistoryDb;
use lumen_db::error::DatabaseError;

/// Open the configured history store, or `None` if it is unset or unreachable.
pub async fn open_history(config: &HistoryConfig) -> Option<HistoryDb> {
    match HistoryDb::from_config(config).await {
        Ok(db) => Some(db),
        Err(DatabaseError::NotConfigured) => {
            tracing::debug!("history store not configured");
            None
        }
        Err(error) => {
            tracing::warn!(%error, "failed to open history store");
            None
        }
    }
}

/// Attempt exactly one history write for a completed skill run.
///
/// Called after the result has been printed. Failures are logged and
/// swallowed.
pub async fn record_history(config: &HistoryConfig, entry: NewHistoryEntry) {
    if let Some(db) = open_history(config).await {
        record_into(&db, &entry).await;
    }
}

async fn record_into(db: &HistoryDb, entry: &NewHistoryEntry) {
    match db.record(entry).await {
        Ok(item) => tracing::debug!(id = %item.id, skill = %item.skill, "saved to history"),
        Err(error) => {
            tracing::warn!(%error, skill = %entry.skill(), "failed to save to history");
        }
    }
}

#[cfg(test)]
mod tests {
    use lumen_core::enums::InputType;
    use lumen_core::results::ImageResult;

    use super::*;

    fn entry() -> NewHistoryEntry {
        NewHistoryEntry::new(
            InputType::Image,
            "cat.png",
            ImageResult {
                description: "A cat".into(),
                tags: vec!["cat".into()],
                confidence: 0.91,
            }
            .into(),
        )
    }

    #[tokio::test]
    async fn records_into_configured_local_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.db");
        let config = HistoryConfig {
            url: path.display().to_string(),
            auth_token: String::new(),
        };

        record_history(&config, entry()).await;

        let db = HistoryDb::open_local(&path.display().to_string()).await.unwrap();
        assert_eq!(db.recent(10).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn write_failure_is_swallowed() {
        let db = HistoryDb::open_local(":memory:").await.unwrap();
        db.conn().execute("DROP TABLE history", ()).await.unwrap();
        // Must return normally despite the failed INSERT.
        record_into(&db, &entry()).await;
    }

    #[tokio::test]
    async fn unconfigured_store_is_a_no_op() {
        assert!(open_history(&HistoryConfig::default()).await.is_none());
        record_history(&HistoryConfig::default(), entry()).await;
    }
}
