//! # lumen-db
//!
//! libSQL history store for Lumen.
//!
//! Keeps one row per completed skill invocation in a single `history` table
//! and reads the most recent rows back, newest first. The skill result is
//! stored as JSON text and decoded on read using the row's `skill` column.
//!
//! The store is either a local database file (`:memory:` in tests) or a
//! remote libSQL/Turso database reached over HTTP.

pub mod error;
pub mod helpers;
pub mod history;
mod migrations;

use error::DatabaseError;
use libsql::Builder;
use lumen_config::HistoryConfig;

/// ID prefix for history rows (`his-a3f8b2c1`).
pub const HISTORY_ID_PREFIX: &str = "his";

/// Handle to the history database.
pub struct HistoryDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl HistoryDb {
    /// Open a local database at the given path.
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;
        let history_db = Self { db, conn };
        history_db.run_migrations().await?;
        Ok(history_db)
    }

    /// Connect to a remote libSQL database.
    ///
    /// No schema statements are sent: the remote `history` table is
    /// provisioned once with [`Self::migrate`]. The builder connects lazily,
    /// so nothing touches the network until the first query.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the connection cannot be built.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await?;
        let conn = db.connect()?;
        tracing::debug!(url, "connected to remote history store");
        Ok(Self { db, conn })
    }

    /// Create the `history` table and its indexes if they do not exist.
    ///
    /// Local stores run this on open; remote stores only when asked.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Migration` if a statement fails.
    pub async fn migrate(&self) -> Result<(), DatabaseError> {
        self.run_migrations().await
    }

    /// Open whichever store `config` points at.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotConfigured` when no URL (or, for a remote
    /// URL, no token) is set, and any open error otherwise.
    pub async fn from_config(config: &HistoryConfig) -> Result<Self, DatabaseError> {
        if !config.is_configured() {
            return Err(DatabaseError::NotConfigured);
        }
        match config.local_path() {
            Some(path) => Self::open_local(path).await,
            None => Self::open_remote(&config.url, &config.auth_token).await,
        }
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"his-a3f8b2c1"`.
    ///
    /// Uses `randomblob(4)` in SQL to produce 8-char hex, then prepends the prefix.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob(4)))"),
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    async fn test_db() -> HistoryDb {
        HistoryDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;
        let mut rows = db
            .conn()
            .query(
                "SELECT name FROM sqlite_master WHERE type='table' AND name='history'",
                (),
            )
            .await
            .unwrap();
        assert!(rows.next().await.unwrap().is_some(), "history table should exist");
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        db.migrate().await.unwrap();
    }

    #[tokio::test]
    async fn open_remote_sends_nothing_until_queried() {
        // Nothing listens on port 9; opening must still succeed.
        HistoryDb::open_remote("http://127.0.0.1:9", "token").await.unwrap();
    }

    #[tokio::test]
    async fn generate_id_correct_format() {
        let db = test_db().await;
        let id = db.generate_id(HISTORY_ID_PREFIX).await.unwrap();
        assert!(id.starts_with("his-"), "ID should start with 'his-': {id}");
        assert_eq!(id.len(), 12, "3 prefix + 1 dash + 8 hex: {id}");
        assert!(id[4..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[tokio::test]
    async fn generate_id_uniqueness() {
        let db = test_db().await;
        let mut ids = HashSet::new();
        for _ in 0..100 {
            let id = db.generate_id(HISTORY_ID_PREFIX).await.unwrap();
            assert!(ids.insert(id.clone()), "Duplicate ID generated: {id}");
        }
    }

    #[tokio::test]
    async fn from_config_requires_url() {
        let result = HistoryDb::from_config(&HistoryConfig::default()).await;
        assert!(matches!(result, Err(DatabaseError::NotConfigured)));
    }

    #[tokio::test]
    async fn from_config_opens_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.db");
        let config = HistoryConfig {
            url: format!("file:{}", path.display()),
            auth_token: String::new(),
        };
        HistoryDb::from_config(&config).await.unwrap();
        assert!(path.exists());
    }
}
