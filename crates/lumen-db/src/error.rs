//! Database error types for lumen-db.

use lumen_core::errors::CoreError;
use thiserror::Error;

/// Errors from history store operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// No history store URL is configured.
    #[error("History store not configured (set history.url)")]
    NotConfigured,

    /// A SQL query failed or returned unreadable data.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// A stored value could not be mapped back into a domain type.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}
