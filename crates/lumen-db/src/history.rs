//! History repository.
//!
//! Append one row per skill invocation; read the newest rows back.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use lumen_core::enums::Skill;
use lumen_core::history::{HISTORY_LIMIT, HistoryItem, NewHistoryEntry};
use lumen_core::results::SkillResult;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, parse_enum};
use crate::{HISTORY_ID_PREFIX, HistoryDb};

/// `created_at` storage form. Fixed width, so text order is time order.
fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

impl HistoryDb {
    /// Record a completed skill invocation, stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the result cannot be encoded or the INSERT
    /// fails.
    pub async fn record(&self, entry: &NewHistoryEntry) -> Result<HistoryItem, DatabaseError> {
        self.record_at(entry, Utc::now()).await
    }

    /// Record with an explicit timestamp (truncated to microseconds).
    ///
    /// # Errors
    ///
    /// Same as [`Self::record`].
    pub async fn record_at(
        &self,
        entry: &NewHistoryEntry,
        created_at: DateTime<Utc>,
    ) -> Result<HistoryItem, DatabaseError> {
        let id = self.generate_id(HISTORY_ID_PREFIX).await?;
        let created_at = created_at.trunc_subsecs(6);
        let skill = entry.skill();
        let result = entry.result.to_json_text()?;

        self.conn()
            .execute(
                "INSERT INTO history (id, user_id, skill, input_type, input_name, result, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                libsql::params![
                    id.as_str(),
                    entry.user_id.as_deref(),
                    skill.as_str(),
                    entry.input_type.as_str(),
                    entry.input_name.as_str(),
                    result.as_str(),
                    format_timestamp(created_at)
                ],
            )
            .await?;
        tracing::debug!(%id, %skill, "history entry recorded");

        Ok(HistoryItem {
            id,
            user_id: entry.user_id.clone(),
            skill,
            input_type: entry.input_type,
            input_name: entry.input_name.clone(),
            result: entry.result.clone(),
            created_at,
        })
    }

    /// The most recent entries, newest first.
    ///
    /// `limit` is capped at [`HISTORY_LIMIT`].
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails. Rows whose stored values
    /// cannot be decoded are logged and skipped rather than failing the read.
    pub async fn recent(&self, limit: u32) -> Result<Vec<HistoryItem>, DatabaseError> {
        let limit = limit.min(HISTORY_LIMIT);
        let mut rows = self
            .conn()
            .query(
                "SELECT id, user_id, skill, input_type, input_name, result, created_at
                 FROM history
                 ORDER BY created_at DESC, rowid DESC
                 LIMIT ?1",
                libsql::params![limit],
            )
            .await?;

        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            match decode_row(&row) {
                Ok(item) => items.push(item),
                Err(error) => {
                    let id = get_opt_string(&row, 0).ok().flatten();
                    tracing::warn!(?id, %error, "skipping undecodable history row");
                }
            }
        }
        Ok(items)
    }
}

/// Map one `SELECT` row onto a [`HistoryItem`].
fn decode_row(row: &libsql::Row) -> Result<HistoryItem, DatabaseError> {
    let skill: Skill = parse_enum("skill", &row.get::<String>(2)?)?;
    Ok(HistoryItem {
        id: row.get::<String>(0)?,
        user_id: get_opt_string(row, 1)?,
        skill,
        input_type: parse_enum("input type", &row.get::<String>(3)?)?,
        input_name: row.get::<String>(4)?,
        result: SkillResult::from_json_text(skill, &row.get::<String>(5)?)?,
        created_at: parse_datetime(&row.get::<String>(6)?)?,
    })
}
