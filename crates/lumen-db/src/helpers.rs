//! Row parsing helpers.
//!
//! `libsql::Row` is column-indexed and untyped; these helpers turn TEXT
//! columns into domain values and map failures onto [`DatabaseError`].

use chrono::{DateTime, Utc};
use lumen_core::errors::CoreError;

use crate::error::DatabaseError;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00.123456Z"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse a TEXT column into a `snake_case` serde enum.
///
/// # Errors
///
/// Returns `CoreError::UnknownVariant` (wrapped) if `s` names no variant.
pub fn parse_enum<T: serde::de::DeserializeOwned>(
    kind: &'static str,
    s: &str,
) -> Result<T, DatabaseError> {
    serde_json::from_value(serde_json::Value::String(s.to_string())).map_err(|_| {
        DatabaseError::Core(CoreError::UnknownVariant {
            kind,
            value: s.to_string(),
        })
    })
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use lumen_core::enums::Skill;

    #[test]
    fn parses_rfc3339_with_micros() {
        let dt = parse_datetime("2026-02-09T14:30:00.000123Z").unwrap();
        assert_eq!(dt.year(), 2026);
        assert_eq!(dt.nanosecond(), 123_000);
    }

    #[test]
    fn parses_sqlite_default_format() {
        let dt = parse_datetime("2026-02-09 14:30:00").unwrap();
        assert_eq!(dt.hour(), 14);
    }

    #[test]
    fn rejects_garbage_datetime() {
        assert!(matches!(
            parse_datetime("yesterday"),
            Err(DatabaseError::Query(_))
        ));
    }

    #[test]
    fn parses_known_enum() {
        let skill: Skill = parse_enum("skill", "summarization").unwrap();
        assert_eq!(skill, Skill::Summarization);
    }

    #[test]
    fn unknown_enum_names_kind_and_value() {
        let err = parse_enum::<Skill>("skill", "translation").unwrap_err();
        assert_eq!(err.to_string(), "Unknown skill: 'translation'");
    }
}
