//! Workout log storage.
//!
//! Persists completed workouts to the local database.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use rusqlite::{params, OptionalExtension, Row};

use super::entry::WorkoutLog;
use crate::error::FitcoachError;
use crate::storage::Database;

const SELECT_COLUMNS: &str =
    "SELECT id, logged_at, duration_minutes, title, focus, difficulty FROM workout_logs";

/// Storage for workout log entries.
pub struct WorkoutLogStorage {
    db: Database,
}

impl WorkoutLogStorage {
    /// Create storage with an existing database connection.
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }

    /// Insert an entry and write the new ID back.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn save(&self, log: &mut WorkoutLog) -> Result<(), FitcoachError> {
        let conn = self.db.connection();

        conn.execute(
            r"INSERT INTO workout_logs
              (logged_at, duration_minutes, title, focus, difficulty)
              VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                log.logged_at.to_rfc3339(),
                log.duration_minutes,
                log.title,
                log.focus,
                log.difficulty,
            ],
        )
        .map_err(|e| FitcoachError::Database(format!("Failed to insert workout log: {e}")))?;

        let id = conn.last_insert_rowid();
        log.id = Some(id);
        tracing::info!(id, title = %log.title, minutes = log.duration_minutes, "workout logged");
        Ok(())
    }

    /// Get an entry by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get(&self, id: i64) -> Result<Option<WorkoutLog>, FitcoachError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(&format!("{SELECT_COLUMNS} WHERE id = ?1"))
            .map_err(|e| FitcoachError::Database(format!("Failed to prepare query: {e}")))?;

        stmt.query_row([id], row_to_log)
            .optional()
            .map_err(|e| FitcoachError::Database(format!("Failed to query workout log: {e}")))
    }

    /// Most recent entries, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_recent(&self, limit: usize) -> Result<Vec<WorkoutLog>, FitcoachError> {
        self.query(
            &format!("{SELECT_COLUMNS} ORDER BY logged_at DESC, id DESC LIMIT ?1"),
            params![limit],
        )
    }

    /// Entries completed in `[start, end)`, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<WorkoutLog>, FitcoachError> {
        self.query(
            &format!(
                "{SELECT_COLUMNS} WHERE logged_at >= ?1 AND logged_at < ?2 \
                 ORDER BY logged_at DESC, id DESC"
            ),
            params![start.to_rfc3339(), end.to_rfc3339()],
        )
    }

    /// Entries completed on the calendar `day` in `tz`, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the day has no start in `tz` or the query fails.
    pub fn get_day<Tz: TimeZone>(
        &self,
        day: NaiveDate,
        tz: &Tz,
    ) -> Result<Vec<WorkoutLog>, FitcoachError> {
        let next = day
            .succ_opt()
            .ok_or_else(|| FitcoachError::Config(format!("No day after {day}")))?;
        self.get_range(day_start(day, tz)?, day_start(next, tz)?)
    }

    /// Every entry, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn all(&self) -> Result<Vec<WorkoutLog>, FitcoachError> {
        self.query(
            &format!("{SELECT_COLUMNS} ORDER BY logged_at DESC, id DESC"),
            params![],
        )
    }

    /// Number of entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count(&self) -> Result<i64, FitcoachError> {
        self.db
            .connection()
            .query_row("SELECT COUNT(*) FROM workout_logs", [], |row| row.get(0))
            .map_err(|e| FitcoachError::Database(format!("Failed to count workout logs: {e}")))
    }

    /// Delete an entry. Returns false if it did not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn delete(&self, id: i64) -> Result<bool, FitcoachError> {
        let rows = self
            .db
            .connection()
            .execute("DELETE FROM workout_logs WHERE id = ?1", [id])
            .map_err(|e| FitcoachError::Database(format!("Failed to delete workout log: {e}")))?;

        Ok(rows > 0)
    }

    /// Delete every entry. Returns the number removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn clear(&self) -> Result<usize, FitcoachError> {
        let rows = self
            .db
            .connection()
            .execute("DELETE FROM workout_logs", [])
            .map_err(|e| FitcoachError::Database(format!("Failed to clear workout logs: {e}")))?;

        tracing::warn!(rows, "workout log cleared");
        Ok(rows)
    }

    fn query(
        &self,
        sql: &str,
        params: &[&dyn rusqlite::ToSql],
    ) -> Result<Vec<WorkoutLog>, FitcoachError> {
        let conn = self.db.connection();

        let mut stmt = conn
            .prepare(sql)
            .map_err(|e| FitcoachError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map(params, row_to_log)
            .map_err(|e| FitcoachError::Database(format!("Failed to query workout logs: {e}")))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| FitcoachError::Database(e.to_string()))
    }
}

/// First instant of `day` in `tz`, in UTC.
fn day_start<Tz: TimeZone>(day: NaiveDate, tz: &Tz) -> Result<DateTime<Utc>, FitcoachError> {
    tz.from_local_datetime(&day.and_time(NaiveTime::MIN))
        .earliest()
        .map(|start| start.with_timezone(&Utc))
        .ok_or_else(|| FitcoachError::Config(format!("{day} has no local midnight")))
}

/// Convert a database row to a `WorkoutLog`.
fn row_to_log(row: &Row<'_>) -> Result<WorkoutLog, rusqlite::Error> {
    let logged_at_str: String = row.get(1)?;
    let logged_at = DateTime::parse_from_rfc3339(&logged_at_str)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Text, Box::new(e))
        })?;

    Ok(WorkoutLog {
        id: Some(row.get(0)?),
        logged_at,
        duration_minutes: row.get(2)?,
        title: row.get(3)?,
        focus: row.get(4)?,
        difficulty: row.get(5)?,
    })
}
