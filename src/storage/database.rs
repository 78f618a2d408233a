//! The `SQLite` file behind the workout log.
//!
//! Lives at `<home>/fitcoach.db`. Opening it brings the schema up to date.

use std::path::Path;

use rusqlite::Connection;

use crate::error::FitcoachError;

use super::migrations;

/// An open, migrated workout database.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open `path`, creating the file on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or migrated.
    pub fn open_at(path: &Path) -> Result<Self, FitcoachError> {
        let conn = Connection::open(path).map_err(|e| {
            FitcoachError::Database(format!("Failed to open database {}: {e}", path.display()))
        })?;

        tracing::debug!(path = %path.display(), "opened database");
        Self::init(conn)
    }

    /// Throwaway database that vanishes when dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if `SQLite` cannot allocate it or migrations fail.
    pub fn open_in_memory() -> Result<Self, FitcoachError> {
        let conn = Connection::open_in_memory().map_err(|e| {
            FitcoachError::Database(format!("Failed to open in-memory database: {e}"))
        })?;

        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self, FitcoachError> {
        migrations::run(&conn)?;
        Ok(Self { conn })
    }

    /// `PRAGMA user_version` after migrating.
    ///
    /// # Errors
    ///
    /// Returns an error if the pragma cannot be read.
    pub fn schema_version(&self) -> Result<i32, FitcoachError> {
        migrations::get_version(&self.conn)
    }

    /// Raw connection for the storage modules.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_in_memory() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.schema_version().unwrap() > 0);
    }

    #[test]
    fn test_reopen_keeps_entries() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let db_path = temp_dir.path().join("fitcoach.db");

        let db = Database::open_at(&db_path).unwrap();
        db.connection()
            .execute(
                "INSERT INTO workout_logs (logged_at, duration_minutes, title, focus, difficulty)
                 VALUES ('2024-03-01T08:00:00+00:00', 20, 'Row', '', '')",
                [],
            )
            .unwrap();
        let version = db.schema_version().unwrap();
        drop(db);

        let db = Database::open_at(&db_path).unwrap();
        assert_eq!(db.schema_version().unwrap(), version);
        let rows: i64 = db
            .connection()
            .query_row("SELECT COUNT(*) FROM workout_logs", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[test]
    fn test_open_in_missing_directory_fails() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let db_path = temp_dir.path().join("nope").join("fitcoach.db");

        let result = Database::open_at(&db_path);
        assert!(matches!(result, Err(FitcoachError::Database(_))));
    }
}
