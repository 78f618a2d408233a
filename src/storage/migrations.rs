//! Database migrations for fitcoach.
//!
//! Each migration upgrades the schema by one version. Migrations run
//! automatically when the database is opened.

use rusqlite::Connection;

use crate::error::FitcoachError;

/// Current schema version.
const CURRENT_VERSION: i32 = 1;

/// Get the current schema version from the database.
///
/// Returns 0 for a new database.
pub fn get_version(conn: &Connection) -> Result<i32, FitcoachError> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| FitcoachError::Database(format!("Failed to get schema version: {e}")))
}

fn set_version(conn: &Connection, version: i32) -> Result<(), FitcoachError> {
    conn.execute_batch(&format!("PRAGMA user_version = {version};"))
        .map_err(|e| FitcoachError::Database(format!("Failed to set schema version: {e}")))
}

/// Run all pending migrations.
pub fn run(conn: &Connection) -> Result<(), FitcoachError> {
    let current = get_version(conn)?;

    if current >= CURRENT_VERSION {
        return Ok(());
    }

    for version in (current + 1)..=CURRENT_VERSION {
        tracing::info!(version, "running database migration");
        run_migration(conn, version)?;
        set_version(conn, version)?;
    }

    Ok(())
}

fn run_migration(conn: &Connection, version: i32) -> Result<(), FitcoachError> {
    match version {
        1 => migrate_v1(conn),
        _ => Err(FitcoachError::Database(format!(
            "Unknown migration version: {version}"
        ))),
    }
}

/// Migration v1: workout log.
fn migrate_v1(conn: &Connection) -> Result<(), FitcoachError> {
    conn.execute_batch(
        r"
        CREATE TABLE IF NOT EXISTS workout_logs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            logged_at TEXT NOT NULL,
            duration_minutes INTEGER NOT NULL,
            title TEXT NOT NULL,
            focus TEXT NOT NULL DEFAULT '',
            difficulty TEXT NOT NULL DEFAULT ''
        );

        CREATE INDEX IF NOT EXISTS idx_workout_logs_logged_at
        ON workout_logs(logged_at);
        ",
    )
    .map_err(|e| FitcoachError::Database(format!("Migration v1 failed: {e}")))
}
