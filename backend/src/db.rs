use std::fs;
use std::path::Path;
use std::time::Duration;

use rusqlite::{Connection, Transaction};

use crate::error::ApiError;

const BUSY_TIMEOUT_MS: u64 = 5_000;

const SCHEMA: &str = "\
CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT DEFAULT '',
    completed INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);";

/// Creates the database file and the `todos` table if they are missing.
/// Safe to run on every startup.
pub fn init(db_path: &Path) -> Result<(), ApiError> {
    ensure_parent_dir(db_path)?;
    let conn = open_connection(db_path)?;
    conn.execute_batch(SCHEMA)?;
    tracing::info!(db_path = %db_path.display(), "database schema ready");
    Ok(())
}

/// Runs `f` inside a transaction on a connection opened just for this call.
/// Commits when `f` returns `Ok`, rolls back when it returns `Err`; the
/// connection is closed either way.
pub fn with_connection<T, F>(db_path: &Path, f: F) -> Result<T, ApiError>
where
    F: FnOnce(&Transaction<'_>) -> Result<T, ApiError>,
{
    ensure_parent_dir(db_path)?;
    let mut conn = open_connection(db_path)?;
    let tx = conn.transaction()?;
    match f(&tx) {
        Ok(value) => {
            tx.commit()?;
            Ok(value)
        }
        Err(err) => {
            // best-effort rollback, the closure's error is the one reported
            let _ = tx.rollback();
            Err(err)
        }
    }
}

fn open_connection(db_path: &Path) -> Result<Connection, ApiError> {
    let conn = Connection::open(db_path)?;
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.execute_batch("PRAGMA journal_mode = WAL;")?;
    conn.busy_timeout(Duration::from_millis(BUSY_TIMEOUT_MS))?;
    Ok(conn)
}

fn ensure_parent_dir(db_path: &Path) -> Result<(), ApiError> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|err| {
                ApiError::Internal(format!(
                    "failed to create database directory {}: {err}",
                    parent.display()
                ))
            })?;
        }
    }
    Ok(())
}
