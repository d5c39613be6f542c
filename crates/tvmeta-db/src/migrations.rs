//! Schema version management using `PRAGMA user_version`.

use rusqlite::Connection;

/// Current schema version.
const CURRENT_VERSION: u32 = 1;

/// Runs database migrations up to `CURRENT_VERSION`.
///
/// # Errors
///
/// Returns an error if any SQL statement fails.
pub fn run_migrations(conn: &Connection) -> Result<(), rusqlite::Error> {
    let version: u32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

    if version < 1 {
        migrate_v1(conn)?;
    }

    conn.pragma_update(None, "user_version", CURRENT_VERSION)?;

    Ok(())
}

/// Migration to v1: create the `series` table.
///
/// `fetched_at` is RFC 3339 text stamped by the store at insert time. Rows
/// whose text no longer parses are treated as corrupt by the freshness
/// policy and evicted on the next lookup.
fn migrate_v1(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS series (
            id          INTEGER PRIMARY KEY,
            name        TEXT NOT NULL,
            genre       TEXT,
            status      TEXT,
            fetched_at  TEXT NOT NULL
        );",
    )
}
