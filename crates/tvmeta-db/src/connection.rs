//! Database connection management.

use std::path::PathBuf;

use rusqlite::Connection;

use super::error::StoreError;
use super::migrations::run_migrations;

/// Opens (or creates) the series database and runs migrations.
///
/// - If `dir` is `Some`, uses `{dir}/tvmeta.db`.
/// - Otherwise uses `~/.local/share/tvmeta/tvmeta.db`.
///
/// Safe to call repeatedly; schema creation is idempotent.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or migrations fail.
pub fn open_db(dir: Option<&PathBuf>) -> Result<Connection, StoreError> {
    let db_path = resolve_db_path(dir)?;

    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| StoreError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let conn = Connection::open(&db_path).map_err(|source| StoreError::Open {
        path: db_path.clone(),
        source,
    })?;

    run_migrations(&conn).map_err(StoreError::Migration)?;

    Ok(conn)
}

/// Resolves the database file path.
fn resolve_db_path(dir: Option<&PathBuf>) -> Result<PathBuf, StoreError> {
    if let Some(d) = dir {
        return Ok(d.join("tvmeta.db"));
    }

    let home = std::env::var("HOME").map_err(|_| StoreError::NoHome)?;
    Ok(PathBuf::from(home)
        .join(".local")
        .join("share")
        .join("tvmeta")
        .join("tvmeta.db"))
}
