//! Series cache CRUD operations.
//!
//! There is deliberately no update operation: a row is inserted once per
//! fetch, and invalidation is always delete-then-reinsert-on-next-fetch.

use chrono::{SecondsFormat, Utc};
use rusqlite::{Connection, OptionalExtension};

use super::error::StoreError;

/// A series row as stored in the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedSeries {
    /// Series ID (assigned by the remote service).
    pub id: u32,
    /// Series name.
    pub name: String,
    /// Genre, if known.
    pub genre: Option<String>,
    /// Lifecycle status (e.g. "Ended", "Continuing").
    pub status: Option<String>,
    /// Fetch timestamp as stored (RFC 3339 text).
    pub fetched_at: String,
}

/// Input for [`insert_series`].
///
/// Carries no timestamp: the store stamps `fetched_at` itself at insert
/// time, so freshness is always computed from when the row was written.
#[derive(Debug, Clone, Copy)]
pub struct NewSeries<'a> {
    /// Series ID (assigned by the remote service).
    pub id: u32,
    /// Series name.
    pub name: &'a str,
    /// Genre, if known.
    pub genre: Option<&'a str>,
    /// Lifecycle status.
    pub status: Option<&'a str>,
}

/// Looks up the cached row for `id`.
///
/// Returns `Ok(None)` when no row exists; absence is not an error.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn lookup_series(conn: &Connection, id: u32) -> Result<Option<CachedSeries>, StoreError> {
    let mut stmt =
        conn.prepare("SELECT id, name, genre, status, fetched_at FROM series WHERE id = ?1")?;

    let row = stmt
        .query_row([id], |row| {
            Ok(CachedSeries {
                id: row.get(0)?,
                name: row.get(1)?,
                genre: row.get(2)?,
                status: row.get(3)?,
                fetched_at: row.get(4)?,
            })
        })
        .optional()?;

    Ok(row)
}

/// Inserts a freshly fetched series, stamping `fetched_at` with the current
/// time (UTC, RFC 3339).
///
/// # Errors
///
/// Returns an error if the insert fails (including a row already present
/// for the same id; evict first).
pub fn insert_series(conn: &Connection, series: &NewSeries<'_>) -> Result<(), StoreError> {
    let fetched_at = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);

    conn.execute(
        "INSERT INTO series (id, name, genre, status, fetched_at) VALUES (?1, ?2, ?3, ?4, ?5)",
        rusqlite::params![series.id, series.name, series.genre, series.status, fetched_at],
    )?;

    Ok(())
}

/// Removes the cached row for `id`. Removing an absent id is not an error.
///
/// # Errors
///
/// Returns an error if the delete statement fails.
pub fn remove_series(conn: &Connection, id: u32) -> Result<(), StoreError> {
    conn.execute("DELETE FROM series WHERE id = ?1", [id])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use chrono::{DateTime, Utc};

    use super::*;
    use crate::connection::open_db;

    fn setup_db() -> (Connection, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let conn = open_db(Some(&dir.path().to_path_buf())).unwrap();
        (conn, dir)
    }

    #[test]
    fn test_insert_and_lookup_round_trip() {
        // Arrange
        let (conn, _dir) = setup_db();
        let series = NewSeries {
            id: 82066,
            name: "Fringe",
            genre: Some("|Drama|Science-Fiction|"),
            status: Some("Ended"),
        };

        // Act
        insert_series(&conn, &series).unwrap();
        let loaded = lookup_series(&conn, 82066).unwrap().unwrap();

        // Assert: all fields round-trip; fetched_at is set and parseable
        assert_eq!(loaded.id, 82066);
        assert_eq!(loaded.name, "Fringe");
        assert_eq!(loaded.genre.as_deref(), Some("|Drama|Science-Fiction|"));
        assert_eq!(loaded.status.as_deref(), Some("Ended"));
        let fetched_at = DateTime::parse_from_rfc3339(&loaded.fetched_at).unwrap();
        let age = Utc::now().signed_duration_since(fetched_at);
        assert!(age.num_seconds() >= 0);
        assert!(age.num_seconds() < 60);
    }

    #[test]
    fn test_lookup_absent_returns_none() {
        // Arrange
        let (conn, _dir) = setup_db();

        // Act & Assert
        assert!(lookup_series(&conn, 99999).unwrap().is_none());
    }

    #[test]
    fn test_remove_is_idempotent() {
        // Arrange
        let (conn, _dir) = setup_db();

        // Act & Assert: removing an absent id succeeds
        assert!(lookup_series(&conn, 123).unwrap().is_none());
        remove_series(&conn, 123).unwrap();
        assert!(lookup_series(&conn, 123).unwrap().is_none());
    }

    #[test]
    fn test_remove_then_reinsert() {
        // Arrange
        let (conn, _dir) = setup_db();
        let series = NewSeries {
            id: 1,
            name: "Old Name",
            genre: None,
            status: Some("Continuing"),
        };
        insert_series(&conn, &series).unwrap();

        // Act: the only way to refresh a row is remove + insert
        remove_series(&conn, 1).unwrap();
        let refreshed = NewSeries {
            id: 1,
            name: "New Name",
            genre: None,
            status: Some("Ended"),
        };
        insert_series(&conn, &refreshed).unwrap();
        let loaded = lookup_series(&conn, 1).unwrap().unwrap();

        // Assert
        assert_eq!(loaded.name, "New Name");
        assert_eq!(loaded.status.as_deref(), Some("Ended"));
    }

    #[test]
    fn test_duplicate_insert_fails() {
        // Arrange
        let (conn, _dir) = setup_db();
        let series = NewSeries {
            id: 7,
            name: "Once",
            genre: None,
            status: None,
        };
        insert_series(&conn, &series).unwrap();

        // Act & Assert: id is the primary key; insert is never an update
        assert!(insert_series(&conn, &series).is_err());
    }

    #[test]
    fn test_optional_fields_round_trip_as_none() {
        // Arrange
        let (conn, _dir) = setup_db();
        let series = NewSeries {
            id: 42,
            name: "Minimal",
            genre: None,
            status: None,
        };

        // Act
        insert_series(&conn, &series).unwrap();
        let loaded = lookup_series(&conn, 42).unwrap().unwrap();

        // Assert
        assert_eq!(loaded.genre, None);
        assert_eq!(loaded.status, None);
    }
}
