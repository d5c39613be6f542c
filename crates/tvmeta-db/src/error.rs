//! Store error type.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the local series cache.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Creating the parent directory for the database file failed.
    #[error("failed to create data directory {path}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Opening the database file failed.
    #[error("failed to open series database {path}")]
    Open {
        /// Database file path.
        path: PathBuf,
        /// Underlying `SQLite` error.
        #[source]
        source: rusqlite::Error,
    },

    /// Schema migration failed.
    #[error("series database migration failed")]
    Migration(#[source] rusqlite::Error),

    /// A read, insert, or delete against the cache failed.
    #[error("series database operation failed")]
    Query(#[from] rusqlite::Error),

    /// No explicit data directory was given and `HOME` is not set.
    #[error("HOME environment variable is not set")]
    NoHome,
}
