//! Local series cache for tvmeta.
//!
//! Uses `rusqlite` (bundled `SQLite`) to cache series records fetched from
//! the remote metadata service. Rows carry the timestamp of the fetch that
//! produced them; the freshness policy in [`freshness`] decides whether a
//! cached row may still be served.

mod connection;
mod error;
pub mod freshness;
mod migrations;
/// Series cache CRUD operations.
pub mod series;

pub use connection::open_db;
pub use error::StoreError;
#[allow(clippy::module_name_repetitions)]
pub use series::{CachedSeries, NewSeries, insert_series, lookup_series, remove_series};
