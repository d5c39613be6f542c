//! Cached TV-series metadata client.
//!
//! Ties the remote API client (`tvmeta-api`) and the local series cache
//! (`tvmeta-db`) into one lookup flow: a by-id lookup is served from the
//! cache while the row is within its TTL, and otherwise evicts, re-fetches,
//! and re-populates the cache best-effort.
#![allow(clippy::future_not_send)]

mod config;
mod error;
mod favorites;

use chrono::Utc;
use rusqlite::Connection;
use tracing::instrument;
use tvmeta_db::freshness::{self, Freshness};
use tvmeta_db::{CachedSeries, NewSeries, insert_series, lookup_series, open_db, remove_series};

pub use config::Config;
pub use error::Error;
pub use tvmeta_api::tvdb::{LocalTvdbApi, SeriesRecord, TvdbClient, TvdbClientBuilder};

/// Cached metadata client.
///
/// Generic over the remote API so tests can substitute a mock collaborator.
/// Holds a single database connection; callers are expected to perform
/// lookups for a given series id from one logical caller at a time (no
/// per-id locking is done here).
#[derive(Debug)]
pub struct TvMeta<A> {
    api: A,
    conn: Connection,
    config: Config,
}

impl<A: LocalTvdbApi> TvMeta<A> {
    /// Opens (or creates) the local cache under `config`'s data directory
    /// and wires it to the given API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the cache database cannot be opened.
    pub fn new(config: Config, api: A) -> Result<Self, Error> {
        let conn = open_db(config.data_dir())?;
        Ok(Self { api, conn, config })
    }

    /// Wires an already-open cache connection to the given API client.
    #[must_use]
    pub const fn with_connection(config: Config, api: A, conn: Connection) -> Self {
        Self { api, conn, config }
    }

    /// Looks up a series by id, serving from the local cache when the
    /// cached row is within [`freshness::CACHE_TTL`].
    ///
    /// A stale or corrupt row is evicted (best-effort) and the series is
    /// re-fetched. A record fetched from the remote service is written back
    /// to the cache best-effort: a cache-write failure is logged and the
    /// record is still returned.
    ///
    /// # Errors
    ///
    /// - [`Error::Store`] if the cache read fails.
    /// - [`Error::Credential`] if the API key is missing or malformed.
    /// - [`Error::Api`] if the remote fetch fails.
    /// - [`Error::EmptyResult`] if the remote response contains no records.
    #[instrument(skip_all)]
    pub async fn series_by_id(&self, series_id: u32) -> Result<SeriesRecord, Error> {
        if let Some(cached) = lookup_series(&self.conn, series_id)? {
            match freshness::evaluate(&cached.fetched_at, Utc::now(), freshness::CACHE_TTL) {
                Freshness::Fresh => {
                    tracing::debug!(series_id, "serving series from local cache");
                    return Ok(cached_to_record(cached));
                }
                verdict @ (Freshness::Stale | Freshness::Corrupt) => {
                    tracing::debug!(series_id, ?verdict, "cached series expired, evicting");
                    if let Err(e) = remove_series(&self.conn, series_id) {
                        // The next lookup will retry the eviction.
                        tracing::warn!(
                            series_id,
                            error = %e,
                            "failed to evict expired series, continuing with fetch"
                        );
                    }
                }
            }
        }

        let api_key = self.config.api_key()?;
        let mut results = self.api.series_by_id(api_key, series_id).await?;
        if results.is_empty() {
            return Err(Error::EmptyResult { series_id });
        }
        let record = results.swap_remove(0);

        let row = NewSeries {
            id: record.id,
            name: &record.name,
            genre: record.genre.as_deref(),
            status: record.status.as_deref(),
        };
        if let Err(e) = insert_series(&self.conn, &row) {
            tracing::warn!(
                series_id,
                error = %e,
                "failed to cache fetched series, returning it uncached"
            );
        }

        Ok(record)
    }

    /// Searches series by name substring. Requires no credentials; results
    /// are not cached (only by-id lookups populate the cache).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] if the remote request fails.
    #[instrument(skip_all)]
    pub async fn search_series(&self, name: &str) -> Result<Vec<SeriesRecord>, Error> {
        Ok(self.api.search_series(name).await?)
    }
}

/// Rebuilds a record from a cached row.
///
/// Only the cached columns are meaningful; the descriptive fields come back
/// at their defaults, matching what the remote service would omit.
fn cached_to_record(cached: CachedSeries) -> SeriesRecord {
    SeriesRecord {
        id: cached.id,
        name: cached.name,
        genre: cached.genre,
        status: cached.status,
        ..SeriesRecord::default()
    }
}

#[cfg(test)]
pub(crate) mod testutil {
    use std::cell::Cell;

    use tvmeta_api::tvdb::{ApiError, LocalTvdbApi, SeriesRecord};

    /// Configurable mock collaborator with call counters.
    #[derive(Debug, Default)]
    pub struct MockApi {
        /// Records returned by `series_by_id` and `search_series`.
        pub series: Vec<SeriesRecord>,
        /// List returned by every favorites operation.
        pub favorites: Vec<u32>,
        pub fetch_calls: Cell<usize>,
        pub favorites_calls: Cell<usize>,
    }

    impl MockApi {
        pub fn returning_series(series: Vec<SeriesRecord>) -> Self {
            Self {
                series,
                ..Self::default()
            }
        }

        pub fn returning_favorites(favorites: Vec<u32>) -> Self {
            Self {
                favorites,
                ..Self::default()
            }
        }
    }

    impl LocalTvdbApi for MockApi {
        async fn series_by_id(
            &self,
            _api_key: &str,
            _series_id: u32,
        ) -> Result<Vec<SeriesRecord>, ApiError> {
            self.fetch_calls.set(self.fetch_calls.get() + 1);
            Ok(self.series.clone())
        }

        async fn search_series(&self, _name: &str) -> Result<Vec<SeriesRecord>, ApiError> {
            self.fetch_calls.set(self.fetch_calls.get() + 1);
            Ok(self.series.clone())
        }

        async fn user_favorites(&self, _account_id: &str) -> Result<Vec<u32>, ApiError> {
            self.favorites_calls.set(self.favorites_calls.get() + 1);
            Ok(self.favorites.clone())
        }

        async fn add_favorite(
            &self,
            _account_id: &str,
            _series_id: u32,
        ) -> Result<Vec<u32>, ApiError> {
            self.favorites_calls.set(self.favorites_calls.get() + 1);
            Ok(self.favorites.clone())
        }

        async fn remove_favorite(
            &self,
            _account_id: &str,
            _series_id: u32,
        ) -> Result<Vec<u32>, ApiError> {
            self.favorites_calls.set(self.favorites_calls.get() + 1);
            Ok(self.favorites.clone())
        }
    }

    /// A record the mock hands out, with enough fields set to notice loss.
    pub fn fringe() -> SeriesRecord {
        SeriesRecord {
            id: 82066,
            name: String::from("Fringe"),
            status: Some(String::from("Ended")),
            genre: Some(String::from("|Drama|Science-Fiction|")),
            network: Some(String::from("FOX")),
            runtime: Some(60),
            ..SeriesRecord::default()
        }
    }
}
