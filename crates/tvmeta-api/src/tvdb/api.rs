//! `TvdbApi` trait definition.
#![allow(clippy::future_not_send)]

use super::error::ApiError;
use super::types::SeriesRecord;

/// Remote metadata API trait.
///
/// Abstracts the remote collaborator for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(TvdbApi: Send)]
pub trait LocalTvdbApi {
    /// Fetches the series record(s) for `series_id`.
    ///
    /// A well-formed response may contain zero records; the caller decides
    /// whether that is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or XML decoding fails.
    async fn series_by_id(
        &self,
        api_key: &str,
        series_id: u32,
    ) -> Result<Vec<SeriesRecord>, ApiError>;

    /// Searches series by name substring. Requires no credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or XML decoding fails.
    async fn search_series(&self, name: &str) -> Result<Vec<SeriesRecord>, ApiError>;

    /// Fetches the favorites list for `account_id`, sorted ascending.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or XML decoding fails.
    async fn user_favorites(&self, account_id: &str) -> Result<Vec<u32>, ApiError>;

    /// Adds `series_id` to the favorites list and returns the updated list,
    /// sorted ascending.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or XML decoding fails.
    async fn add_favorite(&self, account_id: &str, series_id: u32) -> Result<Vec<u32>, ApiError>;

    /// Removes `series_id` from the favorites list and returns the updated
    /// list, sorted ascending.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or XML decoding fails.
    async fn remove_favorite(&self, account_id: &str, series_id: u32)
    -> Result<Vec<u32>, ApiError>;
}
