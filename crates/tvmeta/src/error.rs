//! Top-level error type.

use thiserror::Error;
use tvmeta_api::tvdb::{ApiError, CredentialError};
use tvmeta_db::StoreError;

/// Errors returned by [`crate::TvMeta`] operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A required credential is missing or malformed; no network call was
    /// attempted.
    #[error(transparent)]
    Credential(#[from] CredentialError),

    /// The remote fetch failed (transport, HTTP status, or decoding).
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The local cache failed during a read. Write-back failures are
    /// logged, not returned.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The remote service answered with a well-formed but empty result
    /// where a record was expected.
    #[error("remote service returned no records for series {series_id}")]
    EmptyResult {
        /// Series id that was looked up.
        series_id: u32,
    },

    /// The favorites list returned after an add did not contain the series.
    #[error("series {series_id} missing from favorites after add")]
    AddFavoriteRejected {
        /// Series id that was added.
        series_id: u32,
    },

    /// The favorites list returned after a remove still contained the
    /// series.
    #[error("series {series_id} still present in favorites after remove")]
    RemoveFavoriteRejected {
        /// Series id that was removed.
        series_id: u32,
    },
}
