//! TheTVDB API client module.
//!
//! Handles HTTP requests to the XML endpoints (`{key}/series/{id}/en.xml`,
//! `GetSeries.php`, `User_Favorites.php`) and decodes their responses.

mod api;
mod client;
mod credentials;
mod error;
mod types;
pub(crate) mod xml;

#[allow(clippy::module_name_repetitions)]
pub use api::{LocalTvdbApi, TvdbApi};
#[allow(clippy::module_name_repetitions)]
pub use client::{BuildError, TvdbClient, TvdbClientBuilder};
pub use credentials::{validate_account_id, validate_api_key};
pub use error::{ApiError, CredentialError};
pub use types::SeriesRecord;
