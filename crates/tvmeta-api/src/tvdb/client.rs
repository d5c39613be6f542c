//! `TvdbClient` - TheTVDB XML API client implementation.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::instrument;
use url::Url;

use super::api::LocalTvdbApi;
use super::error::ApiError;
use super::types::SeriesRecord;
use super::xml::{Data, Favorites};

/// Default base URL.
const DEFAULT_BASE_URL: &str = "https://www.thetvdb.com/api";

/// TheTVDB API client.
///
/// Performs exactly one request per call; a transport or decode failure
/// surfaces directly to the caller with no retry.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TvdbClient {
    /// HTTP client (reqwest, gzip enabled).
    http_client: Client,
    /// Base URL.
    base_url: Url,
}

/// Builder for `TvdbClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TvdbClientBuilder {
    base_url: Option<Url>,
    user_agent: Option<String>,
}

impl TvdbClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            user_agent: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `user_agent` is not set.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<TvdbClient, BuildError> {
        let user_agent = self.user_agent.ok_or(BuildError::MissingUserAgent)?;

        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL).map_err(|_| BuildError::InvalidBaseUrl)?,
        };

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .gzip(true)
            .build()
            .map_err(BuildError::HttpClient)?;

        Ok(TvdbClient {
            http_client,
            base_url,
        })
    }
}

/// Errors raised while building a [`TvdbClient`].
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// No User-Agent was configured.
    #[error("user_agent is required")]
    MissingUserAgent,
    /// The compiled-in default base URL failed to parse.
    #[error("invalid default base URL")]
    InvalidBaseUrl,
    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),
}

impl TvdbClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> TvdbClientBuilder {
        TvdbClientBuilder::new()
    }

    /// Decodes an XML body, attaching a body preview on failure.
    fn decode<T: DeserializeOwned>(command: &'static str, xml: &str) -> Result<T, ApiError> {
        quick_xml::de::from_str(xml).map_err(|source| {
            let mut end = xml.len().min(500);
            while !xml.is_char_boundary(end) {
                end = end.saturating_sub(1);
            }
            ApiError::Decode {
                command,
                body_len: xml.len(),
                preview: xml.get(..end).unwrap_or_default().to_owned(),
                source,
            }
        })
    }

    /// Parses a series response (`<Data>` envelope).
    pub(crate) fn parse_series_response(
        command: &'static str,
        xml: &str,
    ) -> Result<Vec<SeriesRecord>, ApiError> {
        let data: Data = Self::decode(command, xml)?;
        Ok(data.series)
    }

    /// Parses a favorites response (`<Favorites>` envelope), sorted
    /// ascending by series id.
    pub(crate) fn parse_favorites_response(xml: &str) -> Result<Vec<u32>, ApiError> {
        let favorites: Favorites = Self::decode("UserFavorites", xml)?;
        let mut ids = favorites.series;
        ids.sort_unstable();
        Ok(ids)
    }

    /// Sends a GET request and returns the response body.
    async fn get_body(
        &self,
        command: &'static str,
        request: reqwest::RequestBuilder,
    ) -> Result<String, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|source| ApiError::Network { command, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                command,
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| ApiError::Network { command, source })?;

        tracing::debug!(%command, body_len = body.len(), "Response body received");
        Ok(body)
    }

    /// Sends a `User_Favorites.php` request and returns the updated list.
    async fn favorites_request(&self, query: &[(&str, String)]) -> Result<Vec<u32>, ApiError> {
        let url = format!("{}/User_Favorites.php", self.base_url);
        let xml = self
            .get_body("UserFavorites", self.http_client.get(url).query(query))
            .await?;
        Self::parse_favorites_response(&xml)
    }
}

impl LocalTvdbApi for TvdbClient {
    #[instrument(skip_all)]
    async fn series_by_id(
        &self,
        api_key: &str,
        series_id: u32,
    ) -> Result<Vec<SeriesRecord>, ApiError> {
        let url = format!("{}/{api_key}/series/{series_id}/en.xml", self.base_url);
        let xml = self.get_body("SeriesById", self.http_client.get(url)).await?;
        Self::parse_series_response("SeriesById", &xml)
    }

    #[instrument(skip_all)]
    async fn search_series(&self, name: &str) -> Result<Vec<SeriesRecord>, ApiError> {
        let url = format!("{}/GetSeries.php", self.base_url);
        let xml = self
            .get_body(
                "GetSeries",
                self.http_client.get(url).query(&[("seriesname", name)]),
            )
            .await?;
        Self::parse_series_response("GetSeries", &xml)
    }

    #[instrument(skip_all)]
    async fn user_favorites(&self, account_id: &str) -> Result<Vec<u32>, ApiError> {
        self.favorites_request(&[("accountid", account_id.to_owned())])
            .await
    }

    #[instrument(skip_all)]
    async fn add_favorite(&self, account_id: &str, series_id: u32) -> Result<Vec<u32>, ApiError> {
        self.favorites_request(&[
            ("accountid", account_id.to_owned()),
            ("type", String::from("add")),
            ("seriesid", series_id.to_string()),
        ])
        .await
    }

    #[instrument(skip_all)]
    async fn remove_favorite(
        &self,
        account_id: &str,
        series_id: u32,
    ) -> Result<Vec<u32>, ApiError> {
        self.favorites_request(&[
            ("accountid", account_id.to_owned()),
            ("type", String::from("remove")),
            ("seriesid", series_id.to_string()),
        ])
        .await
    }
}
