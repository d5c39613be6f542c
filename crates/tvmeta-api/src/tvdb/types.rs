//! Series record type decoded from the XML API.

use serde::Deserialize;

use super::xml::{deserialize_empty_string_as_none, deserialize_empty_string_as_none_u32};

/// A TV series record as returned by the remote service.
///
/// Only `id`, `name`, `status`, and `genre` participate in caching; the
/// remaining fields are descriptive and come back empty when a record is
/// reconstructed from the local cache.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SeriesRecord {
    /// Series ID (assigned by the remote service, never generated locally).
    #[serde(rename = "id")]
    pub id: u32,
    /// Series name.
    #[serde(rename = "SeriesName")]
    pub name: String,
    /// Lifecycle status (free text, e.g. "Ended", "Continuing").
    #[serde(
        rename = "Status",
        deserialize_with = "deserialize_empty_string_as_none",
        default
    )]
    pub status: Option<String>,
    /// Genre list in the service's pipe-delimited format.
    #[serde(
        rename = "Genre",
        deserialize_with = "deserialize_empty_string_as_none",
        default
    )]
    pub genre: Option<String>,
    /// Actor list in the service's pipe-delimited format.
    #[serde(
        rename = "Actors",
        deserialize_with = "deserialize_empty_string_as_none",
        default
    )]
    pub actors: Option<String>,
    /// Weekday the series airs.
    #[serde(
        rename = "Airs_DayOfWeek",
        deserialize_with = "deserialize_empty_string_as_none",
        default
    )]
    pub air_day: Option<String>,
    /// Time of day the series airs.
    #[serde(
        rename = "Airs_Time",
        deserialize_with = "deserialize_empty_string_as_none",
        default
    )]
    pub air_time: Option<String>,
    /// Content rating (e.g. "TV-14").
    #[serde(
        rename = "ContentRating",
        deserialize_with = "deserialize_empty_string_as_none",
        default
    )]
    pub content_rating: Option<String>,
    /// First air date as returned by the service.
    #[serde(
        rename = "FirstAired",
        deserialize_with = "deserialize_empty_string_as_none",
        default
    )]
    pub first_aired: Option<String>,
    /// IMDB identifier.
    #[serde(
        rename = "IMDB_ID",
        deserialize_with = "deserialize_empty_string_as_none",
        default
    )]
    pub imdb_id: Option<String>,
    /// Record language code.
    #[serde(
        rename = "Language",
        deserialize_with = "deserialize_empty_string_as_none",
        default,
        alias = "language"
    )]
    pub language: Option<String>,
    /// Broadcasting network.
    #[serde(
        rename = "Network",
        deserialize_with = "deserialize_empty_string_as_none",
        default
    )]
    pub network: Option<String>,
    /// Plot overview.
    #[serde(
        rename = "Overview",
        deserialize_with = "deserialize_empty_string_as_none",
        default
    )]
    pub overview: Option<String>,
    /// User rating.
    #[serde(
        rename = "Rating",
        deserialize_with = "deserialize_empty_string_as_none",
        default
    )]
    pub rating: Option<String>,
    /// Number of user ratings.
    #[serde(
        rename = "RatingCount",
        deserialize_with = "deserialize_empty_string_as_none_u32",
        default
    )]
    pub rating_count: Option<u32>,
    /// Episode runtime in minutes.
    #[serde(
        rename = "Runtime",
        deserialize_with = "deserialize_empty_string_as_none_u32",
        default
    )]
    pub runtime: Option<u32>,
    /// Banner image path suffix.
    #[serde(
        rename = "banner",
        deserialize_with = "deserialize_empty_string_as_none",
        default
    )]
    pub banner_path: Option<String>,
}
