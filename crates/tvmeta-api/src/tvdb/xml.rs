//! XML response wrapper types and custom deserializers.

use serde::de::Error;
use serde::{Deserialize, Deserializer};

use super::types::SeriesRecord;

/// Deserializes empty strings as `None` (for `String` fields).
pub fn deserialize_empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let result = Option::deserialize(deserializer);
    let s: Option<String> = result.map_err(D::Error::custom)?;
    Ok(s.filter(|s| !s.is_empty()))
}

/// Deserializes empty strings as `None` (for `u32` fields).
pub fn deserialize_empty_string_as_none_u32<'de, D>(
    deserializer: D,
) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let result = Option::deserialize(deserializer);
    let s: Option<String> = result.map_err(D::Error::custom)?;
    match s.as_deref() {
        None | Some("") => Ok(None),
        Some(v) => v
            .parse::<u32>()
            .map(Some)
            .map_err(|e| D::Error::custom(format!("failed to parse u32: {e}"))),
    }
}

/// `<Data>` envelope around series records.
///
/// Both the by-id lookup and the name search return this shape. Zero
/// `<Series>` children is a well-formed response; whether that is an error
/// is the caller's decision.
#[derive(Debug, Deserialize)]
#[serde(rename = "Data")]
pub struct Data {
    /// Series records (absent element decodes to an empty list).
    #[serde(rename = "Series", default)]
    pub series: Vec<SeriesRecord>,
}

/// `<Favorites>` envelope: the full favorites list as series ids.
#[derive(Debug, Deserialize)]
#[serde(rename = "Favorites")]
pub struct Favorites {
    /// Series ids (absent element decodes to an empty list).
    #[serde(rename = "Series", default)]
    pub series: Vec<u32>,
}
