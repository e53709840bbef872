use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An item as returned by the Hacker News API, before any validation.
/// Absent fields deserialize to their zero values, matching the upstream
/// convention of omitting fields that do not apply to an item kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawItem {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub deleted: bool,
    #[serde(rename = "type", default)]
    pub item_type: String,
    #[serde(default)]
    pub by: String,
    #[serde(default)]
    pub time: i64,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub dead: bool,
    #[serde(default)]
    pub parent: i64,
    #[serde(default)]
    pub poll: i64,
    #[serde(default)]
    pub kids: Vec<i64>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub parts: Vec<i64>,
    #[serde(default)]
    pub descendants: i64,
}

impl RawItem {
    /// Creation time of the item, from the upstream unix timestamp.
    /// `None` if the timestamp is out of the representable range.
    pub fn posted_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.time, 0)
    }
}

/// A validated, display-ready story. Produced once by the converter and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub id: i64,
    pub title: String,
    #[serde(rename = "uri")]
    pub url: String,
    pub author: String,
    pub points: i64,
    pub comments: i64,
    pub rank: i64,
}

impl fmt::Display for Story {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string_pretty(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
