use crate::models::default_monitored;
use serde::{Deserialize, Serialize};

/// A movie as returned by `GET /api/v3/calendar`.
///
/// The release fields are ISO-8601 timestamps such as `2024-03-15T00:00:00Z`, but only their
/// calendar date is meaningful, so they are kept as strings and parsed by
/// [crate::calendar_date].
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RadarrCalendarMovie {
    pub id: u64,
    pub title: String,
    pub year: Option<u32>,
    pub tmdb_id: Option<u32>,
    pub imdb_id: Option<String>,
    #[serde(default = "default_monitored")]
    pub monitored: bool,
    pub in_cinemas: Option<String>,
    pub physical_release: Option<String>,
    pub digital_release: Option<String>,
}
