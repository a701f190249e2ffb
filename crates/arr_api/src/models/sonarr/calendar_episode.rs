use crate::models::default_monitored;
use crate::models::sonarr::SonarrSeries;
use serde::{Deserialize, Serialize};

/// An episode as returned by `GET /api/v3/calendar`.
///
/// `air_date` is the local air date of the episode's network (`yyyy-MM-dd`); `air_date_utc` is
/// the exact air time. Both are kept as strings so one malformed value does not reject the whole
/// calendar.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SonarrCalendarEpisode {
    pub id: u64,
    pub series_id: u64,
    pub season_number: u32,
    pub episode_number: u32,
    pub title: Option<String>,
    pub air_date: Option<String>,
    pub air_date_utc: Option<String>,
    #[serde(default = "default_monitored")]
    pub monitored: bool,
    /// Present when the calendar was requested with `includeSeries=true`.
    pub series: Option<SonarrSeries>,
    pub series_title: Option<String>,
}
