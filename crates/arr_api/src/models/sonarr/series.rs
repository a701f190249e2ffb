use crate::models::default_monitored;
use serde::{Deserialize, Serialize};

/// The type of series, usually indicating the method that new episodes are aired.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub enum SonarrSeriesType {
    Standard,
    Daily,
    Anime,
    #[serde(other)]
    Unknown,
}

/// General data about a series Sonarr is tracking.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SonarrSeries {
    pub id: u64,
    pub title: String,
    pub tvdb_id: Option<u32>,
    pub imdb_id: Option<String>,
    pub series_type: Option<SonarrSeriesType>,
    #[serde(default = "default_monitored")]
    pub monitored: bool,
}
