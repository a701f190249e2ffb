//! Models intended to be used when deserializing Sonarr API responses.
//! Source: https://sonarr.tv/docs/api/#/Calendar/get_api_v3_calendar

mod calendar_episode;
mod series;

pub use calendar_episode::SonarrCalendarEpisode;
pub use series::{SonarrSeries, SonarrSeriesType};
