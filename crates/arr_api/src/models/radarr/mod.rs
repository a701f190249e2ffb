//! Models to be used when deserializing Radarr API responses.
//! Source: https://radarr.video/docs/api/#/Calendar/get_api_v3_calendar

mod calendar_movie;

pub use calendar_movie::RadarrCalendarMovie;
