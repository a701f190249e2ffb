//! Processes a Radarr calendar into today's [MovieRelease]s.

use crate::arr_api_error::FetchError;
use crate::arr_client::ArrClient;
use crate::instance::InstanceConfig;
use crate::models::radarr::RadarrCalendarMovie;
use crate::release_date::{calendar_date, query_window};
use crate::releases::{MovieRelease, Release, ReleaseType};
use chrono::NaiveDate;
use tracing::debug;

pub(crate) async fn fetch_movies(
    client: &ArrClient,
    instance: &InstanceConfig,
    today: NaiveDate,
) -> Result<Vec<Release>, FetchError> {
    let (start, end) = query_window(today);
    let movies = client.radarr_calendar(instance, start, end).await?;
    debug!(instance = %instance.label, "Radarr returned {} calendar entries.", movies.len());

    Ok(movies
        .iter()
        .filter(|m| m.monitored)
        .filter_map(|m| to_release(m, &instance.label, today))
        .map(Release::Movie)
        .collect())
}

/// The release type that lands on `today`, checking digital, then physical, then cinema.
fn todays_release_type(movie: &RadarrCalendarMovie, today: NaiveDate) -> Option<ReleaseType> {
    [
        (ReleaseType::Digital, &movie.digital_release),
        (ReleaseType::Physical, &movie.physical_release),
        (ReleaseType::Cinema, &movie.in_cinemas),
    ]
    .into_iter()
    .find(|(_, raw)| calendar_date(raw.as_deref()) == Some(today))
    .map(|(release_type, _)| release_type)
}

fn to_release(movie: &RadarrCalendarMovie, label: &str, today: NaiveDate) -> Option<MovieRelease> {
    let release_type = todays_release_type(movie, today)?;
    Some(MovieRelease {
        title: movie.title.clone(),
        year: movie.year.filter(|y| *y > 0),
        release_type,
        tmdb_id: movie.tmdb_id.filter(|id| *id > 0),
        instance_label: String::from(label),
    })
}
