//! Processes a Sonarr calendar into today's [EpisodeRelease]s.

use crate::arr_api_error::FetchError;
use crate::arr_client::ArrClient;
use crate::instance::InstanceConfig;
use crate::models::sonarr::{SonarrCalendarEpisode, SonarrSeries};
use crate::release_date::{calendar_date, query_window, utc_instant, ReleaseClock};
use crate::releases::{EpisodeRelease, Release};
use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::{debug, warn};

const UNKNOWN_SERIES: &str = "Unknown Series";
const UNKNOWN_EPISODE: &str = "Unknown Episode";

pub(crate) async fn fetch_episodes(
    client: &ArrClient,
    instance: &InstanceConfig,
    clock: &ReleaseClock,
    today: NaiveDate,
) -> Result<Vec<Release>, FetchError> {
    let (start, end) = query_window(today);
    let episodes = client.sonarr_calendar(instance, start, end).await?;
    debug!(instance = %instance.label, "Sonarr returned {} calendar entries.", episodes.len());

    let todays: Vec<(&SonarrCalendarEpisode, NaiveDate)> = episodes
        .iter()
        .filter(|e| e.monitored)
        .filter_map(|e| air_date_today(e, clock, today).map(|d| (e, d)))
        .collect();

    let series = lookup_missing_series(client, instance, todays.iter().map(|(e, _)| *e)).await;

    Ok(todays
        .into_iter()
        .map(|(episode, air_date)| {
            Release::Episode(to_release(
                episode,
                series.get(&episode.series_id),
                air_date,
                &instance.label,
            ))
        })
        .collect())
}

/// The episode's air date if it is `today`. Sonarr's `airDate` wins; `airDateUtc` is only consulted
/// when `airDate` is missing or unreadable, and is converted into the clock's timezone.
fn air_date_today(
    episode: &SonarrCalendarEpisode,
    clock: &ReleaseClock,
    today: NaiveDate,
) -> Option<NaiveDate> {
    let air_date = calendar_date(episode.air_date.as_deref())
        .or_else(|| utc_instant(episode.air_date_utc.as_deref()).map(|i| clock.date_of(i)))?;
    if air_date == today {
        Some(air_date)
    } else {
        None
    }
}

/// Fetch the series for episodes that came back without one embedded, once per series.
/// Failures are logged and the series is left out of the map.
async fn lookup_missing_series<'a>(
    client: &ArrClient,
    instance: &InstanceConfig,
    episodes: impl Iterator<Item = &'a SonarrCalendarEpisode>,
) -> HashMap<u64, SonarrSeries> {
    let mut found = HashMap::new();
    let mut missing: Vec<u64> = Vec::new();
    for episode in episodes {
        match &episode.series {
            Some(s) => {
                found.entry(episode.series_id).or_insert_with(|| s.clone());
            }
            None if !missing.contains(&episode.series_id) => missing.push(episode.series_id),
            None => (),
        }
    }

    for series_id in missing {
        if found.contains_key(&series_id) {
            continue;
        }
        match client.sonarr_series(instance, series_id).await {
            Ok(s) => {
                found.insert(series_id, s);
            }
            Err(e) => warn!(
                instance = %instance.label,
                series_id,
                "Could not look up series: {}",
                e
            ),
        }
    }

    found
}

fn to_release(
    episode: &SonarrCalendarEpisode,
    series: Option<&SonarrSeries>,
    air_date: NaiveDate,
    label: &str,
) -> EpisodeRelease {
    let series_title = match (series, &episode.series_title) {
        (Some(s), _) => s.title.clone(),
        (None, Some(t)) => t.clone(),
        (None, None) => {
            warn!(episode_id = episode.id, "Could not find the series title for an episode.");
            String::from(UNKNOWN_SERIES)
        }
    };

    EpisodeRelease {
        series_title,
        tvdb_id: series.and_then(|s| s.tvdb_id).filter(|id| *id > 0),
        season_number: episode.season_number,
        episode_number: episode.episode_number,
        episode_title: episode
            .title
            .clone()
            .unwrap_or_else(|| String::from(UNKNOWN_EPISODE)),
        air_date,
        instance_label: String::from(label),
    }
}
