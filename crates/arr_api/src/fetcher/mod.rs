//! Turns *arr calendars into today's [InstanceReleases]. A failing instance never aborts the run:
//! the error is logged and the instance contributes nothing.

mod radarr_fetcher;
mod sonarr_fetcher;

use crate::arr_client::ArrClient;
use crate::arr_type::ArrType;
use crate::instance::InstanceConfig;
use crate::release_date::ReleaseClock;
use crate::releases::InstanceReleases;
use chrono::NaiveDate;
use tracing::{error, info};

/// Query one instance for everything releasing today in the clock's timezone.
pub async fn fetch_today(
    client: &ArrClient,
    instance: &InstanceConfig,
    clock: &ReleaseClock,
) -> InstanceReleases {
    fetch_for_date(client, instance, clock, clock.today()).await
}

/// Query one instance for everything releasing on `today`. Single attempt; no retries.
pub async fn fetch_for_date(
    client: &ArrClient,
    instance: &InstanceConfig,
    clock: &ReleaseClock,
    today: NaiveDate,
) -> InstanceReleases {
    let result = match instance.kind {
        ArrType::Radarr => radarr_fetcher::fetch_movies(client, instance, today).await,
        ArrType::Sonarr => sonarr_fetcher::fetch_episodes(client, instance, clock, today).await,
    };

    match result {
        Ok(releases) => {
            info!(
                instance = %instance.label,
                arr_type = instance.kind.as_ref(),
                "Found {} releases for today.",
                releases.len()
            );
            InstanceReleases::new(instance, releases)
        }
        Err(e) => {
            error!(
                instance = %instance.label,
                arr_type = instance.kind.as_ref(),
                "Skipping instance after a failed fetch: {}",
                e
            );
            InstanceReleases::failed(instance)
        }
    }
}
