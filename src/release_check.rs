//! One full run: fetch today's releases from every instance, build the message, send it.

use crate::config::Config;
use crate::facades::build_release_message;
use chrono::NaiveDate;
use releasebot_arr_api::{fetch_for_date, ArrClient, InstanceReleases};
use releasebot_discord_client::{DiscordClient, NotifyError};
use tracing::{info, warn};

/// Run the check for the current date in the configured timezone.
pub async fn run<T: DiscordClient>(
    config: &Config,
    arr_client: &ArrClient,
    discord: &T,
) -> Result<(), NotifyError> {
    run_for_date(config, arr_client, discord, config.clock.today()).await
}

/// Run the check for `today`. Instances are queried one at a time in configured order; an
/// instance that fails is reported and skipped. Only a failed notification is an error.
pub async fn run_for_date<T: DiscordClient>(
    config: &Config,
    arr_client: &ArrClient,
    discord: &T,
    today: NaiveDate,
) -> Result<(), NotifyError> {
    info!(date = %today, "Checking for releases.");

    let mut results: Vec<InstanceReleases> = Vec::new();
    for instance in config.instances() {
        results.push(fetch_for_date(arr_client, instance, &config.clock, today).await);
    }

    let failed = results.iter().filter(|r| r.failed).count();
    if failed > 0 {
        warn!(
            "{} of {} instances could not be checked.",
            failed,
            results.len()
        );
    }

    let message = build_release_message(today, &results);
    discord.send_message(&message).await
}
