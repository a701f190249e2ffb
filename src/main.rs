mod config;
mod facades;
mod release_check;

extern crate dotenv;

use crate::config::Config;
use anyhow::{Context, Result};
use dotenv::dotenv;
use releasebot_arr_api::ArrClient;
use releasebot_common::environment::variables::LOG_FILTER;
use releasebot_discord_client::DiscordWebhookClient;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), anyhow::Error> {
    dotenv().ok();

    // Set up logging framework, reading filter configuration from the environment variable
    // or defaulting to info logs and above globally if the filter isn't specified.
    let filter = EnvFilter::try_from_env(LOG_FILTER).unwrap_or_else(|_| {
        EnvFilter::default().add_directive(LevelFilter::INFO.into())
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting media release check...");
    let config = Config::from_env().context("Could not load the configuration.")?;

    let http = reqwest::Client::builder()
        .timeout(config.http_timeout)
        .user_agent(USER_AGENT)
        .build()
        .context("Could not build the HTTP client.")?;
    let arr_client = ArrClient::new(http.clone());
    let discord = DiscordWebhookClient::new(
        http,
        config.discord_webhook_url.clone(),
        config.discord_username.clone(),
    );

    release_check::run(&config, &arr_client, &discord)
        .await
        .context("Failed to send the release notification.")?;

    info!("Daily media release notification completed successfully!");
    Ok(())
}
