//! Settings for a single run, read once from the environment and passed by reference.

use chrono_tz::Tz;
use releasebot_arr_api::{ArrType, InstanceConfig, ReleaseClock};
use releasebot_common::environment::get_optional_env_var;
use releasebot_common::environment::variables::{
    instance_var, API_KEY_SUFFIX, DISCORD_USERNAME, DISCORD_WEBHOOK_URL, HTTP_TIMEOUT_SECS,
    LABEL_SUFFIX, RADARR_4K_API_KEY, RADARR_4K_URL, RADARR_API_KEY, RADARR_PREFIX, RADARR_URL,
    SONARR_ANIME_API_KEY, SONARR_ANIME_URL, SONARR_API_KEY, SONARR_PREFIX, SONARR_URL, TIMEZONE,
    URL_SUFFIX,
};
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};
use url::Url;

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Fixed-name instances from older deployments: URL variable, API key variable, label, kind.
const LEGACY_INSTANCES: [(&str, &str, &str, ArrType); 4] = [
    (RADARR_4K_URL, RADARR_4K_API_KEY, "Movies 4K", ArrType::Radarr),
    (RADARR_URL, RADARR_API_KEY, "Movies", ArrType::Radarr),
    (SONARR_ANIME_URL, SONARR_ANIME_API_KEY, "Anime", ArrType::Sonarr),
    (SONARR_URL, SONARR_API_KEY, "TV Shows", ArrType::Sonarr),
];

/// A required variable is missing or a variable holds something unusable. Fatal before any
/// network call is made.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is required but was not set.")]
    Missing(String),
    #[error("{name} is not a valid URL: {source}")]
    InvalidUrl {
        name: String,
        #[source]
        source: url::ParseError,
    },
    #[error("{name} has an invalid value \"{value}\": {reason}")]
    Invalid {
        name: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug)]
pub struct Config {
    pub radarr_instances: Vec<InstanceConfig>,
    pub sonarr_instances: Vec<InstanceConfig>,
    pub discord_webhook_url: Url,
    pub discord_username: Option<String>,
    pub clock: ReleaseClock,
    pub http_timeout: Duration,
}

impl Config {
    /// Read the configuration from the process environment (and `NAME_FILE` indirections).
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::from_lookup(get_optional_env_var)
    }

    /// Read the configuration through `lookup`, which returns [None] for unset or blank variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let discord_webhook_url = required_url(&lookup, DISCORD_WEBHOOK_URL)?;

        let mut radarr_instances = numbered_instances(&lookup, RADARR_PREFIX, ArrType::Radarr)?;
        let mut sonarr_instances = numbered_instances(&lookup, SONARR_PREFIX, ArrType::Sonarr)?;
        for instance in legacy_instances(&lookup)? {
            match instance.kind {
                ArrType::Radarr => radarr_instances.push(instance),
                ArrType::Sonarr => sonarr_instances.push(instance),
            }
        }
        if radarr_instances.is_empty() && sonarr_instances.is_empty() {
            warn!("No Radarr or Sonarr instances are configured; the notification will be empty.");
        }

        let config = Config {
            radarr_instances,
            sonarr_instances,
            discord_webhook_url,
            discord_username: lookup(DISCORD_USERNAME),
            clock: clock(&lookup)?,
            http_timeout: http_timeout(&lookup)?,
        };
        info!(
            radarr = config.radarr_instances.len(),
            sonarr = config.sonarr_instances.len(),
            clock = ?config.clock,
            "Loaded configuration."
        );

        Ok(config)
    }

    /// Every configured instance: Radarr first, then Sonarr, each in configured order.
    pub fn instances(&self) -> impl Iterator<Item = &InstanceConfig> {
        self.radarr_instances
            .iter()
            .chain(self.sonarr_instances.iter())
    }
}

fn parse_url(name: &str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|source| ConfigError::InvalidUrl {
        name: String::from(name),
        source,
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::Invalid {
            name: String::from(name),
            value: String::from(raw),
            reason: format!("unsupported scheme \"{}\"", other),
        }),
    }
}

fn required_url<F>(lookup: &F, name: &str) -> Result<Url, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(name).ok_or_else(|| ConfigError::Missing(String::from(name)))?;
    parse_url(name, &raw)
}

/// Read `<PREFIX>_1_URL`, `<PREFIX>_2_URL`, ... until the first index without a URL.
fn numbered_instances<F>(
    lookup: &F,
    prefix: &str,
    kind: ArrType,
) -> Result<Vec<InstanceConfig>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut instances = Vec::new();
    for index in 1.. {
        let url_var = instance_var(prefix, index, URL_SUFFIX);
        let raw_url = match lookup(&url_var) {
            Some(u) => u,
            None => break,
        };
        let key_var = instance_var(prefix, index, API_KEY_SUFFIX);
        let api_key = lookup(&key_var).ok_or(ConfigError::Missing(key_var))?;
        let label = lookup(&instance_var(prefix, index, LABEL_SUFFIX))
            .unwrap_or_else(|| format!("{} {}", kind, index));

        instances.push(InstanceConfig::new(
            &label,
            parse_url(&url_var, &raw_url)?,
            &api_key,
            kind,
        ));
    }

    Ok(instances)
}

fn legacy_instances<F>(lookup: &F) -> Result<Vec<InstanceConfig>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut instances = Vec::new();
    for (url_var, key_var, label, kind) in LEGACY_INSTANCES {
        match (lookup(url_var), lookup(key_var)) {
            (Some(raw_url), Some(api_key)) => instances.push(InstanceConfig::new(
                label,
                parse_url(url_var, &raw_url)?,
                &api_key,
                kind,
            )),
            (Some(_), None) | (None, Some(_)) => warn!(
                "Ignoring the \"{}\" instance: both {} and {} must be set.",
                label, url_var, key_var
            ),
            (None, None) => (),
        }
    }

    Ok(instances)
}

fn clock<F>(lookup: &F) -> Result<ReleaseClock, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(TIMEZONE) {
        None => Ok(ReleaseClock::Local),
        Some(raw) => raw
            .parse::<Tz>()
            .map(ReleaseClock::Zone)
            .map_err(|reason| ConfigError::Invalid {
                name: String::from(TIMEZONE),
                value: raw.clone(),
                reason: reason.to_string(),
            }),
    }
}

fn http_timeout<F>(lookup: &F) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = match lookup(HTTP_TIMEOUT_SECS) {
        Some(r) => r,
        None => return Ok(Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS)),
    };
    match raw.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        Ok(_) => Err(ConfigError::Invalid {
            name: String::from(HTTP_TIMEOUT_SECS),
            value: raw,
            reason: String::from("must be greater than zero"),
        }),
        Err(e) => Err(ConfigError::Invalid {
            name: String::from(HTTP_TIMEOUT_SECS),
            value: raw,
            reason: e.to_string(),
        }),
    }
}
