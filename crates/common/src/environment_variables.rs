//! The list of environment variables used throughout the application.

// Discord environment variables
pub const DISCORD_WEBHOOK_URL: &str = "DISCORD_WEBHOOK_URL";
pub const DISCORD_USERNAME: &str = "DISCORD_USERNAME";

// Numbered *arr instance variables, e.g. RADARR_1_URL
pub const RADARR_PREFIX: &str = "RADARR";
pub const SONARR_PREFIX: &str = "SONARR";
pub const URL_SUFFIX: &str = "URL";
pub const API_KEY_SUFFIX: &str = "API_KEY";
pub const LABEL_SUFFIX: &str = "LABEL";

// Fixed-name instances kept from older deployments
pub const RADARR_4K_URL: &str = "RADARR_4K_URL";
pub const RADARR_4K_API_KEY: &str = "RADARR_4K_API_KEY";
pub const RADARR_URL: &str = "RADARR_URL";
pub const RADARR_API_KEY: &str = "RADARR_API_KEY";
pub const SONARR_ANIME_URL: &str = "SONARR_ANIME_URL";
pub const SONARR_ANIME_API_KEY: &str = "SONARR_ANIME_API_KEY";
pub const SONARR_URL: &str = "SONARR_URL";
pub const SONARR_API_KEY: &str = "SONARR_API_KEY";

// Miscellaneous
pub const TIMEZONE: &str = "RELEASEBOT_TIMEZONE";
pub const HTTP_TIMEOUT_SECS: &str = "RELEASEBOT_HTTP_TIMEOUT_SECS";
pub const LOG_FILTER: &str = "RELEASEBOT_LOG_FILTER";

/// Build the name of a numbered instance variable, e.g. `instance_var("SONARR", 2, "URL")`
/// yields `SONARR_2_URL`.
pub fn instance_var(prefix: &str, index: usize, suffix: &str) -> String {
    format!("{}_{}_{}", prefix, index, suffix)
}
