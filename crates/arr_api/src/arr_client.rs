//! Thin HTTP client for the Radarr and Sonarr v3 APIs.

use crate::arr_api_error::FetchError;
use crate::instance::InstanceConfig;
use crate::models::radarr::RadarrCalendarMovie;
use crate::models::sonarr::{SonarrCalendarEpisode, SonarrSeries};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use tracing::debug;

const API_KEY_HEADER: &str = "X-Api-Key";
const QUERY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Issues read-only requests against any configured instance. Cheap to clone; the underlying
/// [reqwest::Client] shares its connection pool.
#[derive(Debug, Clone)]
pub struct ArrClient {
    http: reqwest::Client,
}

impl ArrClient {
    pub fn new(http: reqwest::Client) -> Self {
        ArrClient { http }
    }

    /// Movies on the Radarr calendar between `start` and `end`, monitored only.
    pub async fn radarr_calendar(
        &self,
        instance: &InstanceConfig,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<RadarrCalendarMovie>, FetchError> {
        let query = [
            ("start", start.format(QUERY_DATE_FORMAT).to_string()),
            ("end", end.format(QUERY_DATE_FORMAT).to_string()),
            ("unmonitored", String::from("false")),
        ];
        self.get_json(instance, "calendar", &query).await
    }

    /// Episodes on the Sonarr calendar between `start` and `end`, with their series embedded.
    pub async fn sonarr_calendar(
        &self,
        instance: &InstanceConfig,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<SonarrCalendarEpisode>, FetchError> {
        let query = [
            ("start", start.format(QUERY_DATE_FORMAT).to_string()),
            ("end", end.format(QUERY_DATE_FORMAT).to_string()),
            ("unmonitored", String::from("false")),
            ("includeSeries", String::from("true")),
            ("includeEpisodeFile", String::from("false")),
            ("includeEpisodeImages", String::from("false")),
        ];
        self.get_json(instance, "calendar", &query).await
    }

    /// A single series by its Sonarr ID.
    pub async fn sonarr_series(
        &self,
        instance: &InstanceConfig,
        series_id: u64,
    ) -> Result<SonarrSeries, FetchError> {
        self.get_json(instance, &format!("series/{}", series_id), &[])
            .await
    }

    async fn get_json<T>(
        &self,
        instance: &InstanceConfig,
        resource: &str,
        query: &[(&str, String)],
    ) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
    {
        let url = instance.api_url(resource);
        debug!(instance = %instance.label, url = %url, "Querying instance.");
        let response = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, &instance.api_key)
            .query(query)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { url, status });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| FetchError::Decode { url, source })
    }
}
