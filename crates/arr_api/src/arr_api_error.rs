//! Errors raised while talking to a Radarr or Sonarr instance.

use reqwest::StatusCode;
use thiserror::Error;

/// A single instance could not be queried. These are logged and never abort a run.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} responded with status {status}")]
    Status { url: String, status: StatusCode },
    #[error("Could not decode the response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
