//! Read-only access to Radarr and Sonarr: which tracked movies and episodes are released today.

mod arr_api_error;
mod arr_client;
mod arr_type;
mod fetcher;
mod instance;
pub mod models;
mod release_date;
mod releases;

pub use arr_api_error::FetchError;
pub use arr_client::ArrClient;
pub use arr_type::ArrType;
pub use fetcher::{fetch_for_date, fetch_today};
pub use instance::InstanceConfig;
pub use release_date::{calendar_date, ReleaseClock};
pub use releases::{EpisodeRelease, InstanceReleases, MovieRelease, Release, ReleaseType};
