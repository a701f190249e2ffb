use crate::arr_type::ArrType;
use std::fmt::{Debug, Formatter};
use url::Url;

/// Connection details for a single Radarr or Sonarr server.
#[derive(Clone, PartialEq)]
pub struct InstanceConfig {
    /// Human-readable name, used as the section heading in notifications.
    pub label: String,
    pub base_url: Url,
    pub api_key: String,
    pub kind: ArrType,
}

impl InstanceConfig {
    pub fn new(label: &str, base_url: Url, api_key: &str, kind: ArrType) -> Self {
        InstanceConfig {
            label: String::from(label),
            base_url,
            api_key: String::from(api_key),
            kind,
        }
    }

    /// Build the URL of some `/api/v3` resource on this instance, preserving any path prefix the
    /// instance is hosted under (e.g. `https://host/radarr`).
    pub fn api_url(&self, resource: &str) -> String {
        format!(
            "{}/api/v3/{}",
            self.base_url.as_str().trim_end_matches('/'),
            resource.trim_start_matches('/')
        )
    }
}

// Keeps the API key out of logs.
impl Debug for InstanceConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstanceConfig")
            .field("label", &self.label)
            .field("base_url", &self.base_url.as_str())
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}
