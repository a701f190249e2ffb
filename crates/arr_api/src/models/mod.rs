//! Models used when deserializing Radarr and Sonarr v3 API responses.

pub mod radarr;
pub mod sonarr;

/// The *arr APIs omit `monitored` on some older versions; those items are treated as monitored.
pub(crate) fn default_monitored() -> bool {
    true
}
