//! Normalized release records, independent of the *arr wire format.

use crate::arr_type::ArrType;
use crate::instance::InstanceConfig;
use chrono::NaiveDate;
use strum_macros::{AsRefStr, Display};

/// Which of a movie's release dates fell on today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ReleaseType {
    Digital,
    Physical,
    Cinema,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MovieRelease {
    pub title: String,
    pub year: Option<u32>,
    pub release_type: ReleaseType,
    pub tmdb_id: Option<u32>,
    pub instance_label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EpisodeRelease {
    pub series_title: String,
    pub tvdb_id: Option<u32>,
    pub season_number: u32,
    pub episode_number: u32,
    pub episode_title: String,
    pub air_date: NaiveDate,
    pub instance_label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Release {
    Movie(MovieRelease),
    Episode(EpisodeRelease),
}

/// Everything one instance reported for today, in the order the instance returned it.
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceReleases {
    pub label: String,
    pub kind: ArrType,
    pub releases: Vec<Release>,
    /// Set when the instance could not be queried; `releases` is then empty.
    pub failed: bool,
}

impl InstanceReleases {
    pub fn new(instance: &InstanceConfig, releases: Vec<Release>) -> Self {
        InstanceReleases {
            label: instance.label.clone(),
            kind: instance.kind,
            releases,
            failed: false,
        }
    }

    /// The result for an instance whose fetch failed.
    pub fn failed(instance: &InstanceConfig) -> Self {
        InstanceReleases {
            failed: true,
            ..InstanceReleases::new(instance, Vec::new())
        }
    }

    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }

    pub fn movies(&self) -> impl Iterator<Item = &MovieRelease> {
        self.releases.iter().filter_map(|r| match r {
            Release::Movie(m) => Some(m),
            Release::Episode(_) => None,
        })
    }

    pub fn episodes(&self) -> impl Iterator<Item = &EpisodeRelease> {
        self.releases.iter().filter_map(|r| match r {
            Release::Episode(e) => Some(e),
            Release::Movie(_) => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::ReleaseType;

    #[test]
    fn release_type_displays_lowercase() {
        assert_eq!("digital", ReleaseType::Digital.to_string());
        assert_eq!("physical", ReleaseType::Physical.as_ref());
        assert_eq!("cinema", ReleaseType::Cinema.to_string());
    }
}
