use strum_macros::{AsRefStr, Display};

/// The *arr that an instance belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display)]
pub enum ArrType {
    Sonarr,
    Radarr,
}
