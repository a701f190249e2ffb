//! Deciding what "today" is, and reading the *arr date fields as calendar dates.

use chrono::{DateTime, Duration, Local, NaiveDate, Utc};
use chrono_tz::Tz;
use tracing::warn;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The timezone in which "today" is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ReleaseClock {
    /// The timezone of the machine running the check.
    #[default]
    Local,
    /// An explicit IANA timezone.
    Zone(Tz),
}

impl ReleaseClock {
    /// The current calendar date in this clock's timezone.
    pub fn today(&self) -> NaiveDate {
        self.date_of(Utc::now())
    }

    /// The calendar date some instant falls on in this clock's timezone.
    pub fn date_of(&self, instant: DateTime<Utc>) -> NaiveDate {
        match self {
            ReleaseClock::Local => instant.with_timezone(&Local).date_naive(),
            ReleaseClock::Zone(tz) => instant.with_timezone(tz).date_naive(),
        }
    }
}

/// The `start`/`end` dates to ask an *arr calendar for when looking for `today`'s releases.
///
/// The *arr APIs treat date-only bounds as midnight UTC, so a window of exactly `today` misses
/// releases that fall on `today` in zones away from UTC. One day either side covers every zone;
/// results are narrowed to `today` afterwards.
pub(crate) fn query_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    (today - Duration::days(1), today + Duration::days(2))
}

/// Read the calendar date at the start of an *arr date field, accepting both `2024-03-15` and
/// `2024-03-15T00:00:00Z`. The time part is ignored. Unparsable values yield [None].
pub fn calendar_date(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    let date_part = raw.split('T').next().unwrap_or(raw);
    match NaiveDate::parse_from_str(date_part, DATE_FORMAT) {
        Ok(d) => Some(d),
        Err(e) => {
            warn!(value = raw, "Could not parse date: {}", e);
            None
        }
    }
}

/// Read a full RFC 3339 timestamp such as Sonarr's `airDateUtc`.
pub(crate) fn utc_instant(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?.trim();
    match DateTime::parse_from_rfc3339(raw) {
        Ok(d) => Some(d.with_timezone(&Utc)),
        Err(e) => {
            warn!(value = raw, "Could not parse timestamp: {}", e);
            None
        }
    }
}
