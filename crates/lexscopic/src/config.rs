use std::{env, time::Duration};

use chrono::{FixedOffset, Local, NaiveDate};
use chrono_tz::Tz;

use lexscopic_core::events::{calendar_link, today_in, CalendarLinkError, EventRecord};

/// Time zone that listing dates and display times are read in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventZone {
    /// The host's local zone, with its daylight saving rules.
    Local,
    /// A fixed UTC offset.
    Offset(FixedOffset),
    /// A named IANA zone such as `America/New_York`.
    Named(Tz),
}

impl EventZone {
    /// The current date in this zone.
    pub fn today(&self) -> NaiveDate {
        match self {
            Self::Local => today_in(&Local),
            Self::Offset(offset) => today_in(offset),
            Self::Named(tz) => today_in(tz),
        }
    }

    /// Calendar deep link for a record whose times are wall-clock times here.
    pub fn calendar_link(&self, record: &EventRecord) -> Result<String, CalendarLinkError> {
        match self {
            Self::Local => calendar_link(record, &Local),
            Self::Offset(offset) => calendar_link(record, offset),
            Self::Named(tz) => calendar_link(record, tz),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// IANA zone name used for "today" and calendar links.
    pub timezone: Option<String>,
    /// Fixed UTC offset in minutes, used when no zone name is set.
    pub utc_offset_minutes: Option<i32>,
    /// Request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
    /// Number of generated demo listings appended to the fixture (default: 0)
    pub seed_count: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `LEXSCOPIC_TIMEZONE` - Zone name such as `America/New_York` (default: local zone)
    /// - `LEXSCOPIC_UTC_OFFSET_MINUTES` - Fixed offset such as `-300`, when no zone name is set
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout in seconds (default: 10)
    /// - `SEED_COUNT` - Generated demo listings to add (default: 0)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            timezone: lookup("LEXSCOPIC_TIMEZONE")
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            utc_offset_minutes: lookup("LEXSCOPIC_UTC_OFFSET_MINUTES")
                .and_then(|v| v.trim().parse().ok()),
            request_timeout_seconds: lookup("REQUEST_TIMEOUT_SECONDS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(10),
            seed_count: lookup("SEED_COUNT")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(0),
        }
    }

    /// The configured offset, if it is set and within range.
    pub fn utc_offset(&self) -> Option<FixedOffset> {
        self.utc_offset_minutes
            .and_then(|minutes| FixedOffset::east_opt(minutes.checked_mul(60)?))
    }

    /// The zone listing times are read in.
    ///
    /// A valid zone name wins over a valid offset; with neither, the host's
    /// local zone is used.
    pub fn zone(&self) -> EventZone {
        if let Some(name) = &self.timezone {
            match name.parse::<Tz>() {
                Ok(tz) => return EventZone::Named(tz),
                Err(e) => {
                    tracing::warn!(timezone = %name, error = %e, "Ignoring unknown time zone");
                }
            }
        }
        self.utc_offset().map_or(EventZone::Local, EventZone::Offset)
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
