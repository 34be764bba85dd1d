//! Date and time parsing for event records.
//!
//! Records carry dates and times as display strings. These functions turn them
//! into chrono values with a fixed, documented set of accepted formats so that
//! filtering never depends on locale behavior.

use chrono::{
    DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc,
};

/// Date formats accepted by [`parse_event_date`], tried in order.
const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%B %d, %Y", "%b %d, %Y"];

/// Parses an event date.
///
/// Accepted formats:
/// - `2025-06-01`
/// - `2025/06/01`
/// - `06/01/2025`
/// - `June 1, 2025` / `Jun 1, 2025`
/// - an RFC 3339 timestamp such as `2025-06-01T19:00:00-04:00` (its own calendar date)
/// - a naive timestamp such as `2025-06-01T19:00:00`
///
/// Surrounding whitespace is ignored. Anything else yields `None`.
pub fn parse_event_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(input, format) {
            return Some(date);
        }
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(input) {
        return Some(datetime.date_naive());
    }

    NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M"))
        .map(|dt| dt.date())
        .ok()
}

/// Parses a display time such as `6:00 PM`.
///
/// Accepted formats: `6 PM`, `6:00 PM`, `6:00pm`, `18:00`, `18:00:00`.
pub fn parse_display_time(input: &str) -> Option<NaiveTime> {
    let upper = input.trim().to_ascii_uppercase();

    let (clock, pm) = if let Some(rest) = upper.strip_suffix("PM") {
        (rest.trim_end(), Some(true))
    } else if let Some(rest) = upper.strip_suffix("AM") {
        (rest.trim_end(), Some(false))
    } else {
        (upper.as_str(), None)
    };

    match pm {
        Some(pm) => {
            let (hour, minute) = match clock.split_once(':') {
                Some((h, m)) => (h.parse::<u32>().ok()?, m.parse::<u32>().ok()?),
                None => (clock.parse::<u32>().ok()?, 0),
            };
            if !(1..=12).contains(&hour) {
                return None;
            }
            let hour = hour % 12 + if pm { 12 } else { 0 };
            NaiveTime::from_hms_opt(hour, minute, 0)
        }
        None => NaiveTime::parse_from_str(clock, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(clock, "%H:%M"))
            .ok(),
    }
}

/// Returns the inclusive `(saturday, sunday)` window of the upcoming weekend.
///
/// Saturday is `today + (6 - weekday + 7) % 7` days, with weekdays numbered
/// from Sunday = 0. On a Saturday the window starts today; on a Sunday it is
/// the following weekend.
pub fn weekend_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let weekday = today.weekday().num_days_from_sunday() as i64;
    let saturday = today + Duration::days((6 - weekday + 7) % 7);
    (saturday, saturday + Duration::days(1))
}

/// Returns true if `date` falls on the upcoming weekend relative to `today`.
pub fn is_this_weekend(date: NaiveDate, today: NaiveDate) -> bool {
    let (saturday, sunday) = weekend_window(today);
    date >= saturday && date <= sunday
}

/// The current date in the given zone.
pub fn today_in<Tz: TimeZone>(tz: &Tz) -> NaiveDate {
    Utc::now().with_timezone(tz).date_naive()
}
