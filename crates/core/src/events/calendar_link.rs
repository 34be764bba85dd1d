//! "Add to Google Calendar" deep links.

use chrono::{Duration, NaiveDateTime, TimeZone, Utc};

use super::dates::{parse_display_time, parse_event_date};
use super::error::CalendarLinkError;
use super::types::EventRecord;

const CALENDAR_BASE_URL: &str = "https://www.google.com/calendar/render?action=TEMPLATE";

/// City appended to the venue in the link's location field.
pub const LOCATION_SUFFIX: &str = ", Lexington KY";

/// Builds the calendar deep link for a record.
///
/// The record's date and display times are read as wall-clock time in `tz`
/// and rendered in UTC as `YYYYMMDDTHHMMSSZ`. Each time is resolved against
/// the zone's rules for its own date, so daylight saving applies per event.
/// An end time earlier than the start time is taken to be on the following
/// day. An ambiguous time (clocks falling back) resolves to its earlier
/// instant; a time skipped by clocks springing forward is an error.
pub fn calendar_link<Tz: TimeZone>(
    record: &EventRecord,
    tz: &Tz,
) -> Result<String, CalendarLinkError> {
    let date = parse_event_date(&record.date)
        .ok_or_else(|| CalendarLinkError::InvalidDate(record.date.clone()))?;
    let start_time = parse_display_time(&record.start_time)
        .ok_or_else(|| CalendarLinkError::InvalidStartTime(record.start_time.clone()))?;
    let end_time = parse_display_time(&record.end_time)
        .ok_or_else(|| CalendarLinkError::InvalidEndTime(record.end_time.clone()))?;

    let start = date.and_time(start_time);
    let mut end = date.and_time(end_time);
    if end < start {
        end += Duration::days(1);
    }

    let dates = format!("{}%2F{}", to_utc_stamp(start, tz)?, to_utc_stamp(end, tz)?);
    let details = format!("{} \n{}", record.description, record.url);
    let location = format!("{}{}", record.venue, LOCATION_SUFFIX);

    Ok(format!(
        "{CALENDAR_BASE_URL}&text={}&dates={dates}&details={}&location={}",
        urlencoding::encode(&record.title),
        urlencoding::encode(&details),
        urlencoding::encode(&location),
    ))
}

/// Renders a local wall-clock time as a compact UTC stamp.
fn to_utc_stamp<Tz: TimeZone>(
    local: NaiveDateTime,
    tz: &Tz,
) -> Result<String, CalendarLinkError> {
    let utc = tz
        .from_local_datetime(&local)
        .earliest()
        .ok_or(CalendarLinkError::NonexistentLocalTime(local))?
        .with_timezone(&Utc);
    Ok(utc.format("%Y%m%dT%H%M%SZ").to_string())
}
