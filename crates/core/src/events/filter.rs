use chrono::NaiveDate;

use super::criteria::{DateMode, FilterCriteria};
use super::dates::is_this_weekend;
use super::types::EventRecord;

/// Returns true if the record passes the text search.
///
/// An empty query matches everything. Otherwise the lower-cased query must be
/// a substring of the record's title, description, venue and neighborhood.
pub fn matches_query(record: &EventRecord, normalized_query: &str) -> bool {
    normalized_query.is_empty() || record.search_haystack().contains(normalized_query)
}

/// Returns true if the record is at or under the price ceiling.
pub fn matches_price(record: &EventRecord, max_price: Option<f64>) -> bool {
    max_price.is_none_or(|max| record.price <= max)
}

/// Returns true if the record's date satisfies the date mode.
///
/// Records with unparseable dates only match [`DateMode::Any`].
pub fn matches_date_mode(record: &EventRecord, mode: DateMode, today: NaiveDate) -> bool {
    if mode == DateMode::Any {
        return true;
    }
    let Some(date) = record.parsed_date() else {
        return false;
    };
    match mode {
        DateMode::Any => true,
        DateMode::Today => date == today,
        DateMode::Weekend => is_this_weekend(date, today),
        DateMode::On(picked) => date == picked,
    }
}

/// Returns true if the record carries every selected tag.
pub fn matches_tags<'a>(
    record: &EventRecord,
    mut selected: impl Iterator<Item = &'a String>,
) -> bool {
    selected.all(|tag| record.has_tag(tag))
}

/// Returns true if the record passes every active criterion.
pub fn matches_criteria(
    record: &EventRecord,
    criteria: &FilterCriteria,
    today: NaiveDate,
) -> bool {
    matches_query(record, &criteria.normalized_query())
        && matches_price(record, criteria.max_price)
        && matches_date_mode(record, criteria.date_mode, today)
        && matches_tags(record, criteria.tags.iter())
}

/// Stable sort by parsed date, ascending. Unparseable dates go last.
pub fn sort_events_by_date(events: &mut [EventRecord]) {
    events.sort_by_cached_key(|event| {
        let date = event.parsed_date();
        (date.is_none(), date)
    });
}

/// Derives the visible listing from the full record list.
///
/// Keeps records that satisfy all criteria and orders them by date. Records
/// sharing a date keep their relative input order. `today` anchors the
/// `Today` and `Weekend` date modes.
pub fn compute_visible_events(
    all_events: &[EventRecord],
    criteria: &FilterCriteria,
    today: NaiveDate,
) -> Vec<EventRecord> {
    let mut visible: Vec<EventRecord> = all_events
        .iter()
        .filter(|event| matches_criteria(event, criteria, today))
        .cloned()
        .collect();

    sort_events_by_date(&mut visible);
    visible
}
