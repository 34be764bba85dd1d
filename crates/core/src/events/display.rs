//! Display formatting for event listings.
//!
//! Pure helpers shared by the HTML page and the CLI.

use super::tags::{tag_display, TagDisplay};
use super::types::EventRecord;

/// Maximum number of tag pills shown on an event card.
pub const CARD_TAG_LIMIT: usize = 4;

/// Price ceiling choices offered by the listing page, as `(value, label)`.
pub const PRICE_OPTIONS: [(f64, &str); 4] = [
    (999.0, "Any price"),
    (0.0, "Free only"),
    (10.0, "Under $10"),
    (20.0, "Under $20"),
];

/// Date filter choices offered by the listing page, as `(value, label)`.
pub const DATE_OPTIONS: [(&str, &str); 4] = [
    ("any", "Any date"),
    ("today", "Today"),
    ("weekend", "This weekend"),
    ("pick", "Pick a date"),
];

/// Formats a price for display.
///
/// `0` is `Free`, anything under a dollar is `$0–$1`, everything else is
/// rounded to whole dollars.
pub fn format_price(price: f64) -> String {
    if price == 0.0 {
        "Free".to_string()
    } else if price < 1.0 {
        "$0–$1".to_string()
    } else {
        format!("${}", price.round() as i64)
    }
}

/// Formats the record's date as `Sun, Jun 1`, or returns the raw string if it
/// cannot be parsed.
pub fn format_event_date(record: &EventRecord) -> String {
    match record.parsed_date() {
        Some(date) => date.format("%a, %b %-d").to_string(),
        None => record.date.clone(),
    }
}

/// Formats the time range, e.g. `6:00 PM – 8:00 PM`.
pub fn format_time_range(record: &EventRecord) -> String {
    format!("{} – {}", record.start_time, record.end_time)
}

/// The tag pills shown on a card.
pub fn card_tags(record: &EventRecord) -> Vec<TagDisplay> {
    record
        .tags
        .iter()
        .take(CARD_TAG_LIMIT)
        .map(|tag| tag_display(tag))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0.0), "Free");
        assert_eq!(format_price(0.5), "$0–$1");
        assert_eq!(format_price(1.0), "$1");
        assert_eq!(format_price(12.49), "$12");
        assert_eq!(format_price(12.5), "$13");
        assert_eq!(format_price(20.0), "$20");
    }

    #[test]
    fn test_format_event_date() {
        let record = EventRecord::new("1", "Market", "2025-06-01");
        assert_eq!(format_event_date(&record), "Sun, Jun 1");

        let broken = EventRecord::new("2", "Broken", "TBD");
        assert_eq!(format_event_date(&broken), "TBD");
    }

    #[test]
    fn test_format_time_range() {
        let record = EventRecord::new("1", "Show", "2025-06-01").with_times("7:00 PM", "9:30 PM");
        assert_eq!(format_time_range(&record), "7:00 PM – 9:30 PM");
    }

    #[test]
    fn test_card_tags_are_capped() {
        let record = EventRecord::new("1", "Everything Fest", "2025-06-01")
            .with_tags(["music", "arts", "family", "kids", "night"]);

        let tags = card_tags(&record);

        assert_eq!(tags.len(), CARD_TAG_LIMIT);
        assert_eq!(tags[0].label, "Music");
        assert_eq!(tags[3].label, "Kids");
    }
}
