//! Loading the static event fixture and generating demo listings.
//!
//! Both are pure: the caller reads the fixture file, these functions only
//! parse and validate.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate};

use super::error::FixtureError;
use super::tags::normalize_tags;
use super::types::EventRecord;

/// Parses and validates a JSON array of event records.
///
/// Rejects duplicate ids and negative prices. Tags are normalized to lower
/// case on the way in.
pub fn parse_fixture(json: &str) -> Result<Vec<EventRecord>, FixtureError> {
    let mut records: Vec<EventRecord> = serde_json::from_str(json)?;

    let mut seen = HashSet::with_capacity(records.len());
    for record in &mut records {
        if !seen.insert(record.id.clone()) {
            return Err(FixtureError::DuplicateId(record.id.clone()));
        }
        if record.price < 0.0 || record.price.is_nan() {
            return Err(FixtureError::NegativePrice {
                id: record.id.clone(),
                price: record.price,
            });
        }
        record.tags = normalize_tags(&record.tags);
    }

    Ok(records)
}

/// Generates demo listings spread over the days after `start_date`.
///
/// Titles, venues, prices and tags cycle through fixed lists, so the output is
/// deterministic for a given `start_date` and `count`.
///
/// # Example
///
/// ```
/// use lexscopic_core::events::generate_seed_events;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
/// let events = generate_seed_events(start, 12);
///
/// assert_eq!(events.len(), 12);
/// ```
pub fn generate_seed_events(start_date: NaiveDate, count: u32) -> Vec<EventRecord> {
    let titles = [
        "Thursday Night Live",
        "Farmers Market",
        "Gallery Hop",
        "Story Time",
        "Trail Run Meetup",
        "Open Mic Poetry",
        "Bluegrass Jam",
        "Family Movie Night",
    ];
    let venues = [
        ("Fifth Third Pavilion", Some("Downtown")),
        ("Tandy Centennial Park", Some("Downtown")),
        ("LexArts Gallery", None),
        ("Central Library", Some("Downtown")),
        ("Raven Run Nature Sanctuary", Some("South Elkhorn")),
        ("Al's Bar", Some("North Limestone")),
        ("Willie's Locally Known", Some("Distillery District")),
        ("Jacobson Park", Some("Hamburg")),
    ];
    let tags: [&[&str]; 8] = [
        &["music", "night"],
        &["family", "outdoors"],
        &["arts"],
        &["kids", "family", "education"],
        &["outdoors", "fitness"],
        &["spoken word", "arts"],
        &["music"],
        &["family", "kids", "outdoors"],
    ];
    let prices = [0.0, 0.0, 5.0, 0.0, 10.0, 3.0, 15.0, 0.0];
    let times = [
        ("4:30 PM", "8:00 PM"),
        ("7:00 AM", "12:00 PM"),
        ("5:00 PM", "8:00 PM"),
        ("10:30 AM", "11:30 AM"),
        ("6:00 PM", "7:30 PM"),
        ("8:00 PM", "10:00 PM"),
        ("7:00 PM", "11:00 PM"),
        ("8:30 PM", "10:30 PM"),
    ];

    (0..count as usize)
        .map(|i| {
            let slot = i % titles.len();
            let date = start_date + Duration::days((i / 2) as i64);
            let (venue, neighborhood) = venues[slot];
            let (start, end) = times[slot];

            let mut record = EventRecord::new(
                format!("seed-{}", i + 1),
                titles[slot],
                date.format("%Y-%m-%d").to_string(),
            )
            .with_times(start, end)
            .with_venue(venue)
            .with_price(prices[slot])
            .with_tags(tags[slot].iter().copied())
            .with_description(format!("{} at {}.", titles[slot], venue))
            .with_url(format!("https://lexscopic.com/events/seed-{}", i + 1));

            if let Some(neighborhood) = neighborhood {
                record = record.with_neighborhood(neighborhood);
            }
            if i % 7 == 0 {
                record = record.sponsored();
            }
            record
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fixture() {
        let json = r#"[
            {"id": "1", "title": "A", "date": "2025-06-01", "startTime": "6 PM",
             "endTime": "8 PM", "venue": "V", "price": 0, "tags": ["Music"],
             "description": "", "url": ""},
            {"id": "2", "title": "B", "date": "2025-06-02", "startTime": "6 PM",
             "endTime": "8 PM", "venue": "V", "price": 12.5,
             "description": "", "url": "", "sponsored": true}
        ]"#;

        let records = parse_fixture(json).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].tags, vec!["music"]);
        assert!(records[1].tags.is_empty());
        assert!(records[1].sponsored);
    }

    #[test]
    fn test_parse_fixture_rejects_duplicates() {
        let json = r#"[
            {"id": "1", "title": "A", "date": "2025-06-01", "startTime": "", "endTime": "",
             "venue": "", "price": 0},
            {"id": "1", "title": "B", "date": "2025-06-02", "startTime": "", "endTime": "",
             "venue": "", "price": 0}
        ]"#;

        assert!(matches!(
            parse_fixture(json),
            Err(FixtureError::DuplicateId(id)) if id == "1"
        ));
    }

    #[test]
    fn test_parse_fixture_rejects_negative_price() {
        let json = r#"[{"id": "x", "title": "A", "date": "2025-06-01", "startTime": "",
                        "endTime": "", "venue": "", "price": -1}]"#;

        assert!(matches!(
            parse_fixture(json),
            Err(FixtureError::NegativePrice { .. })
        ));
    }

    #[test]
    fn test_parse_fixture_rejects_malformed_json() {
        assert!(matches!(
            parse_fixture("{not json"),
            Err(FixtureError::Parse(_))
        ));
    }

    #[test]
    fn test_generate_seed_events() {
        let start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let events = generate_seed_events(start, 20);

        assert_eq!(events.len(), 20);
        let ids: HashSet<&str> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), 20);
        assert!(events.iter().all(|e| e.parsed_date().is_some()));
        assert!(events.iter().all(|e| e.price >= 0.0));
        assert_eq!(events[0].date, "2025-06-01");
        assert_eq!(events[19].date, "2025-06-10");
    }

    #[test]
    fn test_generate_seed_events_is_deterministic() {
        let start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(
            generate_seed_events(start, 10),
            generate_seed_events(start, 10)
        );
    }
}
