use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::dates::parse_event_date;

/// A single event listing.
///
/// Field names serialize in camelCase so the static fixture and the JSON API
/// share one shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub id: String,
    pub title: String,
    /// Calendar date string. Kept verbatim; see [`EventRecord::parsed_date`].
    pub date: String,
    /// Free-form display string such as `6:00 PM`.
    pub start_time: String,
    pub end_time: String,
    pub venue: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
    /// Ticket price in dollars. `0` means free.
    pub price: f64,
    /// Lowercase category labels, in the order they were listed.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub sponsored: bool,
}

impl EventRecord {
    /// Creates a free event with the given id, title and date.
    pub fn new(id: impl Into<String>, title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            date: date.into(),
            start_time: "6:00 PM".to_string(),
            end_time: "8:00 PM".to_string(),
            venue: String::new(),
            neighborhood: None,
            price: 0.0,
            tags: Vec::new(),
            description: String::new(),
            url: String::new(),
            image: None,
            sponsored: false,
        }
    }

    /// Parses [`EventRecord::date`]. Returns `None` for malformed dates.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_event_date(&self.date)
    }

    /// Returns true if the record carries the given tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Returns true if the event costs nothing.
    pub fn is_free(&self) -> bool {
        self.price == 0.0
    }

    /// Text the search box matches against, lower-cased.
    pub fn search_haystack(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title,
            self.description,
            self.venue,
            self.neighborhood.as_deref().unwrap_or("")
        )
        .to_lowercase()
    }

    pub fn with_times(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_time = start.into();
        self.end_time = end.into();
        self
    }

    pub fn with_venue(mut self, venue: impl Into<String>) -> Self {
        self.venue = venue.into();
        self
    }

    pub fn with_neighborhood(mut self, neighborhood: impl Into<String>) -> Self {
        self.neighborhood = Some(neighborhood.into());
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn sponsored(mut self) -> Self {
        self.sponsored = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_record_builder() {
        let record = EventRecord::new("1", "Jazz Night", "2025-06-01")
            .with_venue("Willie's Locally Known")
            .with_neighborhood("Distillery District")
            .with_price(10.0)
            .with_tags(["music", "night"])
            .sponsored();

        assert_eq!(record.id, "1");
        assert_eq!(record.venue, "Willie's Locally Known");
        assert_eq!(record.neighborhood.as_deref(), Some("Distillery District"));
        assert_eq!(record.tags, vec!["music", "night"]);
        assert!(record.sponsored);
        assert!(!record.is_free());
        assert!(record.has_tag("music"));
        assert!(!record.has_tag("Music"));
    }

    #[test]
    fn test_parsed_date() {
        let record = EventRecord::new("1", "Market", "2025-06-01");
        assert_eq!(record.parsed_date(), NaiveDate::from_ymd_opt(2025, 6, 1));

        let broken = EventRecord::new("2", "Broken", "someday");
        assert_eq!(broken.parsed_date(), None);
    }

    #[test]
    fn test_search_haystack_without_neighborhood() {
        let record = EventRecord::new("1", "Farmers Market", "2025-06-01")
            .with_description("Fresh PRODUCE")
            .with_venue("Tandy Centennial Park");

        assert_eq!(
            record.search_haystack(),
            "farmers market fresh produce tandy centennial park "
        );
    }

    #[test]
    fn test_deserialize_fixture_shape() {
        let json = r#"{
            "id": "evt-1",
            "title": "Thursday Night Live",
            "date": "2025-06-05",
            "startTime": "4:30 PM",
            "endTime": "8:00 PM",
            "venue": "Fifth Third Pavilion",
            "price": 0,
            "description": "Live music downtown",
            "url": "https://example.com/tnl"
        }"#;

        let record: EventRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.start_time, "4:30 PM");
        assert!(record.tags.is_empty());
        assert_eq!(record.neighborhood, None);
        assert!(!record.sponsored);
        assert!(record.is_free());
    }
}
