//! Turning a submitted form draft into a listing.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::tags::normalize_tags;
use super::types::EventRecord;

/// Default start time pre-filled in the submission form.
pub const DEFAULT_START_TIME: &str = "6:00 PM";
/// Default end time pre-filled in the submission form.
pub const DEFAULT_END_TIME: &str = "8:00 PM";

/// An event as typed into the submission form. Nothing is validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub venue: String,
    #[serde(default)]
    pub neighborhood: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl EventDraft {
    /// An empty draft with the form's initial values.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            title: String::new(),
            date: today.format("%Y-%m-%d").to_string(),
            start_time: DEFAULT_START_TIME.to_string(),
            end_time: DEFAULT_END_TIME.to_string(),
            venue: String::new(),
            neighborhood: None,
            price: 0.0,
            tags: Vec::new(),
            description: String::new(),
            url: String::new(),
            image: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
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

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }
}

/// Builds the stored record for a draft.
///
/// Tags are trimmed and lower-cased, blank optional fields are dropped, and a
/// negative or non-finite price becomes `0`. This never fails.
pub fn submit_event(draft: EventDraft, id: impl Into<String>) -> EventRecord {
    let price = if draft.price.is_finite() && draft.price > 0.0 {
        draft.price
    } else {
        0.0
    };

    EventRecord {
        id: id.into(),
        title: draft.title,
        date: draft.date,
        start_time: draft.start_time,
        end_time: draft.end_time,
        venue: draft.venue,
        neighborhood: non_blank(draft.neighborhood),
        price,
        tags: normalize_tags(&draft.tags),
        description: draft.description,
        url: draft.url,
        image: non_blank(draft.image),
        sponsored: false,
    }
}

/// Prepends a submitted record to the working list.
pub fn prepend_event(events: &mut Vec<EventRecord>, record: EventRecord) {
    events.insert(0, record);
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Hands out millisecond-timestamp ids that never repeat within a process.
///
/// When two submissions land in the same millisecond the second one gets the
/// next free value.
#[derive(Debug, Default)]
pub struct EventIdGenerator {
    last: AtomicU64,
}

impl EventIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an id based on the current time.
    pub fn next_id(&self) -> String {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        self.next_id_at(now)
    }

    /// Returns an id for the given timestamp, bumped past any id already issued.
    pub fn next_id_at(&self, now_millis: u64) -> String {
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now_millis.max(last + 1);
            match self
                .last
                .compare_exchange_weak(last, candidate, Ordering::AcqRel, Ordering::Relaxed)
            {
                Ok(_) => return candidate.to_string(),
                Err(current) => last = current,
            }
        }
    }
}
