use chrono::NaiveDate;
use serde::Deserialize;

use lexscopic_core::events::{
    normalize_tags, CriteriaError, DateMode, EventDraft, FilterCriteria, DEFAULT_END_TIME,
    DEFAULT_START_TIME,
};
use lexscopic_core::serde::{
    deserialize_optional_date, deserialize_optional_number, deserialize_optional_string,
    deserialize_tag_list,
};

/// Query parameters shared by the listing page and `GET /api/events`.
///
/// Blank values are treated as absent, so the page's own form can submit
/// every field unconditionally.
#[derive(Debug, Default, Deserialize)]
pub struct ListEventsQuery {
    /// Free-text search
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub q: Option<String>,
    /// Price ceiling; `999` means no ceiling
    #[serde(default, deserialize_with = "deserialize_optional_number")]
    pub max_price: Option<f64>,
    /// `any`, `today`, `weekend` or `pick`
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub date: Option<String>,
    /// Picked date (YYYY-MM-DD), used with `date=pick`
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub on: Option<NaiveDate>,
    /// Comma-separated selected tags
    #[serde(default, deserialize_with = "deserialize_tag_list")]
    pub tags: Vec<String>,
}

impl ListEventsQuery {
    /// Converts the query into filter criteria.
    pub fn into_criteria(self, today: NaiveDate) -> Result<FilterCriteria, CriteriaError> {
        let date_mode = DateMode::from_query(self.date.as_deref().unwrap_or(""), self.on, today)?;

        let mut criteria = FilterCriteria::new()
            .with_query(self.q.unwrap_or_default())
            .with_date_mode(date_mode);
        if let Some(max_price) = self.max_price {
            criteria = criteria.with_max_price(max_price);
        }
        for tag in normalize_tags(&self.tags) {
            criteria = criteria.with_tag(tag);
        }

        Ok(criteria)
    }
}

/// Form payload for submitting a new event.
///
/// Missing date and times take the form's initial values.
#[derive(Debug, Deserialize)]
pub struct SubmitEvent {
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub start_time: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub end_time: Option<String>,
    #[serde(default)]
    pub venue: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub neighborhood: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_number")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_tag_list")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub image: Option<String>,
}

impl SubmitEvent {
    /// Converts the form into a draft, filling gaps with the form defaults.
    pub fn into_draft(self, today: NaiveDate) -> EventDraft {
        let defaults = EventDraft::new(today);
        EventDraft {
            title: self.title,
            date: self.date.unwrap_or(defaults.date),
            start_time: self
                .start_time
                .unwrap_or_else(|| DEFAULT_START_TIME.to_string()),
            end_time: self.end_time.unwrap_or_else(|| DEFAULT_END_TIME.to_string()),
            venue: self.venue,
            neighborhood: self.neighborhood,
            price: self.price.unwrap_or(0.0),
            tags: self.tags,
            description: self.description,
            url: self.url,
            image: self.image,
        }
    }
}
