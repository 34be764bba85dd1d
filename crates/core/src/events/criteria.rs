use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::CriteriaError;

/// Price ceiling value the page uses for "Any price".
pub const NO_PRICE_CEILING: f64 = 999.0;

/// Date constraint applied by the filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "date", rename_all = "snake_case")]
pub enum DateMode {
    #[default]
    Any,
    Today,
    Weekend,
    /// A specific date picked by the user.
    On(NaiveDate),
}

impl DateMode {
    /// Builds a date mode from the page's `date` and `on` query values.
    ///
    /// `pick` without a date falls back to `today`, matching the date input's
    /// initial value.
    pub fn from_query(
        mode: &str,
        on: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<Self, CriteriaError> {
        match mode.trim() {
            "" | "any" => Ok(DateMode::Any),
            "today" => Ok(DateMode::Today),
            "weekend" => Ok(DateMode::Weekend),
            "pick" => Ok(DateMode::On(on.unwrap_or(today))),
            other => Err(CriteriaError::UnknownDateMode(other.to_string())),
        }
    }

    /// The query value for this mode.
    pub fn as_query_value(&self) -> &'static str {
        match self {
            DateMode::Any => "any",
            DateMode::Today => "today",
            DateMode::Weekend => "weekend",
            DateMode::On(_) => "pick",
        }
    }

    pub fn picked_date(&self) -> Option<NaiveDate> {
        match self {
            DateMode::On(date) => Some(*date),
            _ => None,
        }
    }
}

/// The active combination of search text, price ceiling, date mode and tags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub query: String,
    /// `None` means no ceiling.
    pub max_price: Option<f64>,
    pub date_mode: DateMode,
    /// Selected tags. A record must carry all of them.
    pub tags: BTreeSet<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Sets the ceiling. Values at or above [`NO_PRICE_CEILING`] clear it.
    pub fn with_max_price(mut self, max_price: f64) -> Self {
        self.max_price = price_ceiling(max_price);
        self
    }

    pub fn with_date_mode(mut self, date_mode: DateMode) -> Self {
        self.date_mode = date_mode;
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    /// The trimmed, lower-cased search text.
    pub fn normalized_query(&self) -> String {
        self.query.trim().to_lowercase()
    }

    pub fn is_tag_selected(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Adds the tag if absent, removes it if present.
    /// Returns true if the tag is selected afterwards.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        toggle_tag(&mut self.tags, tag)
    }

    /// Returns a copy with `tag` toggled.
    pub fn toggled(&self, tag: &str) -> Self {
        let mut next = self.clone();
        next.toggle_tag(tag);
        next
    }

    /// Encodes the criteria as a query string understood by the listing page.
    /// Default values are omitted.
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<String> = Vec::new();

        let query = self.query.trim();
        if !query.is_empty() {
            pairs.push(format!("q={}", urlencoding::encode(query)));
        }
        if let Some(max_price) = self.max_price {
            pairs.push(format!("max_price={max_price}"));
        }
        if self.date_mode != DateMode::Any {
            pairs.push(format!("date={}", self.date_mode.as_query_value()));
        }
        if let Some(date) = self.date_mode.picked_date() {
            pairs.push(format!("on={}", date.format("%Y-%m-%d")));
        }
        if !self.tags.is_empty() {
            let joined = self.tags.iter().cloned().collect::<Vec<_>>().join(",");
            pairs.push(format!("tags={}", urlencoding::encode(&joined)));
        }

        pairs.join("&")
    }
}

/// Symmetric-difference update of a selected-tag set.
///
/// Returns true if `tag` is selected after the call.
pub fn toggle_tag(selected: &mut BTreeSet<String>, tag: &str) -> bool {
    if selected.remove(tag) {
        false
    } else {
        selected.insert(tag.to_string());
        true
    }
}

/// Maps a price select value to a ceiling, treating the sentinel as "none".
pub fn price_ceiling(value: f64) -> Option<f64> {
    if value.is_nan() || value >= NO_PRICE_CEILING {
        None
    } else {
        Some(value)
    }
}
