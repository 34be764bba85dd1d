//! View models for the listing page.
//!
//! Everything a template prints is precomputed here as plain strings and
//! flags, so the templates stay free of formatting logic.

use chrono::NaiveDate;

use lexscopic_core::events::{
    card_tags, format_event_date, format_price, format_time_range, is_this_weekend,
    price_ceiling, tag_display, EventRecord, FilterCriteria, Section, Sections, TagDisplay,
    DATE_OPTIONS, PRICE_OPTIONS, QUICK_TAGS,
};

use crate::config::EventZone;

/// One event card.
#[derive(Debug, Clone)]
pub struct EventCard {
    pub id: String,
    pub title: String,
    pub date_label: String,
    pub time_range: String,
    pub venue: String,
    /// Empty when the record has no neighborhood.
    pub neighborhood: String,
    pub price_label: String,
    pub tags: Vec<TagDisplay>,
    pub description: String,
    pub url: String,
    /// Empty when the record has no image.
    pub image: String,
    pub sponsored: bool,
    pub this_weekend: bool,
    /// Empty when the record's date or times cannot be read.
    pub calendar_href: String,
}

impl EventCard {
    pub fn new(record: &EventRecord, zone: EventZone, today: NaiveDate) -> Self {
        let calendar_href = match zone.calendar_link(record) {
            Ok(link) => link,
            Err(e) => {
                tracing::debug!(event_id = %record.id, error = %e, "Omitting calendar link");
                String::new()
            }
        };

        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            date_label: format_event_date(record),
            time_range: format_time_range(record),
            venue: record.venue.clone(),
            neighborhood: record.neighborhood.clone().unwrap_or_default(),
            price_label: format_price(record.price),
            tags: card_tags(record),
            description: record.description.clone(),
            url: record.url.clone(),
            image: record.image.clone().unwrap_or_default(),
            sponsored: record.sponsored,
            this_weekend: record
                .parsed_date()
                .is_some_and(|date| is_this_weekend(date, today)),
            calendar_href,
        }
    }
}

/// A titled group of cards.
#[derive(Debug, Clone)]
pub struct SectionView {
    pub title: String,
    pub cards: Vec<EventCard>,
}

impl SectionView {
    fn new(section: &Section, zone: EventZone, today: NaiveDate) -> Self {
        Self {
            title: section.title.clone(),
            cards: cards(&section.events, zone, today),
        }
    }
}

/// A quick-filter chip linking to the listing with its tag toggled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagChip {
    pub label: String,
    pub icon: &'static str,
    pub href: String,
    pub selected: bool,
}

/// An `<option>` in one of the filter selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// The grouped listing, ready to render.
#[derive(Debug, Clone, Default)]
pub struct ListingView {
    pub featured: Option<EventCard>,
    pub below_hero: Vec<EventCard>,
    /// Only non-empty sections.
    pub sections: Vec<SectionView>,
    /// Every visible record in display order, including those no section holds.
    pub all: Vec<EventCard>,
}

impl ListingView {
    /// `sections` must be grouped from `visible`.
    pub fn new(
        sections: &Sections,
        visible: &[EventRecord],
        zone: EventZone,
        today: NaiveDate,
    ) -> Self {
        Self {
            featured: sections
                .featured
                .as_ref()
                .map(|record| EventCard::new(record, zone, today)),
            below_hero: cards(&sections.below_hero, zone, today),
            sections: sections
                .sections
                .iter()
                .filter(|s| !s.is_empty())
                .map(|s| SectionView::new(s, zone, today))
                .collect(),
            all: cards(visible, zone, today),
        }
    }
}

fn cards(records: &[EventRecord], zone: EventZone, today: NaiveDate) -> Vec<EventCard> {
    records
        .iter()
        .map(|r| EventCard::new(r, zone, today))
        .collect()
}

/// Relative link to the listing page for the given criteria.
pub fn listing_href(criteria: &FilterCriteria) -> String {
    let query = criteria.to_query_string();
    if query.is_empty() {
        "/".to_string()
    } else {
        format!("/?{query}")
    }
}

/// Quick-filter chips, followed by any other selected tags so they can be
/// cleared.
pub fn tag_chips(criteria: &FilterCriteria) -> Vec<TagChip> {
    let extra = criteria
        .tags
        .iter()
        .map(String::as_str)
        .filter(|tag| !QUICK_TAGS.contains(tag));

    QUICK_TAGS
        .iter()
        .copied()
        .chain(extra)
        .map(|tag| {
            let display = tag_display(tag);
            TagChip {
                label: display.label,
                icon: display.icon,
                href: listing_href(&criteria.toggled(tag)),
                selected: criteria.is_tag_selected(tag),
            }
        })
        .collect()
}

pub fn price_options(criteria: &FilterCriteria) -> Vec<SelectOption> {
    PRICE_OPTIONS
        .iter()
        .map(|(value, label)| SelectOption {
            value: value.to_string(),
            label: label.to_string(),
            selected: price_ceiling(*value) == criteria.max_price,
        })
        .collect()
}

pub fn date_options(criteria: &FilterCriteria) -> Vec<SelectOption> {
    let current = criteria.date_mode.as_query_value();
    DATE_OPTIONS
        .iter()
        .map(|(value, label)| SelectOption {
            value: value.to_string(),
            label: label.to_string(),
            selected: *value == current,
        })
        .collect()
}
