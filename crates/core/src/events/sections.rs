//! Grouping of the visible listing into display sections.
//!
//! The page shows one featured record, a short row of the next nearest
//! records, and a handful of tag sections. Sections overlap: a record can
//! show up in several of them.

use serde::{Deserialize, Serialize};

use super::types::EventRecord;

/// Maximum number of records shown in one tag section.
pub const SECTION_LIMIT: usize = 6;

/// Number of records shown in the row below the featured record.
pub const BELOW_HERO_LIMIT: usize = 2;

/// Fixed tag categories, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Music,
    Outdoors,
    Family,
    ArtsOrKids,
}

impl SectionKind {
    pub const ALL: [SectionKind; 4] = [
        SectionKind::Music,
        SectionKind::Outdoors,
        SectionKind::Family,
        SectionKind::ArtsOrKids,
    ];

    /// Tags that place a record in this section. Any one of them is enough.
    pub fn tags(&self) -> &'static [&'static str] {
        match self {
            SectionKind::Music => &["music"],
            SectionKind::Outdoors => &["outdoors"],
            SectionKind::Family => &["family"],
            SectionKind::ArtsOrKids => &["arts", "kids"],
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::Music => "Live Music",
            SectionKind::Outdoors => "Get Outside",
            SectionKind::Family => "Family Friendly",
            SectionKind::ArtsOrKids => "Arts & Kids",
        }
    }

    /// Returns true if the record belongs in this section.
    pub fn matches(&self, record: &EventRecord) -> bool {
        self.tags().iter().any(|tag| record.has_tag(tag))
    }
}

/// One capped tag section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub kind: SectionKind,
    pub title: String,
    pub events: Vec<EventRecord>,
}

impl Section {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// The visible listing split into display groups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sections {
    pub featured: Option<EventRecord>,
    pub below_hero: Vec<EventRecord>,
    pub sections: Vec<Section>,
}

impl Sections {
    /// Returns the section of the given kind.
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }
}

/// Splits the visible listing into featured, below-hero and tag sections.
///
/// `visible` is expected in display order (see `compute_visible_events`).
/// Every section is reported, in [`SectionKind::ALL`] order, even when empty.
pub fn group_into_sections(visible: &[EventRecord]) -> Sections {
    let Some((featured, rest)) = visible.split_first() else {
        return Sections {
            featured: None,
            below_hero: Vec::new(),
            sections: SectionKind::ALL.iter().map(|kind| empty_section(*kind)).collect(),
        };
    };

    let below_hero = rest.iter().take(BELOW_HERO_LIMIT).cloned().collect();

    let sections = SectionKind::ALL
        .iter()
        .map(|kind| Section {
            kind: *kind,
            title: kind.title().to_string(),
            events: rest
                .iter()
                .filter(|record| kind.matches(record))
                .take(SECTION_LIMIT)
                .cloned()
                .collect(),
        })
        .collect();

    Sections {
        featured: Some(featured.clone()),
        below_hero,
        sections,
    }
}

fn empty_section(kind: SectionKind) -> Section {
    Section {
        kind,
        title: kind.title().to_string(),
        events: Vec::new(),
    }
}
