mod calendar_link;
mod criteria;
mod dates;
mod display;
mod error;
mod filter;
mod fixture;
mod sections;
mod submission;
mod tags;
mod types;

pub use calendar_link::{calendar_link, LOCATION_SUFFIX};
pub use criteria::{price_ceiling, toggle_tag, DateMode, FilterCriteria, NO_PRICE_CEILING};
pub use dates::{is_this_weekend, parse_display_time, parse_event_date, today_in, weekend_window};
pub use display::{
    card_tags, format_event_date, format_price, format_time_range, CARD_TAG_LIMIT, DATE_OPTIONS,
    PRICE_OPTIONS,
};
pub use error::{CalendarLinkError, CriteriaError, FixtureError};
pub use filter::{
    compute_visible_events, matches_criteria, matches_date_mode, matches_price, matches_query,
    matches_tags, sort_events_by_date,
};
pub use fixture::{generate_seed_events, parse_fixture};
pub use sections::{
    group_into_sections, Section, SectionKind, Sections, BELOW_HERO_LIMIT, SECTION_LIMIT,
};
pub use submission::{
    prepend_event, submit_event, EventDraft, EventIdGenerator, DEFAULT_END_TIME,
    DEFAULT_START_TIME,
};
pub use tags::{
    normalize_tags, parse_tag_list, tag_display, tag_meta, TagDisplay, TagMeta, DEFAULT_TAG_ICON,
    QUICK_TAGS, TAG_TABLE,
};
pub use types::EventRecord;
