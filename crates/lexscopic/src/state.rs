//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. The working list lives behind a repository trait object;
//! the clock settings decide what "today" means for the filters.

use std::{collections::HashSet, sync::Arc};

use chrono::NaiveDate;

use lexscopic_core::events::{
    compute_visible_events, generate_seed_events, parse_fixture, submit_event, EventDraft,
    EventIdGenerator, EventRecord, FilterCriteria, FixtureError,
};
use lexscopic_core::storage::{EventRepository, RepositoryError};

use crate::{
    config::{Config, EventZone},
    storage::InMemoryRepository,
};

/// The bundled fixture, used when no fixture path is given.
pub const DEFAULT_FIXTURE: &str = include_str!("../data/events.json");

/// Shared application state.
///
/// This is cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    /// Working list of event records.
    pub event_repo: Arc<dyn EventRepository>,
    /// Id source for submitted events.
    pub id_generator: Arc<EventIdGenerator>,
    /// Zone for "today" and calendar links.
    zone: EventZone,
    /// Overrides the clock's date. Used by tests.
    pinned_today: Option<NaiveDate>,
}

impl AppState {
    fn build(event_repo: Arc<dyn EventRepository>, config: &Config) -> Self {
        Self {
            event_repo,
            id_generator: Arc::new(EventIdGenerator::new()),
            zone: config.zone(),
            pinned_today: None,
        }
    }

    /// Creates state holding the given records in working-list order.
    pub fn with_events(events: Vec<EventRecord>, config: &Config) -> Self {
        Self::build(Arc::new(InMemoryRepository::with_events(events)), config)
    }

    /// Creates state from fixture JSON, adding `config.seed_count` generated
    /// listings that start today.
    pub fn from_fixture(json: &str, config: &Config) -> Result<Self, FixtureError> {
        let mut events = parse_fixture(json)?;

        if config.seed_count > 0 {
            let today = config.zone().today();
            let taken: HashSet<String> = events.iter().map(|e| e.id.clone()).collect();
            events.extend(
                generate_seed_events(today, config.seed_count)
                    .into_iter()
                    .filter(|e| !taken.contains(&e.id)),
            );
        }

        tracing::debug!(count = events.len(), "Loaded event fixture");
        Ok(Self::with_events(events, config))
    }

    /// Creates state from the bundled fixture.
    pub fn with_demo_data(config: &Config) -> Result<Self, FixtureError> {
        Self::from_fixture(DEFAULT_FIXTURE, config)
    }

    /// Pins "today" to a fixed date.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.pinned_today = Some(today);
        self
    }

    /// The current date in the configured zone.
    pub fn today(&self) -> NaiveDate {
        self.pinned_today.unwrap_or_else(|| self.zone.today())
    }

    /// Zone used to turn listing times into UTC calendar stamps.
    pub fn zone(&self) -> EventZone {
        self.zone
    }

    /// Records matching the criteria, in display order.
    pub async fn visible_events(
        &self,
        criteria: &FilterCriteria,
    ) -> Result<Vec<EventRecord>, RepositoryError> {
        let events = self.event_repo.list_events().await?;
        Ok(compute_visible_events(&events, criteria, self.today()))
    }

    /// Turns a draft into a record and prepends it to the working list.
    pub async fn submit(&self, draft: EventDraft) -> Result<EventRecord, RepositoryError> {
        let record = submit_event(draft, self.id_generator.next_id());
        self.event_repo.prepend_event(&record).await?;
        tracing::info!(event_id = %record.id, title = %record.title, "Submitted event");
        Ok(record)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_events(Vec::new(), &Config::from_lookup(|_| None))
    }
}
