//! In-memory repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use lexscopic_core::events::{prepend_event, EventRecord};
use lexscopic_core::storage::{EventRepository, RepositoryError, Result};

/// In-memory storage backend.
///
/// Records are kept in working-list order behind an `Arc<RwLock<_>>`, so
/// clones share the same list.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    events: Arc<RwLock<Vec<EventRecord>>>,
}

impl InMemoryRepository {
    /// Creates a repository holding the given records, in order.
    pub fn with_events(events: Vec<EventRecord>) -> Self {
        Self {
            events: Arc::new(RwLock::new(events)),
        }
    }
}

#[async_trait]
impl EventRepository for InMemoryRepository {
    async fn list_events(&self) -> Result<Vec<EventRecord>> {
        let events = self.events.read().await;
        Ok(events.clone())
    }

    async fn get_event(&self, id: &str) -> Result<Option<EventRecord>> {
        let events = self.events.read().await;
        Ok(events.iter().find(|e| e.id == id).cloned())
    }

    async fn prepend_event(&self, record: &EventRecord) -> Result<()> {
        let mut events = self.events.write().await;
        if events.iter().any(|e| e.id == record.id) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Event",
                id: record.id.clone(),
            });
        }
        prepend_event(&mut events, record.clone());
        Ok(())
    }

    async fn count(&self) -> Result<usize> {
        let events = self.events.read().await;
        Ok(events.len())
    }
}
