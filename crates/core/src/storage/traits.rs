use async_trait::async_trait;

use crate::events::EventRecord;

use super::Result;

/// Repository holding the working list of event records.
///
/// The list is ordered: [`EventRepository::list_events`] returns records in
/// working-list order, newest submissions first.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Returns every record in working-list order.
    async fn list_events(&self) -> Result<Vec<EventRecord>>;

    /// Gets a record by its ID.
    async fn get_event(&self, id: &str) -> Result<Option<EventRecord>>;

    /// Inserts a record at the front of the working list.
    async fn prepend_event(&self, record: &EventRecord) -> Result<()>;

    /// Returns the number of records.
    async fn count(&self) -> Result<usize>;
}
