use std::sync::Arc;

use tokio::sync::RwLock;

use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct EventRepository {
    events: Arc<RwLock<Vec<EventEntity>>>,
}

impl EventRepository {
    pub fn new(events: Vec<EventEntity>) -> Self {
        Self {
            events: Arc::new(RwLock::new(events)),
        }
    }
}

impl EventRepository {
    /// All events in insertion order, the order the seed list declares.
    pub async fn find_all(&self) -> anyhow::Result<Vec<EventEntity>> {
        let events = self.events.read().await;

        Ok(events.clone())
    }

    /// Linear scan for the first event carrying `slug`. `None` means no
    /// event has that slug, distinct from the collection being empty.
    pub async fn find_by_slug(
        &self,
        slug: &str,
    ) -> anyhow::Result<Option<EventEntity>> {
        let events = self.events.read().await;

        Ok(events.iter().find(|event| event.slug == slug).cloned())
    }
}
