//! In-memory mood event storage.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{sort_by_timestamp, MoodEvent, MoodEventStore, StoreError};

/// Keeps each user's log in process memory. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryEventStore {
    events: RwLock<HashMap<String, Vec<MoodEvent>>>,
}

impl MemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MoodEventStore for MemoryEventStore {
    async fn append(&self, event: MoodEvent) -> Result<(), StoreError> {
        let mut events = self.events.write().await;
        events
            .entry(event.user_id.clone())
            .or_default()
            .push(event);
        Ok(())
    }

    async fn read_all(&self, user_id: &str) -> Result<Vec<MoodEvent>, StoreError> {
        let events = self.events.read().await;
        let mut log = events.get(user_id).cloned().unwrap_or_default();
        sort_by_timestamp(&mut log);
        Ok(log)
    }
}
