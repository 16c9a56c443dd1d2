//! Mood event persistence.
//!
//! This module provides an append-only, per-user log of mood classification
//! events behind a storage abstraction, with implementations for:
//! - in-memory storage (tests, ephemeral deployments)
//! - a JSON-lines log file (durable single-file storage)

mod file;
mod memory;

pub use file::FileEventStore;
pub use memory::MemoryEventStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::mood::MoodCategory;

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// One recorded mood classification.
///
/// Immutable once written; a user's events are ordered by timestamp
/// ascending, ties broken by insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEvent {
    /// Owner of the event
    pub user_id: String,
    /// When the quiz completed
    pub timestamp: DateTime<Utc>,
    /// Classified mood
    pub mood: MoodCategory,
}

impl MoodEvent {
    pub fn new(user_id: impl Into<String>, timestamp: DateTime<Utc>, mood: MoodCategory) -> Self {
        Self {
            user_id: user_id.into(),
            timestamp,
            mood,
        }
    }
}

/// Trait for mood event log backends.
///
/// `read_all` reflects every prior `append` (read-your-writes), and each
/// user's log is independently ordered regardless of concurrent appends for
/// other users.
#[async_trait]
pub trait MoodEventStore: Send + Sync {
    /// Append one event to its user's log.
    async fn append(&self, event: MoodEvent) -> Result<(), StoreError>;

    /// All events for a user, ascending by timestamp.
    async fn read_all(&self, user_id: &str) -> Result<Vec<MoodEvent>, StoreError>;
}

/// Stable sort used by backends so timestamp ties keep insertion order.
fn sort_by_timestamp(events: &mut [MoodEvent]) {
    events.sort_by_key(|event| event.timestamp);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_mood_event_serde_roundtrip() {
        let event = MoodEvent::new(
            "ada@example.com",
            Utc.with_ymd_and_hms(2025, 3, 15, 9, 30, 0).unwrap(),
            MoodCategory::Peaceful,
        );

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("ada@example.com"));
        assert!(json.contains("\"peaceful\""));

        let decoded: MoodEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, event);
    }

    #[test]
    fn test_sort_is_stable_for_equal_timestamps() {
        let ts = Utc.with_ymd_and_hms(2025, 3, 15, 9, 30, 0).unwrap();
        let mut events = vec![
            MoodEvent::new("u", ts, MoodCategory::Happy),
            MoodEvent::new("u", ts, MoodCategory::Sad),
            MoodEvent::new("u", ts - chrono::Duration::hours(1), MoodCategory::Excited),
        ];

        sort_by_timestamp(&mut events);

        assert_eq!(events[0].mood, MoodCategory::Excited);
        assert_eq!(events[1].mood, MoodCategory::Happy);
        assert_eq!(events[2].mood, MoodCategory::Sad);
    }
}
