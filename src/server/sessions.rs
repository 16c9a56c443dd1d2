//! Per-user quiz session registry.
//!
//! One live [`QuizSession`] per user, behind a per-user mutex so concurrent
//! submissions for the same user are serialized and the cursor/score
//! invariant holds. Idle sessions are reaped by a background task.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::{Mutex, RwLock};
use tracing::info;

use crate::quiz::QuizSession;

/// Sessions idle longer than this are discarded (30 minutes)
const SESSION_IDLE_TIMEOUT_SECS: u64 = 1800;

/// How often the reaper scans for idle sessions
const CLEANUP_INTERVAL_SECS: u64 = 300;

/// A live session plus its activity clock
#[derive(Debug)]
pub struct SessionEntry {
    pub session: QuizSession,
    last_activity: Instant,
}

impl SessionEntry {
    fn new(user_id: &str) -> Self {
        Self {
            session: QuizSession::new(user_id),
            last_activity: Instant::now(),
        }
    }

    /// Record activity, deferring expiry.
    pub fn touch(&mut self) {
        self.last_activity = Instant::now();
    }

    fn is_idle(&self) -> bool {
        self.last_activity.elapsed().as_secs() > SESSION_IDLE_TIMEOUT_SECS
    }
}

/// Registry of in-progress quiz sessions, one per user
#[derive(Default)]
pub struct SessionManager {
    sessions: RwLock<HashMap<String, Arc<Mutex<SessionEntry>>>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// The session handle for a user, created on first touch.
    pub async fn entry(&self, user_id: &str) -> Arc<Mutex<SessionEntry>> {
        if let Some(entry) = self.sessions.read().await.get(user_id) {
            return entry.clone();
        }

        let mut sessions = self.sessions.write().await;
        sessions
            .entry(user_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(SessionEntry::new(user_id))))
            .clone()
    }

    /// Drop a user's session entirely.
    pub async fn remove(&self, user_id: &str) -> bool {
        self.sessions.write().await.remove(user_id).is_some()
    }

    /// Discard sessions idle past the timeout. Entries locked by an in-flight
    /// request are active and kept.
    pub async fn cleanup_idle(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| match entry.try_lock() {
            Ok(entry) => !entry.is_idle(),
            Err(_) => true,
        });
        before - sessions.len()
    }

    /// Get number of live sessions
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

/// Spawn the periodic idle-session reaper.
pub fn spawn_session_cleanup_task(manager: Arc<SessionManager>) {
    tokio::spawn(async move {
        let mut interval =
            tokio::time::interval(std::time::Duration::from_secs(CLEANUP_INTERVAL_SECS));

        loop {
            interval.tick().await;

            let cleaned = manager.cleanup_idle().await;
            if cleaned > 0 {
                info!(count = cleaned, "Cleaned up idle quiz sessions");
            }
        }
    });

    info!(
        interval_secs = CLEANUP_INTERVAL_SECS,
        timeout_secs = SESSION_IDLE_TIMEOUT_SECS,
        "Started quiz session cleanup task"
    );
}
