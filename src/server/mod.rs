//! HTTP server setup and routing.

mod analytics;
mod quiz;
mod routes;
mod sessions;

pub use sessions::{spawn_session_cleanup_task, SessionManager};

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Instant;
use tower_http::trace::TraceLayer;

use crate::analytics::MoodAggregator;
use crate::config::AppConfig;
use crate::storage::MoodEventStore;

/// Type alias for boxed store implementation
pub type BoxedStore = Box<dyn MoodEventStore>;

/// Shared application state passed to all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    /// Mood event log backend
    pub store: Arc<BoxedStore>,
    /// In-progress quiz sessions, one per user
    pub sessions: Arc<SessionManager>,
    pub aggregator: Arc<MoodAggregator>,
    /// Server start time for uptime calculation
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: AppConfig, store: BoxedStore) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
            sessions: Arc::new(SessionManager::new()),
            aggregator: Arc::new(MoodAggregator::new()),
            started_at: Instant::now(),
        }
    }

    /// Get uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

/// Creates the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(routes::health))
        .route("/config", get(routes::config))
        // Quiz script and mood catalog
        .route("/quiz/questions", get(quiz::list_questions))
        .route("/moods", get(quiz::list_moods))
        // Per-user quiz session endpoints
        .route("/users/:user_id/quiz", get(quiz::session_state))
        .route("/users/:user_id/quiz/answer", post(quiz::submit_answer))
        .route("/users/:user_id/quiz/reset", post(quiz::reset_session))
        // Analytics
        .route("/users/:user_id/mood-data", get(analytics::mood_data));

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
