//! HTTP route handlers.

use axum::extract::State;
use axum::Json;

use crate::config::StorageMode;
use crate::quiz::question_count;
use crate::types::{
    ConfigResponse, HealthResponse, HealthStatus, QuizInfo, ServerInfo, StorageInfo,
};

use super::AppState;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Health check endpoint
///
/// GET /api/v1/health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HealthStatus::Healthy,
        version: VERSION.to_string(),
        storage_mode: state.config.storage.mode.to_string(),
        uptime_seconds: state.uptime_seconds(),
    })
}

/// Configuration endpoint
///
/// GET /api/v1/config
pub async fn config(State(state): State<AppState>) -> Json<ConfigResponse> {
    let config = &state.config;

    let data_dir = match config.storage.mode {
        StorageMode::File => Some(config.storage.data_dir.display().to_string()),
        StorageMode::Memory => None,
    };

    Json(ConfigResponse {
        server: ServerInfo {
            host: config.server.host.clone(),
            port: config.server.port,
        },
        storage: StorageInfo {
            mode: config.storage.mode.to_string(),
            data_dir,
        },
        quiz: QuizInfo {
            question_count: question_count(),
        },
    })
}
