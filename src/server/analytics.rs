//! Mood analytics endpoints.

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;

use crate::analytics::MoodTrends;
use crate::error::AppError;

use super::AppState;

/// Trailing-window mood histograms for a user's chart. A user with no
/// recorded events gets three empty histograms.
///
/// GET /api/v1/users/:user_id/mood-data
pub async fn mood_data(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<MoodTrends>, AppError> {
    let events = state.store.read_all(&user_id).await?;
    let trends = state.aggregator.aggregate(&events, Utc::now());
    Ok(Json(trends))
}
