//! Quiz API endpoints.

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use tracing::info;

use crate::error::AppError;
use crate::mood::ALL_MOODS;
use crate::quiz::{AdvanceOutcome, QUESTIONS};
use crate::storage::MoodEvent;
use crate::types::{
    ListMoodsResponse, ListQuestionsResponse, MoodInfo, QuestionInfo, QuizStateResponse,
    ResetResponse, SubmitAnswerRequest,
};

use super::AppState;

/// List the quiz script
///
/// GET /api/v1/quiz/questions
pub async fn list_questions() -> Json<ListQuestionsResponse> {
    let questions: Vec<QuestionInfo> = QUESTIONS.iter().map(QuestionInfo::from).collect();
    Json(ListQuestionsResponse {
        count: questions.len(),
        questions,
    })
}

/// List the mood catalog
///
/// GET /api/v1/moods
pub async fn list_moods() -> Json<ListMoodsResponse> {
    let moods: Vec<MoodInfo> = ALL_MOODS.iter().map(|mood| MoodInfo::new(*mood)).collect();
    Json(ListMoodsResponse {
        count: moods.len(),
        moods,
    })
}

/// Current session state for a user; a user without a session sees the
/// fresh initial state
///
/// GET /api/v1/users/:user_id/quiz
pub async fn session_state(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Json<QuizStateResponse> {
    let entry = state.sessions.entry(&user_id).await;
    let entry = entry.lock().await;
    Json(QuizStateResponse::from_session(&entry.session))
}

/// Submit one answer and advance the session. Completing the quiz records a
/// mood event; submitting past completion is a no-op that reports the
/// existing result.
///
/// POST /api/v1/users/:user_id/quiz/answer
pub async fn submit_answer(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(req): Json<SubmitAnswerRequest>,
) -> Result<Json<QuizStateResponse>, AppError> {
    let entry = state.sessions.entry(&user_id).await;
    let mut entry = entry.lock().await;
    entry.touch();

    let outcome = entry.session.advance(&req.answer);

    if let AdvanceOutcome::Completed { score, mood } = outcome {
        state
            .store
            .append(MoodEvent::new(user_id.clone(), Utc::now(), mood))
            .await?;
        info!(user = %user_id, %mood, score, "Quiz completed");
    }

    Ok(Json(QuizStateResponse::from_session(&entry.session)))
}

/// Start a fresh attempt, discarding any in-progress or completed session.
/// Previously recorded events are untouched.
///
/// POST /api/v1/users/:user_id/quiz/reset
pub async fn reset_session(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Json<ResetResponse> {
    let entry = state.sessions.entry(&user_id).await;
    let mut entry = entry.lock().await;
    entry.touch();
    entry.session.reset();

    Json(ResetResponse {
        user_id,
        reset: true,
    })
}
