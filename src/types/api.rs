//! API types for quiz and analytics operations.
//!
//! This module contains request/response types for walking the quiz,
//! inspecting session state, and listing the mood catalog.

use serde::{Deserialize, Serialize};

use crate::mood::{media_for, MoodCategory, DEFAULT_COVER, DEFAULT_PLAYLIST_URL};
use crate::quiz::{question_count, Question, QuizSession};

/// One scripted question, as shown to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionInfo {
    /// Question identifier
    pub id: String,
    /// Prompt text
    pub prompt: String,
    /// Choices, in display order
    pub options: Vec<String>,
}

impl From<&Question> for QuestionInfo {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id.to_string(),
            prompt: question.prompt.to_string(),
            options: question.options.iter().map(|o| o.to_string()).collect(),
        }
    }
}

/// Response listing the quiz script
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListQuestionsResponse {
    pub questions: Vec<QuestionInfo>,
    pub count: usize,
}

/// Request to submit one answer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitAnswerRequest {
    /// Chosen answer label; missing or free-form input scores zero
    #[serde(default)]
    pub answer: String,
}

/// Final mood of a completed quiz, with its display media
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResultInfo {
    /// Classified mood
    pub mood: MoodCategory,
    /// Cumulative score that produced it
    pub score: i32,
    /// Display name
    pub name: String,
    /// Curated playlist for the mood
    pub playlist_url: String,
    /// Playlist cover image
    pub cover: String,
    /// Reaction image for the results screen
    pub meme: String,
}

impl QuizResultInfo {
    pub fn new(mood: MoodCategory, score: i32) -> Self {
        let (name, playlist_url, cover) = match media_for(mood) {
            Some(media) => (
                media.name.to_string(),
                media.playlist_url.to_string(),
                media.cover.to_string(),
            ),
            None => (
                mood.to_string(),
                DEFAULT_PLAYLIST_URL.to_string(),
                DEFAULT_COVER.to_string(),
            ),
        };

        Self {
            mood,
            score,
            name,
            playlist_url,
            cover,
            meme: mood.meme_path(),
        }
    }
}

/// Session state, returned by answer submission and state queries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizStateResponse {
    pub user_id: String,
    /// Index of the next question; equals `total` once complete
    pub cursor: usize,
    /// Number of questions in the script
    pub total: usize,
    pub completed: bool,
    /// The question awaiting an answer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<QuestionInfo>,
    /// Final classification, once complete
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<QuizResultInfo>,
}

impl QuizStateResponse {
    pub fn from_session(session: &QuizSession) -> Self {
        Self {
            user_id: session.user_id().to_string(),
            cursor: session.cursor(),
            total: question_count(),
            completed: session.is_complete(),
            question: session.current_question().map(QuestionInfo::from),
            result: session
                .result()
                .map(|(score, mood)| QuizResultInfo::new(mood, score)),
        }
    }
}

/// Response to a session reset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetResponse {
    pub user_id: String,
    pub reset: bool,
}

/// Info about a single mood catalog entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodInfo {
    /// Mood identifier
    pub mood: MoodCategory,
    /// Display name
    pub name: String,
    /// Curated playlist
    pub playlist_url: String,
    /// Playlist cover image
    pub cover: String,
    /// Reaction image
    pub meme: String,
}

impl MoodInfo {
    pub fn new(mood: MoodCategory) -> Self {
        let result = QuizResultInfo::new(mood, 0);
        Self {
            mood,
            name: result.name,
            playlist_url: result.playlist_url,
            cover: result.cover,
            meme: result.meme,
        }
    }
}

/// Response listing the mood catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListMoodsResponse {
    pub moods: Vec<MoodInfo>,
    pub count: usize,
}
