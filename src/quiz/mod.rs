//! Per-user quiz session state machine.
//!
//! A [`QuizSession`] ingests one answer at a time, accumulating a mood score
//! and advancing a cursor through the fixed script. Answering the final
//! question classifies the score and makes the session terminal; the owning
//! handler records the classification as a mood event.

pub mod script;

pub use script::{question_at, question_count, weight_of, Question, QUESTIONS};

use std::collections::HashMap;

use crate::mood::{classify, MoodCategory};

/// Result of feeding one answer to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// More questions remain; `cursor` indexes the next one.
    InProgress { cursor: usize },
    /// This answer finished the quiz. Emitted exactly once per attempt.
    Completed { score: i32, mood: MoodCategory },
    /// The session was already terminal; nothing changed.
    AlreadyComplete { score: i32, mood: MoodCategory },
}

/// State of one quiz attempt for one user.
///
/// Invariants: `cursor == answers.len()`, and `score` equals the summed
/// weights of the recorded answers.
#[derive(Debug, Clone)]
pub struct QuizSession {
    user_id: String,
    cursor: usize,
    answers: HashMap<String, String>,
    score: i32,
    result: Option<(i32, MoodCategory)>,
}

impl QuizSession {
    /// Fresh session at the first question.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            cursor: 0,
            answers: HashMap::new(),
            score: 0,
            result: None,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn answers(&self) -> &HashMap<String, String> {
        &self.answers
    }

    pub fn is_complete(&self) -> bool {
        self.result.is_some()
    }

    /// Final score and mood, once the session is terminal.
    pub fn result(&self) -> Option<(i32, MoodCategory)> {
        self.result
    }

    /// The question awaiting an answer, if any.
    pub fn current_question(&self) -> Option<&'static Question> {
        if self.is_complete() {
            None
        } else {
            question_at(self.cursor)
        }
    }

    /// Record an answer for the current question and advance.
    ///
    /// Any string is accepted; labels outside the weight table score 0.
    /// Calling this on a terminal session is a no-op that reports the
    /// existing result, so a double-submitted final answer cannot corrupt
    /// state or produce a second classification.
    pub fn advance(&mut self, answer: &str) -> AdvanceOutcome {
        if let Some((score, mood)) = self.result {
            return AdvanceOutcome::AlreadyComplete { score, mood };
        }

        if let Some(question) = question_at(self.cursor) {
            self.answers
                .insert(question.id.to_string(), answer.to_string());
            self.score += weight_of(answer);
            self.cursor += 1;
        }

        if self.cursor >= question_count() {
            let mood = classify(self.score);
            self.result = Some((self.score, mood));
            AdvanceOutcome::Completed {
                score: self.score,
                mood,
            }
        } else {
            AdvanceOutcome::InProgress {
                cursor: self.cursor,
            }
        }
    }

    /// Discard all state and start a fresh attempt for the same user.
    pub fn reset(&mut self) {
        *self = QuizSession::new(std::mem::take(&mut self.user_id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_with(session: &mut QuizSession, answer: &str) -> AdvanceOutcome {
        let mut last = session.advance(answer);
        while matches!(last, AdvanceOutcome::InProgress { .. }) {
            last = session.advance(answer);
        }
        last
    }

    #[test]
    fn test_initial_state() {
        let session = QuizSession::new("ada@example.com");
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.score(), 0);
        assert!(session.answers().is_empty());
        assert!(!session.is_complete());
        assert_eq!(session.current_question().unwrap().id, "physical");
    }

    #[test]
    fn test_score_invariant_at_every_step() {
        let answers = [
            "Energetic",
            "Chaotic",
            "Lonely",
            "Not at all",
            "Heartbroken",
            "Bored",
            "A little",
            "9",
            "Loved",
            "Average",
        ];

        let mut session = QuizSession::new("u");
        let mut expected = 0;
        for (i, answer) in answers.iter().enumerate() {
            session.advance(answer);
            expected += weight_of(answer);
            assert_eq!(session.score(), expected, "after answer {i}");
            assert_eq!(session.cursor(), i + 1);
            assert_eq!(session.answers().len(), session.cursor());
        }
    }

    #[test]
    fn test_all_positive_answers_classify_excited() {
        let mut session = QuizSession::new("u");
        let outcome = complete_with(&mut session, "Energetic");

        assert_eq!(
            outcome,
            AdvanceOutcome::Completed {
                score: 30,
                mood: MoodCategory::Excited,
            }
        );
        assert!(session.is_complete());
        assert_eq!(session.result(), Some((30, MoodCategory::Excited)));
        assert!(session.current_question().is_none());
    }

    #[test]
    fn test_score_minus_five_classifies_frustrated() {
        let mut session = QuizSession::new("u");
        session.advance("Heartbroken"); // -3
        session.advance("Lonely"); // -2
        let outcome = complete_with(&mut session, "no such option"); // 13 x 0

        assert_eq!(
            outcome,
            AdvanceOutcome::Completed {
                score: -5,
                mood: MoodCategory::Frustrated,
            }
        );
    }

    #[test]
    fn test_unknown_answers_accepted_and_scored_zero() {
        let mut session = QuizSession::new("u");
        let outcome = session.advance("complete gibberish");

        assert_eq!(outcome, AdvanceOutcome::InProgress { cursor: 1 });
        assert_eq!(session.score(), 0);
        assert_eq!(
            session.answers().get("physical").map(String::as_str),
            Some("complete gibberish")
        );
    }

    #[test]
    fn test_advance_past_completion_is_a_noop() {
        let mut session = QuizSession::new("u");
        complete_with(&mut session, "Energetic");

        let before = session.answers().clone();
        let outcome = session.advance("Heartbroken");

        assert_eq!(
            outcome,
            AdvanceOutcome::AlreadyComplete {
                score: 30,
                mood: MoodCategory::Excited,
            }
        );
        assert_eq!(session.score(), 30);
        assert_eq!(session.cursor(), question_count());
        assert_eq!(session.answers(), &before);
    }

    #[test]
    fn test_reset_returns_to_initial_state() {
        let mut session = QuizSession::new("ada@example.com");
        complete_with(&mut session, "Energetic");
        assert!(session.is_complete());

        session.reset();

        assert_eq!(session.user_id(), "ada@example.com");
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.score(), 0);
        assert!(session.answers().is_empty());
        assert!(!session.is_complete());
    }

    #[test]
    fn test_answers_keyed_by_question_id() {
        let mut session = QuizSession::new("u");
        session.advance("Tired");
        session.advance("Peaceful");

        assert_eq!(
            session.answers().get("physical").map(String::as_str),
            Some("Tired")
        );
        assert_eq!(
            session.answers().get("vibe").map(String::as_str),
            Some("Peaceful")
        );
    }
}
