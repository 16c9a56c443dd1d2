//! Melomood mood check-in quiz and analytics service.
//!
//! Runs a fixed fifteen-question mood questionnaire, scores answers into one
//! of seven mood categories, records each completed check-in as a timestamped
//! event per user, and serves trailing-window mood histograms for charting.

pub mod analytics;
pub mod config;
pub mod error;
pub mod mood;
pub mod quiz;
pub mod server;
pub mod storage;
pub mod types;

pub use analytics::{MoodAggregator, MoodHistogram, MoodTrends};
pub use config::{AppConfig, StorageMode};
pub use error::{AppError, Result};
pub use mood::{classify, MoodCategory};
pub use quiz::{AdvanceOutcome, QuizSession};
pub use storage::{MoodEvent, MoodEventStore};
