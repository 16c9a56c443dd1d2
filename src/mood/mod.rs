//! Mood categories and score classification.
//!
//! A finished quiz yields a cumulative integer score; [`classify`] maps it
//! onto one of seven discrete mood categories used everywhere downstream
//! (event log, analytics, media lookup).

pub mod media;

pub use media::{media_for, MoodMedia, DEFAULT_COVER, DEFAULT_PLAYLIST_URL, MOOD_MEDIA};

use serde::{Deserialize, Serialize};

/// The seven mood categories, declared in score-band order (best first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodCategory {
    Excited,
    Happy,
    Peaceful,
    Anxious,
    Sad,
    Frustrated,
    Hopeless,
}

/// All categories, in band order.
pub const ALL_MOODS: &[MoodCategory] = &[
    MoodCategory::Excited,
    MoodCategory::Happy,
    MoodCategory::Peaceful,
    MoodCategory::Anxious,
    MoodCategory::Sad,
    MoodCategory::Frustrated,
    MoodCategory::Hopeless,
];

impl MoodCategory {
    /// Lowercase identifier, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            MoodCategory::Excited => "excited",
            MoodCategory::Happy => "happy",
            MoodCategory::Peaceful => "peaceful",
            MoodCategory::Anxious => "anxious",
            MoodCategory::Sad => "sad",
            MoodCategory::Frustrated => "frustrated",
            MoodCategory::Hopeless => "hopeless",
        }
    }

    /// Path of the reaction image shown on the results screen.
    pub fn meme_path(&self) -> String {
        format!("/static/{self}.svg")
    }
}

impl std::fmt::Display for MoodCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a cumulative quiz score to a mood category.
///
/// Bands are evaluated top down, inclusive on their lower bound; every
/// integer lands in exactly one band.
pub fn classify(score: i32) -> MoodCategory {
    if score >= 3 {
        MoodCategory::Excited
    } else if score >= 1 {
        MoodCategory::Happy
    } else if score >= 0 {
        MoodCategory::Peaceful
    } else if score >= -2 {
        MoodCategory::Anxious
    } else if score >= -4 {
        MoodCategory::Sad
    } else if score >= -6 {
        MoodCategory::Frustrated
    } else {
        MoodCategory::Hopeless
    }
}
