//! The quiz script and answer weighting.
//!
//! The script is fixed at process start: fifteen questions, asked in order.
//! Answer labels across all questions share one flat weight table; labels the
//! table does not know weigh zero, so free-form input never fails scoring.

use serde::Serialize;

/// A single scripted question.
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    /// Stable identifier, unique across the script
    pub id: &'static str,
    /// Prompt shown to the user
    pub prompt: &'static str,
    /// Choices offered, in display order
    pub options: &'static [&'static str],
}

pub const QUESTION_PHYSICAL: Question = Question {
    id: "physical",
    prompt: "How are you feeling physically right now?",
    options: &["Energetic", "Tired", "Sick", "Restless", "Calm"],
};

pub const QUESTION_VIBE: Question = Question {
    id: "vibe",
    prompt: "What's the overall vibe of your day?",
    options: &["Peaceful", "Hectic", "Lazy", "Productive", "Chaotic"],
};

pub const QUESTION_SOCIAL: Question = Question {
    id: "social",
    prompt: "How social do you feel?",
    options: &["Talkative", "Avoiding people", "Lonely", "Neutral"],
};

pub const QUESTION_CONTROL: Question = Question {
    id: "control",
    prompt: "Do you feel in control today?",
    options: &["Yes, totally", "Not at all", "Somewhat", "IDK"],
};

pub const QUESTION_EMOTION: Question = Question {
    id: "emotion",
    prompt: "Pick the feeling that best describes you right now:",
    options: &["Happy", "Anxious", "Heartbroken", "Motivated", "Overwhelmed"],
};

pub const QUESTION_FOCUS: Question = Question {
    id: "focus",
    prompt: "How focused do you feel?",
    options: &["Laser sharp", "Distracted", "Bored", "All over the place"],
};

pub const QUESTION_INSPIRATION: Question = Question {
    id: "inspiration",
    prompt: "Are you feeling inspired?",
    options: &["Yes!", "A little", "Not at all", "Lost", "Hopeless"],
};

pub const QUESTION_STRESS: Question = Question {
    id: "stress",
    prompt: "What's your stress level? (1-10)",
    options: &["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"],
};

pub const QUESTION_CONNECTION: Question = Question {
    id: "connection",
    prompt: "How connected do you feel to others today?",
    options: &["Loved", "Alone", "Appreciated", "Isolated"],
};

pub const QUESTION_PACE: Question = Question {
    id: "pace",
    prompt: "How fast is your day moving?",
    options: &["Super fast", "Slow", "Average", "Feels frozen in time"],
};

pub const QUESTION_CONFIDENCE: Question = Question {
    id: "confidence",
    prompt: "How confident do you feel?",
    options: &["Super confident", "Insecure", "Trying my best", "Neutral"],
};

pub const QUESTION_WEATHER: Question = Question {
    id: "weather",
    prompt: "Pick your ideal weather right now:",
    options: &["Sunny", "Cloudy", "Rainy", "Snowy", "Stormy"],
};

pub const QUESTION_ENERGY: Question = Question {
    id: "energy",
    prompt: "How would you describe your energy?",
    options: &["Hype", "Calm", "Neutral", "Drained"],
};

pub const QUESTION_CREATIVITY: Question = Question {
    id: "creativity",
    prompt: "How creative do you feel today?",
    options: &["Bursting with ideas", "Blank canvas", "A little spark", "Zero inspiration"],
};

pub const QUESTION_GRATITUDE: Question = Question {
    id: "gratitude",
    prompt: "Do you feel grateful right now?",
    options: &["Yes, very", "A bit", "Not really", "Can't say"],
};

/// The fixed quiz script, in asking order.
pub const QUESTIONS: &[Question] = &[
    QUESTION_PHYSICAL,
    QUESTION_VIBE,
    QUESTION_SOCIAL,
    QUESTION_CONTROL,
    QUESTION_EMOTION,
    QUESTION_FOCUS,
    QUESTION_INSPIRATION,
    QUESTION_STRESS,
    QUESTION_CONNECTION,
    QUESTION_PACE,
    QUESTION_CONFIDENCE,
    QUESTION_WEATHER,
    QUESTION_ENERGY,
    QUESTION_CREATIVITY,
    QUESTION_GRATITUDE,
];

/// Number of questions in the script.
pub fn question_count() -> usize {
    QUESTIONS.len()
}

/// The question at a cursor position, if the cursor is still on the script.
pub fn question_at(cursor: usize) -> Option<&'static Question> {
    QUESTIONS.get(cursor)
}

/// Tiered weight for the 1-10 stress scale. Computed from the numeric value
/// so the tiers track the scale; strings outside 1..=10 are not stress
/// answers and fall through to the flat table.
fn stress_weight(label: &str) -> Option<i32> {
    let level: u32 = label.trim().parse().ok()?;
    if !(1..=10).contains(&level) {
        return None;
    }
    Some(match level {
        1..=3 => 2,
        4..=5 => 0,
        6..=7 => -1,
        _ => -2,
    })
}

/// Weight contributed by an answer label.
///
/// Total over all strings: stress answers are tiered numerically, every other
/// known label has a fixed weight, and anything else weighs 0. Labels shared
/// between questions ("Calm", "Neutral", "Not at all") carry a single weight.
pub fn weight_of(label: &str) -> i32 {
    if let Some(weight) = stress_weight(label) {
        return weight;
    }

    match label {
        // physical
        "Energetic" => 2,
        "Tired" => -1,
        "Sick" => -2,
        "Restless" => -1,
        "Calm" => 1,

        // vibe
        "Peaceful" => 2,
        "Hectic" => -1,
        "Lazy" => 0,
        "Productive" => 2,
        "Chaotic" => -2,

        // social
        "Talkative" => 1,
        "Avoiding people" => -1,
        "Lonely" => -2,
        "Neutral" => 0,

        // control
        "Yes, totally" => 2,
        "Somewhat" => 0,
        "IDK" => -1,

        // emotion
        "Happy" => 2,
        "Anxious" => -1,
        "Heartbroken" => -3,
        "Motivated" => 2,
        "Overwhelmed" => -2,

        // focus
        "Laser sharp" => 2,
        "Distracted" => -1,
        "Bored" => -1,
        "All over the place" => -2,

        // inspiration
        "Yes!" => 2,
        "A little" => 1,
        "Not at all" => -1,
        "Lost" => -2,
        "Hopeless" => -3,

        // connection
        "Loved" => 2,
        "Alone" => -2,
        "Appreciated" => 1,
        "Isolated" => -2,

        // pace
        "Super fast" => 0,
        "Slow" => -1,
        "Average" => 0,
        "Feels frozen in time" => -2,

        // confidence
        "Super confident" => 2,
        "Insecure" => -2,
        "Trying my best" => 1,

        // weather
        "Sunny" => 1,
        "Cloudy" => 0,
        "Rainy" => -1,
        "Snowy" => 0,
        "Stormy" => -1,

        // energy
        "Hype" => 2,
        "Drained" => -2,

        // creativity
        "Bursting with ideas" => 2,
        "Blank canvas" => -1,
        "A little spark" => 1,
        "Zero inspiration" => -2,

        // gratitude
        "Yes, very" => 2,
        "A bit" => 1,
        "Not really" => -1,
        "Can't say" => 0,

        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_script_shape() {
        assert_eq!(question_count(), 15);

        let ids: HashSet<&str> = QUESTIONS.iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), QUESTIONS.len(), "question ids must be unique");

        for question in QUESTIONS {
            assert!(!question.prompt.is_empty());
            assert!(question.options.len() >= 4);
        }
    }

    #[test]
    fn test_question_at() {
        assert_eq!(question_at(0).unwrap().id, "physical");
        assert_eq!(question_at(14).unwrap().id, "gratitude");
        assert!(question_at(15).is_none());
    }

    #[test]
    fn test_stress_tiers() {
        assert_eq!(weight_of("1"), 2);
        assert_eq!(weight_of("2"), 2);
        assert_eq!(weight_of("3"), 2);
        assert_eq!(weight_of("4"), 0);
        assert_eq!(weight_of("5"), 0);
        assert_eq!(weight_of("6"), -1);
        assert_eq!(weight_of("7"), -1);
        assert_eq!(weight_of("8"), -2);
        assert_eq!(weight_of("9"), -2);
        assert_eq!(weight_of("10"), -2);
    }

    #[test]
    fn test_numeric_labels_off_the_stress_scale() {
        assert_eq!(weight_of("0"), 0);
        assert_eq!(weight_of("11"), 0);
        assert_eq!(weight_of("42"), 0);
        assert_eq!(weight_of("-3"), 0);
    }

    #[test]
    fn test_unknown_labels_weigh_zero() {
        assert_eq!(weight_of(""), 0);
        assert_eq!(weight_of("definitely not an option"), 0);
        assert_eq!(weight_of("energetic"), 0); // labels are case-sensitive
    }

    #[test]
    fn test_shared_labels() {
        // "Not at all" is offered by both the control and inspiration
        // questions; the flat table carries one weight for it.
        assert_eq!(weight_of("Not at all"), -1);
        assert_eq!(weight_of("Calm"), 1);
        assert_eq!(weight_of("Neutral"), 0);
    }

    #[test]
    fn test_every_option_is_scorable() {
        for question in QUESTIONS {
            for option in question.options {
                let weight = weight_of(option);
                assert!(
                    (-3..=2).contains(&weight),
                    "{option} scored {weight}, outside the expected range"
                );
            }
        }
    }

    #[test]
    fn test_sample_weights() {
        assert_eq!(weight_of("Energetic"), 2);
        assert_eq!(weight_of("Heartbroken"), -3);
        assert_eq!(weight_of("Hopeless"), -3);
        assert_eq!(weight_of("Lazy"), 0);
        assert_eq!(weight_of("Feels frozen in time"), -2);
    }
}
