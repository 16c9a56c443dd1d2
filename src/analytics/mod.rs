//! Trailing-window mood analytics.
//!
//! Aggregates a user's mood event log into three mood→count histograms over
//! trailing windows of 7, 30, and 365 days, the shape chart consumers plot
//! directly.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::mood::MoodCategory;
use crate::storage::MoodEvent;

/// Mood → count over one window. Serializes as a plain JSON object keyed by
/// the lowercase category names, in band order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoodHistogram(BTreeMap<MoodCategory, u64>);

impl MoodHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, mood: MoodCategory) {
        *self.0.entry(mood).or_insert(0) += 1;
    }

    /// Count for one mood; absent moods count 0.
    pub fn count(&self, mood: MoodCategory) -> u64 {
        self.0.get(&mood).copied().unwrap_or(0)
    }

    /// Total events across all moods.
    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&MoodCategory, &u64)> {
        self.0.iter()
    }
}

/// The three chart windows, keyed by window name on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodTrends {
    pub weekly: MoodHistogram,
    pub monthly: MoodHistogram,
    pub yearly: MoodHistogram,
}

/// Mood aggregator with configurable trailing windows.
pub struct MoodAggregator {
    /// Trailing days for the weekly chart
    pub weekly_days: i64,
    /// Trailing days for the monthly chart
    pub monthly_days: i64,
    /// Trailing days for the yearly chart
    pub yearly_days: i64,
}

impl Default for MoodAggregator {
    fn default() -> Self {
        Self {
            weekly_days: 7,
            monthly_days: 30,
            yearly_days: 365,
        }
    }
}

impl MoodAggregator {
    /// Create an aggregator with the default 7/30/365-day windows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aggregate a user's event log as of `now`.
    ///
    /// Each window keeps events with `timestamp >= now - N days` (cutoff
    /// inclusive) and counts them per mood. `now` is an explicit argument so
    /// the computation is deterministic; callers pass one snapshot per
    /// request. An empty window yields an empty histogram.
    pub fn aggregate(&self, events: &[MoodEvent], now: DateTime<Utc>) -> MoodTrends {
        MoodTrends {
            weekly: Self::windowed(events, now, self.weekly_days),
            monthly: Self::windowed(events, now, self.monthly_days),
            yearly: Self::windowed(events, now, self.yearly_days),
        }
    }

    fn windowed(events: &[MoodEvent], now: DateTime<Utc>, days: i64) -> MoodHistogram {
        let cutoff = now - Duration::days(days);
        let mut histogram = MoodHistogram::new();
        for event in events.iter().filter(|e| e.timestamp >= cutoff) {
            histogram.increment(event.mood);
        }
        histogram
    }
}
