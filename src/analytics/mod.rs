//! Analytics engine for deriving insights and recommendations
//!
//! This module contains the per-domain metric calculators (mood, habits,
//! study) and the rule-based recommendation generator. All computation here
//! is pure: the same input series always produce the same insights.

pub mod habits;
pub mod mood;
pub mod recommend;
pub mod study;

// Re-export the insight types
pub use habits::HabitInsight;
pub use mood::MoodInsight;
pub use study::{HourlyStats, StudyInsight, SubjectStats};

use crate::domain::{HabitEntry, MoodEntry, StudySession};

/// Analytics engine for processing wellness data
///
/// A thin facade over the per-domain calculators; holds no state, so one
/// instance can serve any number of report generations.
pub struct AnalyticsEngine;

impl AnalyticsEngine {
    /// Create a new analytics engine
    pub fn new() -> Self {
        Self
    }

    /// Calculate mood statistics for an ordered-by-date window of entries
    pub fn mood_insight(&self, entries: &[MoodEntry]) -> MoodInsight {
        mood::analyze(entries)
    }

    /// Calculate habit statistics for a window of entries
    pub fn habit_insight(&self, entries: &[HabitEntry]) -> HabitInsight {
        habits::analyze(entries)
    }

    /// Calculate study statistics for a window of sessions
    pub fn study_insight(&self, sessions: &[StudySession]) -> StudyInsight {
        study::analyze(sessions)
    }

    /// Generate the ordered recommendation list from the three insights
    pub fn recommendations(
        &self,
        mood: &MoodInsight,
        habits: &HabitInsight,
        study: &StudyInsight,
    ) -> Vec<String> {
        recommend::generate(mood, habits, study)
    }
}

impl Default for AnalyticsEngine {
    fn default() -> Self {
        Self::new()
    }
}

// Rounding helpers shared by the calculators. Reports carry values at a
// fixed precision per metric family.

/// Round to 1 decimal place (durations)
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to 2 decimal places (averages, deviations)
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to 3 decimal places (rates)
pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
