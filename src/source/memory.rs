//! In-memory source implementation
//!
//! Holds the three series per user in plain maps. Used by tests and by
//! callers that already have the records in hand. A user with no recorded
//! data yields empty series, which the calculators treat as their defined
//! neutral case.

use std::collections::HashMap;

use crate::domain::{AnalysisPeriod, HabitEntry, MoodEntry, StudySession, UserId};
use crate::source::{SourceError, WellnessSource};

/// Source backed by in-process maps
#[derive(Debug, Default)]
pub struct InMemorySource {
    mood: HashMap<UserId, Vec<MoodEntry>>,
    habits: HashMap<UserId, Vec<HabitEntry>>,
    study: HashMap<UserId, Vec<StudySession>>,
}

impl InMemorySource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a mood entry for a user
    pub fn add_mood_entry(&mut self, user_id: &UserId, entry: MoodEntry) {
        self.mood.entry(user_id.clone()).or_default().push(entry);
    }

    /// Record a habit entry for a user
    pub fn add_habit_entry(&mut self, user_id: &UserId, entry: HabitEntry) {
        self.habits.entry(user_id.clone()).or_default().push(entry);
    }

    /// Record a study session for a user
    pub fn add_study_session(&mut self, user_id: &UserId, session: StudySession) {
        self.study.entry(user_id.clone()).or_default().push(session);
    }
}

impl WellnessSource for InMemorySource {
    fn mood_entries(
        &self,
        user_id: &UserId,
        period: &AnalysisPeriod,
    ) -> Result<Vec<MoodEntry>, SourceError> {
        let mut entries: Vec<MoodEntry> = self
            .mood
            .get(user_id)
            .map(|entries| {
                entries
                    .iter()
                    .filter(|e| period.contains(e.date))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        entries.sort_by_key(|e| e.date);
        Ok(entries)
    }

    fn habit_entries(
        &self,
        user_id: &UserId,
        period: &AnalysisPeriod,
    ) -> Result<Vec<HabitEntry>, SourceError> {
        let mut entries: Vec<HabitEntry> = self
            .habits
            .get(user_id)
            .map(|entries| {
                entries
                    .iter()
                    .filter(|e| period.contains(e.date))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        entries.sort_by_key(|e| e.date);
        Ok(entries)
    }

    fn study_sessions(
        &self,
        user_id: &UserId,
        period: &AnalysisPeriod,
    ) -> Result<Vec<StudySession>, SourceError> {
        let mut sessions: Vec<StudySession> = self
            .study
            .get(user_id)
            .map(|sessions| {
                sessions
                    .iter()
                    .filter(|s| period.contains(s.date()))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        sessions.sort_by_key(|s| s.started_at);
        Ok(sessions)
    }
}
