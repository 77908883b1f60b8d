//! JSON snapshot source implementation
//!
//! Reads a whole snapshot file up front and serves window-filtered series
//! from it. The snapshot layout groups the three series under each user id:
//!
//! ```json
//! {
//!   "users": {
//!     "6f9f9c1e-...": {
//!       "mood_entries": [...],
//!       "habit_entries": [...],
//!       "study_sessions": [...]
//!     }
//!   }
//! }
//! ```
//!
//! A user id missing from the snapshot is an upstream failure, not an empty
//! series: the caller asked for someone this snapshot knows nothing about.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::{AnalysisPeriod, HabitEntry, MoodEntry, StudySession, UserId};
use crate::source::{SourceError, WellnessSource};

/// Per-user record block inside a snapshot
#[derive(Debug, Default, Deserialize)]
struct UserRecords {
    #[serde(default)]
    mood_entries: Vec<MoodEntry>,
    #[serde(default)]
    habit_entries: Vec<HabitEntry>,
    #[serde(default)]
    study_sessions: Vec<StudySession>,
}

/// Top-level snapshot layout
///
/// User keys are the canonical lowercase-hyphenated UUID strings.
#[derive(Debug, Deserialize)]
struct Snapshot {
    users: HashMap<String, UserRecords>,
}

/// Source backed by a JSON snapshot file
pub struct JsonFileSource {
    path: PathBuf,
    snapshot: Snapshot,
}

impl JsonFileSource {
    /// Open and parse a snapshot file
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SourceError> {
        let path = path.into();

        let contents = std::fs::read_to_string(&path).map_err(|source| SourceError::Io {
            path: path.clone(),
            source,
        })?;

        let snapshot: Snapshot =
            serde_json::from_str(&contents).map_err(|source| SourceError::Malformed {
                path: path.clone(),
                source,
            })?;

        tracing::info!(
            "Loaded snapshot {} with {} user(s)",
            path.display(),
            snapshot.users.len()
        );

        Ok(Self { path, snapshot })
    }

    /// Path of the snapshot backing this source
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up the record block for a user
    fn records(&self, user_id: &UserId) -> Result<&UserRecords, SourceError> {
        self.snapshot
            .users
            .get(&user_id.to_string())
            .ok_or_else(|| SourceError::UnknownUser {
                user_id: user_id.to_string(),
            })
    }
}

impl WellnessSource for JsonFileSource {
    fn mood_entries(
        &self,
        user_id: &UserId,
        period: &AnalysisPeriod,
    ) -> Result<Vec<MoodEntry>, SourceError> {
        let mut entries: Vec<MoodEntry> = self
            .records(user_id)?
            .mood_entries
            .iter()
            .filter(|e| period.contains(e.date))
            .cloned()
            .collect();
        entries.sort_by_key(|e| e.date);
        Ok(entries)
    }

    fn habit_entries(
        &self,
        user_id: &UserId,
        period: &AnalysisPeriod,
    ) -> Result<Vec<HabitEntry>, SourceError> {
        let mut entries: Vec<HabitEntry> = self
            .records(user_id)?
            .habit_entries
            .iter()
            .filter(|e| period.contains(e.date))
            .cloned()
            .collect();
        entries.sort_by_key(|e| e.date);
        Ok(entries)
    }

    fn study_sessions(
        &self,
        user_id: &UserId,
        period: &AnalysisPeriod,
    ) -> Result<Vec<StudySession>, SourceError> {
        let mut sessions: Vec<StudySession> = self
            .records(user_id)?
            .study_sessions
            .iter()
            .filter(|s| period.contains(s.date()))
            .cloned()
            .collect();
        sessions.sort_by_key(|s| s.started_at);
        Ok(sessions)
    }
}
