//! Data source layer supplying the raw wellness series
//!
//! The engine never fetches or stores records itself; an upstream
//! collaborator hands it the three series for a user and window. This module
//! defines that contract plus two concrete sources: an in-memory one for
//! fixtures and a JSON snapshot file reader for the CLI.

pub mod json;
pub mod memory;

// Re-export the concrete sources
pub use json::JsonFileSource;
pub use memory::InMemorySource;

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::{AnalysisPeriod, HabitEntry, MoodEntry, StudySession, UserId};

/// Errors that can occur while obtaining input series
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed snapshot {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown user: {user_id}")]
    UnknownUser { user_id: String },

    #[error("{series} series unavailable for user {user_id}: {message}")]
    Unavailable {
        series: &'static str,
        user_id: String,
        message: String,
    },
}

/// Trait defining the input collaborator contract
///
/// A source supplies, for a given user and analysis window, the three entry
/// series already filtered to the window and ordered by date ascending.
/// Implementations own any filtering beyond that ordering; the engine does
/// no date arithmetic of its own on the series.
pub trait WellnessSource {
    /// Mood entries for the user inside the window, ordered by date
    fn mood_entries(
        &self,
        user_id: &UserId,
        period: &AnalysisPeriod,
    ) -> Result<Vec<MoodEntry>, SourceError>;

    /// Habit entries for the user inside the window, ordered by date
    fn habit_entries(
        &self,
        user_id: &UserId,
        period: &AnalysisPeriod,
    ) -> Result<Vec<HabitEntry>, SourceError>;

    /// Study sessions for the user inside the window, ordered by start time
    fn study_sessions(
        &self,
        user_id: &UserId,
        period: &AnalysisPeriod,
    ) -> Result<Vec<StudySession>, SourceError>;
}
