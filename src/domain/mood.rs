//! MoodEntry entity for daily mood check-ins
//!
//! This module defines the MoodEntry struct that represents a single mood
//! record for one calendar day, with a mood rating, an energy rating, and
//! optional notes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// A single mood record for one calendar day
///
/// One entry is expected per day per user. Entries are immutable once
/// recorded; the analytics layer only ever reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    /// Which day this entry is for
    pub date: NaiveDate,
    /// Overall mood rating from 1 (worst) to 5 (best)
    pub mood_level: u8,
    /// Subjective energy rating from 1 to 100
    pub energy_level: u8,
    /// User's notes about the day
    pub notes: Option<String>,
}

impl MoodEntry {
    /// Create a new mood entry with validation
    pub fn new(
        date: NaiveDate,
        mood_level: u8,
        energy_level: u8,
        notes: Option<String>,
    ) -> Result<Self, DomainError> {
        Self::validate_mood_level(mood_level)?;
        Self::validate_energy_level(energy_level)?;
        Self::validate_notes(&notes)?;

        Ok(Self {
            date,
            mood_level,
            energy_level,
            notes,
        })
    }

    /// Check if this entry has notes
    pub fn has_notes(&self) -> bool {
        self.notes
            .as_ref()
            .map(|n| !n.trim().is_empty())
            .unwrap_or(false)
    }

    // Validation helper methods

    /// Validate the mood rating (1-5)
    fn validate_mood_level(mood_level: u8) -> Result<(), DomainError> {
        if !(1..=5).contains(&mood_level) {
            return Err(DomainError::InvalidMoodLevel(mood_level));
        }
        Ok(())
    }

    /// Validate the energy rating (1-100)
    fn validate_energy_level(energy_level: u8) -> Result<(), DomainError> {
        if !(1..=100).contains(&energy_level) {
            return Err(DomainError::InvalidEnergyLevel(energy_level));
        }
        Ok(())
    }

    /// Validate the optional notes field
    fn validate_notes(notes: &Option<String>) -> Result<(), DomainError> {
        if let Some(note_text) = notes {
            if note_text.len() > 500 {
                return Err(DomainError::InvalidValue {
                    message: "Notes cannot be longer than 500 characters".to_string(),
                });
            }
        }
        Ok(())
    }
}
