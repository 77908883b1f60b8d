//! HabitEntry entity for daily habit completions
//!
//! This module defines the HabitEntry struct that records how much of a
//! habit's daily target was completed on a specific day. Entries for the
//! same habit are tied together by the habit name.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// A record of working on one habit on one day
///
/// `completed` and `target` are counts in whatever unit the habit is
/// measured in (repetitions, minutes, pages). A day qualifies toward
/// streaks and completion rates when `completed >= target`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitEntry {
    /// Display name of the habit; also the grouping key for analytics
    pub habit_name: String,
    /// Which day this record is for
    pub date: NaiveDate,
    /// Actual amount achieved on that day
    pub completed: u32,
    /// Amount the user aimed for on that day
    pub target: u32,
}

impl HabitEntry {
    /// Create a new habit entry with validation
    pub fn new(
        habit_name: String,
        date: NaiveDate,
        completed: u32,
        target: u32,
    ) -> Result<Self, DomainError> {
        Self::validate_name(&habit_name)?;
        Self::validate_counts(completed, target)?;

        Ok(Self {
            habit_name,
            date,
            completed,
            target,
        })
    }

    /// Check whether this day met the habit's target
    pub fn met_target(&self) -> bool {
        self.completed >= self.target
    }

    // Validation helper methods

    /// Validate habit name according to business rules
    fn validate_name(name: &str) -> Result<(), DomainError> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be empty".to_string(),
            ));
        }

        if trimmed.len() > 100 {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be longer than 100 characters".to_string(),
            ));
        }

        Ok(())
    }

    /// Validate the completed and target counts together
    fn validate_counts(completed: u32, target: u32) -> Result<(), DomainError> {
        if target == 0 {
            return Err(DomainError::InvalidValue {
                message: "Target must be greater than 0".to_string(),
            });
        }
        if target > 10000 {
            return Err(DomainError::InvalidValue {
                message: "Target cannot exceed 10000".to_string(),
            });
        }
        if completed > 100000 {
            return Err(DomainError::InvalidValue {
                message: "Completed count cannot exceed 100000".to_string(),
            });
        }
        Ok(())
    }
}
